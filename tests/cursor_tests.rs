use approx::assert_abs_diff_eq;
use chart_viewport::core::{ChartId, ChartRoleConfig, Dataset, RangeOptions, SeriesData};
use chart_viewport::render::NullRenderer;
use chart_viewport::{ChartEngine, ChartEngineConfig, ChartView};

fn dataset() -> Dataset {
    let axis: Vec<f64> = (0..=1_000).map(f64::from).collect();
    let a: Vec<f64> = (0..=1_000).map(|i| 1.0 + f64::from(i % 10)).collect();
    let b = vec![1_000.0; 1_001];
    Dataset::new(
        axis,
        vec![
            SeriesData::new("a", a).with_name("Alpha"),
            SeriesData::new("b", b),
        ],
    )
    .expect("valid dataset")
}

fn rendered_engine(dataset: Dataset) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        dataset,
        ChartEngineConfig::default(),
    )
    .expect("engine init");
    engine.first_render().expect("first render");
    engine
}

#[test]
fn pointer_resolves_to_the_nearest_visible_point() {
    let mut engine = rendered_engine(dataset());

    let snapshot = engine.cursor_move(0.0).expect("cursor over chart");
    assert_eq!(snapshot.index, 696);

    let snapshot = engine.cursor_move(400.0).expect("cursor over chart");
    assert_eq!(snapshot.index, 850);
    assert_eq!(snapshot.x, 850.0);
    assert_abs_diff_eq!(snapshot.pixel_x, 400.0, epsilon = 1e-6);
    assert_eq!(snapshot.date_label().as_deref(), Some("Thu, Jan 1"));
    assert!(!snapshot.show_year);
}

#[test]
fn snapshot_lists_every_series_at_the_cursor() {
    let mut engine = rendered_engine(dataset());
    let snapshot = engine.cursor_move(400.0).expect("cursor over chart");

    assert_eq!(snapshot.entries.len(), 2);
    let alpha = &snapshot.entries[0];
    assert_eq!(alpha.label, "a");
    assert_eq!(alpha.name, "Alpha");
    assert_eq!(alpha.y, 1.0);
    assert_abs_diff_eq!(alpha.pixel_y, 280.0 - 0.28, epsilon = 1e-9);

    let beta = &snapshot.entries[1];
    assert_eq!(beta.y, 1_000.0);
    assert_abs_diff_eq!(beta.pixel_y, 0.0, epsilon = 1e-9);
    assert!(beta.visible);
}

#[test]
fn cursor_line_follows_the_pointer_and_hides_on_leave() {
    let mut engine = rendered_engine(dataset());
    let handle = engine
        .main_view()
        .cursor_path_handle()
        .expect("cursor path");
    assert!(!engine.renderer().path(handle).expect("recorded").visible);

    engine.cursor_move(400.0);
    let report = engine.update(16.0).expect("update");
    assert!(report.main.cursor_updated);

    let line = engine.renderer().path(handle).expect("recorded");
    assert!(line.visible);
    assert_eq!(line.data.len(), 2);
    let (x, _) = line.data.points[0];
    assert_abs_diff_eq!(x, 400.0, epsilon = 1e-6);

    engine.cursor_leave();
    assert!(engine.cursor_snapshot().is_none());
    engine.update(16.0).expect("update");
    assert!(!engine.renderer().path(handle).expect("recorded").visible);
}

#[test]
fn year_is_shown_when_the_range_crosses_new_year() {
    const DAY_MS: f64 = 86_400_000.0;
    let start = 1_512_086_400_000.0;
    let axis: Vec<f64> = (0..90).map(|day| start + f64::from(day) * DAY_MS).collect();
    let values: Vec<f64> = (0..90).map(f64::from).collect();
    let dataset = Dataset::new(axis.clone(), vec![SeriesData::new("y", values)])
        .expect("valid dataset");
    let mut engine = rendered_engine(dataset);

    engine.set_viewport_range(axis[0], axis[89], RangeOptions::default());
    let snapshot = engine.cursor_move(0.0).expect("cursor over chart");
    assert_eq!(snapshot.index, 0);
    assert!(snapshot.show_year);
    assert_eq!(snapshot.date_label().as_deref(), Some("Fri, Dec 1, 2017"));
}

#[test]
fn navigator_views_ignore_the_pointer() {
    let mut view = ChartView::new(
        ChartId::new(1),
        ChartRoleConfig::navigator(),
        &dataset(),
        &ChartEngineConfig::default(),
    );
    assert_eq!(view.move_cursor(120.0), None);
    assert!(view.cursor_snapshot().is_none());
}
