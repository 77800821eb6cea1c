use approx::assert_abs_diff_eq;
use chart_viewport::core::{Dataset, RangeOptions, SeriesData};
use chart_viewport::interaction::InteractionMode;
use chart_viewport::render::NullRenderer;
use chart_viewport::{ChartEngine, ChartEngineConfig};

fn rendered_engine() -> ChartEngine<NullRenderer> {
    let axis: Vec<f64> = (0..=1_000).map(f64::from).collect();
    let a: Vec<f64> = (0..=1_000).map(|i| 1.0 + f64::from(i % 10)).collect();
    let dataset = Dataset::new(axis, vec![SeriesData::new("a", a)]).expect("valid dataset");
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        dataset,
        ChartEngineConfig::default(),
    )
    .expect("engine init");
    engine.first_render().expect("first render");
    engine
}

fn settle(engine: &mut ChartEngine<NullRenderer>) {
    for _ in 0..40 {
        engine.update(16.0).expect("update");
    }
    assert!(!engine.is_animating());
}

#[test]
fn drag_moves_the_window_against_the_pointer() {
    let mut engine = rendered_engine();
    engine.set_viewport_range(200.0, 600.0, RangeOptions::default());

    engine.pan_start(400.0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Panning);
    let change = engine.pan_move(300.0).expect("panning");
    assert!(change.indexes_changed);
    assert_eq!(engine.visible_range(), (250.0, 650.0));

    engine.pan_move(500.0).expect("panning");
    assert_eq!(engine.visible_range(), (150.0, 550.0));

    engine.pan_end();
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert!(engine.pan_move(100.0).is_none());
}

#[test]
fn zoom_keeps_the_anchor_under_the_pointer() {
    let mut engine = rendered_engine();
    engine.set_viewport_range(250.0, 650.0, RangeOptions::default());

    engine.zoom_at(400.0, 0.5);
    assert!(engine.is_animating());
    settle(&mut engine);

    let (min, max) = engine.visible_range();
    assert_abs_diff_eq!(min, 350.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max, 550.0, epsilon = 1e-9);
    assert_eq!(engine.visible_indexes(), (350, 550));
}

#[test]
fn invalid_zoom_factors_are_ignored() {
    let mut engine = rendered_engine();
    engine.set_viewport_range(250.0, 650.0, RangeOptions::default());
    engine.zoom_at(400.0, 0.0);
    engine.zoom_at(400.0, f64::NAN);
    assert!(!engine.is_animating());
}

#[test]
fn pan_start_interrupts_a_range_animation() {
    let mut engine = rendered_engine();
    engine.animate_viewport_range_to(100.0, 300.0);
    engine.update(16.0).expect("update");
    assert!(engine.is_animating());

    engine.pan_start(100.0);
    assert!(!engine.is_animating());
    let frozen = engine.visible_range();
    engine.update(16.0).expect("update");
    assert_eq!(engine.visible_range(), frozen);
}

#[test]
fn zooming_out_past_the_data_adds_edge_padding() {
    let mut engine = rendered_engine();
    engine.set_viewport_range(0.0, 1_000.0, RangeOptions::default());
    engine.zoom_at(400.0, 4.0);
    settle(&mut engine);

    let padding = 1_000.0 / 800.0 * 13.0;
    let (min, max) = engine.visible_range();
    assert_abs_diff_eq!(min, -padding, epsilon = 1e-9);
    assert_abs_diff_eq!(max, 1_000.0 + padding, epsilon = 1e-9);
    assert_eq!(engine.visible_indexes(), (0, 1_000));
}

#[test]
fn drag_past_the_data_edges_keeps_the_window_width() {
    let mut engine = rendered_engine();
    engine.set_viewport_range(100.0, 500.0, RangeOptions::default());

    engine.pan_start(400.0);
    engine.pan_move(800.0).expect("panning");
    assert_eq!(engine.visible_range(), (0.0, 400.0));
    assert_eq!(engine.visible_indexes(), (0, 400));

    engine.pan_move(0.0).expect("panning");
    assert_eq!(engine.visible_range(), (300.0, 700.0));

    engine.pan_move(-1_000.0).expect("panning");
    assert_eq!(engine.visible_range(), (600.0, 1_000.0));
    assert_eq!(engine.visible_indexes(), (600, 1_000));
    engine.pan_end();
}
