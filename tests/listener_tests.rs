use std::cell::RefCell;
use std::rc::Rc;

use chart_viewport::core::{ChartRole, Dataset, RangeOptions, SeriesData};
use chart_viewport::extensions::{ChartEvent, ChartEventContext, ChartEventListener};
use chart_viewport::render::NullRenderer;
use chart_viewport::{ChartEngine, ChartEngineConfig, ChartError};

type Log = Rc<RefCell<Vec<(ChartEvent, ChartEventContext)>>>;

struct RecordingListener {
    id: String,
    log: Log,
}

impl RecordingListener {
    fn boxed(id: &str, log: &Log) -> Box<dyn ChartEventListener> {
        Box::new(Self {
            id: id.to_owned(),
            log: Rc::clone(log),
        })
    }
}

impl ChartEventListener for RecordingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &ChartEvent, context: ChartEventContext) {
        self.log.borrow_mut().push((event.clone(), context));
    }
}

fn rendered_engine() -> ChartEngine<NullRenderer> {
    let axis: Vec<f64> = (0..=1_000).map(f64::from).collect();
    let a: Vec<f64> = (0..=1_000).map(|i| 1.0 + f64::from(i % 10)).collect();
    let b = vec![1_000.0; 1_001];
    let dataset = Dataset::new(axis, vec![SeriesData::new("a", a), SeriesData::new("b", b)])
        .expect("valid dataset");
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        dataset,
        ChartEngineConfig::default(),
    )
    .expect("engine init");
    engine.first_render().expect("first render");
    engine
}

fn event_name(event: &ChartEvent) -> &'static str {
    match event {
        ChartEvent::RangeChanged { .. } => "range",
        ChartEvent::NavigationRangeChanged { .. } => "navigation",
        ChartEvent::SeriesVisibilityChanged { .. } => "visibility",
        ChartEvent::CursorMoved { .. } => "cursor_moved",
        ChartEvent::CursorLeft => "cursor_left",
        ChartEvent::Resized { .. } => "resized",
        ChartEvent::FrameRendered { .. } => "frame",
    }
}

#[test]
fn listener_sees_events_in_call_order() {
    let mut engine = rendered_engine();
    let log: Log = Rc::default();
    engine
        .register_listener(RecordingListener::boxed("recorder", &log))
        .expect("register");

    engine.set_series_invisible("b").expect("known series");
    engine.set_viewport_range(100.0, 400.0, RangeOptions::default());
    engine.update(16.0).expect("update");
    engine.cursor_move(400.0).expect("cursor over chart");
    engine.cursor_leave();
    engine.resize(640, 345).expect("resize");

    let log = log.borrow();
    let names: Vec<&str> = log.iter().map(|(event, _)| event_name(event)).collect();
    assert_eq!(
        names,
        [
            "visibility",
            "range",
            "frame",
            "cursor_moved",
            "cursor_left",
            "resized"
        ]
    );

    let (event, context) = &log[0];
    assert_eq!(
        event,
        &ChartEvent::SeriesVisibilityChanged {
            label: "b".to_owned(),
            visible: false,
        }
    );
    assert_eq!(context.visible_series, 1);

    assert_eq!(
        log[1].0,
        ChartEvent::RangeChanged {
            role: ChartRole::Main,
            min: 100.0,
            max: 400.0,
        }
    );
    assert_eq!(log[1].1.visible_range, (100.0, 400.0));
    assert_eq!(log[1].1.navigation_range, Some((0.7, 1.0)));
    assert_eq!(log[3].0, ChartEvent::CursorMoved { index: 250 });
    assert_eq!(
        log[5].0,
        ChartEvent::Resized {
            width: 640,
            height: 345
        }
    );
    assert_eq!(log[5].1.viewport.width, 640);
}

#[test]
fn unchanged_visibility_publishes_nothing() {
    let mut engine = rendered_engine();
    let log: Log = Rc::default();
    engine
        .register_listener(RecordingListener::boxed("recorder", &log))
        .expect("register");

    engine.set_series_visible("a").expect("known series");
    engine.resize(800, 345).expect("same size");
    assert!(log.borrow().is_empty());

    assert!(matches!(
        engine.set_series_visible("zzz"),
        Err(ChartError::UnknownSeries(label)) if label == "zzz"
    ));
}

#[test]
fn listener_ids_must_be_unique_and_non_empty() {
    let mut engine = rendered_engine();
    let log: Log = Rc::default();

    engine
        .register_listener(RecordingListener::boxed("recorder", &log))
        .expect("first registration");
    let duplicate = engine.register_listener(RecordingListener::boxed("recorder", &log));
    assert!(matches!(
        duplicate,
        Err(ChartError::InvalidData(message)) if message.contains("already registered")
    ));
    assert!(
        engine
            .register_listener(RecordingListener::boxed("", &log))
            .is_err()
    );
    assert_eq!(engine.listener_count(), 1);
}

#[test]
fn unregistered_listener_stops_receiving() {
    let mut engine = rendered_engine();
    let log: Log = Rc::default();
    engine
        .register_listener(RecordingListener::boxed("recorder", &log))
        .expect("register");

    engine.toggle_series("a").expect("known series");
    assert_eq!(log.borrow().len(), 1);

    assert!(engine.unregister_listener("recorder"));
    assert!(!engine.unregister_listener("recorder"));
    assert!(!engine.has_listener("recorder"));

    engine.toggle_series("a").expect("known series");
    assert_eq!(log.borrow().len(), 1);
}
