use std::sync::Arc;

use approx::assert_abs_diff_eq;
use chart_viewport::core::{
    PendingTopic, RangeAnimationOptions, RangeOptions, ViewportController,
};

fn axis(step: f64, len: usize) -> Arc<[f64]> {
    (0..len).map(|i| i as f64 * step).collect::<Vec<_>>().into()
}

fn controller() -> ViewportController {
    ViewportController::new(axis(10.0, 101), 800.0, 13.0)
}

fn drain(controller: &mut ViewportController) {
    for topic in [
        PendingTopic::RangeRefresh,
        PendingTopic::Decimation,
        PendingTopic::Extrema,
        PendingTopic::Positions,
        PendingTopic::Cursor,
    ] {
        controller.take_pending(topic);
    }
}

#[test]
fn interior_range_resolves_tight_and_expanded_brackets() {
    let mut controller = controller();
    controller.set_range(205.0, 495.0, RangeOptions::default());

    assert_eq!(controller.range(), (205.0, 495.0));
    assert_eq!(controller.indexes(), (21, 49));
    assert_eq!(controller.expanded_indexes(), (20, 50));
    assert_abs_diff_eq!(controller.domain_per_pixel(), 290.0 / 800.0, epsilon = 1e-12);
}

#[test]
fn expanded_bracket_stops_at_the_axis_ends() {
    let mut controller = controller();
    controller.set_range(0.0, 1_000.0, RangeOptions::default());
    assert_eq!(controller.indexes(), (0, 100));
    assert_eq!(controller.expanded_indexes(), (0, 100));
}

#[test]
fn overshooting_both_edges_grants_full_padding() {
    let mut controller = controller();
    controller.set_range(-100.0, 1_100.0, RangeOptions::default());

    let padding = 1_000.0 / 800.0 * 13.0;
    let (min, max) = controller.range();
    assert_abs_diff_eq!(min, -padding, epsilon = 1e-9);
    assert_abs_diff_eq!(max, 1_000.0 + padding, epsilon = 1e-9);
    assert_eq!(controller.padding_scales(), (1.0, 1.0));
    assert_eq!(controller.indexes(), (0, 100));
}

#[test]
fn partial_overshoot_is_honoured_exactly() {
    let mut controller = controller();
    controller.set_range(-5.0, 1_000.0, RangeOptions::default());

    let (min, max) = controller.range();
    assert_abs_diff_eq!(min, -5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max, 1_000.0, epsilon = 1e-9);
    let (left, right) = controller.padding_scales();
    assert!(left > 0.0 && left < 1.0);
    assert_eq!(right, 0.0);
}

#[test]
fn preserved_padding_keeps_previous_scales() {
    let mut controller = controller();
    controller.set_range(-100.0, 1_100.0, RangeOptions::default());
    controller.adjust_range(100.0, 500.0);

    let padding = 400.0 / 800.0 * 13.0;
    let (min, max) = controller.range();
    assert_abs_diff_eq!(min, 100.0 - padding, epsilon = 1e-9);
    assert_abs_diff_eq!(max, 500.0 + padding, epsilon = 1e-9);
}

#[test]
fn reversed_and_nan_bounds_are_normalized() {
    let mut controller = controller();
    controller.set_range(500.0, 100.0, RangeOptions::default());
    assert_eq!(controller.range(), (100.0, 500.0));

    controller.set_range(f64::NAN, f64::NAN, RangeOptions::default());
    let padding = 1_000.0 / 800.0 * 13.0;
    let (min, max) = controller.range();
    assert_abs_diff_eq!(min, -padding, epsilon = 1e-9);
    assert_abs_diff_eq!(max, 1_000.0 + padding, epsilon = 1e-9);
}

#[test]
fn bracket_change_marks_decimation_and_extrema() {
    let mut controller = controller();
    let first = controller.set_range(205.0, 495.0, RangeOptions::default());
    assert!(first.indexes_changed);
    assert!(first.extrema_requested);

    drain(&mut controller);
    let repeat = controller.set_range(205.0, 495.0, RangeOptions::default());
    assert!(!repeat.indexes_changed);
    let pending = controller.pending();
    assert!(!pending.contains(PendingTopic::Decimation));
    assert!(!pending.contains(PendingTopic::Extrema));
    assert!(pending.contains(PendingTopic::Positions));
}

#[test]
fn skip_extremes_leaves_extrema_clean() {
    let mut controller = controller();
    controller.set_range(205.0, 495.0, RangeOptions::default());
    drain(&mut controller);

    let change = controller.set_range(
        0.0,
        300.0,
        RangeOptions {
            skip_extremes: true,
            preserve_padding: false,
        },
    );
    assert!(change.indexes_changed);
    assert!(!change.extrema_requested);
    assert!(controller.pending().contains(PendingTopic::Decimation));
    assert!(!controller.pending().contains(PendingTopic::Extrema));
}

#[test]
fn animated_range_lands_on_target() {
    let mut controller = controller();
    controller.set_range(205.0, 495.0, RangeOptions::default());
    controller.animate_range_to(0.0, 500.0, RangeAnimationOptions::default());
    assert!(controller.is_animating());

    controller.step_range_animation(150.0).expect("running animation");
    let (min, max) = controller.range();
    assert!(min < 205.0 && min > 0.0);
    assert!(max > 495.0 && max < 500.0);

    controller.step_range_animation(200.0).expect("final step");
    assert_eq!(controller.range(), (0.0, 500.0));
    assert!(!controller.is_animating());
    assert!(controller.step_range_animation(16.0).is_none());
}

#[test]
fn second_animation_restarts_from_the_current_range() {
    let mut controller = controller();
    controller.set_range(205.0, 495.0, RangeOptions::default());
    controller.animate_range_to(0.0, 500.0, RangeAnimationOptions::default());
    controller.step_range_animation(100.0);
    let midway = controller.range();

    controller.animate_range_to(600.0, 1_000.0, RangeAnimationOptions::default());
    assert_eq!(controller.range(), midway);

    controller.step_range_animation(1.0);
    let (min, _) = controller.range();
    assert!((min - midway.0).abs() < 1.0);

    controller.step_range_animation(1_000.0);
    assert_eq!(controller.range(), (600.0, 1_000.0));
}

#[test]
fn render_width_change_queues_refresh() {
    let mut controller = controller();
    controller.set_range(200.0, 600.0, RangeOptions::default());
    drain(&mut controller);

    controller.set_render_width(400.0);
    assert!(controller.pending().contains(PendingTopic::RangeRefresh));
    assert_abs_diff_eq!(controller.domain_per_pixel(), 1.0, epsilon = 1e-12);

    let change = controller.refresh_range();
    assert!(!change.extrema_requested);
    assert_eq!(controller.range(), (200.0, 600.0));
}

#[test]
fn zero_duration_animation_lands_on_the_next_step() {
    let mut controller = controller();
    controller.set_range(200.0, 600.0, RangeOptions::default());
    drain(&mut controller);

    let options = RangeAnimationOptions {
        duration_ms: 0.0,
        ..RangeAnimationOptions::default()
    };
    controller.animate_range_to(0.0, 100.0, options);
    assert!(!controller.is_animating());
    assert!(controller.pending().contains(PendingTopic::RangeRefresh));

    let change = controller.step_range_animation(0.0).expect("queued target");
    assert!(change.indexes_changed);
    assert_eq!(controller.range(), (0.0, 100.0));
    assert_eq!(controller.indexes(), (0, 10));
    assert!(controller.step_range_animation(16.0).is_none());
}
