use chart_viewport::core::{Bracket, SearchOrder, bracket, nearest_index};

#[test]
fn values_outside_the_axis_return_sentinel_brackets() {
    let axis = [0.0, 10.0, 20.0];
    assert_eq!(bracket(&axis, -1.0, SearchOrder::Ascending), Bracket::new(-1, 0));
    assert_eq!(bracket(&axis, 25.0, SearchOrder::Ascending), Bracket::new(2, 3));
    assert_eq!(bracket(&[], 5.0, SearchOrder::Ascending), Bracket::new(-1, 0));
}

#[test]
fn interior_value_brackets_its_neighbours() {
    let axis = [0.0, 10.0, 20.0, 30.0];
    assert_eq!(bracket(&axis, 15.0, SearchOrder::Ascending), Bracket::new(1, 2));
    assert_eq!(bracket(&axis, 0.5, SearchOrder::Ascending), Bracket::new(0, 1));
    assert_eq!(bracket(&axis, 29.9, SearchOrder::Ascending), Bracket::new(2, 3));
}

#[test]
fn exact_hits_collapse_onto_the_matching_index() {
    let axis = [0.0, 10.0, 20.0];
    for (index, value) in axis.iter().enumerate() {
        let found = bracket(&axis, *value, SearchOrder::Ascending);
        assert!(found.is_exact());
        assert_eq!(found.lower, index as isize);
    }
    assert_eq!(bracket(&[5.0], 5.0, SearchOrder::Ascending), Bracket::new(0, 0));
}

#[test]
fn repeated_queries_are_stable() {
    let axis: Vec<f64> = (0..1_000).map(|i| i as f64 * 0.5).collect();
    let first = bracket(&axis, 123.25, SearchOrder::Ascending);
    for _ in 0..10 {
        assert_eq!(bracket(&axis, 123.25, SearchOrder::Ascending), first);
    }
}

#[test]
fn nearest_index_picks_closer_neighbour_with_ties_going_low() {
    let axis = [0.0, 10.0, 20.0, 30.0];
    let visible = (0.0, 30.0);
    assert_eq!(nearest_index(&axis, 14.0, visible), Some(1));
    assert_eq!(nearest_index(&axis, 15.0, visible), Some(1));
    assert_eq!(nearest_index(&axis, 16.0, visible), Some(2));
    assert_eq!(nearest_index(&axis, -5.0, visible), Some(0));
    assert_eq!(nearest_index(&axis, 40.0, visible), Some(3));
    assert_eq!(nearest_index(&[], 1.0, visible), None);
}

#[test]
fn nearest_index_prefers_points_inside_the_visible_range() {
    let axis = [0.0, 10.0, 20.0, 30.0];
    assert_eq!(nearest_index(&axis, 4.0, (3.0, 30.0)), Some(1));
    assert_eq!(nearest_index(&axis, 26.0, (0.0, 25.0)), Some(2));
}
