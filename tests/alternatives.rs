use std::time::{Duration, Instant};

use approx::assert_relative_eq;
use cartometer::prelude::*;
use geo::line_string;

fn route(distance: f64, duration: f64) -> RouteInfo {
    RouteInfo {
        geometry: line_string![(x: 73.05, y: 33.68), (x: 73.09, y: 33.73)],
        distance,
        duration,
    }
}

#[test]
fn first_candidate_is_always_fastest() {
    let mut selector = AlternativeSelector::new();
    selector.set_alternatives(vec![route(10_000.0, 600.0), route(9_000.0, 650.0)]);

    let candidates = selector.candidates();
    assert_eq!(candidates[0].kind, RouteKind::Fastest);
    assert!(candidates[0].savings.is_none());
}

#[test]
fn classification_uses_the_95_percent_rule() {
    let mut selector = AlternativeSelector::new();
    selector.set_alternatives(vec![
        route(10_000.0, 600.0),
        route(9_000.0, 650.0),
        route(10_500.0, 580.0),
    ]);

    let candidates = selector.candidates();
    assert_eq!(candidates[0].kind, RouteKind::Fastest);
    // 9000 < 0.95 * 10000
    assert_eq!(candidates[1].kind, RouteKind::Shortest);
    assert_eq!(candidates[2].kind, RouteKind::Balanced);
}

#[test]
fn savings_are_relative_to_the_reference() {
    let mut selector = AlternativeSelector::new();
    selector.set_alternatives(vec![route(10_000.0, 600.0), route(9_000.0, 650.0)]);

    let savings = selector.candidates()[1].savings.expect("savings");
    assert_relative_eq!(savings.time, -50.0);
    assert_relative_eq!(savings.distance, 1_000.0);
}

#[test]
fn set_alternatives_resets_the_selection() {
    let mut selector = AlternativeSelector::new();
    selector.set_alternatives(vec![route(10_000.0, 600.0), route(9_000.0, 650.0)]);
    selector.select(1);
    assert_eq!(selector.selected_index(), 1);

    selector.set_alternatives(vec![route(8_000.0, 500.0)]);
    assert_eq!(selector.selected_index(), 0);
    assert_eq!(selector.len(), 1);
}

#[test]
fn select_out_of_range_keeps_the_selection() {
    let mut selector = AlternativeSelector::new();
    selector.set_alternatives(vec![
        route(10_000.0, 600.0),
        route(9_000.0, 650.0),
        route(10_500.0, 580.0),
    ]);
    selector.select(1);

    assert!(selector.select(5).is_none());
    assert_eq!(selector.selected_index(), 1);
}

#[test]
fn empty_set_is_a_valid_terminal_state() {
    let mut selector = AlternativeSelector::new();
    assert!(selector.is_empty());
    assert!(selector.selected().is_none());
    assert!(selector.select(0).is_none());
}

#[test]
fn draw_order_paints_the_selected_route_last() {
    let mut selector = AlternativeSelector::new();
    selector.set_alternatives(vec![
        route(10_000.0, 600.0),
        route(9_000.0, 650.0),
        route(10_500.0, 580.0),
        route(11_000.0, 700.0),
    ]);
    selector.select(2);

    let update = RouteRenderUpdate {
        candidates: selector.candidates().to_vec(),
        selected: selector.selected_index(),
    };
    let order: Vec<usize> = update.draw_order().collect();
    assert_eq!(order, vec![0, 1, 3, 2]);
}

#[test]
fn clear_empties_the_set_for_the_next_query() {
    let mut selector = AlternativeSelector::new();
    selector.set_alternatives(vec![route(10_000.0, 600.0), route(9_000.0, 650.0)]);
    selector.select(1);

    selector.clear();
    assert!(selector.is_empty());
    assert!(selector.selected().is_none());
    assert_eq!(selector.selected_index(), 0);
    assert!(selector.select(0).is_none());

    // A fresh set behaves as if the old one never existed.
    selector.set_alternatives(vec![route(8_000.0, 500.0)]);
    assert_eq!(selector.selected_index(), 0);
    assert_eq!(selector.candidates()[0].kind, RouteKind::Fastest);
}

#[test]
fn stale_results_are_dropped_silently() {
    let mut selector = AlternativeSelector::new();
    selector.set_alternatives(vec![route(10_000.0, 600.0)]);

    let stale = selector.begin_query();
    let current = selector.begin_query();

    let outcome = selector
        .apply_query_result(stale, Ok(vec![route(1.0, 1.0)]))
        .expect("stale is not an error");
    assert_eq!(outcome, QueryOutcome::Stale);
    // The superseded result must not touch the set, and the newer
    // request is still in flight.
    assert_eq!(selector.len(), 1);
    assert!(selector.is_calculating());

    let outcome = selector
        .apply_query_result(current, Ok(vec![route(8_000.0, 500.0), route(7_000.0, 550.0)]))
        .expect("current result applies");
    assert_eq!(outcome, QueryOutcome::Applied);
    assert_eq!(selector.len(), 2);
    assert!(!selector.is_calculating());
}

#[test]
fn failure_keeps_the_previous_set_intact() {
    let mut selector = AlternativeSelector::new();
    selector.set_alternatives(vec![route(10_000.0, 600.0), route(9_000.0, 650.0)]);

    let generation = selector.begin_query();
    let err = selector
        .apply_query_result(generation, Err(Error::NoRouteFound))
        .expect_err("failure propagates");
    assert!(err.to_string().contains("No route found"));

    assert_eq!(selector.len(), 2);
    assert_eq!(selector.selected_index(), 0);
    assert!(!selector.is_calculating());
}

#[test]
fn debouncer_fires_once_after_the_delay() {
    let mut debouncer = Debouncer::new(Duration::from_millis(300));
    let t0 = Instant::now();

    debouncer.touch(t0);
    assert!(debouncer.is_pending());
    assert!(!debouncer.should_fire(t0 + Duration::from_millis(100)));

    // A later change restarts the window.
    debouncer.touch(t0 + Duration::from_millis(200));
    assert!(!debouncer.should_fire(t0 + Duration::from_millis(400)));
    assert!(debouncer.should_fire(t0 + Duration::from_millis(500)));

    // Already fired; nothing pending anymore.
    assert!(!debouncer.is_pending());
    assert!(!debouncer.should_fire(t0 + Duration::from_secs(10)));
}
