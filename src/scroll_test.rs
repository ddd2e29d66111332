use super::*;

// =============================================================
// Header
// =============================================================

#[test]
fn header_scrolled_past_threshold() {
    assert!(header_scrolled(60.0, 50.0));
    assert!(!header_scrolled(10.0, 50.0));
    assert!(!header_scrolled(50.0, 50.0));
}

// =============================================================
// Scroll percentage / anchors
// =============================================================

#[test]
fn scroll_percentage_halfway() {
    assert!((scroll_percentage(500.0, 2000.0, 1000.0) - 50.0).abs() < f64::EPSILON);
}

#[test]
fn scroll_percentage_without_range_is_zero() {
    assert_eq!(scroll_percentage(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_percentage(0.0, 600.0, 800.0), 0.0);
}

#[test]
fn anchor_lands_below_header() {
    assert_eq!(anchor_scroll_top(400.0, 1000.0, 80.0), 1320.0);
    assert_eq!(anchor_scroll_top(-200.0, 1000.0, 80.0), 720.0);
}

// =============================================================
// Entrance
// =============================================================

#[test]
fn tracker_starts_pending() {
    let tracker = EntranceTracker::new(3);
    assert_eq!(tracker.state(0), Some(EntranceState::Pending));
    assert_eq!(tracker.state(2), Some(EntranceState::Pending));
    assert_eq!(tracker.state(3), None);
}

#[test]
fn entrance_fires_once_even_after_reentry() {
    let mut tracker = EntranceTracker::new(2);
    let first = tracker.observe(0, true, 0, 80);
    assert!(first.is_some());
    assert_eq!(tracker.state(0), Some(EntranceState::Animated));

    assert_eq!(tracker.observe(0, false, 0, 80), None);
    assert_eq!(tracker.observe(0, true, 0, 80), None);
    assert_eq!(tracker.state(1), Some(EntranceState::Pending));
}

#[test]
fn non_intersecting_sample_keeps_pending() {
    let mut tracker = EntranceTracker::new(1);
    assert_eq!(tracker.observe(0, false, 2, 80), None);
    assert_eq!(tracker.state(0), Some(EntranceState::Pending));
}

#[test]
fn unknown_section_is_ignored() {
    let mut tracker = EntranceTracker::new(1);
    assert_eq!(tracker.observe(5, true, 0, 80), None);
}

#[test]
fn plan_staggers_children() {
    let plan = EntrancePlan::new(3, 80);
    assert_eq!(plan.section_animation, "slideUp 0.6s ease-out forwards");
    assert_eq!(
        plan.child_animations,
        vec![
            "scaleIn 0.5s ease-out 0ms forwards".to_owned(),
            "scaleIn 0.5s ease-out 80ms forwards".to_owned(),
            "scaleIn 0.5s ease-out 160ms forwards".to_owned(),
        ]
    );
}
