use book_core::input::{is_tap, ray_page_rect, tap_target, Gesture, PointerKind, TapTracker};
use glam::Vec3;

#[test]
fn tap_classification_thresholds() {
    // a short, nearly still press is a tap
    assert!(is_tap(3.0, 4.0, 120.0));
    // too much travel
    assert!(!is_tap(20.0, 0.0, 100.0));
    // too long a press
    assert!(!is_tap(0.0, 0.0, 500.0));
    // thresholds are exclusive
    assert!(!is_tap(10.0, 0.0, 100.0));
    assert!(!is_tap(0.0, 0.0, 300.0));
}

#[test]
fn tracker_classifies_press_release_pairs() {
    let mut tracker = TapTracker::default();
    tracker.press(100.0, 200.0, 1000.0, PointerKind::Mouse);
    assert!(tracker.is_down());
    assert_eq!(
        tracker.release(103.0, 196.0, 1120.0),
        Some(Gesture::Tap)
    );
    assert!(!tracker.is_down());

    tracker.press(100.0, 200.0, 1000.0, PointerKind::Touch);
    assert_eq!(
        tracker.release(160.0, 200.0, 1100.0),
        Some(Gesture::Drag)
    );
}

#[test]
fn release_without_press_is_ignored() {
    let mut tracker = TapTracker::default();
    assert_eq!(tracker.release(0.0, 0.0, 0.0), None);
}

#[test]
fn clear_drops_a_recorded_press() {
    let mut tracker = TapTracker::default();
    tracker.press(1.0, 1.0, 0.0, PointerKind::Pen);
    tracker.clear();
    assert_eq!(tracker.release(1.0, 1.0, 50.0), None);
}

#[test]
fn tap_turns_open_pages_back_and_closed_pages_forward() {
    assert_eq!(tap_target(true, 3), 3);
    assert_eq!(tap_target(false, 3), 4);
    assert_eq!(tap_target(false, 0), 1);
}

#[test]
fn pointer_kind_mapping_and_hover() {
    assert_eq!(PointerKind::from_dom("mouse"), PointerKind::Mouse);
    assert_eq!(PointerKind::from_dom("pen"), PointerKind::Pen);
    assert_eq!(PointerKind::from_dom("touch"), PointerKind::Touch);
    assert_eq!(PointerKind::from_dom("gamepad?"), PointerKind::Touch);
    assert!(PointerKind::Mouse.hovers());
    assert!(!PointerKind::Touch.hovers());
    assert!(!PointerKind::Pen.hovers());
}

#[test]
fn ray_hits_the_page_rectangle() {
    let t = ray_page_rect(
        Vec3::new(1.0, 0.2, 5.0),
        Vec3::new(0.0, 0.0, -1.0),
        2.58,
        1.71,
    );
    assert_eq!(t, Some(5.0));
}

#[test]
fn ray_misses_outside_the_bounds() {
    let dir = Vec3::new(0.0, 0.0, -1.0);
    // behind the spine
    assert_eq!(ray_page_rect(Vec3::new(-0.1, 0.0, 5.0), dir, 2.58, 1.71), None);
    // past the free edge
    assert_eq!(ray_page_rect(Vec3::new(2.7, 0.0, 5.0), dir, 2.58, 1.71), None);
    // above the page
    assert_eq!(ray_page_rect(Vec3::new(1.0, 1.0, 5.0), dir, 2.58, 1.71), None);
}

#[test]
fn ray_parallel_or_behind_never_hits() {
    // parallel to the page plane
    assert_eq!(
        ray_page_rect(Vec3::new(1.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0), 2.58, 1.71),
        None
    );
    // pointing away from the plane
    assert_eq!(
        ray_page_rect(Vec3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0), 2.58, 1.71),
        None
    );
}
