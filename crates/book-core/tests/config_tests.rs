use book_core::config::{PageDimensions, Viewport};
use book_core::ease::{damp, damp_angle, shortest_arc};

#[test]
fn viewport_classification() {
    let desktop = Viewport {
        width: 1440.0,
        height: 900.0,
    };
    assert!(!desktop.is_mobile());
    assert!(desktop.is_landscape());
    assert!(!desktop.needs_rotate_alert());

    let phone_portrait = Viewport {
        width: 390.0,
        height: 844.0,
    };
    assert!(phone_portrait.is_mobile());
    assert!(!phone_portrait.is_landscape());
    assert!(phone_portrait.needs_rotate_alert());

    let phone_landscape = Viewport {
        width: 700.0,
        height: 390.0,
    };
    assert!(phone_landscape.is_mobile());
    assert!(phone_landscape.is_landscape());
    assert!(!phone_landscape.needs_rotate_alert());
}

#[test]
fn presets_follow_the_viewport() {
    let phone_landscape = Viewport {
        width: 700.0,
        height: 390.0,
    };
    assert_eq!(
        PageDimensions::for_viewport(phone_landscape),
        PageDimensions::MOBILE_LANDSCAPE
    );
    let desktop = Viewport {
        width: 1440.0,
        height: 900.0,
    };
    assert_eq!(PageDimensions::for_viewport(desktop), PageDimensions::DEFAULT);
    // portrait phones fall back to the default preset behind the rotate alert
    let phone_portrait = Viewport {
        width: 390.0,
        height: 844.0,
    };
    assert_eq!(
        PageDimensions::for_viewport(phone_portrait),
        PageDimensions::DEFAULT
    );
}

#[test]
fn presets_validate_and_degenerate_configs_do_not() {
    assert!(PageDimensions::DEFAULT.validate().is_ok());
    assert!(PageDimensions::MOBILE_LANDSCAPE.validate().is_ok());
    let mut bad = PageDimensions::DEFAULT;
    bad.segments = 0;
    assert!(bad.validate().is_err());
    bad = PageDimensions::DEFAULT;
    bad.height = -1.0;
    assert!(bad.validate().is_err());
}

#[test]
fn damp_converges_without_overshoot() {
    let mut v = 0.0f32;
    for _ in 0..600 {
        let next = damp(v, 1.0, 0.5, 1.0 / 60.0);
        assert!(next > v && next <= 1.0);
        v = next;
    }
    assert!((v - 1.0).abs() < 1e-3);
}

#[test]
fn damp_angle_takes_the_shortest_arc() {
    use std::f32::consts::PI;
    // easing from just below +pi to just above -pi should cross the seam
    let current = PI - 0.1;
    let target = -PI + 0.1;
    let next = damp_angle(current, target, 0.5, 1.0 / 60.0);
    assert!(next > current, "should move forward through the seam");
    assert!(shortest_arc(target - current).abs() - 0.2 < 1e-5);
}

#[test]
fn damp_edge_cases() {
    assert_eq!(damp(0.3, 1.0, 0.0, 0.016), 1.0);
    assert_eq!(damp(0.3, 1.0, 0.5, 0.0), 0.3);
}
