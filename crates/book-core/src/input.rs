//! Tap-vs-drag classification and page picking math.
//!
//! A qualifying tap on a page turns it; everything else falls through to the
//! camera controls. Hover only applies to desktop mouse pointers.

use glam::Vec3;

use crate::constants::{TAP_MAX_DELTA_PX, TAP_MAX_DURATION_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Maps the DOM `pointerType` string; unknown kinds count as touch.
    pub fn from_dom(kind: &str) -> Self {
        match kind {
            "mouse" => Self::Mouse,
            "pen" => Self::Pen,
            _ => Self::Touch,
        }
    }

    /// Only desktop mice produce hover highlights.
    pub fn hovers(self) -> bool {
        matches!(self, Self::Mouse)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PointerDown {
    pub x: f32,
    pub y: f32,
    pub at_ms: f64,
    pub kind: PointerKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Drag,
}

/// Records the last pointer-down and classifies the matching release.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapTracker {
    down: Option<PointerDown>,
}

impl TapTracker {
    pub fn press(&mut self, x: f32, y: f32, at_ms: f64, kind: PointerKind) {
        self.down = Some(PointerDown { x, y, at_ms, kind });
    }

    pub fn is_down(&self) -> bool {
        self.down.is_some()
    }

    pub fn down_kind(&self) -> Option<PointerKind> {
        self.down.map(|d| d.kind)
    }

    /// Classify a release against the recorded press; `None` if there was no
    /// matching press.
    pub fn release(&mut self, x: f32, y: f32, at_ms: f64) -> Option<Gesture> {
        let down = self.down.take()?;
        let dx = (x - down.x).abs();
        let dy = (y - down.y).abs();
        let dt_ms = at_ms - down.at_ms;
        Some(if is_tap(dx, dy, dt_ms) {
            Gesture::Tap
        } else {
            Gesture::Drag
        })
    }

    pub fn clear(&mut self) {
        self.down = None;
    }
}

/// Tap iff the pointer barely moved and the press was short.
pub fn is_tap(dx: f32, dy: f32, dt_ms: f64) -> bool {
    dx < TAP_MAX_DELTA_PX && dy < TAP_MAX_DELTA_PX && dt_ms < TAP_MAX_DURATION_MS
}

/// Page index to request when a page is tapped: tapping an open page turns
/// it back, tapping a closed page turns it forward.
pub fn tap_target(opened: bool, page_index: usize) -> usize {
    if opened {
        page_index
    } else {
        page_index + 1
    }
}

/// Intersect a page-local ray with the page rectangle: the `z = 0` plane
/// with `x` in `[0, width]` and `|y| <= height / 2`. Callers transform the
/// pick ray by the inverse of the page's model matrix first. Returns the ray
/// parameter of the hit.
pub fn ray_page_rect(ray_origin: Vec3, ray_dir: Vec3, width: f32, height: f32) -> Option<f32> {
    if ray_dir.z.abs() < 1e-6 {
        return None;
    }
    let t = -ray_origin.z / ray_dir.z;
    if t < 0.0 {
        return None;
    }
    let hit = ray_origin + ray_dir * t;
    (hit.x >= 0.0 && hit.x <= width && hit.y.abs() <= height / 2.0).then_some(t)
}
