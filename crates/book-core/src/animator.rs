//! Per-Page Animator.
//!
//! Owns one page's open/closed state, the turn timer, and the hover
//! highlight, and recomputes every bone's bend/fold target each frame. The
//! target math is exposed as pure functions so it can be exercised without a
//! clock or a render loop.

use std::f32::consts::{FRAC_PI_2, PI};

use instant::Instant;

use crate::config::AnimationTuning;
use crate::constants::{
    COVER_EMISSIVE, CURVE_SPLIT_BONE, FOLD_CREASE_DEG, INTERIOR_EMISSIVE, PAGE_FAN_DEG,
    TURN_DURATION_MS,
};
use crate::ease::{damp, damp_angle};
use crate::skeleton::BoneChain;

/// Per-frame snapshot of a page's position in the book, derived from the
/// sequencer's delayed page index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageFlags {
    /// The delayed page index has moved past this page.
    pub opened: bool,
    /// The whole book lies shut at either cover.
    pub book_closed: bool,
}

pub struct PageAnimator {
    index: usize,
    tuning: AnimationTuning,
    opened: bool,
    turned_at: Option<Instant>,
    highlighted: bool,
    emissive: f32,
}

impl PageAnimator {
    pub fn new(index: usize, page_count: usize, tuning: AnimationTuning) -> Self {
        let is_cover = index == 0 || index + 1 == page_count;
        Self {
            index,
            tuning,
            opened: false,
            turned_at: None,
            highlighted: false,
            emissive: if is_cover {
                COVER_EMISSIVE
            } else {
                INTERIOR_EMISSIVE
            },
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn opened(&self) -> bool {
        self.opened
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, on: bool) {
        self.highlighted = on;
    }

    /// Current emissive intensity of the picture faces.
    pub fn emissive(&self) -> f32 {
        self.emissive
    }

    /// Advance the page by one frame: ease the highlight, restamp the turn
    /// timer on a state flip, and damp every bone toward its target.
    pub fn update(&mut self, chain: &mut BoneChain, flags: PageFlags, now: Instant, dt: f32) {
        let emissive_target = if self.highlighted {
            self.tuning.highlight_emissive
        } else {
            0.0
        };
        self.emissive = damp(
            self.emissive,
            emissive_target,
            self.tuning.highlight_tau_sec,
            dt,
        );

        if flags.opened != self.opened {
            self.opened = flags.opened;
            self.turned_at = Some(now);
        }
        let turning_time = self.turning_time(now);
        let target = target_rotation(self.opened, flags.book_closed, self.index);

        let bone_count = chain.len();
        for i in 0..bone_count {
            let bend_target = bone_bend_target(
                i,
                bone_count,
                target,
                turning_time,
                flags.book_closed,
                &self.tuning,
            );
            let fold_target =
                bone_fold_target(i, bone_count, target, turning_time, flags.book_closed);
            let bone = &mut chain.bones_mut()[i];
            bone.bend = damp_angle(bone.bend, bend_target, self.tuning.bend_tau_sec, dt);
            bone.fold = damp_angle(bone.fold, fold_target, self.tuning.fold_tau_sec, dt);
        }
    }

    /// Bump function over the 400 ms turn window: 0 at rest, up to 1
    /// mid-turn, back to 0 once settled.
    fn turning_time(&self, now: Instant) -> f32 {
        let Some(turned_at) = self.turned_at else {
            return 0.0;
        };
        let elapsed_ms = now.saturating_duration_since(turned_at).as_secs_f64() * 1000.0;
        let t = (elapsed_ms.min(TURN_DURATION_MS) / TURN_DURATION_MS) as f32;
        (t * PI).sin()
    }
}

/// Base angle of the whole page: -90 deg when opened, +90 deg when closed,
/// fanned out by page index unless the book is fully shut.
pub fn target_rotation(opened: bool, book_closed: bool, page_index: usize) -> f32 {
    let base = if opened { -FRAC_PI_2 } else { FRAC_PI_2 };
    if book_closed {
        base
    } else {
        base + (page_index as f32 * PAGE_FAN_DEG).to_radians()
    }
}

/// Bend target for bone `i` of `bone_count`.
pub fn bone_bend_target(
    i: usize,
    bone_count: usize,
    target_rotation: f32,
    turning_time: f32,
    book_closed: bool,
    tuning: &AnimationTuning,
) -> f32 {
    if book_closed {
        // Collapse to a flat stack: the root takes the whole rotation.
        return if i == 0 { target_rotation } else { 0.0 };
    }
    let inside = if i < CURVE_SPLIT_BONE {
        (i as f32 * 0.2 + 0.25).sin()
    } else {
        0.0
    };
    let outside = if i >= CURVE_SPLIT_BONE {
        (i as f32 * 0.3 + 0.09).cos()
    } else {
        0.0
    };
    let turning_bump = (i as f32 * PI / bone_count as f32).sin() * turning_time;
    tuning.inside_strength * inside * target_rotation
        - tuning.outside_strength * outside * target_rotation
        + tuning.turning_strength * turning_bump * target_rotation
}

/// Fold target for bone `i`: a small crease on the far half of the page,
/// present only while a turn is in flight.
pub fn bone_fold_target(
    i: usize,
    bone_count: usize,
    target_rotation: f32,
    turning_time: f32,
    book_closed: bool,
) -> f32 {
    if book_closed || i <= CURVE_SPLIT_BONE {
        return 0.0;
    }
    let crease = target_rotation.signum() * FOLD_CREASE_DEG.to_radians();
    let intensity = (i as f32 * PI / bone_count as f32 - 0.5).sin() * turning_time;
    crease * intensity
}
