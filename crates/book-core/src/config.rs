//! Layout presets and animation tuning.
//!
//! The frontends classify the viewport and pick a page-dimension preset from
//! it; none of this feeds back into the animation math beyond the segment
//! count and page size.

use thiserror::Error;

use crate::constants::{
    HIGHLIGHT_TAU_SEC, INSIDE_CURVE_STRENGTH, MOBILE_BREAKPOINT_PX, OUTSIDE_CURVE_STRENGTH,
    TURNING_CURVE_STRENGTH,
};
use crate::constants::{BEND_EASE_TAU_SEC, FOLD_EASE_TAU_SEC};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("segment count must be at least 1, got {0}")]
    InvalidSegments(usize),
    #[error("page dimensions must be positive, got {width}x{height}x{depth}")]
    InvalidDimensions { width: f32, height: f32, depth: f32 },
}

/// Viewport classification as reported by the host window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn is_mobile(&self) -> bool {
        self.width <= MOBILE_BREAKPOINT_PX
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Mobile portrait gets the rotate-your-device screen instead of the book.
    pub fn needs_rotate_alert(&self) -> bool {
        self.is_mobile() && !self.is_landscape()
    }
}

/// Physical page size and subdivision for one layout configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageDimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub segments: usize,
}

impl PageDimensions {
    pub const DEFAULT: Self = Self {
        width: 2.58,
        height: 1.71,
        depth: 0.003,
        segments: 30,
    };

    pub const MOBILE_LANDSCAPE: Self = Self {
        width: 3.2,
        height: 2.1,
        depth: 0.003,
        segments: 30,
    };

    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.is_mobile() && viewport.is_landscape() {
            Self::MOBILE_LANDSCAPE
        } else {
            Self::DEFAULT
        }
    }

    pub fn segment_width(&self) -> f32 {
        self.width / self.segments as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segments < 1 {
            return Err(ConfigError::InvalidSegments(self.segments));
        }
        if self.width <= 0.0 || self.height <= 0.0 || self.depth <= 0.0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        Ok(())
    }
}

/// Tunable animation strengths. Exposed as configuration because the
/// observed values differ slightly between deployments of the original book.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTuning {
    pub inside_strength: f32,
    pub outside_strength: f32,
    pub turning_strength: f32,
    pub bend_tau_sec: f32,
    pub fold_tau_sec: f32,
    pub highlight_emissive: f32,
    pub highlight_tau_sec: f32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            inside_strength: INSIDE_CURVE_STRENGTH,
            outside_strength: OUTSIDE_CURVE_STRENGTH,
            turning_strength: TURNING_CURVE_STRENGTH,
            bend_tau_sec: BEND_EASE_TAU_SEC,
            fold_tau_sec: FOLD_EASE_TAU_SEC,
            highlight_emissive: 0.02,
            highlight_tau_sec: HIGHLIGHT_TAU_SEC,
        }
    }
}
