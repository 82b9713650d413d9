pub mod animator;
pub mod config;
pub mod constants;
pub mod ease;
pub mod geometry;
pub mod input;
pub mod pages;
pub mod sequencer;
pub mod skeleton;

pub static PAGE_WGSL: &str = include_str!("../shaders/page.wgsl");

/// Joint capacity of the shader's uniform array; must cover the largest
/// configured segment count plus the root bone.
pub const MAX_BONES: usize = 64;

pub use animator::*;
pub use config::*;
pub use constants::*;
pub use ease::*;
pub use geometry::*;
pub use input::*;
pub use pages::*;
pub use sequencer::*;
pub use skeleton::*;
