//! Bone Chain Builder.
//!
//! The page skeleton is a linear chain stored as an arena: bone records
//! addressed by index with an explicit parent index, rather than nested
//! ownership. Topology never changes after construction; only each bone's
//! bend/fold rotation is written per frame.

use glam::{Mat4, Vec3};

use crate::config::ConfigError;

#[derive(Clone, Debug)]
pub struct Bone {
    /// Index of the parent bone; `None` only for bone 0 (the spine root).
    pub parent: Option<usize>,
    /// Rest offset from the parent along the page width.
    pub rest_offset: Vec3,
    /// Rotation about the page's vertical axis (the hinge).
    pub bend: f32,
    /// Rotation about the bend axis, the secondary crease.
    pub fold: f32,
}

#[derive(Clone, Debug)]
pub struct BoneChain {
    segment_width: f32,
    bones: Vec<Bone>,
}

impl BoneChain {
    /// Build a chain of `segments + 1` bones spanning the page width.
    pub fn new(segments: usize, segment_width: f32) -> Result<Self, ConfigError> {
        if segments < 1 {
            return Err(ConfigError::InvalidSegments(segments));
        }
        let bones = (0..=segments)
            .map(|i| Bone {
                parent: i.checked_sub(1),
                rest_offset: if i == 0 {
                    Vec3::ZERO
                } else {
                    Vec3::new(segment_width, 0.0, 0.0)
                },
                bend: 0.0,
                fold: 0.0,
            })
            .collect();
        Ok(Self {
            segment_width,
            bones,
        })
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bones_mut(&mut self) -> &mut [Bone] {
        &mut self.bones
    }

    /// Bone 0 has no parent to hinge on, so its rotation is carried by the
    /// page's own transform instead of the skinning matrices.
    pub fn root_rotation(&self) -> (f32, f32) {
        (self.bones[0].bend, self.bones[0].fold)
    }

    fn local_rotation(bone: &Bone) -> Mat4 {
        Mat4::from_rotation_x(bone.fold) * Mat4::from_rotation_y(bone.bend)
    }

    /// Bone transforms in page-local space, parents composed onto children.
    /// Bone 0's rotation is excluded (see [`Self::root_rotation`]).
    pub fn world_transforms(&self) -> Vec<Mat4> {
        let mut out: Vec<Mat4> = Vec::with_capacity(self.bones.len());
        for (i, bone) in self.bones.iter().enumerate() {
            let rotation = if i == 0 {
                Mat4::IDENTITY
            } else {
                Self::local_rotation(bone)
            };
            let local = Mat4::from_translation(bone.rest_offset) * rotation;
            let world = match bone.parent {
                Some(p) => out[p] * local,
                None => local,
            };
            out.push(world);
        }
        out
    }

    /// Joint matrices for the shader: world transform times the inverse of
    /// the straight rest pose.
    pub fn skinning_matrices(&self, out: &mut Vec<Mat4>) {
        out.clear();
        let worlds = self.world_transforms();
        let mut rest = Vec3::ZERO;
        for (i, bone) in self.bones.iter().enumerate() {
            rest += bone.rest_offset;
            out.push(worlds[i] * Mat4::from_translation(-rest));
        }
    }
}
