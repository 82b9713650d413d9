//! Page Geometry Builder.
//!
//! Produces a flat box mesh subdivided along the page width, with per-vertex
//! skin attributes binding each vertex to the two nearest bones of the spine
//! chain. The mesh origin sits on the spine edge, so bone 0 coincides with
//! the hinge. Pure function of the page dimensions; regenerated only when a
//! layout switch changes them.

use crate::config::{ConfigError, PageDimensions};

/// Material slot a face belongs to, encoded per vertex so the whole page
/// renders in one draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum MaterialSlot {
    /// +x, the free edge of the page.
    EdgeFree = 0,
    /// -x, the spine edge; rendered near-black.
    EdgeSpine = 1,
    EdgeTop = 2,
    EdgeBottom = 3,
    /// +z, carries the front picture.
    Front = 4,
    /// -z, carries the back picture.
    Back = 5,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PageVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub slot: u32,
    pub skin_index: [u32; 4],
    pub skin_weight: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct PageGeometry {
    pub vertices: Vec<PageVertex>,
    pub indices: Vec<u32>,
    pub segment_width: f32,
}

impl PageGeometry {
    /// Build the segmented page mesh for one layout configuration.
    pub fn build(dims: &PageDimensions) -> Result<Self, ConfigError> {
        dims.validate()?;

        let mut geo = Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            segment_width: dims.segment_width(),
        };

        let (w, h, d) = (dims.width, dims.height, dims.depth);
        let ws = dims.segments;
        // One box face per material slot. Axis triples are (u, v, w) basis
        // indices; the face grid is (grid_u x grid_v) quads.
        geo.face(2, 1, 0, -1.0, -1.0, d, h, w, 1, 2, MaterialSlot::EdgeFree);
        geo.face(2, 1, 0, 1.0, -1.0, d, h, -w, 1, 2, MaterialSlot::EdgeSpine);
        geo.face(0, 2, 1, 1.0, 1.0, w, d, h, ws, 1, MaterialSlot::EdgeTop);
        geo.face(0, 2, 1, 1.0, -1.0, w, d, -h, ws, 1, MaterialSlot::EdgeBottom);
        geo.face(0, 1, 2, 1.0, -1.0, w, h, d, ws, 2, MaterialSlot::Front);
        geo.face(0, 1, 2, -1.0, -1.0, w, h, -d, ws, 2, MaterialSlot::Back);

        // Shift the origin from the box center to the spine edge, then bind
        // every vertex to its two nearest bones.
        let segment_width = geo.segment_width;
        let segments = dims.segments;
        for v in &mut geo.vertices {
            v.position[0] += w / 2.0;
            let t = v.position[0] / segment_width;
            let k = (t.floor().max(0.0) as usize).min(segments);
            let weight = (t - k as f32).clamp(0.0, 1.0);
            // The second influence vanishes on the last bone; clamp keeps the
            // joint lookup inside the chain.
            v.skin_index = [k as u32, (k + 1).min(segments) as u32, 0, 0];
            v.skin_weight = [1.0 - weight, weight, 0.0, 0.0];
        }

        Ok(geo)
    }

    /// Emit one subdivided box face. `u`/`v`/`w_axis` pick which position
    /// component each of the face's plane axes writes to; `depth`'s sign
    /// selects which of the two parallel faces this is.
    #[allow(clippy::too_many_arguments)]
    fn face(
        &mut self,
        u: usize,
        v: usize,
        w_axis: usize,
        udir: f32,
        vdir: f32,
        width: f32,
        height: f32,
        depth: f32,
        grid_u: usize,
        grid_v: usize,
        slot: MaterialSlot,
    ) {
        let seg_w = width / grid_u as f32;
        let seg_h = height / grid_v as f32;
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let base = self.vertices.len() as u32;

        for iy in 0..=grid_v {
            for ix in 0..=grid_u {
                let mut position = [0.0f32; 3];
                position[u] = (ix as f32 * seg_w - half_w) * udir;
                position[v] = (iy as f32 * seg_h - half_h) * vdir;
                position[w_axis] = depth / 2.0;

                let mut normal = [0.0f32; 3];
                normal[w_axis] = if depth > 0.0 { 1.0 } else { -1.0 };

                self.vertices.push(PageVertex {
                    position,
                    normal,
                    uv: [ix as f32 / grid_u as f32, 1.0 - iy as f32 / grid_v as f32],
                    slot: slot as u32,
                    skin_index: [0; 4],
                    skin_weight: [0.0; 4],
                });
            }
        }

        let stride = grid_u as u32 + 1;
        for iy in 0..grid_v as u32 {
            for ix in 0..grid_u as u32 {
                let a = base + ix + stride * iy;
                let b = base + ix + stride * (iy + 1);
                let c = base + (ix + 1) + stride * (iy + 1);
                let d = base + (ix + 1) + stride * iy;
                self.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
    }
}
