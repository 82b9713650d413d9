use std::f32::consts::FRAC_PI_2;

use book_core::skeleton::BoneChain;
use glam::{Mat4, Vec3};

const SEG_W: f32 = 0.086;

#[test]
fn chain_has_segments_plus_one_bones() {
    for segments in 1..=40 {
        let chain = BoneChain::new(segments, SEG_W).unwrap();
        assert_eq!(chain.len(), segments + 1);
    }
}

#[test]
fn every_bone_parents_to_its_predecessor() {
    let chain = BoneChain::new(30, SEG_W).unwrap();
    for (i, bone) in chain.bones().iter().enumerate() {
        if i == 0 {
            assert!(bone.parent.is_none());
            assert_eq!(bone.rest_offset, Vec3::ZERO);
        } else {
            assert_eq!(bone.parent, Some(i - 1));
            assert_eq!(bone.rest_offset, Vec3::new(SEG_W, 0.0, 0.0));
        }
    }
}

#[test]
fn zero_segments_is_rejected() {
    assert!(BoneChain::new(0, SEG_W).is_err());
}

#[test]
fn rest_pose_spans_the_page_width() {
    let chain = BoneChain::new(10, SEG_W).unwrap();
    let worlds = chain.world_transforms();
    for (i, world) in worlds.iter().enumerate() {
        let origin = world.transform_point3(Vec3::ZERO);
        assert!((origin.x - i as f32 * SEG_W).abs() < 1e-5);
        assert!(origin.y.abs() < 1e-6);
        assert!(origin.z.abs() < 1e-6);
    }
}

#[test]
fn rest_pose_skinning_matrices_are_identity() {
    let chain = BoneChain::new(8, SEG_W).unwrap();
    let mut joints = Vec::new();
    chain.skinning_matrices(&mut joints);
    assert_eq!(joints.len(), 9);
    for m in &joints {
        let diff = (*m - Mat4::IDENTITY).to_cols_array();
        assert!(diff.iter().all(|v| v.abs() < 1e-5));
    }
}

#[test]
fn bending_a_bone_swings_its_descendants() {
    let mut chain = BoneChain::new(4, 1.0).unwrap();
    chain.bones_mut()[1].bend = -FRAC_PI_2;
    let worlds = chain.world_transforms();
    // bone 1 stays in place, bone 2 swings out of the page plane
    let p1 = worlds[1].transform_point3(Vec3::ZERO);
    let p2 = worlds[2].transform_point3(Vec3::ZERO);
    assert!((p1 - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    assert!((p2 - Vec3::new(1.0, 0.0, 1.0)).length() < 1e-5);
}

#[test]
fn root_rotation_is_reported_but_not_baked_in() {
    let mut chain = BoneChain::new(4, 1.0).unwrap();
    chain.bones_mut()[0].bend = 1.0;
    chain.bones_mut()[0].fold = 0.25;
    assert_eq!(chain.root_rotation(), (1.0, 0.25));
    // the page transform carries the root rotation; bone 0's world stays put
    let worlds = chain.world_transforms();
    let diff = (worlds[0] - Mat4::IDENTITY).to_cols_array();
    assert!(diff.iter().all(|v| v.abs() < 1e-6));
}

#[test]
fn fold_rotates_about_the_bend_axis() {
    let mut chain = BoneChain::new(4, 1.0).unwrap();
    chain.bones_mut()[1].fold = FRAC_PI_2;
    let worlds = chain.world_transforms();
    // a point above bone 1 swings toward +z under a +90 degree fold
    let p = worlds[1].transform_point3(Vec3::new(0.0, 1.0, 0.0));
    assert!((p - Vec3::new(1.0, 0.0, 1.0)).length() < 1e-5);
}
