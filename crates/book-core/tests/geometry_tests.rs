use book_core::config::PageDimensions;
use book_core::geometry::{MaterialSlot, PageGeometry};

fn dims(segments: usize) -> PageDimensions {
    PageDimensions {
        segments,
        ..PageDimensions::DEFAULT
    }
}

#[test]
fn skin_weights_sum_to_one() {
    let geo = PageGeometry::build(&PageDimensions::DEFAULT).unwrap();
    for v in &geo.vertices {
        let sum: f32 = v.skin_weight.iter().sum();
        assert!(
            (sum - 1.0).abs() < 1e-5,
            "weights {:?} do not sum to 1",
            v.skin_weight
        );
    }
}

#[test]
fn skin_indices_are_adjacent_and_bounded() {
    for segments in [1, 2, 5, 30] {
        let geo = PageGeometry::build(&dims(segments)).unwrap();
        for v in &geo.vertices {
            let k = v.skin_index[0] as usize;
            assert!(k <= segments, "skin index {k} exceeds segment count");
            let expected_second = (k + 1).min(segments) as u32;
            assert_eq!(v.skin_index[1], expected_second);
            assert_eq!(v.skin_index[2], 0);
            assert_eq!(v.skin_index[3], 0);
            assert_eq!(v.skin_weight[2], 0.0);
            assert_eq!(v.skin_weight[3], 0.0);
        }
    }
}

#[test]
fn origin_sits_on_spine_edge() {
    let d = PageDimensions::DEFAULT;
    let geo = PageGeometry::build(&d).unwrap();
    let min_x = geo
        .vertices
        .iter()
        .map(|v| v.position[0])
        .fold(f32::INFINITY, f32::min);
    let max_x = geo
        .vertices
        .iter()
        .map(|v| v.position[0])
        .fold(f32::NEG_INFINITY, f32::max);
    assert!(min_x.abs() < 1e-5, "spine edge not at x=0, min_x={min_x}");
    assert!((max_x - d.width).abs() < 1e-4);
}

#[test]
fn spine_vertices_bind_fully_to_bone_zero() {
    let geo = PageGeometry::build(&PageDimensions::DEFAULT).unwrap();
    let spine: Vec<_> = geo
        .vertices
        .iter()
        .filter(|v| v.position[0].abs() < 1e-5)
        .collect();
    assert!(!spine.is_empty());
    for v in spine {
        assert_eq!(v.skin_index[0], 0);
        assert!((v.skin_weight[0] - 1.0).abs() < 1e-5);
        assert!(v.skin_weight[1].abs() < 1e-5);
    }
}

#[test]
fn picture_faces_are_present() {
    let d = PageDimensions::DEFAULT;
    let geo = PageGeometry::build(&d).unwrap();
    let front = geo
        .vertices
        .iter()
        .filter(|v| v.slot == MaterialSlot::Front as u32)
        .count();
    let back = geo
        .vertices
        .iter()
        .filter(|v| v.slot == MaterialSlot::Back as u32)
        .count();
    // segments x 2 grid of quads per picture face
    assert_eq!(front, (d.segments + 1) * 3);
    assert_eq!(back, (d.segments + 1) * 3);
}

#[test]
fn index_buffer_is_in_range() {
    let geo = PageGeometry::build(&PageDimensions::DEFAULT).unwrap();
    assert!(!geo.indices.is_empty());
    assert_eq!(geo.indices.len() % 3, 0);
    let n = geo.vertices.len() as u32;
    for &i in &geo.indices {
        assert!(i < n);
    }
}

#[test]
fn degenerate_dimensions_fail_fast() {
    assert!(PageGeometry::build(&dims(0)).is_err());
    let mut bad = PageDimensions::DEFAULT;
    bad.width = 0.0;
    assert!(PageGeometry::build(&bad).is_err());
    bad = PageDimensions::DEFAULT;
    bad.depth = -0.1;
    assert!(PageGeometry::build(&bad).is_err());
}

#[test]
fn segment_width_matches_dimensions() {
    let d = dims(30);
    let geo = PageGeometry::build(&d).unwrap();
    assert!((geo.segment_width - d.width / 30.0).abs() < 1e-6);
}
