//! Integration tests for papier-io.

use papier_collide::Disk;
use papier_contour::RawContour;
use papier_geom::{Polygon, Vec2};
use papier_io::{validate_frame, FrameInput};
use papier_types::PapierError;

fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> Polygon {
    Polygon::new(vec![
        Vec2::new(x0, y0),
        Vec2::new(x1, y0),
        Vec2::new(x1, y1),
        Vec2::new(x0, y1),
    ])
}

fn raw(polygon: Polygon, parent: Option<u32>) -> RawContour {
    let rect = polygon.bounding_rect();
    let center = (rect.min + rect.max) * 0.5;
    RawContour {
        polygon,
        parent,
        center,
        radius: (rect.max - center).length(),
        area: rect.width() * rect.height(),
    }
}

fn valid_frame() -> FrameInput {
    FrameInput {
        contours: vec![
            raw(square(0.0, 0.0, 10.0, 10.0), None),
            raw(square(3.0, 3.0, 7.0, 7.0), Some(0)),
        ],
        disks: vec![Disk::new(Vec2::new(1.0, 1.0), 0.5)],
    }
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn valid_frame_passes() {
    assert!(validate_frame(&valid_frame()).is_ok());
}

#[test]
fn empty_frame_passes() {
    let frame = FrameInput {
        contours: vec![],
        disks: vec![],
    };
    assert!(validate_frame(&frame).is_ok());
}

#[test]
fn too_few_polygon_points_rejected() {
    let mut frame = valid_frame();
    frame.contours[0].polygon = Polygon::new(vec![Vec2::ZERO, Vec2::new(1.0, 0.0)]);
    let err = validate_frame(&frame).unwrap_err();
    assert!(matches!(err, PapierError::InvalidPolygon(_)));
    assert!(err.to_string().contains("at least 3"));
}

#[test]
fn non_finite_coordinate_rejected() {
    let mut frame = valid_frame();
    frame.contours[1].polygon.points[2].y = f32::NAN;
    let err = validate_frame(&frame).unwrap_err();
    assert!(err.to_string().contains("not finite"));
}

#[test]
fn out_of_range_parent_rejected() {
    let mut frame = valid_frame();
    frame.contours[1].parent = Some(9);
    let err = validate_frame(&frame).unwrap_err();
    assert!(matches!(err, PapierError::InvalidFrame(_)));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn non_positive_radius_rejected() {
    let mut frame = valid_frame();
    frame.disks[0].radius = 0.0;
    let err = validate_frame(&frame).unwrap_err();
    assert!(err.to_string().contains("positive"));

    frame.disks[0].radius = f32::NAN;
    assert!(validate_frame(&frame).is_err());
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn frame_input_json_round_trip() {
    let frame = valid_frame();
    let json = frame.to_json().unwrap();
    let back = FrameInput::from_json(&json).unwrap();
    assert_eq!(back, frame);
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = FrameInput::from_json("{ not json").unwrap_err();
    assert!(matches!(err, PapierError::Serialization(_)));
}
