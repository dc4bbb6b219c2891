//! Shape generation for 2D primitives

use glam::{Vec2, Vec3};

use super::FrameBuffer;
use super::vertex::Vertex;
use crate::sim::Viewport;

/// Append a triangle fan rooted at `center`.
///
/// Emits the center vertex, then one vertex per outline point (offset from
/// `center`), then one triangle per outline edge including the closing edge
/// from the last point back to the first. Outlines with fewer than three
/// points emit nothing.
pub fn fan(
    out: &mut FrameBuffer,
    center: Vec2,
    outline: &[Vec2],
    color: Vec3,
    viewport: &Viewport,
) {
    let n = outline.len();
    if n < 3 {
        return;
    }

    let color = color.to_array();
    let base = out.vertices.len() as u32;

    let c = viewport.to_ndc(center);
    out.vertices.push(Vertex::new(c.x, c.y, color));
    for point in outline {
        let p = viewport.to_ndc(center + *point);
        out.vertices.push(Vertex::new(p.x, p.y, color));
    }

    let n = n as u32;
    for i in 0..n {
        out.indices
            .extend_from_slice(&[base, base + 1 + i, base + 1 + (i + 1) % n]);
    }
}

/// Outline of an axis-aligned rectangle with the given half extents (CCW)
pub fn rect_outline(half: Vec2) -> Vec<Vec2> {
    vec![
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
    ]
}

/// Outline of a rectangle spanning `bottom..top` vertically, relative to a
/// center at height `bottom`. Used for bars that grow upward.
pub fn bar_outline(half_width: f32, height: f32) -> Vec<Vec2> {
    if height <= 0.0 {
        return Vec::new();
    }
    vec![
        Vec2::new(half_width, height),
        Vec2::new(-half_width, height),
        Vec2::new(-half_width, 0.0),
        Vec2::new(half_width, 0.0),
    ]
}

/// Outline of a regular polygon with `sides` corners, first corner at `phase` radians
pub fn regular_outline(radius: f32, sides: u32, phase: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let theta = phase + i as f32 / sides as f32 * std::f32::consts::TAU;
            Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_square_layout() {
        let vp = Viewport::new(200.0, 100.0);
        let mut out = FrameBuffer::default();
        fan(&mut out, Vec2::new(10.0, 0.0), &rect_outline(Vec2::new(10.0, 5.0)), Vec3::ONE, &vp);

        assert_eq!(out.vertices.len(), 5);
        assert_eq!(out.indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1]);
        assert_eq!(out.vertices[0].position, [0.1, 0.0, 0.0]);
        assert_eq!(out.vertices[1].position, [0.2, 0.1, 0.0]);
        assert!(out.vertices.iter().all(|v| v.color == [1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_fan_indices_offset_by_existing_vertices() {
        let vp = Viewport::default();
        let mut out = FrameBuffer::default();
        let tri = regular_outline(10.0, 3, 0.0);
        fan(&mut out, Vec2::ZERO, &tri, Vec3::ZERO, &vp);
        fan(&mut out, Vec2::ZERO, &tri, Vec3::ZERO, &vp);

        assert_eq!(out.vertices.len(), 8);
        assert_eq!(&out.indices[9..], &[4, 5, 6, 4, 6, 7, 4, 7, 5]);
    }

    #[test]
    fn test_degenerate_outline_emits_nothing() {
        let vp = Viewport::default();
        let mut out = FrameBuffer::default();
        fan(&mut out, Vec2::ZERO, &[Vec2::X, Vec2::Y], Vec3::ONE, &vp);
        fan(&mut out, Vec2::ZERO, &bar_outline(4.0, 0.0), Vec3::ONE, &vp);
        assert!(out.is_empty());
    }
}
