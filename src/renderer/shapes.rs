//! Triangle tessellation of scene shapes

use glam::Vec2;
use std::f32::consts::TAU;

use super::scene::{Scene, Shape};
use super::vertex::Vertex;

/// Segments used for the ball outline
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Tessellate every shape in the scene, in draw order (pixel coordinates)
pub fn tessellate(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(scene.shapes.len() * 6 + CIRCLE_SEGMENTS as usize * 3);

    for shape in &scene.shapes {
        match shape {
            Shape::Rect { pos, size, color } => vertices.extend(rect(*pos, *size, color.rgba)),
            Shape::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, color.rgba, CIRCLE_SEGMENTS)),
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::scene::build_scene;
    use crate::settings::Settings;
    use crate::sim::GameState;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 5.0), [1.0; 4]);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [15.0, 25.0]));
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(50.0, 50.0);
        let verts = circle(center, 5.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in verts {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_tessellate_scene() {
        let scene = build_scene(&GameState::default(), &Settings::default());
        let rects = scene.shapes.len() - 1;
        let verts = tessellate(&scene);
        assert_eq!(verts.len(), rects * 6 + CIRCLE_SEGMENTS as usize * 3);
    }
}
