use std::f32::consts::PI;

use glam::Vec2;

use super::Vertex;

/// Filled disc as a triangle fan unrolled into a triangle list.
pub fn circle(pos: Vec2, color: [f32; 4], r: f32, res: usize) -> Vec<Vertex> {
    let mut shape = Vec::with_capacity(3 * res);
    let a = 2.0 * PI / res as f32;

    for i in 0..res {
        let i = i as f32;
        shape.push(Vertex {
            position: pos.to_array(),
            color,
        });
        shape.push(Vertex {
            position: [pos[0] + (r * f32::sin(a * i)), pos[1] + (r * f32::cos(a * i))],
            color,
        });
        shape.push(Vertex {
            position: [
                pos[0] + (r * f32::sin(a * (i + 1.0))),
                pos[1] + (r * f32::cos(a * (i + 1.0))),
            ],
            color,
        });
    }

    shape
}

/// Connected segments through `points` as a line list.
pub fn polyline(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut shape = Vec::with_capacity(2 * points.len().saturating_sub(1));
    for pair in points.windows(2) {
        shape.append(&mut line(pair[0], pair[1], color));
    }
    shape
}

pub fn line(p1: Vec2, p2: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex {
            position: p1.to_array(),
            color,
        },
        Vertex {
            position: p2.to_array(),
            color,
        },
    ]
}

/// Enough segments that the edge of a disc of radius `r` pixels looks round.
pub fn circle_resolution(r: f32) -> usize {
    ((r * 0.75) as usize).clamp(12, 64)
}
