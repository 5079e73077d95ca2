use glam::Vec2;
use glium::{glutin::surface::WindowSurface, uniform, Display, Frame, Program, Surface};

use crate::{error::RenderResult, world::World};

use super::{camera::Camera, shapes, Vertex};

static VERTEX_SHADER_SRC: &str = r#"
#version 140

in vec2 position;
in vec4 color;
out vec4 vertex_color;

uniform mat4 projection;

void main() {
    vertex_color = color;
    gl_Position = projection * vec4(position, 0.0, 1.0);
}
"#;

static FRAGMENT_SHADER_SRC: &str = r#"
#version 140

in vec4 vertex_color;
out vec4 color;

void main() {
    color = vec4(vertex_color);
}
"#;

const BACKGROUND: (f32, f32, f32, f32) = (0.02, 0.02, 0.05, 1.0);

/// Compiled shaders reused for every frame.
pub struct Painter {
    program: Program,
}

impl Painter {
    pub fn new(display: &Display<WindowSurface>) -> RenderResult<Self> {
        let program =
            glium::Program::from_source(display, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, None)?;
        Ok(Self { program })
    }

    /// Paints one frame: every trail, then every disc.
    pub fn draw(
        &self,
        display: &Display<WindowSurface>,
        world: &World,
        camera: &Camera,
    ) -> RenderResult<()> {
        let mut target = display.draw();
        target.clear_color(BACKGROUND.0, BACKGROUND.1, BACKGROUND.2, BACKGROUND.3);

        // A frame has to be finished even if drawing failed.
        let drawn = self.draw_world(display, &mut target, world, camera);
        let finished = target.finish();
        drawn?;
        finished?;
        Ok(())
    }

    fn draw_world(
        &self,
        display: &Display<WindowSurface>,
        target: &mut Frame,
        world: &World,
        camera: &Camera,
    ) -> RenderResult<()> {
        let uniforms = uniform! {
            projection: camera.matrix().to_cols_array_2d(),
        };
        let params = glium::DrawParameters {
            blend: glium::Blend::alpha_blending(),
            ..Default::default()
        };

        let (trails, discs) = build_scene(world);

        if !trails.is_empty() {
            let vertex_buffer = glium::VertexBuffer::new(display, &trails)?;
            let indices = glium::index::NoIndices(glium::index::PrimitiveType::LinesList);
            target.draw(&vertex_buffer, indices, &self.program, &uniforms, &params)?;
        }

        if !discs.is_empty() {
            let vertex_buffer = glium::VertexBuffer::new(display, &discs)?;
            let indices = glium::index::NoIndices(glium::index::PrimitiveType::TrianglesList);
            target.draw(&vertex_buffer, indices, &self.program, &uniforms, &params)?;
        }

        Ok(())
    }
}

/// Line and triangle vertices for the whole world.
/// Bodies are emitted last to first so the oldest body ends up on top.
fn build_scene(world: &World) -> (Vec<Vertex>, Vec<Vertex>) {
    let mut trails = vec![];
    let mut discs = vec![];

    for body in world.bodies().iter().rev() {
        let points: Vec<Vec2> = body.path().map(|p| p.as_vec2()).collect();
        trails.append(&mut shapes::polyline(&points, body.path_color.to_rgba()));

        let radius = body.radius as f32;
        discs.append(&mut shapes::circle(
            body.position.as_vec2(),
            body.color.to_rgba(),
            radius,
            shapes::circle_resolution(radius),
        ));
    }

    (trails, discs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{Body, Color};
    use glam::DVec2;

    #[test]
    fn scene_draws_last_body_first() {
        let mut world = World::with_seed(DVec2::new(100.0, 100.0), 0);
        world.insert(Body::new(DVec2::new(10.0, 10.0), 1.0).with_colors(Color::WHITE, Color::GREY));
        world.insert(
            Body::new(DVec2::new(50.0, 50.0), 1.0)
                .with_colors(Color::new(255, 0, 0), Color::GREY),
        );

        let (trails, discs) = build_scene(&world);

        // single point paths have no segments
        assert!(trails.is_empty());
        let per_disc = 3 * shapes::circle_resolution(1.0);
        assert_eq!(discs.len(), 2 * per_disc);
        assert_eq!(discs[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(discs[per_disc].color, [1.0, 1.0, 1.0, 1.0]);
    }
}
