use std::time::Instant;

use glam::{DVec2, Vec2};
use glium::{glutin::surface::WindowSurface, implement_vertex, Display};
use tracing::{debug, error, info};
use winit::{
    event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::{
    error::RenderResult,
    simulator::{Simulator, StepOutcome},
    world::World,
};

pub use camera::Camera;
use draw::Painter;
use event::EventManager;

mod camera;
mod draw;
mod event;
mod shapes;

/// Pixels per second the view moves while a pan key is held.
const CAMERA_MOVEMENT_SENSITIVITY: f32 = 400.0;

#[derive(Copy, Clone, Debug)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}
implement_vertex!(Vertex, position, color);

/// Opens a window, advances the simulation once per frame and paints it.
pub struct Renderer {
    simulator: Simulator,
    world: World,
    paused: bool,
}

impl Renderer {
    pub fn new(simulator: Simulator, world: World) -> Self {
        Self {
            simulator,
            world,
            paused: false,
        }
    }

    /// Blocks until the window is closed. Only returns on setup errors.
    pub fn create_window(self) -> RenderResult<()> {
        let event_loop = winit::event_loop::EventLoopBuilder::new().build();

        let bounds = self.world.bounds();
        let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
            .with_title("Planets")
            .with_inner_size(bounds.x as u32, bounds.y as u32)
            .build(&event_loop);

        let painter = Painter::new(&display)?;
        info!(bodies = self.world.len(), "window ready");

        self.run_render_loop(event_loop, display, window, painter)
    }

    fn run_render_loop(
        mut self,
        event_loop: EventLoop<()>,
        display: Display<WindowSurface>,
        window: Window,
        painter: Painter,
    ) -> ! {
        let mut last_frame = Instant::now();

        let size = window.inner_size();
        let mut camera = Camera::new(Vec2::new(size.width as f32, size.height as f32));
        let mut events = EventManager::new();

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(size) => {
                        // minimising reports a 0x0 size
                        if let Some(viewport) = camera::viewport_size(size.width, size.height) {
                            display.resize(size.into());
                            camera.set_viewport(viewport);
                            self.world.resize(viewport.as_dvec2());
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        events.set_cursor(Vec2::new(position.x as f32, position.y as f32));
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } => {
                        let at = camera.screen_to_world(events.cursor()).as_dvec2();
                        self.add_fixed_body(at);
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if let Some(keycode) = input.virtual_keycode {
                            match input.state {
                                ElementState::Pressed => events.insert_key(keycode),
                                ElementState::Released => events.remove_key(&keycode),
                            }
                        }
                    }
                    _ => (),
                },
                Event::MainEventsCleared => window.request_redraw(),
                Event::RedrawRequested(_) => {
                    let elapsed = last_frame.elapsed();
                    last_frame = Instant::now();

                    self.handle_keys(&mut events, &mut camera, elapsed.as_secs_f32());

                    if !self.paused
                        && self.simulator.step(&mut self.world, elapsed.as_secs_f64())
                            == StepOutcome::Skipped
                    {
                        debug!(elapsed_ms = elapsed.as_millis() as u64, "dropped long frame");
                    }

                    if let Err(e) = painter.draw(&display, &self.world, &camera) {
                        error!("render error: {e}");
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => (),
            }
        })
    }

    fn add_fixed_body(&mut self, at: DVec2) {
        let index = self.world.add_body(Some(at), true);
        info!(index, x = at.x, y = at.y, "added fixed body");
    }

    fn handle_keys(&mut self, events: &mut EventManager, camera: &mut Camera, delta_time: f32) {
        if events.key_pressed_once(&VirtualKeyCode::Space) {
            self.paused = !self.paused;
            info!(paused = self.paused, "toggled simulation");
        }

        if events.key_pressed_once(&VirtualKeyCode::Return) {
            if let Some(avg) = self.world.average_position() {
                camera.center_on(avg.as_vec2());
            }
        }

        let step = CAMERA_MOVEMENT_SENSITIVITY * delta_time;
        let mut pan = Vec2::ZERO;
        if events.contains_key(&VirtualKeyCode::W) {
            pan.y -= step;
        }
        if events.contains_key(&VirtualKeyCode::S) {
            pan.y += step;
        }
        if events.contains_key(&VirtualKeyCode::A) {
            pan.x -= step;
        }
        if events.contains_key(&VirtualKeyCode::D) {
            pan.x += step;
        }
        camera.pan(pan);
    }
}
