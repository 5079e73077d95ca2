use glam::{Mat4, Vec2};

/// 2D view onto the world. World units are pixels with y pointing down,
/// `offset` is the world point shown in the top left corner.
pub struct Camera {
    pub offset: Vec2,
    pub viewport: Vec2,
}

/// Viewport for a window of `width` x `height` pixels. `None` while either
/// side is zero, as when the window is minimised.
pub fn viewport_size(width: u32, height: u32) -> Option<Vec2> {
    (width > 0 && height > 0).then(|| Vec2::new(width as f32, height as f32))
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport,
        }
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Moves the view so `point` ends up in the middle of the window.
    pub fn center_on(&mut self, point: Vec2) {
        self.offset = point - 0.5 * self.viewport;
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.offset
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }

    pub fn matrix(&self) -> Mat4 {
        let o = self.offset;
        let v = self.viewport;
        Mat4::orthographic_rh_gl(o.x, o.x + v.x, o.y + v.y, o.y, -1.0, 1.0)
    }
}
