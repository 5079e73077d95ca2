use std::collections::HashMap;

use glam::Vec2;
use winit::event::VirtualKeyCode;

pub struct InputEvent {
    initial: bool,
}

impl InputEvent {
    pub fn new() -> Self {
        Self { initial: true }
    }

    /// True the first time it is asked for a given key press.
    pub fn is_initial_check(&mut self) -> bool {
        if self.initial {
            self.initial = false;
            return true;
        }
        false
    }
}

/// Keys currently held down and the last known cursor position.
pub struct EventManager {
    key_event: HashMap<VirtualKeyCode, InputEvent>,
    cursor: Vec2,
}

impl EventManager {
    pub fn new() -> Self {
        Self {
            key_event: HashMap::new(),
            cursor: Vec2::ZERO,
        }
    }

    /// Registers a key press. Repeated presses from holding the key keep the
    /// original event.
    pub fn insert_key(&mut self, vk: VirtualKeyCode) {
        self.key_event.entry(vk).or_insert_with(InputEvent::new);
    }

    pub fn remove_key(&mut self, vk: &VirtualKeyCode) {
        self.key_event.remove(vk);
    }

    pub fn contains_key(&self, vk: &VirtualKeyCode) -> bool {
        self.key_event.contains_key(vk)
    }

    pub fn get_key_event_mut(&mut self, vk: &VirtualKeyCode) -> Option<&mut InputEvent> {
        self.key_event.get_mut(vk)
    }

    /// Whether `vk` went down since the last call for the same press.
    pub fn key_pressed_once(&mut self, vk: &VirtualKeyCode) -> bool {
        self.get_key_event_mut(vk)
            .map(InputEvent::is_initial_check)
            .unwrap_or(false)
    }

    pub fn set_cursor(&mut self, cursor: Vec2) {
        self.cursor = cursor;
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }
}
