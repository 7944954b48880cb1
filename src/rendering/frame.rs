use crate::glm;
use crate::rendering::camera::OrthoCamera;
use crate::rendering::color::Color32;

/// axis aligned colored rectangle, ``position`` is the lower left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub position: glm::Vec2,
    pub size: glm::Vec2,
    pub color: Color32,
}

impl Quad {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color32) -> Self {
        Self {
            position: glm::vec2(x, y),
            size: glm::vec2(width, height),
            color,
        }
    }

    /// the two triangles of the quad as (x, y) corners
    pub(crate) fn corners(&self) -> [glm::Vec2; 6] {
        let min = self.position;
        let max = self.position + self.size;
        [
            min,
            glm::vec2(max.x, min.y),
            max,
            max,
            glm::vec2(min.x, max.y),
            min,
        ]
    }
}

/// everything that should end up on screen in one frame
/// ### Info
/// The frame is plain data, the rendering system turns it into draw calls.
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Color32,
    pub camera: OrthoCamera,
    pub(crate) world_quads: Vec<Quad>,
    pub(crate) screen_quads: Vec<Quad>,
}

impl Frame {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            clear_color: Color32::BLACK,
            camera: OrthoCamera::new(viewport_width, viewport_height),
            world_quads: Vec::new(),
            screen_quads: Vec::new(),
        }
    }

    /// adds a quad in world coordinates (moved and scaled by the camera)
    pub fn push_world(&mut self, quad: Quad) {
        if quad.color.a() > 0 {
            self.world_quads.push(quad);
        }
    }

    /// adds a quad in screen pixel coordinates (drawn on top of the world)
    pub fn push_screen(&mut self, quad: Quad) {
        if quad.color.a() > 0 {
            self.screen_quads.push(quad);
        }
    }

    pub fn world_quads(&self) -> &[Quad] {
        &self.world_quads
    }

    pub fn screen_quads(&self) -> &[Quad] {
        &self.screen_quads
    }
}
