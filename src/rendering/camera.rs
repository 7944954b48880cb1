use crate::glm;

/// 2D orthographic camera looking at the world plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    /// center of the view in world units
    pub position: glm::Vec2,
    /// 1.0 shows exactly one viewport, larger values show more of the world
    pub zoom: f32,
    /// size of the view at zoom 1.0
    pub viewport: glm::Vec2,
}

impl OrthoCamera {
    /// creates a new camera centered on the origin
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: glm::vec2(viewport_width / 2.0, viewport_height / 2.0),
            zoom: 1.0,
            viewport: glm::vec2(viewport_width, viewport_height),
        }
    }

    /// the lower left and upper right corner of the visible area
    pub fn visible_bounds(&self) -> (glm::Vec2, glm::Vec2) {
        let half = self.viewport * (self.zoom / 2.0);
        (self.position - half, self.position + half)
    }

    /// projection matrix mapping the visible area to clip space
    pub fn projection(&self) -> glm::Mat4 {
        let (min, max) = self.visible_bounds();
        glm::ortho(min.x, max.x, min.y, max.y, -1.0, 1.0)
    }

    /// projection matrix for pixel coordinates on screen (unaffected by position and zoom)
    pub fn screen_projection(&self) -> glm::Mat4 {
        glm::ortho(0.0, self.viewport.x, 0.0, self.viewport.y, -1.0, 1.0)
    }
}
