use crate::rendering::color::Color32;
use crate::rendering::frame::Frame;
use crate::rendering::quad_batch::QuadBatch;
use crate::rendering::shader::ShaderProgram;
use crate::utils::file::{QUAD_FRAG, QUAD_VERT};
use std::error::Error;

/// initial room in the quad buffers, a full screen of tiles with all layers
const INITIAL_QUAD_COUNT: usize = 20 * 20 * 4;

/// turns frames into gl draw calls
pub struct RenderingSystem {
    program: ShaderProgram,
    world_batch: QuadBatch,
    screen_batch: QuadBatch,
}

impl RenderingSystem {
    /// creates a new rendering system (requires a current gl context)
    pub(crate) fn new() -> Result<Self, Box<dyn Error>> {
        let mut program = ShaderProgram::new(QUAD_VERT, QUAD_FRAG)?;
        unsafe {
            program.add_unif_location("projection")?;
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
            gl::Disable(gl::DEPTH_TEST);
        }
        log::debug!("created rendering system");

        Ok(Self {
            program,
            world_batch: QuadBatch::new(INITIAL_QUAD_COUNT),
            screen_batch: QuadBatch::new(16),
        })
    }

    /// renders one frame: clear, world layer, screen layer
    pub(crate) fn render(&mut self, frame: &Frame) {
        clear_gl_screen(frame.clear_color);
        self.program.bind();

        self.world_batch.add_quads(frame.world_quads());
        self.upload_projection(&frame.camera.projection());
        self.world_batch.flush();

        self.screen_batch.add_quads(frame.screen_quads());
        self.upload_projection(&frame.camera.screen_projection());
        self.screen_batch.flush();
    }

    fn upload_projection(&self, projection: &crate::glm::Mat4) {
        unsafe {
            gl::UniformMatrix4fv(
                self.program.get_unif("projection"),
                1,
                gl::FALSE,
                projection.as_ptr(),
            );
        }
    }
}

/// clears the opengl viewport
fn clear_gl_screen(color: Color32) {
    let color = color.to_vec4();
    unsafe {
        gl::ClearColor(color.x, color.y, color.z, color.w);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}
