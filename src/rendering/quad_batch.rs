use crate::glm;
use crate::rendering::frame::Quad;
use gl::types::*;
use std::{mem, ptr};

const VERTICES_PER_QUAD: usize = 6;

/// vertex layout used by the quad shader
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub(crate) struct QuadVertex {
    position: glm::Vec2,
    color: glm::Vec4,
}

/// batch renderer for colored quads that re-uploads its vertices every flush
pub(crate) struct QuadBatch {
    vao: GLuint,
    vbo: GLuint,
    capacity: usize,
    obj_buffer: Vec<QuadVertex>,
}

impl QuadBatch {
    /// creates a new batch with room for ``initial_quads`` before the gpu buffer grows
    pub(crate) fn new(initial_quads: usize) -> Self {
        let capacity = initial_quads.max(1) * VERTICES_PER_QUAD;
        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (capacity * mem::size_of::<QuadVertex>()) as GLsizeiptr,
                ptr::null(),
                gl::DYNAMIC_DRAW,
            );

            gl::EnableVertexAttribArray(0);
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE as GLboolean,
                mem::size_of::<QuadVertex>() as GLsizei,
                mem::offset_of!(QuadVertex, position) as *const GLvoid,
            );
            gl::EnableVertexAttribArray(1);
            gl::VertexAttribPointer(
                1,
                4,
                gl::FLOAT,
                gl::FALSE as GLboolean,
                mem::size_of::<QuadVertex>() as GLsizei,
                mem::offset_of!(QuadVertex, color) as *const GLvoid,
            );

            gl::BindVertexArray(0);
        }

        Self {
            vao,
            vbo,
            capacity,
            obj_buffer: Vec::with_capacity(capacity),
        }
    }

    /// fills the cpu side buffer with the quads
    pub(crate) fn add_quads(&mut self, quads: &[Quad]) {
        self.obj_buffer.clear();
        for quad in quads {
            let color = quad.color.to_vec4();
            self.obj_buffer.extend(
                quad.corners()
                    .into_iter()
                    .map(|position| QuadVertex { position, color }),
            );
        }
    }

    /// uploads and draws the buffered quads
    pub(crate) fn flush(&mut self) {
        if self.obj_buffer.is_empty() {
            return;
        }
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            let byte_len = (self.obj_buffer.len() * mem::size_of::<QuadVertex>()) as GLsizeiptr;
            if self.obj_buffer.len() > self.capacity {
                self.capacity = self.obj_buffer.len().next_power_of_two();
                log::debug!("growing quad buffer to {} vertices", self.capacity);
                gl::BufferData(
                    gl::ARRAY_BUFFER,
                    (self.capacity * mem::size_of::<QuadVertex>()) as GLsizeiptr,
                    ptr::null(),
                    gl::DYNAMIC_DRAW,
                );
            }
            gl::BufferSubData(
                gl::ARRAY_BUFFER,
                0,
                byte_len,
                self.obj_buffer.as_ptr() as *const GLvoid,
            );
            gl::DrawArrays(gl::TRIANGLES, 0, self.obj_buffer.len() as GLsizei);
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for QuadBatch {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
