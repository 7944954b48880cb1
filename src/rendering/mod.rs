pub mod camera;
pub mod color;
pub mod frame;
pub(crate) mod quad_batch;
pub(crate) mod shader;
