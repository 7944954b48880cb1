pub mod input_system;
pub mod rendering_system;
pub mod video_system;
