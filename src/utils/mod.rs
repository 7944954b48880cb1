pub mod constants;
pub mod file;
