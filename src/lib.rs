pub mod engine;
pub mod engine_builder;
pub mod game;
pub mod launcher;
pub mod rendering;
pub mod systems;
pub mod utils;

pub use env_logger;
pub use log;
pub use nalgebra_glm as glm;
pub use winit;

/// All features that are very common to use.
pub mod prelude {
    pub use crate::engine::{Engine, GameApp};
    pub use crate::engine_builder::EngineAttributes;
    pub use crate::game::game_screen::{GameScreen, PlayerState};
    pub use crate::game::map_loader::{MapData, MapError};
    pub use crate::game::tile_map::{TileMap, TilePos};
    pub use crate::game::IslandApp;
    pub use crate::glm;
    pub use crate::launcher::{ApplicationHost, DesktopHost};
    pub use crate::log;
    pub use crate::rendering::camera::OrthoCamera;
    pub use crate::rendering::color::Color32;
    pub use crate::rendering::frame::{Frame, Quad};
    pub use crate::systems::input_system::InputSystem;
    pub use crate::utils::constants::*;
}
