pub mod controls;
pub mod game_screen;
pub mod island_app;
pub mod map_loader;
pub mod player;
pub mod sinking;
pub mod tile_map;

pub use island_app::IslandApp;
