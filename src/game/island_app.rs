use crate::engine::GameApp;
use crate::game::game_screen::GameScreen;
use crate::game::map_loader::MapData;
use crate::rendering::frame::Frame;
use crate::systems::input_system::InputSystem;
use crate::utils::file::ARCHIPELAGO_MAP;
use std::error::Error;

/// the island game, handed to the engine by the launcher
pub struct IslandApp {
    map_source: &'static str,
    screen: Option<GameScreen>,
}

impl IslandApp {
    /// the game on the bundled archipelago map
    pub fn new() -> Self {
        Self::with_map_source(ARCHIPELAGO_MAP)
    }

    /// the game on a map given as yaml source (parsed on init)
    pub fn with_map_source(map_source: &'static str) -> Self {
        Self {
            map_source,
            screen: None,
        }
    }

    /// the running level, available after init
    pub fn screen(&self) -> Option<&GameScreen> {
        self.screen.as_ref()
    }
}

impl Default for IslandApp {
    fn default() -> Self {
        Self::new()
    }
}

impl GameApp for IslandApp {
    fn init(&mut self) -> Result<(), Box<dyn Error>> {
        let level = MapData::from_yaml(self.map_source)?;
        self.screen = Some(GameScreen::new(level));
        Ok(())
    }

    fn on_frame_update(&mut self, input: &InputSystem, delta_time: f32) {
        if let Some(screen) = self.screen.as_mut() {
            screen.update(delta_time, input);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(screen) = self.screen.as_ref() {
            screen.draw(frame);
        }
    }

    fn on_exit(&mut self) {
        log::info!("leaving the islands");
        self.screen = None;
    }
}
