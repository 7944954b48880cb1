use crate::engine::{Engine, GameApp};
use crate::utils::constants::{DEFAULT_FPS_CAP, VIEWPORT_HEIGHT, VIEWPORT_WIDTH, WIN_TITLE};
use std::error::Error;
use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

/// configuration of the window and engine loop, consumed when the engine is built
#[derive(Debug, Clone, PartialEq)]
pub struct EngineAttributes {
    title: String,
    width: u32,
    height: u32,
    resizable: bool,
    fps_cap: Option<f64>,
    bg_fps_cap: Option<f64>,
    use_vsync: bool,
}

impl EngineAttributes {
    /// default attributes: the viewport sized window with a 60 fps cap
    pub fn new() -> Self {
        Self {
            title: WIN_TITLE.to_string(),
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            resizable: true,
            fps_cap: Some(DEFAULT_FPS_CAP),
            bg_fps_cap: None,
            use_vsync: true,
        }
    }

    /// sets the inner window size in logical pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_resizable(mut self, flag: bool) -> Self {
        self.resizable = flag;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// caps the update loop, ``None`` runs as fast as the swap allows
    pub fn with_fps_cap(mut self, cap: Option<f64>) -> Self {
        self.fps_cap = cap;
        self
    }

    /// caps the update loop while the window is out of focus
    pub fn with_bg_fps_cap(mut self, cap: Option<f64>) -> Self {
        self.bg_fps_cap = cap;
        self
    }

    pub fn with_vsync(mut self, flag: bool) -> Self {
        self.use_vsync = flag;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resizable(&self) -> bool {
        self.resizable
    }

    pub fn fps_cap(&self) -> Option<f64> {
        self.fps_cap
    }

    pub fn bg_fps_cap(&self) -> Option<f64> {
        self.bg_fps_cap
    }

    pub fn use_vsync(&self) -> bool {
        self.use_vsync
    }

    /// generates the winit window attributes
    pub(crate) fn generate_win_attrs(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_resizable(self.resizable)
    }

    /// checks the attributes and builds the engine
    pub fn build_engine<T: GameApp>(self) -> Result<Engine<T>, Box<dyn Error>> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "window dimensions must be positive, got {}x{}",
                self.width, self.height
            )
            .into());
        }
        if self.fps_cap.is_some_and(|fps| fps <= 0.0)
            || self.bg_fps_cap.is_some_and(|fps| fps <= 0.0)
        {
            return Err("fps caps must be positive".into());
        }
        log::debug!("building engine with {:?}", self);
        Ok(Engine::new(self))
    }
}

impl Default for EngineAttributes {
    fn default() -> Self {
        Self::new()
    }
}
