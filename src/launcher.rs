use crate::engine::GameApp;
use crate::engine_builder::EngineAttributes;
use crate::game::IslandApp;
use crate::utils::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH, WIN_TITLE};
use std::error::Error;

/// something that can take over the process with an app and a window configuration
pub trait ApplicationHost {
    /// starts the main loop, only returns once it has finished or failed to start
    fn start<A: GameApp>(self, app: A, attributes: EngineAttributes) -> Result<(), Box<dyn Error>>;
}

/// the windowed engine running on the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopHost;

impl ApplicationHost for DesktopHost {
    fn start<A: GameApp>(self, app: A, attributes: EngineAttributes) -> Result<(), Box<dyn Error>> {
        let mut engine = attributes.build_engine::<A>()?;
        engine.run(app)
    }
}

/// the fixed window configuration for a viewport of the given size
pub fn window_attributes(width: u32, height: u32) -> EngineAttributes {
    EngineAttributes::new()
        .with_size(width, height)
        .with_resizable(false)
        .with_title(WIN_TITLE)
}

/// the window configuration of the desktop game
pub fn desktop_attributes() -> EngineAttributes {
    window_attributes(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
}

/// starts the game on the host, command line arguments are accepted but ignored
pub fn launch<H, I>(host: H, args: I) -> Result<(), Box<dyn Error>>
where
    H: ApplicationHost,
    I: IntoIterator,
{
    launch_viewport(host, args, VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
}

/// starts the game on the host with a window of the given viewport size
pub fn launch_viewport<H, I>(host: H, args: I, width: u32, height: u32) -> Result<(), Box<dyn Error>>
where
    H: ApplicationHost,
    I: IntoIterator,
{
    let ignored = args.into_iter().count();
    if ignored > 0 {
        log::debug!("ignoring {ignored} command line argument(s)");
    }
    let attributes = window_attributes(width, height);
    log::info!(
        "launching '{}' at {}x{}",
        attributes.title(),
        attributes.width(),
        attributes.height()
    );
    host.start(IslandApp::new(), attributes)
}
