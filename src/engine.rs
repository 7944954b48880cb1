use crate::engine_builder::EngineAttributes;
use crate::rendering::frame::Frame;
use crate::systems::input_system::InputSystem;
use crate::systems::rendering_system::RenderingSystem;
use crate::systems::video_system::VideoSystem;
use std::error::Error;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// main engine, owns the app for as long as the event loop runs
pub struct Engine<T: GameApp> {
    app: Option<T>,
    app_initialized: bool,
    exit_state: Option<Result<(), Box<dyn Error>>>,
    rendering_system: Option<RenderingSystem>,
    input_system: InputSystem,
    video_system: VideoSystem,
    viewport: (f32, f32),
}

impl<T: GameApp> Engine<T> {
    /// engine setup on startup
    pub(crate) fn new(config: EngineAttributes) -> Self {
        let viewport = (config.width() as f32, config.height() as f32);
        Self {
            app: None,
            app_initialized: false,
            exit_state: Some(Ok(())),
            rendering_system: None,
            input_system: InputSystem::new(),
            video_system: VideoSystem::new(config),
            viewport,
        }
    }

    /// runs the main loop until the window is closed, the app is handed over for good
    pub fn run(&mut self, app: T) -> Result<(), Box<dyn Error>> {
        self.app = Some(app);
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        log::info!("starting the event loop");
        event_loop.run_app(self)?;

        if let Some(mut app) = self.app.take() {
            if self.app_initialized {
                app.on_exit();
            }
        }
        self.rendering_system = None;
        self.exit_state.take().unwrap_or(Ok(()))
    }

    /// gets called every frame and contains the main app logic
    fn on_frame_redraw(&mut self) {
        if !self.video_system.should_redraw() {
            return;
        }
        let delta_time = self.video_system.update_draw_timer();
        let (Some(app), Some(rendering_system)) =
            (self.app.as_mut(), self.rendering_system.as_mut())
        else {
            return;
        };

        app.on_frame_update(&self.input_system, delta_time);

        let mut frame = Frame::new(self.viewport.0, self.viewport.1);
        app.draw(&mut frame);
        rendering_system.render(&frame);

        self.video_system.swap_window();
        self.input_system.end_frame();
    }

    /// stores the error to be returned by ``run`` and stops the event loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Box<dyn Error>) {
        log::error!("{error}");
        self.exit_state = Some(Err(error));
        event_loop.exit();
    }

    fn start_up(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        self.video_system.on_resumed(event_loop)?;
        if self.rendering_system.is_none() {
            self.rendering_system = Some(RenderingSystem::new()?);
        }
        if !self.app_initialized {
            if let Some(app) = self.app.as_mut() {
                app.init()?;
                self.app_initialized = true;
            }
        }
        Ok(())
    }
}

impl<T: GameApp> ApplicationHandler for Engine<T> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.start_up(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.on_frame_redraw(),
            WindowEvent::Resized(size) => self.video_system.on_resize(size.width, size.height),
            _ => self.input_system.parse_winit_window_event(&event),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.video_system.is_ready() {
            self.video_system.request_redraw();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.video_system.on_suspended();
    }
}

/// all necessary app functionality to run the engine with
pub trait GameApp: 'static {
    /// initialize the app once the window and gl context exist
    fn init(&mut self) -> Result<(), Box<dyn Error>>;
    /// run this update code every frame
    fn on_frame_update(&mut self, input: &InputSystem, delta_time: f32);
    /// fill the frame with everything that should be drawn
    fn draw(&self, frame: &mut Frame);
    /// runs once when the event loop has finished
    fn on_exit(&mut self) {}
}
