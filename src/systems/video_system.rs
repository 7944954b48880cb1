use crate::engine_builder::EngineAttributes;
use gl::types::GLsizei;
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use std::error::Error;
use std::ffi::{CStr, CString};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

/// holds the video backend attributes
pub struct VideoSystem {
    config_template: ConfigTemplateBuilder,
    display_builder: DisplayBuilder,
    not_current_gl_context: Option<NotCurrentContext>,
    gl_context: Option<PossiblyCurrentContext>,
    gl_surface: Option<Surface<WindowSurface>>,
    window: Option<Window>,
    last_draw_time: Instant,
    bg_fps_cap: Option<f64>,
    fps_cap: Option<f64>,
    stored_config: EngineAttributes,
}

impl VideoSystem {
    /// creates a new video system, the window is only opened on resume
    pub(crate) fn new(config: EngineAttributes) -> Self {
        let window_attributes = config.generate_win_attrs();
        let config_template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));

        Self {
            config_template,
            display_builder,
            not_current_gl_context: None,
            gl_context: None,
            gl_surface: None,
            window: None,
            last_draw_time: Instant::now(),
            bg_fps_cap: config.bg_fps_cap(),
            fps_cap: config.fps_cap(),
            stored_config: config,
        }
    }

    /// called when the engine application is resumed, opens the window and makes a gl context current
    pub(crate) fn on_resumed(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let (mut window, gl_config) = self.display_builder.clone().build(
            event_loop,
            self.config_template.clone(),
            gl_config_picker,
        )?;

        log::info!("Picked a config with {} samples", gl_config.num_samples());

        let raw_window_handle = window
            .as_ref()
            .and_then(|window| window.window_handle().ok())
            .map(|handle| handle.as_raw());

        let gl_display = gl_config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(raw_window_handle);

        let fallback_context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(None))
            .build(raw_window_handle);

        let legacy_context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(2, 1))))
            .build(raw_window_handle);

        let not_current_gl_context = match self.not_current_gl_context.take() {
            Some(context) => context,
            None => unsafe {
                gl_display
                    .create_context(&gl_config, &context_attributes)
                    .or_else(|_| gl_display.create_context(&gl_config, &fallback_context_attributes))
                    .or_else(|_| gl_display.create_context(&gl_config, &legacy_context_attributes))?
            },
        };

        let window = match window.take() {
            Some(window) => window,
            None => glutin_winit::finalize_window(
                event_loop,
                self.stored_config.generate_win_attrs(),
                &gl_config,
            )?,
        };

        let attrs = window.build_surface_attributes(Default::default())?;
        let gl_surface = unsafe {
            gl_config
                .display()
                .create_window_surface(&gl_config, &attrs)?
        };

        // The context needs to be current for the renderer to set up shaders and
        // buffers. It also performs function loading, which needs a current context on WGL.
        let gl_context = not_current_gl_context.make_current(&gl_surface)?;

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });
        log_gl_config();

        self.gl_context = Some(gl_context);
        self.gl_surface = Some(gl_surface);
        self.window = Some(window);

        let vsync_result = if self.stored_config.use_vsync() {
            self.enable_vsync()
        } else {
            self.disable_vsync()
        };
        if let Err(e) = vsync_result {
            log::warn!("Error setting vsync: {e}");
        }

        Ok(())
    }

    /// called when the engine application is suspended
    pub(crate) fn on_suspended(&mut self) {
        // only raised on Android, where the backing NativeWindow for a GL Surface can appear and disappear at any moment
        log::info!("window surface removed");

        self.gl_surface = None;
        self.window = None;
        if let Some(gl_context) = self.gl_context.take() {
            match gl_context.make_not_current() {
                Ok(context) => self.not_current_gl_context = Some(context),
                Err(e) => log::error!("failed to release the gl context: {e}"),
            }
        }
    }

    /// is there a window with a current gl context
    pub(crate) fn is_ready(&self) -> bool {
        self.window.is_some() && self.gl_context.is_some()
    }

    /// enables vsync for opengl
    pub fn enable_vsync(&mut self) -> Result<(), String> {
        log::debug!("enabled vsync");
        if let (Some(gl_surface), Some(gl_context)) =
            (self.gl_surface.as_ref(), self.gl_context.as_ref())
        {
            return gl_surface
                .set_swap_interval(gl_context, SwapInterval::Wait(NonZeroU32::MIN))
                .map_err(|err| err.to_string());
        }
        Err(String::from("vsync enable failed"))
    }

    /// disables vsync for opengl
    pub fn disable_vsync(&mut self) -> Result<(), String> {
        log::debug!("disabled vsync");
        if let (Some(gl_surface), Some(gl_context)) =
            (self.gl_surface.as_ref(), self.gl_context.as_ref())
        {
            return gl_surface
                .set_swap_interval(gl_context, SwapInterval::DontWait)
                .map_err(|err| err.to_string());
        }
        Err(String::from("vsync disable failed"))
    }

    /// call the opengl window swap
    pub(crate) fn swap_window(&self) {
        if let (Some(gl_surface), Some(gl_context)) =
            (self.gl_surface.as_ref(), self.gl_context.as_ref())
        {
            if let Err(e) = gl_surface.swap_buffers(gl_context) {
                log::error!("buffer swap failed: {e}");
            }
        }
    }

    /// requests a redraw of the winit window
    pub(crate) fn request_redraw(&self) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    /// resets the internal timer for the engine update loop and returns the elapsed seconds
    pub(crate) fn update_draw_timer(&mut self) -> f32 {
        let elapsed_draw_time = self.last_draw_time.elapsed();
        self.last_draw_time = Instant::now();
        elapsed_draw_time.as_secs_f32()
    }

    /// checks wether or not a full engine update loop should occur
    pub(crate) fn should_redraw(&self) -> bool {
        let elapsed = self.last_draw_time.elapsed();
        let user_cap = self
            .fps_cap
            .map_or(true, |fps| elapsed >= Duration::from_secs_f64(1.0 / fps));
        self.bg_fps_cap.map_or(user_cap, |fps| {
            if self.window.as_ref().is_some_and(|win| !win.has_focus()) {
                elapsed >= Duration::from_secs_f64(1.0 / fps)
            } else {
                user_cap
            }
        })
    }

    /// resizes the gl surface and viewport to the new window size
    pub(crate) fn on_resize(&mut self, width: u32, height: u32) {
        // Some platforms like EGL require resizing GL surface to update the size.
        // Notable platforms here are Wayland and macOS, others don't require it.
        let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        if let (Some(gl_surface), Some(gl_context)) =
            (self.gl_surface.as_ref(), self.gl_context.as_ref())
        {
            gl_surface.resize(gl_context, width, height);
            unsafe {
                gl::Viewport(0, 0, width.get() as GLsizei, height.get() as GLsizei);
            }
        }
    }
}

/// prints info about the used gl renderer
fn log_gl_config() {
    if let Some(renderer) = get_gl_string(gl::RENDERER) {
        log::info!("Running on {}", renderer.to_string_lossy());
    }
    if let Some(version) = get_gl_string(gl::VERSION) {
        log::info!("OpenGL Version {}", version.to_string_lossy());
    }
    if let Some(shaders_version) = get_gl_string(gl::SHADING_LANGUAGE_VERSION) {
        log::info!("Shaders version on {}", shaders_version.to_string_lossy());
    }
}

/// find the config with the maximum number of samples
///
/// the display builder needs a config back, so an empty list is the one startup failure that panics
fn gl_config_picker(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|accum, config| {
            if config.num_samples() > accum.num_samples() {
                config
            } else {
                accum
            }
        })
        .expect("the display offered no gl configs")
}

/// retrieves a string value from gl
fn get_gl_string(variant: gl::types::GLenum) -> Option<&'static CStr> {
    unsafe {
        let s = gl::GetString(variant);
        (!s.is_null()).then(|| CStr::from_ptr(s.cast()))
    }
}
