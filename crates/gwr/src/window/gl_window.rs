use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    PossiblyCurrentGlContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use raw_window_handle::HasWindowHandle;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use super::config::WindowConfig;
use crate::device::{Gl, GlInit};
use crate::input::{InputState, Key};

/// A window with a current GL context.
///
/// Field order is drop order: the surface and context are released before
/// the native window they render into.
pub struct GlWindow {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
    gl: Gl,
    close_requested: bool,
}

impl GlWindow {
    /// Creates the window, a context of `init.version` and makes it current.
    ///
    /// The returned [`Gl`] is bound to this window's context.
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
        init: &GlInit,
    ) -> Result<(Self, Gl)> {
        config.validate()?;

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(config.attributes()))
            .build(event_loop, template, pick_config)
            .map_err(|e| anyhow!("failed to create window and GL config: {e}"))?;
        let window = window.context("display builder returned no window")?;

        let raw_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let version = Version::new(
            u8::try_from(init.version.major).context("GL major version out of range")?,
            u8::try_from(init.version.minor).context("GL minor version out of range")?,
        );
        let profile = if init.core_profile {
            GlProfile::Core
        } else {
            GlProfile::Compatibility
        };
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(version)))
            .with_profile(profile)
            .with_debug(init.debug_output)
            .build(Some(raw_handle));

        let display = gl_config.display();
        let not_current = unsafe { display.create_context(&gl_config, &context_attrs) }
            .with_context(|| format!("failed to create OpenGL {} context", init.version))?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .context("failed to build surface attributes")?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        let raw = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };
        let gl = Gl::new(raw, init).context("failed to initialize GL")?;

        let mut this = Self {
            surface,
            context,
            window,
            gl: gl.clone(),
            close_requested: false,
        };

        if let Err(e) = this.set_vsync(init.vsync) {
            log::warn!("failed to set swap interval: {e:#}");
        }

        let size = this.window.inner_size();
        this.resize(size.width, size.height);

        log::debug!(
            "window '{}' created ({}x{}, GL {})",
            config.title,
            size.width,
            size.height,
            init.version
        );

        Ok((this, gl))
    }

    #[inline]
    pub fn handle(&self) -> &Window {
        &self.window
    }

    pub fn set_vsync(&mut self, enabled: bool) -> Result<()> {
        let interval = if enabled {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        self.surface
            .set_swap_interval(&self.context, interval)
            .context("set_swap_interval failed")
    }

    #[inline]
    pub fn should_close(&self) -> bool {
        self.close_requested
    }

    #[inline]
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Requests close when Escape is held.
    pub fn process_input(&mut self, input: &InputState) {
        if input.key_down(Key::Escape) {
            self.request_close();
        }
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("swap_buffers failed")
    }

    pub fn make_current(&self) -> Result<()> {
        self.context
            .make_current(&self.surface)
            .context("failed to make GL context current")
    }

    /// Framebuffer width in physical pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.window.inner_size().width
    }

    /// Framebuffer height in physical pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.window.inner_size().height
    }

    /// Resizes the surface and sets the viewport to the new framebuffer size.
    ///
    /// Zero sizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        self.surface.resize(&self.context, w, h);
        self.gl.set_viewport(width as i32, height as i32);
    }
}

/// Prefers the config with the most samples.
///
/// glutin-winit only calls the picker with a non-empty set: backends report
/// "no matching config" as an error before that.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    most_samples(configs, |c| c.num_samples())
        .expect("glutin-winit passes a non-empty config set by construction")
}

fn most_samples<T>(items: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    items.reduce(|best, c| if samples(&c) > samples(&best) { c } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_highest_sample_count() {
        let picked = most_samples([0u8, 4, 2].into_iter(), |s| *s);
        assert_eq!(picked, Some(4));
    }

    #[test]
    fn ties_keep_the_first_config() {
        let picked = most_samples([(4u8, 'a'), (4, 'b')].into_iter(), |c| c.0);
        assert_eq!(picked, Some((4, 'a')));
    }

    #[test]
    fn empty_set_has_no_pick() {
        assert_eq!(most_samples(std::iter::empty::<u8>(), |s| *s), None);
    }
}
