use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use super::config::WindowConfig;
use super::gl_window::GlWindow;
use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gl, GlInit};
use crate::input::{translate_window_event, InputState};

const MAX_FRAME_DT: Duration = Duration::from_millis(250);

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until the window should close.
    ///
    /// Errors from window creation, `App::init` or buffer swaps end the loop
    /// and are returned here.
    pub fn run<A>(config: WindowConfig, init: GlInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        config.validate()?;

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct Active {
    window: GlWindow,
    gl: Gl,
    input: InputState,
    started: Instant,
    last_frame: Instant,
    frame_index: u64,
}

struct AppState<A: App> {
    config: WindowConfig,
    init: GlInit,
    /// Dropped in `exiting`, before the context, so GL objects it owns
    /// are released while the context is still current.
    app: Option<A>,

    active: Option<Active>,
    error: Option<anyhow::Error>,
}

impl<A: App> AppState<A> {
    fn new(config: WindowConfig, init: GlInit, app: A) -> Self {
        Self {
            config,
            init,
            app: Some(app),
            active: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error.get_or_insert(err);
        if let Some(active) = self.active.as_mut() {
            active.window.request_close();
        }
        event_loop.exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (window, gl) = GlWindow::create(event_loop, &self.config, &self.init)?;
        gl.log_info();

        let now = Instant::now();
        let active = self.active.insert(Active {
            window,
            gl,
            input: InputState::default(),
            started: now,
            last_frame: now,
            frame_index: 0,
        });

        if let Some(app) = self.app.as_mut() {
            app.init(&active.gl).context("application init failed")?;
        }
        active.window.handle().request_redraw();
        Ok(())
    }

    fn frame(&mut self) -> Result<()> {
        let (Some(active), Some(app)) = (self.active.as_mut(), self.app.as_mut()) else {
            return Ok(());
        };

        active.window.process_input(&active.input);
        if active.window.should_close() {
            return Ok(());
        }

        let now = Instant::now();
        let dt = now.saturating_duration_since(active.last_frame).min(MAX_FRAME_DT);
        active.last_frame = now;

        active.gl.clear();

        let control = {
            let mut ctx = FrameCtx {
                gl: &active.gl,
                window: &mut active.window,
                input: &active.input,
                frame_index: active.frame_index,
                elapsed: now.saturating_duration_since(active.started),
                dt,
            };
            app.on_frame(&mut ctx)
        };

        active.input.clear_frame();
        active.frame_index = active.frame_index.wrapping_add(1);

        if control == AppControl::Exit {
            active.window.request_close();
        }

        active.window.handle().pre_present_notify();
        active.window.swap_buffers()
    }
}

impl<A: App> ApplicationHandler for AppState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.active.is_some() {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e.context("failed to create initial window"));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        let scale = active.window.handle().scale_factor();
        if let Some(ev) = translate_window_event(&event, scale) {
            active.input.apply(ev);
        }

        let control = self
            .app
            .as_mut()
            .map_or(AppControl::Continue, |app| app.on_window_event(&event));
        if control == AppControl::Exit {
            active.window.request_close();
        }

        match &event {
            WindowEvent::CloseRequested => active.window.request_close(),

            WindowEvent::Resized(size) => {
                active.window.resize(size.width, size.height);
                active.window.handle().request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.frame() {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(active) = self.active.as_ref() else {
            return;
        };

        if active.window.should_close() {
            event_loop.exit();
            return;
        }

        // Continuous redraw, like a poll-events loop.
        event_loop.set_control_flow(ControlFlow::Poll);
        active.window.handle().request_redraw();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release();
    }
}

impl<A: App> AppState<A> {
    /// Shuts the app down and drops it, then drops the window and context.
    fn release(&mut self) {
        let active = self.active.take();

        if let Some(active) = &active {
            if let Err(e) = active.window.make_current() {
                log::warn!("context not current during shutdown: {e:#}");
            }
        }

        if let Some(mut app) = self.app.take() {
            if let Some(active) = &active {
                app.shutdown(&active.gl);
            }
        }

        if let Some(active) = active {
            log::debug!("runtime: shut down after {} frames", active.frame_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Tracked {
        dropped: Rc<Cell<bool>>,
    }

    impl App for Tracked {
        fn init(&mut self, _gl: &Gl) -> Result<()> {
            Ok(())
        }

        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_>) -> AppControl {
            AppControl::Continue
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.dropped.set(true);
        }
    }

    #[test]
    fn release_drops_the_app() {
        let dropped = Rc::new(Cell::new(false));
        let app = Tracked {
            dropped: dropped.clone(),
        };
        let mut state = AppState::new(WindowConfig::default(), GlInit::default(), app);
        assert!(!dropped.get());

        state.release();
        assert!(dropped.get());
        assert!(state.app.is_none());
    }

    #[test]
    fn release_is_idempotent() {
        let dropped = Rc::new(Cell::new(false));
        let mut state = AppState::new(
            WindowConfig::default(),
            GlInit::default(),
            Tracked {
                dropped: dropped.clone(),
            },
        );
        state.release();
        state.release();
        assert!(dropped.get());
    }
}
