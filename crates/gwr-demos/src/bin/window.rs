//! Opens an empty window and clears it. Escape closes.

use anyhow::Result;
use gwr::core::{App, AppControl, FrameCtx};
use gwr::math::{lerp, Color};
use gwr::window::{Runtime, WindowConfig};
use gwr::{Gl, GlInit};

struct ClearApp;

impl App for ClearApp {
    fn init(&mut self, gl: &Gl) -> Result<()> {
        gl.set_clear_color(Color::BLACK);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let t = (ctx.elapsed.as_secs_f32() * 0.5).sin() * 0.5 + 0.5;
        ctx.gl.set_clear_color(Color::rgb(
            lerp(0.05, 0.2, t),
            lerp(0.05, 0.3, t),
            lerp(0.1, 0.4, t),
        ));
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    gwr_demos::init_demo_logging();
    Runtime::run(
        WindowConfig::new("gwr: window", 800, 600),
        GlInit::default(),
        ClearApp,
    )
}
