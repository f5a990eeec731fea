//! Colored triangle from a vertex buffer, drawn with an element buffer.

use anyhow::{Context, Result};
use gwr::core::{App, AppControl, FrameCtx};
use gwr::draw::{draw_elements_all, Primitive};
use gwr::math::{Color, Vertex};
use gwr::shader::{Shader, UniformLocation};
use gwr::window::{Runtime, WindowConfig};
use gwr::{BufferUsage, ElementBuffer, Gl, GlInit, VertexArray, VertexBuffer};

const VERTICES: [Vertex; 3] = [
    Vertex::new([-0.5, -0.5, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
    Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0]),
];

const INDICES: [u32; 3] = [0, 1, 2];

struct Scene {
    shader: Shader,
    vao: VertexArray,
    ebo: ElementBuffer,
    // Kept alive for the VAO's attribute bindings.
    _vbo: VertexBuffer,
    time_loc: Option<UniformLocation>,
}

#[derive(Default)]
struct TriangleApp {
    scene: Option<Scene>,
}

impl App for TriangleApp {
    fn init(&mut self, gl: &Gl) -> Result<()> {
        gl.set_clear_color(Color::rgb(0.1, 0.1, 0.12));

        let shader = Shader::from_paths(
            gl,
            gwr_demos::shader_path("triangle.vert"),
            gwr_demos::shader_path("triangle.frag"),
        )
        .context("triangle shader")?;

        let vbo = VertexBuffer::new(gl, &VERTICES, BufferUsage::StaticDraw)?;
        let ebo = ElementBuffer::new(gl, &INDICES, BufferUsage::StaticDraw)?;

        let vao = VertexArray::new(gl)?;
        let [pos, color, _] = Vertex::attribs();
        vao.attrib_pointers_f(&vbo, &[pos, color])?;
        vao.set_element_buffer(&ebo);

        let time_loc = shader.uniform_location("u_time");
        if time_loc.is_none() {
            log::warn!("u_time not active in triangle shader; no pulse");
        }

        self.scene = Some(Scene {
            shader,
            vao,
            ebo,
            _vbo: vbo,
            time_loc,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let Some(scene) = &self.scene else {
            return AppControl::Exit;
        };

        if let Some(loc) = &scene.time_loc {
            scene.shader.set_uniform(loc, &ctx.elapsed.as_secs_f32());
        }
        draw_elements_all(ctx.gl, Primitive::Triangles, &scene.vao, &scene.shader, &scene.ebo);

        AppControl::Continue
    }

    fn shutdown(&mut self, _gl: &Gl) {
        self.scene = None;
    }
}

fn main() -> Result<()> {
    gwr_demos::init_demo_logging();
    Runtime::run(
        WindowConfig::new("gwr: triangle", 800, 600),
        GlInit::default(),
        TriangleApp::default(),
    )
}
