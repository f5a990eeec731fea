//! Textured triangle. Pass an image path to use it instead of the
//! built-in checkerboard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use gwr::core::{App, AppControl, FrameCtx};
use gwr::draw::{draw_arrays, Primitive};
use gwr::math::{Color, Vertex};
use gwr::shader::Shader;
use gwr::window::{Runtime, WindowConfig};
use gwr::{BufferUsage, Gl, GlInit, Texture, VertexArray, VertexBuffer};

const VERTICES: [Vertex; 3] = [
    Vertex::new([-0.6, -0.6, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0]),
    Vertex::new([0.6, -0.6, 0.0], [1.0, 0.8, 0.8], [1.0, 0.0]),
    Vertex::new([0.0, 0.6, 0.0], [0.8, 0.8, 1.0], [0.5, 1.0]),
];

const CHECKER_SIZE: u32 = 256;

struct Scene {
    shader: Shader,
    vao: VertexArray,
    texture: Texture,
    _vbo: VertexBuffer,
}

struct TextureApp {
    image: Option<PathBuf>,
    scene: Option<Scene>,
}

impl TextureApp {
    fn load_texture(&self, gl: &Gl) -> Result<Texture> {
        match &self.image {
            Some(path) => Texture::load(gl, path)
                .with_context(|| format!("loading texture '{}'", path.display())),
            None => {
                let pixels = gwr_demos::checkerboard(CHECKER_SIZE, 8);
                Ok(Texture::from_rgba8(gl, CHECKER_SIZE, CHECKER_SIZE, &pixels)?)
            }
        }
    }
}

impl App for TextureApp {
    fn init(&mut self, gl: &Gl) -> Result<()> {
        gl.set_clear_color(Color::rgb(0.15, 0.15, 0.18));

        let shader = Shader::from_paths(
            gl,
            gwr_demos::shader_path("texture.vert"),
            gwr_demos::shader_path("texture.frag"),
        )
        .context("texture shader")?;

        let texture = self.load_texture(gl)?;
        log::info!("texture {}x{}", texture.width(), texture.height());

        let vbo = VertexBuffer::new(gl, &VERTICES, BufferUsage::StaticDraw)?;
        let vao = VertexArray::new(gl)?;
        vao.attrib_pointers_f(&vbo, &Vertex::attribs())?;

        shader.set_uniform_by_name("u_texture", &0i32)?;
        shader.set_uniform_by_name("u_tint", &Color::WHITE.to_array())?;

        self.scene = Some(Scene {
            shader,
            vao,
            texture,
            _vbo: vbo,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let Some(scene) = &self.scene else {
            return AppControl::Exit;
        };

        scene.texture.bind(0);
        draw_arrays(ctx.gl, Primitive::Triangles, &scene.vao, &scene.shader, 0, 3);

        AppControl::Continue
    }

    fn shutdown(&mut self, _gl: &Gl) {
        self.scene = None;
    }
}

fn main() -> Result<()> {
    gwr_demos::init_demo_logging();

    let app = TextureApp {
        image: std::env::args_os().nth(1).map(PathBuf::from),
        scene: None,
    };

    Runtime::run(
        WindowConfig::new("gwr: texture triangle", 800, 600),
        GlInit::default(),
        app,
    )
}
