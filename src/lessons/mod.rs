//! The lessons themselves. Each one owns its state behind an `Rc<RefCell<_>>` shared by the
//! DOM callbacks that redraw it.

pub mod matrix_2d;
pub mod rotating_shape;
pub mod translation;
pub mod two_fs;

use cgmath::*;
use log::*;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::*;

use crate::config::*;
use crate::context::*;
use crate::error::*;
use crate::geometry;
use crate::m3::M3;
use crate::mesh::*;
use crate::program::*;
use crate::surface::*;
use crate::transform::*;
use crate::ui::*;
use crate::uniforms::*;

/// Pixel-space vertex shader: applies `u_matrix`, then maps pixels to clip space with y down.
const MATRIX_VERT: &str = r#"#version 300 es

in vec2 a_position;

uniform vec2 u_resolution;
uniform mat3 u_matrix;

void main() {
  vec2 position = (u_matrix * vec3(a_position, 1)).xy;

  vec2 zeroToOne = position / u_resolution;
  vec2 zeroToTwo = zeroToOne * 2.0;
  vec2 clipSpace = zeroToTwo - 1.0;

  gl_Position = vec4(clipSpace * vec2(1, -1), 0, 1);
}
"#;

const COLOR_FRAG: &str = r#"#version 300 es

precision highp float;

uniform vec4 u_color;

out vec4 outColor;

void main() {
  outColor = u_color;
}
"#;

const CLEAR: [ClearBuffer; 2] = [ClearBuffer::Color([0.0, 0.0, 0.0, 0.0]), ClearBuffer::Depth];

/// A 2D vertex in pixels.
pub(crate) struct PixelVertex(Vector2<f32>);

impl Vertex for PixelVertex {
    const ATTRIBUTES: Attributes = &[("a_position", 2)];
}

impl VertexComponent for PixelVertex {
    fn add_to_mesh(&self, f: &mut dyn FnMut(f32)) {
        self.0.add_to_mesh(f);
    }
}

/// Installs logging and opens the configured canvas.
fn open(config: &LessonConfig) -> GlResult<(GlContext, ScreenSurface)> {
    crate::logging::init(config.level()?);
    GlContext::new(&config.canvas_id)
}

/// Uploads the "F" and logs how large the vertex buffer ended up.
fn f_mesh<U: GlUniforms>(
    context: &GlContext,
    program: &GlProgram<PixelVertex, U>,
) -> GlResult<Mesh<PixelVertex, U, Triangles>> {
    let mut builder = MeshBuilder::new();
    builder.triangle_list(geometry::f_letter().into_iter().map(PixelVertex));
    let mesh = builder.build(context, program, MeshUsage::StaticDraw, DrawMode::Flat)?;
    if let Some(size) = mesh.buffer_size() {
        info!("Buffer size: {} bytes", size);
    }
    Ok(mesh)
}

/// `u_resolution` for a drawing buffer of `size` pixels.
fn resolution(size: Vector2<u32>) -> Vector2<f32> {
    vec2(size.x as f32, size.y as f32)
}

struct MatrixUniforms {
    resolution: Vector2<f32>,
    color: [f32; 4],
    matrix: M3,
}

struct MatrixUniformsGl {
    resolution: Vector2Uniform,
    color: Array4Uniform,
    matrix: Matrix3Uniform,
}

impl Uniforms for MatrixUniforms {
    type GlUniforms = MatrixUniformsGl;

    fn update(&self, context: &GlContext, gl_uniforms: &Self::GlUniforms) {
        gl_uniforms.resolution.set(context, &self.resolution);
        gl_uniforms.color.set(context, self.color);
        gl_uniforms.matrix.set(context, &self.matrix);
    }
}

impl GlUniforms for MatrixUniformsGl {
    fn new(context: &GlContext, program: &WebGlProgram) -> GlResult<Self> {
        Ok(MatrixUniformsGl {
            resolution: Vector2Uniform::new("u_resolution", context, program)?,
            color: Array4Uniform::new("u_color", context, program)?,
            matrix: Matrix3Uniform::new("u_matrix", context, program)?,
        })
    }
}

/// An "F" drawn through a 3x3 matrix; shared by the matrix lessons.
struct MatrixScene {
    context: GlContext,
    surface: ScreenSurface,
    mesh: Mesh<PixelVertex, MatrixUniformsGl, Triangles>,
    color: [f32; 4],
}

impl MatrixScene {
    fn new(config: &LessonConfig) -> GlResult<Self> {
        let (context, surface) = open(config)?;
        let program = GlProgram::new(&context, MATRIX_VERT, COLOR_FRAG)?;
        let mesh = f_mesh(&context, &program)?;
        let color = config.color.unwrap_or_else(geometry::random_rgba);
        Ok(MatrixScene { context, surface, mesh, color })
    }

    /// Matches the canvas to its display size and clears it.
    fn begin_frame(&mut self) {
        self.surface.resize_to_display_size();
        self.surface.clear(&self.context, &CLEAR);
    }

    fn draw_f(&self, matrix: M3) {
        let uniforms = MatrixUniforms {
            resolution: resolution(self.surface.size()),
            color: self.color,
            matrix,
        };
        self.mesh.draw(&self.surface, &uniforms);
    }
}

/// The edit each of the five sliders makes, in `TransformSliders` field order.
fn slider_edits() -> [fn(f32) -> TransformEdit; 5] {
    [
        |v| TransformEdit::Translate(Axis::X, v),
        |v| TransformEdit::Translate(Axis::Y, v),
        TransformEdit::Angle,
        |v| TransformEdit::Scale(Axis::X, v),
        |v| TransformEdit::Scale(Axis::Y, v),
    ]
}

/// The five sliders editing one `Transform2d`.
struct TransformSliders {
    x: Slider,
    y: Slider,
    angle: Slider,
    scale_x: Slider,
    scale_y: Slider,
}

impl TransformSliders {
    fn find() -> GlResult<Self> {
        Ok(TransformSliders {
            x: Slider::find("x")?,
            y: Slider::find("y")?,
            angle: Slider::find("angle")?,
            scale_x: Slider::find("scaleX")?,
            scale_y: Slider::find("scaleY")?,
        })
    }

    /// Shows `transform` on the sliders and sends every movement to `edit`.
    fn bind(
        &mut self,
        transform: &Transform2d,
        canvas_size: Vector2<u32>,
        edit: Rc<dyn Fn(TransformEdit)>,
    ) -> GlResult<()> {
        let scale = SliderOptions { value: 0.0, min: -5.0, max: 5.0, step: 0.01 };
        self.x.configure(SliderOptions::range(canvas_size.x as f32).with_value(transform.translation.x));
        self.y.configure(SliderOptions::range(canvas_size.y as f32).with_value(transform.translation.y));
        self.angle.configure(SliderOptions::range(360.0).with_value(transform.slider_degrees()));
        self.scale_x.configure(scale.with_value(transform.scale.x));
        self.scale_y.configure(scale.with_value(transform.scale.y));

        let mut sliders =
            [&mut self.x, &mut self.y, &mut self.angle, &mut self.scale_x, &mut self.scale_y];
        for (slider, &to_edit) in sliders.iter_mut().zip(slider_edits().iter()) {
            let edit = edit.clone();
            slider.on_change(move |value| {
                let change = to_edit(value);
                debug!("{:?}", change);
                edit(change);
            })?;
        }
        Ok(())
    }

    fn forget(self) {
        self.x.forget();
        self.y.forget();
        self.angle.forget();
        self.scale_x.forget();
        self.scale_y.forget();
    }
}

/// Runs `f` on the shared state; used by callbacks so a borrow never outlives one event.
fn with_state<S>(state: &Rc<RefCell<S>>, f: impl FnOnce(&mut S)) {
    f(&mut state.borrow_mut());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_slider_edits_its_own_field() {
        let base = Transform2d::default();
        let edited: Vec<Transform2d> = slider_edits()
            .iter()
            .map(|to_edit| {
                let mut transform = base;
                to_edit(90.0).apply(&mut transform);
                transform
            })
            .collect();

        assert_eq!(edited[0].translation, vec2(90.0, 0.0));
        assert_eq!(edited[1].translation, vec2(0.0, 90.0));
        assert_eq!(edited[2].rotation, Rad::from(Deg(270.0)));
        assert_eq!(edited[2].translation, base.translation);
        assert_eq!(edited[3].scale, vec2(90.0, 0.85));
        assert_eq!(edited[4].scale, vec2(0.85, 90.0));
    }

    #[test]
    fn resolution_is_the_buffer_size_in_pixels() {
        assert_eq!(resolution(vec2(640, 480)), vec2(640.0, 480.0));
        assert_eq!(resolution(vec2(0, 0)), vec2(0.0, 0.0));
    }
}
