//! Moves the "F" around by adding a translation in the vertex shader.

use super::*;

const VERT: &str = r#"#version 300 es

in vec2 a_position;

uniform vec2 u_resolution;
uniform vec2 u_translation;

void main() {
  vec2 position = a_position + u_translation;

  vec2 zeroToOne = position / u_resolution;
  vec2 zeroToTwo = zeroToOne * 2.0;
  vec2 clipSpace = zeroToTwo - 1.0;

  gl_Position = vec4(clipSpace * vec2(1, -1), 0, 1);
}
"#;

struct TranslationUniforms {
    resolution: Vector2<f32>,
    color: [f32; 4],
    translation: Vector2<f32>,
}

struct TranslationUniformsGl {
    resolution: Vector2Uniform,
    color: Array4Uniform,
    translation: Vector2Uniform,
}

impl Uniforms for TranslationUniforms {
    type GlUniforms = TranslationUniformsGl;

    fn update(&self, context: &GlContext, gl_uniforms: &Self::GlUniforms) {
        gl_uniforms.resolution.set(context, &self.resolution);
        gl_uniforms.color.set(context, self.color);
        gl_uniforms.translation.set(context, &self.translation);
    }
}

impl GlUniforms for TranslationUniformsGl {
    fn new(context: &GlContext, program: &WebGlProgram) -> GlResult<Self> {
        Ok(TranslationUniformsGl {
            resolution: Vector2Uniform::new("u_resolution", context, program)?,
            color: Array4Uniform::new("u_color", context, program)?,
            translation: Vector2Uniform::new("u_translation", context, program)?,
        })
    }
}

struct TranslationLesson {
    context: GlContext,
    surface: ScreenSurface,
    mesh: Mesh<PixelVertex, TranslationUniformsGl, Triangles>,
    color: [f32; 4],
    translation: Vector2<f32>,
}

impl TranslationLesson {
    fn draw(&mut self) {
        self.surface.resize_to_display_size();
        self.surface.clear(&self.context, &CLEAR);
        let uniforms = TranslationUniforms {
            resolution: resolution(self.surface.size()),
            color: self.color,
            translation: self.translation,
        };
        self.mesh.draw(&self.surface, &uniforms);
    }
}

pub fn start(config: &LessonConfig) -> GlResult<()> {
    let (context, surface) = open(config)?;
    let program = GlProgram::new(&context, VERT, COLOR_FRAG)?;
    let mesh = f_mesh(&context, &program)?;
    let color = config.color.unwrap_or_else(geometry::random_rgba);

    let lesson = Rc::new(RefCell::new(TranslationLesson {
        context,
        surface,
        mesh,
        color,
        translation: vec2(0.0, 0.0),
    }));
    lesson.borrow_mut().draw();
    info!("Translation lesson started");

    let canvas_size = lesson.borrow().surface.size();
    let axes = [("x", Axis::X, canvas_size.x), ("y", Axis::Y, canvas_size.y)];
    for &(id, axis, max) in axes.iter() {
        let mut slider = Slider::find(id)?;
        slider.configure(SliderOptions::range(max as f32));
        let lesson = lesson.clone();
        slider.on_change(move |value| {
            with_state(&lesson, |lesson| {
                match axis {
                    Axis::X => lesson.translation.x = value,
                    Axis::Y => lesson.translation.y = value,
                }
                lesson.draw();
            });
        })?;
        slider.forget();
    }
    Ok(())
}
