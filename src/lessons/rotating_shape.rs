//! A 3D shape with per-vertex colours, spun around Z a little more every frame.

use super::*;
use crate::animation::AnimationLoop;

const VERT: &str = r#"
precision mediump float;

attribute vec3 position;
attribute vec3 color;
varying vec3 vColor;

uniform mat4 matrix;

void main() {
    vColor = color;
    gl_Position = matrix * vec4(position, 1);
}
"#;

const FRAG: &str = r#"
precision mediump float;

varying vec3 vColor;

void main() {
    gl_FragColor = vec4(vColor, 1);
}
"#;

struct ColoredVertex {
    position: Vector3<f32>,
    color: Vector3<f32>,
}

impl Vertex for ColoredVertex {
    const ATTRIBUTES: Attributes = &[("position", 3), ("color", 3)];
}

impl VertexComponent for ColoredVertex {
    fn add_to_mesh(&self, f: &mut dyn FnMut(f32)) {
        self.position.add_to_mesh(f);
        self.color.add_to_mesh(f);
    }
}

struct ShapeUniforms {
    matrix: Matrix4<f32>,
}

struct ShapeUniformsGl {
    matrix: Matrix4Uniform,
}

impl Uniforms for ShapeUniforms {
    type GlUniforms = ShapeUniformsGl;

    fn update(&self, context: &GlContext, gl_uniforms: &Self::GlUniforms) {
        gl_uniforms.matrix.set(context, &self.matrix);
    }
}

impl GlUniforms for ShapeUniformsGl {
    fn new(context: &GlContext, program: &WebGlProgram) -> GlResult<Self> {
        Ok(ShapeUniformsGl { matrix: Matrix4Uniform::new("matrix", context, program)? })
    }
}

/// Moved up and to the right, and shrunk to a quarter.
pub fn initial_matrix() -> Matrix4<f32> {
    Matrix4::from_translation(vec3(0.2, 0.5, 0.0)) * Matrix4::from_scale(0.25)
}

/// Rotates `matrix` about its own Z axis, so the shape spins in place.
pub fn spin(matrix: Matrix4<f32>, step: Rad<f32>) -> Matrix4<f32> {
    matrix * Matrix4::from_angle_z(step)
}

pub fn positions(shape: Shape) -> Vec<Vector3<f32>> {
    match shape {
        Shape::Triangle => geometry::triangle(),
        Shape::Cube => geometry::cube(),
    }
}

/// Pairs each position with a colour: the configured one for every vertex, or a fresh
/// `random()` colour per vertex when none is set.
fn colored_vertices(
    positions: Vec<Vector3<f32>>,
    color: Option<[f32; 4]>,
    mut random: impl FnMut() -> Vector3<f32>,
) -> Vec<ColoredVertex> {
    positions
        .into_iter()
        .map(|position| {
            let color = match color {
                Some([r, g, b, _]) => vec3(r, g, b),
                None => random(),
            };
            ColoredVertex { position, color }
        })
        .collect()
}

pub fn start(config: &LessonConfig) -> GlResult<()> {
    let (context, surface) = open(config)?;
    let program = GlProgram::new(&context, VERT, FRAG)?;

    let mut builder = MeshBuilder::new();
    builder.triangle_list(colored_vertices(
        positions(config.shape),
        config.color,
        geometry::random_color,
    ));
    let mesh = builder.build(&context, &program, MeshUsage::StaticDraw, DrawMode::Depth)?;
    info!("Rotating {:?} lesson started with {} vertices", config.shape, builder.num_verts());

    let step = Rad(config.rotation_step);
    let mut matrix = initial_matrix();
    AnimationLoop::start(move || {
        matrix = spin(matrix, step);
        surface.clear(&context, &CLEAR);
        mesh.draw(&surface, &ShapeUniforms { matrix });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector4<f32>, b: Vector4<f32>) -> bool {
        (a - b).magnitude() < 1e-4
    }

    #[test]
    fn initial_matrix_scales_then_translates() {
        let p = initial_matrix() * vec4(1.0, 1.0, 1.0, 1.0);
        assert!(close(p, vec4(0.45, 0.75, 0.25, 1.0)));
    }

    #[test]
    fn spin_keeps_the_centre_in_place() {
        let m = spin(initial_matrix(), Rad(0.3));
        assert!(close(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.2, 0.5, 0.0, 1.0)));
    }

    #[test]
    fn seventy_steps_make_a_quarter_turn() {
        let step = Rad(LessonConfig::default().rotation_step);
        let m = (0..70).fold(Matrix4::identity(), |m, _| spin(m, step));
        assert!(close(m * vec4(1.0, 0.0, 0.0, 1.0), vec4(0.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn shape_selects_geometry() {
        assert_eq!(positions(Shape::Triangle).len(), 3);
        assert_eq!(positions(Shape::Cube).len(), 36);
    }

    #[test]
    fn configured_color_paints_every_vertex() {
        let verts = colored_vertices(positions(Shape::Cube), Some([0.1, 0.2, 0.3, 1.0]), || {
            panic!("no random colour needed")
        });
        assert_eq!(verts.len(), 36);
        assert!(verts.iter().all(|v| v.color == vec3(0.1, 0.2, 0.3)));
        assert_eq!(verts[0].position, geometry::cube()[0]);
    }

    #[test]
    fn without_a_color_each_vertex_draws_its_own() {
        let mut next = 0.0;
        let verts = colored_vertices(positions(Shape::Triangle), None, || {
            next += 1.0;
            vec3(next, 0.0, 0.0)
        });
        let reds: Vec<f32> = verts.iter().map(|v| v.color.x).collect();
        assert_eq!(reds, vec![1.0, 2.0, 3.0]);
    }
}
