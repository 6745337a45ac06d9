use cgmath::*;
use log::*;
use std::marker::PhantomData;
use std::rc::Rc;
use uid::*;
use web_sys::*;

use crate::context::*;
use crate::error::*;
use crate::uniforms::*;

#[doc(hidden)]
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub(crate) struct ProgramId_(());

pub(crate) type ProgramId = Id<ProgramId_>;

#[derive(Copy, Clone, Debug)]
pub enum ShaderType {
    Vertex,
    Fragment,
}

impl ShaderType {
    fn as_gl(self) -> u32 {
        match self {
            ShaderType::Vertex => WebGl2::VERTEX_SHADER,
            ShaderType::Fragment => WebGl2::FRAGMENT_SHADER,
        }
    }
}

/// A linked vertex + fragment shader pair, with its uniform locations.
pub struct GlProgram<V: Vertex, U: GlUniforms> {
    pub(crate) inner: Rc<GlProgramInner<V, U>>,
}

impl<V: Vertex, U: GlUniforms> Clone for GlProgram<V, U> {
    fn clone(&self) -> GlProgram<V, U> {
        GlProgram { inner: self.inner.clone() }
    }
}

pub(crate) struct GlProgramInner<V: Vertex, U: GlUniforms> {
    pub(crate) program: WebGlProgram,
    pub(crate) gl_uniforms: U,
    phantom: PhantomData<V>,
    id: ProgramId,
    context: GlContext,
    vert_shader: WebGlShader,
    frag_shader: WebGlShader,
}

impl<V: Vertex, U: GlUniforms> Drop for GlProgramInner<V, U> {
    fn drop(&mut self) {
        self.context.inner.delete_program(Some(&self.program));
        self.context.inner.delete_shader(Some(&self.vert_shader));
        self.context.inner.delete_shader(Some(&self.frag_shader));
    }
}

impl<V: Vertex, U: GlUniforms> GlProgram<V, U> {
    /// Compiles and links a program, then looks up its uniforms.
    ///
    /// Compile and link errors are logged with the driver's info log before being returned.
    pub fn new(
        context: &GlContext,
        vert_shader_source: &str,
        frag_shader_source: &str,
    ) -> GlResult<Self> {
        let vert_shader = Self::load_shader(context, ShaderType::Vertex, vert_shader_source)?;
        let frag_shader =
            match Self::load_shader(context, ShaderType::Fragment, frag_shader_source) {
                Ok(shader) => shader,
                Err(err) => {
                    context.inner.delete_shader(Some(&vert_shader));
                    return Err(err);
                }
            };

        let (program, gl_uniforms) = match Self::link(context, &vert_shader, &frag_shader) {
            Ok(linked) => linked,
            Err(err) => {
                context.inner.delete_shader(Some(&vert_shader));
                context.inner.delete_shader(Some(&frag_shader));
                return Err(err);
            }
        };

        Ok(GlProgram {
            inner: Rc::new(GlProgramInner {
                program,
                gl_uniforms,
                phantom: PhantomData,
                id: ProgramId::new(),
                context: context.clone(),
                vert_shader,
                frag_shader,
            }),
        })
    }

    /// Links the compiled shaders into a program. The program is deleted again if linking or
    /// the uniform lookup fails; the shaders are left to the caller.
    fn link(
        context: &GlContext,
        vert_shader: &WebGlShader,
        frag_shader: &WebGlShader,
    ) -> GlResult<(WebGlProgram, U)> {
        let program =
            context.inner.create_program().ok_or(GlError::ResourceCreation("program"))?;
        context.inner.attach_shader(&program, vert_shader);
        context.inner.attach_shader(&program, frag_shader);
        context.inner.link_program(&program);

        let link_status = context
            .inner
            .get_program_parameter(&program, WebGl2::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !link_status {
            let log = context.inner.get_program_info_log(&program).unwrap_or_default();
            error!("Error linking program: {}", log);
            context.inner.delete_program(Some(&program));
            return Err(GlError::ProgramLink(log));
        }

        match U::new(context, &program) {
            Ok(gl_uniforms) => Ok((program, gl_uniforms)),
            Err(err) => {
                context.inner.delete_program(Some(&program));
                Err(err)
            }
        }
    }

    fn load_shader(
        context: &GlContext,
        shader_type: ShaderType,
        source: &str,
    ) -> GlResult<WebGlShader> {
        let shader = context
            .inner
            .create_shader(shader_type.as_gl())
            .ok_or(GlError::ResourceCreation("shader"))?;
        context.inner.shader_source(&shader, source);
        context.inner.compile_shader(&shader);

        let compile_status = context
            .inner
            .get_shader_parameter(&shader, WebGl2::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !compile_status {
            let log = context.inner.get_shader_info_log(&shader).unwrap_or_default();
            error!("Error compiling {:?} shader: {}", shader_type, log);
            context.inner.delete_shader(Some(&shader));
            return Err(GlError::ShaderCompile(log));
        }

        Ok(shader)
    }

    pub(crate) fn bind(&self, context: &GlContext) {
        let mut cache = context.cache.borrow_mut();
        if cache.bound_program != Some(self.inner.id) {
            cache.bound_program = Some(self.inner.id);
            context.inner.use_program(Some(&self.inner.program));
        }
    }
}

/// A list of all OpenGL attributes for a given program.
///
/// Each pair is (attribute name, attribute size).
///
/// The size should be the size in *floats*, not bytes.
pub type Attributes = &'static [(&'static str, i32)];

/// A vertex for a given program.
///
/// Example implementation:
/// ```ignore
/// struct ColoredVertex {
///     position: Vector3<f32>,
///     color: Vector3<f32>,
/// }
///
/// impl Vertex for ColoredVertex {
///     const ATTRIBUTES: Attributes = &[("position", 3), ("color", 3)];
/// }
///
/// impl VertexComponent for ColoredVertex {
///     fn add_to_mesh(&self, f: &mut dyn FnMut(f32)) {
///         self.position.add_to_mesh(f);
///         self.color.add_to_mesh(f);
///     }
/// }
/// ```
pub trait Vertex: VertexComponent {
    /// A list of all OpenGL attributes that each vertex contains.
    const ATTRIBUTES: Attributes;

    fn stride() -> i32 {
        Self::ATTRIBUTES.iter().map(|&(_, size)| size).sum()
    }
}

/// A component of a vertex.
///
/// See the `Vertex` trait for an example implementation.
pub trait VertexComponent {
    /// Adds the `VertexComponent` to a mesh by calling the given closure for each
    /// `f32` component, in order. Composite `VertexComponent` instances can call
    /// `add_to_mesh` for each of their components rather than calling the closure directly.
    fn add_to_mesh(&self, f: &mut dyn FnMut(f32));
}

impl VertexComponent for Vector2<f32> {
    fn add_to_mesh(&self, f: &mut dyn FnMut(f32)) {
        f(self.x);
        f(self.y);
    }
}

impl VertexComponent for Vector3<f32> {
    fn add_to_mesh(&self, f: &mut dyn FnMut(f32)) {
        f(self.x);
        f(self.y);
        f(self.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestVertex {
        pos: Vector2<f32>,
        color: Vector3<f32>,
    }

    impl Vertex for TestVertex {
        const ATTRIBUTES: Attributes = &[("pos", 2), ("color", 3)];
    }

    impl VertexComponent for TestVertex {
        fn add_to_mesh(&self, f: &mut dyn FnMut(f32)) {
            self.pos.add_to_mesh(f);
            self.color.add_to_mesh(f);
        }
    }

    #[test]
    fn stride_sums_attribute_sizes() {
        assert_eq!(TestVertex::stride(), 5);
    }

    #[test]
    fn components_are_written_in_order() {
        let vert = TestVertex { pos: vec2(1.0, 2.0), color: vec3(3.0, 4.0, 5.0) };
        let mut data = vec![];
        vert.add_to_mesh(&mut |x| data.push(x));
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
