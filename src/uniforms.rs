use web_sys::*;

use crate::context::*;
use crate::error::*;

/// Holds uniforms for a given program.
///
/// Example implementation:
/// ```ignore
/// struct ExampleUniforms {
///     matrix: M3,
///     color: [f32; 4],
/// }
///
/// struct ExampleUniformsGl {
///     matrix: Matrix3Uniform,
///     color: Array4Uniform,
/// }
///
/// impl Uniforms for ExampleUniforms {
///     type GlUniforms = ExampleUniformsGl;
///
///     fn update(&self, context: &GlContext, gl_uniforms: &Self::GlUniforms) {
///         gl_uniforms.matrix.set(context, &self.matrix);
///         gl_uniforms.color.set(context, self.color);
///     }
/// }
///
/// impl GlUniforms for ExampleUniformsGl {
///     fn new(context: &GlContext, program: &WebGlProgram) -> GlResult<Self> {
///         Ok(ExampleUniformsGl {
///             matrix: Matrix3Uniform::new("u_matrix", context, program)?,
///             color: Array4Uniform::new("u_color", context, program)?,
///         })
///     }
/// }
/// ```
pub trait Uniforms {
    /// The `GlUniforms` instance corresponding to this `Uniforms`.
    type GlUniforms: GlUniforms;

    /// Updates the given `GlUniforms` from this `Uniforms`. Should call `set` on each uniform
    /// in the associated `GlUniforms`.
    fn update(&self, context: &GlContext, gl_uniforms: &Self::GlUniforms);
}

/// A type used to hold the uniform locations, which can be updated from a corresponding instance of the `Uniforms` trait.
///
/// See the `Uniforms` trait for an example implementation.
pub trait GlUniforms: Sized {
    fn new(context: &GlContext, program: &WebGlProgram) -> GlResult<Self>;
}

fn location(name: &str, context: &GlContext, program: &WebGlProgram) -> GlResult<WebGlUniformLocation> {
    context
        .inner
        .get_uniform_location(program, name)
        .ok_or_else(|| GlError::MissingUniform(name.to_string()))
}

// The setters below assume the program is bound, which `Mesh::draw` does before updating uniforms.

pub struct Matrix3Uniform {
    loc: WebGlUniformLocation,
}

impl Matrix3Uniform {
    pub fn new(name: &str, context: &GlContext, program: &WebGlProgram) -> GlResult<Self> {
        Ok(Self { loc: location(name, context, program)? })
    }

    pub fn set(&self, context: &GlContext, mat: &impl AsRef<[f32; 9]>) {
        context.inner.uniform_matrix3fv_with_f32_array(Some(&self.loc), false, mat.as_ref());
    }
}

pub struct Matrix4Uniform {
    loc: WebGlUniformLocation,
}

impl Matrix4Uniform {
    pub fn new(name: &str, context: &GlContext, program: &WebGlProgram) -> GlResult<Self> {
        Ok(Self { loc: location(name, context, program)? })
    }

    pub fn set(&self, context: &GlContext, mat: &impl AsRef<[f32; 16]>) {
        context.inner.uniform_matrix4fv_with_f32_array(Some(&self.loc), false, mat.as_ref());
    }
}

pub struct Vector2Uniform {
    loc: WebGlUniformLocation,
}

impl Vector2Uniform {
    pub fn new(name: &str, context: &GlContext, program: &WebGlProgram) -> GlResult<Self> {
        Ok(Self { loc: location(name, context, program)? })
    }

    pub fn set(&self, context: &GlContext, val: &impl AsRef<[f32; 2]>) {
        let val = val.as_ref();
        context.inner.uniform2f(Some(&self.loc), val[0], val[1]);
    }
}

pub struct Array4Uniform {
    loc: WebGlUniformLocation,
}

impl Array4Uniform {
    pub fn new(name: &str, context: &GlContext, program: &WebGlProgram) -> GlResult<Self> {
        Ok(Self { loc: location(name, context, program)? })
    }

    pub fn set(&self, context: &GlContext, val: [f32; 4]) {
        context.inner.uniform4f(Some(&self.loc), val[0], val[1], val[2], val[3]);
    }
}
