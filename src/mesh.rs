use js_sys::*;
use std::marker::PhantomData;
use web_sys::*;

use crate::context::*;
use crate::error::*;
use crate::program::*;
use crate::surface::*;
use crate::uniforms::*;

/// An OpenGL primitive.
#[doc(hidden)]
pub trait Primitive {
    const AS_GL: u32;
}

#[derive(Copy, Clone, Debug)]
pub enum MeshUsage {
    StaticDraw,
}

impl MeshUsage {
    fn as_gl(self) -> u32 {
        match self {
            MeshUsage::StaticDraw => WebGl2::STATIC_DRAW,
        }
    }
}

/// Whether a mesh is drawn with depth testing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DrawMode {
    /// Pixel-space 2D shapes drawn in submission order.
    Flat,
    Depth,
}

impl DrawMode {
    fn bind(self, context: &GlContext) {
        let changed = {
            let mut cache = context.cache.borrow_mut();
            let changed = cache.draw_mode != Some(self);
            cache.draw_mode = Some(self);
            changed
        };
        if changed {
            match self {
                DrawMode::Flat => context.disable(GlFlag::DepthTest),
                DrawMode::Depth => context.enable(GlFlag::DepthTest),
            }
        }
    }
}

/// An index into a mesh.
pub type MeshIndex = u16;

/// A struct that builds a mesh from a collection of primitives.
///
/// This struct only stores the mesh data and indices; to use it in OpenGL, it must be used to
/// build a `Mesh`.
pub struct MeshBuilder<V: Vertex, P: Primitive> {
    vertex_data: Vec<f32>,
    indices: Vec<MeshIndex>,
    next_index: MeshIndex,
    phantom: PhantomData<(V, P)>,
}

impl<V: Vertex, P: Primitive> MeshBuilder<V, P> {
    pub fn new() -> Self {
        MeshBuilder { vertex_data: vec![], indices: vec![], next_index: 0, phantom: PhantomData }
    }

    /// Adds a vertex to the mesh. The vertex won't be rendered unless it's used in a primitive.
    pub fn vert(&mut self, vert: V) -> MeshIndex {
        assert!(self.next_index < MeshIndex::max_value());
        let index = self.next_index;
        self.next_index += 1;
        vert.add_to_mesh(&mut |data| self.vertex_data.push(data));
        index
    }

    pub fn num_verts(&self) -> usize {
        self.next_index as usize
    }

    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    /// Builds a `Mesh` from this `MeshBuilder`.
    pub fn build<U: GlUniforms>(
        &self,
        context: &GlContext,
        program: &GlProgram<V, U>,
        usage: MeshUsage,
        draw_mode: DrawMode,
    ) -> GlResult<Mesh<V, U, P>> {
        let mut mesh = Mesh::new(context, program, draw_mode)?;
        mesh.build_from(self, usage);
        Ok(mesh)
    }
}

impl<V: Vertex, P: Primitive> Default for MeshBuilder<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone)]
pub struct Triangles;

impl Primitive for Triangles {
    const AS_GL: u32 = WebGl2::TRIANGLES;
}

impl<V: Vertex> MeshBuilder<V, Triangles> {
    /// Adds a triangle to the mesh.
    pub fn triangle(&mut self, a: MeshIndex, b: MeshIndex, c: MeshIndex) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    /// Adds a triangle list: every three consecutive vertices form a triangle, the way
    /// `drawArrays(TRIANGLES, ..)` reads a buffer. Trailing vertices that don't make up a
    /// whole triangle are dropped.
    pub fn triangle_list(&mut self, verts: impl IntoIterator<Item = V>) {
        let mut verts = verts.into_iter();
        while let (Some(a), Some(b), Some(c)) = (verts.next(), verts.next(), verts.next()) {
            let a = self.vert(a);
            let b = self.vert(b);
            let c = self.vert(c);
            self.triangle(a, b, c);
        }
    }
}

/// A mesh; built using a `MeshBuilder`.
pub struct Mesh<V: Vertex, U: GlUniforms, P: Primitive> {
    vao: WebGlVertexArrayObject,
    vbo: WebGlBuffer,
    ibo: WebGlBuffer,
    context: GlContext,
    program: GlProgram<V, U>,
    num_indices: i32,
    phantom: PhantomData<P>,
    draw_mode: DrawMode,
}

impl<V: Vertex, U: GlUniforms, P: Primitive> Drop for Mesh<V, U, P> {
    fn drop(&mut self) {
        self.context.inner.delete_vertex_array(Some(&self.vao));
        self.context.inner.delete_buffer(Some(&self.vbo));
        self.context.inner.delete_buffer(Some(&self.ibo));
    }
}

impl<V: Vertex, U: GlUniforms, P: Primitive> Mesh<V, U, P> {
    /// Creates an empty `Mesh`. It must have data written via `build_from` before it's usable.
    pub fn new(
        context: &GlContext,
        program: &GlProgram<V, U>,
        draw_mode: DrawMode,
    ) -> GlResult<Self> {
        let vao = context
            .inner
            .create_vertex_array()
            .ok_or(GlError::ResourceCreation("vertex array"))?;
        context.inner.bind_vertex_array(Some(&vao));

        let vbo = context.inner.create_buffer().ok_or(GlError::ResourceCreation("buffer"))?;
        let ibo = context.inner.create_buffer().ok_or(GlError::ResourceCreation("buffer"))?;
        context.inner.bind_buffer(WebGl2::ARRAY_BUFFER, Some(&vbo));
        context.inner.bind_buffer(WebGl2::ELEMENT_ARRAY_BUFFER, Some(&ibo));

        Ok(Mesh {
            vao,
            vbo,
            ibo,
            context: context.clone(),
            program: program.clone(),
            num_indices: 0,
            phantom: PhantomData,
            draw_mode,
        })
    }

    /// Clears the mesh's current contents and updates it with the contents of the `MeshBuilder`.
    pub fn build_from(&mut self, builder: &MeshBuilder<V, P>, usage: MeshUsage) {
        self.num_indices = builder.indices.len() as i32;
        if self.num_indices == 0 {
            return;
        }

        self.bind();
        self.context.inner.bind_buffer(WebGl2::ARRAY_BUFFER, Some(&self.vbo));
        self.context.inner.bind_buffer(WebGl2::ELEMENT_ARRAY_BUFFER, Some(&self.ibo));

        let stride = V::stride();
        let mut offset = 0;
        for (attr, size) in V::ATTRIBUTES.iter() {
            let loc = self.context.inner.get_attrib_location(&self.program.inner.program, attr);
            // Attributes the compiler optimized out have no location
            if loc >= 0 {
                let loc = loc as u32;
                self.context.inner.enable_vertex_attrib_array(loc);
                self.context.inner.vertex_attrib_pointer_with_i32(
                    loc,
                    *size,
                    WebGl2::FLOAT,
                    false,
                    stride * 4,
                    offset * 4,
                );
            }
            offset += size;
        }

        let vertex_array = Float32Array::from(&builder.vertex_data[..]);
        self.context.inner.buffer_data_with_array_buffer_view(
            WebGl2::ARRAY_BUFFER,
            &vertex_array,
            usage.as_gl(),
        );

        let index_array = Uint16Array::from(&builder.indices[..]);
        self.context.inner.buffer_data_with_array_buffer_view(
            WebGl2::ELEMENT_ARRAY_BUFFER,
            &index_array,
            usage.as_gl(),
        );
    }

    fn bind(&self) {
        self.context.inner.bind_vertex_array(Some(&self.vao));
    }

    /// The size in bytes of the uploaded vertex data, as reported by the driver.
    pub fn buffer_size(&self) -> Option<u32> {
        self.context.inner.bind_buffer(WebGl2::ARRAY_BUFFER, Some(&self.vbo));
        self.context
            .inner
            .get_buffer_parameter(WebGl2::ARRAY_BUFFER, WebGl2::BUFFER_SIZE)
            .as_f64()
            .map(|size| size as u32)
    }

    /// Draws the mesh.
    pub fn draw(&self, surface: &impl Surface, uniforms: &impl Uniforms<GlUniforms = U>) {
        if self.num_indices == 0 {
            return;
        }

        self.bind();
        self.program.bind(&self.context);
        uniforms.update(&self.context, &self.program.inner.gl_uniforms);
        surface.bind(&self.context);
        self.draw_mode.bind(&self.context);

        self.context.inner.draw_elements_with_i32(
            P::AS_GL,
            self.num_indices,
            WebGl2::UNSIGNED_SHORT,
            0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::*;

    struct Pos(Vector2<f32>);

    impl Vertex for Pos {
        const ATTRIBUTES: Attributes = &[("a_position", 2)];
    }

    impl VertexComponent for Pos {
        fn add_to_mesh(&self, f: &mut dyn FnMut(f32)) {
            self.0.add_to_mesh(f);
        }
    }

    #[test]
    fn triangle_list_indexes_every_vertex() {
        let mut builder = MeshBuilder::<Pos, Triangles>::new();
        builder.triangle_list(crate::geometry::f_letter().into_iter().map(Pos));
        assert_eq!(builder.num_verts(), 18);
        assert_eq!(builder.num_indices(), 18);
        assert_eq!(builder.indices, (0..18).collect::<Vec<MeshIndex>>());
        assert_eq!(builder.vertex_data.len(), 36);
        assert_eq!(&builder.vertex_data[26..28], &[67.0, 60.0]);
    }

    #[test]
    fn triangle_list_drops_partial_triangles() {
        let mut builder = MeshBuilder::<Pos, Triangles>::new();
        builder.triangle_list((0..5).map(|i| Pos(vec2(i as f32, 0.0))));
        assert_eq!(builder.num_verts(), 3);
        assert_eq!(builder.num_indices(), 3);
    }
}
