use cgmath::*;
use web_sys::*;

use crate::context::*;
use crate::rect::*;

/// A trait for things that can be rendered to.
pub trait Surface {
    /// Binds the `Surface` and sets the appropriate viewport.
    #[doc(hidden)]
    fn bind(&self, context: &GlContext);

    /// Clears one or more buffers.
    ///
    /// Example usage:
    /// ```ignore
    /// surface.clear(&context, &[ClearBuffer::Color([0.0, 0.0, 0.0, 0.0]), ClearBuffer::Depth]);
    /// ```
    fn clear(&self, context: &GlContext, buffers: &[ClearBuffer]) {
        assert!(!buffers.is_empty());
        self.bind(context);

        let mut bits = 0;
        for buffer in buffers {
            bits |= buffer.as_gl();

            if let Some(color) = buffer.color() {
                context.inner.clear_color(color[0], color[1], color[2], color[3]);
            }
        }

        context.inner.clear(bits);
    }

    /// Returns the size of the surface.
    fn size(&self) -> Vector2<u32>;
}

#[derive(Copy, Clone, Debug)]
pub enum ClearBuffer {
    Color([f32; 4]),
    Depth,
}

impl ClearBuffer {
    fn as_gl(&self) -> u32 {
        match self {
            ClearBuffer::Color(_) => WebGl2::COLOR_BUFFER_BIT,
            ClearBuffer::Depth => WebGl2::DEPTH_BUFFER_BIT,
        }
    }

    fn color(&self) -> Option<[f32; 4]> {
        match self {
            ClearBuffer::Color(color) => Some(*color),
            _ => None,
        }
    }
}

/// A surface that represents the canvas' default framebuffer.
pub struct ScreenSurface {
    viewport: Rect<i32>,
    size: Vector2<u32>,
    canvas: HtmlCanvasElement,
}

impl ScreenSurface {
    pub(crate) fn new(canvas: HtmlCanvasElement) -> Self {
        let size = vec2(canvas.width(), canvas.height());
        ScreenSurface { viewport: viewport_for(size), size, canvas }
    }

    /// Resizes the canvas.
    pub fn set_size(&mut self, new_size: Vector2<u32>) {
        self.canvas.set_width(new_size.x);
        self.canvas.set_height(new_size.y);
        self.viewport = viewport_for(new_size);
        self.size = new_size;
    }

    /// Makes the drawing buffer as large as the canvas is displayed, so one unit of
    /// `u_resolution` is one CSS pixel. Returns whether the size changed.
    pub fn resize_to_display_size(&mut self) -> bool {
        let display_size = vec2(
            self.canvas.client_width().max(0) as u32,
            self.canvas.client_height().max(0) as u32,
        );
        let changed = display_size != self.size;
        if changed {
            self.set_size(display_size);
        }
        changed
    }
}

impl Surface for ScreenSurface {
    #[doc(hidden)]
    fn bind(&self, context: &GlContext) {
        context.viewport(&self.viewport);
    }

    fn size(&self) -> Vector2<u32> {
        self.size
    }
}

fn viewport_for(size: Vector2<u32>) -> Rect<i32> {
    Rect::from_size(vec2(size.x as i32, size.y as i32))
}
