use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::*;

use crate::error::*;
use crate::mesh::DrawMode;
use crate::program::ProgramId;
use crate::rect::*;
use crate::surface::*;

pub(crate) type WebGl2 = WebGl2RenderingContext;

/// A WebGL context.
#[derive(Clone)]
pub struct GlContext {
    pub(crate) inner: WebGl2RenderingContext,
    pub(crate) cache: Rc<RefCell<GlCache>>,
}

/// The GL state we've set, so repeated binds can be skipped.
#[derive(Default)]
pub(crate) struct GlCache {
    pub(crate) bound_program: Option<ProgramId>,
    pub(crate) draw_mode: Option<DrawMode>,
    pub(crate) viewport: Option<Rect<i32>>,
}

#[derive(Copy, Clone, Debug)]
pub(crate) enum GlFlag {
    DepthTest,
}

impl GlFlag {
    fn as_gl(self) -> u32 {
        match self {
            GlFlag::DepthTest => WebGl2::DEPTH_TEST,
        }
    }
}

impl GlContext {
    /// Creates a `GlContext` and associated surface.
    ///
    /// Returns an error if there's no canvas with the given id or the WebGL 2 context couldn't
    /// be created.
    pub fn new(canvas_id: &str) -> GlResult<(Self, ScreenSurface)> {
        let canvas = document()?
            .get_element_by_id(canvas_id)
            .and_then(|elem| elem.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| GlError::MissingElement(canvas_id.to_string()))?;
        let context = canvas
            .get_context_with_context_options(
                "webgl2",
                WebGlContextAttributes::new().antialias(true).as_ref(),
            )?
            .ok_or(GlError::ContextUnavailable)?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| GlError::ContextUnavailable)?;

        Ok((
            GlContext { inner: context, cache: Rc::new(RefCell::new(GlCache::default())) },
            ScreenSurface::new(canvas),
        ))
    }

    pub(crate) fn viewport(&self, viewport: &Rect<i32>) {
        let mut cache = self.cache.borrow_mut();
        if cache.viewport.as_ref() != Some(viewport) {
            cache.viewport = Some(*viewport);
            let size = viewport.size();
            self.inner.viewport(viewport.start.x, viewport.start.y, size.x, size.y);
        }
    }

    pub(crate) fn enable(&self, flag: GlFlag) {
        self.inner.enable(flag.as_gl());
    }

    pub(crate) fn disable(&self, flag: GlFlag) {
        self.inner.disable(flag.as_gl());
    }
}

pub(crate) fn document() -> GlResult<Document> {
    window()
        .and_then(|window| window.document())
        .ok_or(GlError::ResourceCreation("document"))
}
