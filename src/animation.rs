use log::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::*;

use crate::error::*;

type FrameCallback = Closure<dyn FnMut()>;

/// Runs a callback once per display frame, forever.
pub struct AnimationLoop;

impl AnimationLoop {
    /// Schedules `frame` for the next animation frame; each call schedules the next one.
    pub fn start(mut frame: impl FnMut() + 'static) -> GlResult<()> {
        // The closure has to re-register itself, so it lives in a cell it can reach.
        // The resulting reference cycle keeps it alive.
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let next = slot.clone();

        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame();
            if let Some(callback) = next.borrow().as_ref() {
                if let Err(err) = request_animation_frame(callback) {
                    error!("Animation stopped: {}", err);
                }
            }
        }) as Box<dyn FnMut()>));

        let first = slot.borrow();
        match first.as_ref() {
            Some(callback) => request_animation_frame(callback),
            None => Err(GlError::ResourceCreation("animation callback")),
        }
    }
}

fn request_animation_frame(callback: &FrameCallback) -> GlResult<()> {
    window()
        .ok_or(GlError::ResourceCreation("window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}
