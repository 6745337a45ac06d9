//! The DOM controls that drive the 2D lessons.

use log::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::*;

use crate::context::document;
use crate::error::*;

/// An event listener that's removed from its target when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(
        target: &EventTarget,
        event: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> GlResult<Self> {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Listener { target: target.clone(), event, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        if removed.is_err() {
            warn!("Unable to remove {} listener", self.event);
        }
    }
}

fn find_element<T: JsCast>(id: &str) -> GlResult<T> {
    document()?
        .get_element_by_id(id)
        .and_then(|elem| elem.dyn_into::<T>().ok())
        .ok_or_else(|| GlError::MissingElement(id.to_string()))
}

/// Range and initial value of a slider.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SliderOptions {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderOptions {
    /// Whole numbers from 0 to `max`.
    pub fn range(max: f32) -> Self {
        SliderOptions { value: 0.0, min: 0.0, max, step: 1.0 }
    }

    pub fn with_value(self, value: f32) -> Self {
        SliderOptions { value, ..self }
    }
}

/// An `<input type="range">` element.
pub struct Slider {
    input: HtmlInputElement,
    listener: Option<Listener>,
}

impl Slider {
    pub fn find(id: &str) -> GlResult<Self> {
        Ok(Slider { input: find_element(id)?, listener: None })
    }

    /// Sets the range first so the value isn't clamped to the old one.
    pub fn configure(&self, options: SliderOptions) {
        self.input.set_min(&options.min.to_string());
        self.input.set_max(&options.max.to_string());
        self.input.set_step(&options.step.to_string());
        self.input.set_value_as_number(options.value as f64);
    }

    /// Calls `f` with the new value whenever the slider moves, replacing any previous callback.
    pub fn on_change(&mut self, mut f: impl FnMut(f32) + 'static) -> GlResult<()> {
        self.listener = None;
        let input = self.input.clone();
        self.listener = Some(Listener::new(&self.input, "input", move |_| {
            f(input.value_as_number() as f32)
        })?);
        Ok(())
    }

    /// Keeps the callback registered for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(listener) = self.listener.take() {
            std::mem::forget(listener);
        }
    }
}

/// A `<select>` element choosing between named modes.
pub struct ModeSelector {
    select: HtmlSelectElement,
    listener: Option<Listener>,
}

impl ModeSelector {
    pub fn find(id: &str) -> GlResult<Self> {
        Ok(ModeSelector { select: find_element(id)?, listener: None })
    }

    pub fn value(&self) -> String {
        self.select.value()
    }

    pub fn set_value(&self, value: &str) {
        self.select.set_value(value);
    }

    /// Calls `f` with the selected value on every change, replacing any previous callback.
    pub fn on_change(&mut self, mut f: impl FnMut(String) + 'static) -> GlResult<()> {
        self.listener = None;
        let select = self.select.clone();
        self.listener =
            Some(Listener::new(&self.select, "change", move |_| f(select.value()))?);
        Ok(())
    }

    pub fn forget(mut self) {
        if let Some(listener) = self.listener.take() {
            std::mem::forget(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_starts_at_zero() {
        let options = SliderOptions::range(640.0).with_value(60.0);
        assert_eq!(options, SliderOptions { value: 60.0, min: 0.0, max: 640.0, step: 1.0 });
    }
}
