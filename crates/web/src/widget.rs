//! Widget state and event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use px2dp_core::{Converter, Outputs};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, KeyboardEvent, Window};

use crate::clipboard;
use crate::dom::Elements;

/// Debounce window for keystroke-driven recomputation.
const DEBOUNCE_MS: i32 = 300;

pub type Shared = Rc<RefCell<DpWidget>>;

/// The page-lifetime widget instance shared by every event closure.
pub struct DpWidget {
    converter: Converter,
    pub els: Elements,
    window: Window,
    /// Handle of the pending debounce timeout, if any.
    debounce: Option<i32>,
    /// Reused callback for the debounce timer, installed after mount.
    debounce_fire: Option<Closure<dyn FnMut()>>,
}

/// Look up the page elements, build the shared widget, wire every event
/// listener, and run the initial conversion.
pub fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let els = Elements::find(&document)?;

    let converter = Converter::new(window.device_pixel_ratio());
    els.set_ratio_text(&converter.ratio().display());

    let widget = Rc::new(RefCell::new(DpWidget {
        converter,
        els,
        window,
        debounce: None,
        debounce_fire: None,
    }));

    // The debounce timer re-runs the conversion for the shared widget.
    // Stored on the widget so every keystroke reuses the same callback.
    {
        let shared = Rc::clone(&widget);
        let fire = Closure::wrap(Box::new(move || {
            let mut w = shared.borrow_mut();
            w.debounce = None;
            w.run_conversion();
        }) as Box<dyn FnMut()>);
        widget.borrow_mut().debounce_fire = Some(fire);
    }

    wire_events(&widget)?;

    // Initial conversion; an empty field reads as 0.
    widget.borrow_mut().run_conversion();
    Ok(())
}

impl DpWidget {
    /// Parse the current field text and push the result into the DOM.
    fn run_conversion(&mut self) {
        let raw = self.els.px_input.value();
        match self.converter.convert(&raw) {
            Ok(outputs) => {
                self.els.set_error(false);
                self.els.present(&outputs);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("px2dp: {e}").into());
                self.els.set_error(true);
                self.els.present(&Outputs::blank());
            }
        }
    }

    /// Restart the debounce window.
    fn schedule_conversion(&mut self) {
        self.cancel_debounce();
        let Some(fire) = &self.debounce_fire else {
            self.run_conversion();
            return;
        };
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.as_ref().unchecked_ref(),
                DEBOUNCE_MS,
            ) {
            Ok(handle) => self.debounce = Some(handle),
            Err(e) => {
                web_sys::console::error_1(&e);
                self.run_conversion();
            }
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(handle) = self.debounce.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }

    /// Blur path: refresh the error presentation without recomputing a
    /// valid value.
    fn validate_only(&mut self) {
        let raw = self.els.px_input.value();
        match self.converter.validate(&raw) {
            Ok(()) => self.els.set_error(false),
            Err(_) => {
                self.els.set_error(true);
                self.els.present(&Outputs::blank());
            }
        }
    }

    /// Resize path: recompute only when the reported ratio changed.
    fn ratio_check(&mut self) {
        let raw = self.window.device_pixel_ratio();
        if self.converter.observe_ratio(raw) {
            self.els.set_ratio_text(&self.converter.ratio().display());
            if let Some(outputs) = self.converter.current_outputs() {
                self.els.present(&outputs);
            }
        }
    }
}

fn wire_events(widget: &Shared) -> Result<(), JsValue> {
    let (px_input, visual_box, window) = {
        let w = widget.borrow();
        (
            w.els.px_input.clone(),
            w.els.visual_box.clone(),
            w.window.clone(),
        )
    };

    // input: debounced recomputation
    {
        let shared = Rc::clone(widget);
        let cb = Closure::wrap(Box::new(move |_: Event| {
            shared.borrow_mut().schedule_conversion();
        }) as Box<dyn FnMut(Event)>);
        px_input.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // keydown: Enter converts immediately
    {
        let shared = Rc::clone(widget);
        let cb = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            if ev.key() == "Enter" {
                let mut w = shared.borrow_mut();
                w.cancel_debounce();
                w.run_conversion();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        px_input.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // keypress: let digits and a single decimal point through
    {
        let input = px_input.clone();
        let cb = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            let key = ev.key();
            let mut chars = key.chars();
            // Named keys ("Backspace", "ArrowLeft", ...) are longer than
            // one char and pass through untouched.
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return;
            };
            let allowed = ch.is_ascii_digit() || (ch == '.' && !input.value().contains('.'));
            if !allowed {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        px_input.add_event_listener_with_callback("keypress", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // blur: validation only
    {
        let shared = Rc::clone(widget);
        let cb = Closure::wrap(Box::new(move |_: Event| {
            shared.borrow_mut().validate_only();
        }) as Box<dyn FnMut(Event)>);
        px_input.add_event_listener_with_callback("blur", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // focus: select the contents for easy overtyping
    {
        let input = px_input.clone();
        let cb = Closure::wrap(Box::new(move |_: Event| {
            input.select();
        }) as Box<dyn FnMut(Event)>);
        px_input.add_event_listener_with_callback("focus", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // resize: the device pixel ratio may have changed
    {
        let shared = Rc::clone(widget);
        let cb = Closure::wrap(Box::new(move |_: Event| {
            shared.borrow_mut().ratio_check();
        }) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // click on the visual box: copy the dp value
    {
        let shared = Rc::clone(widget);
        let cb = Closure::wrap(Box::new(move |_: Event| {
            clipboard::copy_dp(&shared);
        }) as Box<dyn FnMut(Event)>);
        visual_box.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
