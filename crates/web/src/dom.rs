//! Element lookup and output presentation.

use px2dp_core::Outputs;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// The DOM targets the widget binds to. IDs are fixed by the page.
pub struct Elements {
    pub px_input: HtmlInputElement,
    pub dp_output: HtmlInputElement,
    pub ratio_label: Element,
    pub css_output: Element,
    pub visual_label: Element,
    pub visual_box: HtmlElement,
}

fn require(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{id}'")))
}

impl Elements {
    pub fn find(document: &Document) -> Result<Self, JsValue> {
        let px_input = require(document, "pxValue")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str("'pxValue' is not an <input>"))?;
        let dp_output = require(document, "dpValue")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str("'dpValue' is not an <input>"))?;
        let ratio_label = require(document, "dpr")?;
        let css_output = require(document, "cssOutput")?;
        let visual_label = require(document, "dpVisual")?;
        let visual_box = document
            .query_selector(".dp-box")?
            .ok_or_else(|| JsValue::from_str("no .dp-box element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("'.dp-box' is not an HTML element"))?;
        Ok(Self {
            px_input,
            dp_output,
            ratio_label,
            css_output,
            visual_label,
            visual_box,
        })
    }

    /// Write one conversion into all four targets.
    pub fn present(&self, outputs: &Outputs) {
        self.dp_output.set_value(&outputs.dp_text);
        self.visual_label.set_text_content(Some(&outputs.label));
        self.css_output.set_text_content(Some(&outputs.css));
        if let Err(e) = self
            .visual_box
            .style()
            .set_property("width", &format!("{}px", outputs.box_width))
        {
            web_sys::console::error_1(&e);
        }
    }

    /// Toggle the error presentation on the px field.
    pub fn set_error(&self, on: bool) {
        let classes = self.px_input.class_list();
        let result = if on {
            classes.add_1("error")
        } else {
            classes.remove_1("error")
        };
        if let Err(e) = result {
            web_sys::console::error_1(&e);
        }
    }

    pub fn set_ratio_text(&self, text: &str) {
        self.ratio_label.set_text_content(Some(text));
    }
}
