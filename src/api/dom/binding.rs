use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::core::error::{BlobError, Result};
use crate::domain::palette::Rgba;
use crate::simulation::BodyView;

const PULSE_ANIMATION: &str = "pulse-animation 0.6s ease-out forwards";

/// The page elements drawing one body: a `div.blob` with a `div.pulse` inside
pub(super) struct BlobBinding {
    element: HtmlElement,
    pulse: HtmlElement,
    color: Rgba,
    pulse_generation: u32,
}

impl BlobBinding {
    pub(super) fn create(document: &Document, container: &Element, view: &BodyView) -> Result<Self> {
        let element = create_div(document, "blob")?;
        let pulse = create_div(document, "pulse")?;

        let size = format!("{}px", view.size);
        set_style(&element, "width", &size)?;
        set_style(&element, "height", &size)?;
        set_style(&element, "border-radius", "50%")?;
        set_style(&element, "background", &view.color.to_css())?;
        set_style(&element, "transform", &view.css_transform())?;
        set_style(&pulse, "background", &view.color.to_css())?;

        element
            .append_child(&pulse)
            .map_err(|e| BlobError::Dom(format!("append pulse: {e:?}")))?;
        container
            .append_child(&element)
            .map_err(|e| BlobError::Dom(format!("append blob: {e:?}")))?;

        Ok(Self {
            element,
            pulse,
            color: view.color,
            pulse_generation: view.pulse_generation,
        })
    }

    /// Write this frame's transform; recolor and restart the pulse only on change
    pub(super) fn paint(&mut self, view: &BodyView) -> Result<()> {
        set_style(&self.element, "transform", &view.css_transform())?;

        if view.color != self.color {
            let css = view.color.to_css();
            set_style(&self.element, "background", &css)?;
            set_style(&self.pulse, "background", &css)?;
            self.color = view.color;
        }

        if view.pulse_generation != self.pulse_generation {
            self.restart_pulse()?;
            self.pulse_generation = view.pulse_generation;
        }
        Ok(())
    }

    fn restart_pulse(&self) -> Result<()> {
        set_style(&self.pulse, "animation", "none")?;
        // Reading layout forces a reflow so the animation starts over.
        let _ = self.pulse.offset_height();
        set_style(&self.pulse, "animation", PULSE_ANIMATION)
    }

    pub(super) fn remove(&self) {
        self.element.remove();
    }
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement> {
    let element = document
        .create_element("div")
        .map_err(|e| BlobError::Dom(format!("create div: {e:?}")))?;
    element.set_class_name(class);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BlobError::Dom("div is not an HtmlElement".to_string()))
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| BlobError::Dom(format!("style {property}: {e:?}")))
}
