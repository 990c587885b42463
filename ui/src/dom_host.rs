//! Renders the converter widget into a live browser DOM via `web-sys`.

use converter::error::WidgetError;
use converter::host::Activation;
use converter::host::ButtonStyle;
use converter::host::Container;
use converter::host::Control;
use converter::host::Document;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::Element;
use web_sys::HtmlButtonElement;

fn js_error(e: JsValue) -> WidgetError {
    WidgetError::Render(format!("{:?}", e))
}

/// The page's `document`.
pub struct DomDocument(web_sys::Document);

impl DomDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }

    /// The document of the current window, if running in a browser page.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self)
    }
}

impl Document for DomDocument {
    type Container = DomContainer;

    fn container(&self, id: &str) -> Option<DomContainer> {
        self.0.get_element_by_id(id).map(DomContainer)
    }
}

pub struct DomContainer(Element);

impl Container for DomContainer {
    type Control = DomControl;

    fn clear(&mut self) {
        self.0.set_inner_html("");
    }

    fn append_button(
        &mut self,
        label: &str,
        style: &ButtonStyle,
        on_activate: Activation,
    ) -> Result<DomControl, WidgetError> {
        let document = self
            .0
            .owner_document()
            .ok_or_else(|| WidgetError::Render("container is detached".to_string()))?;

        let button: HtmlButtonElement = document
            .create_element("button")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| WidgetError::Render("created element is not a button".to_string()))?;
        button.set_text_content(Some(label));

        let css = button.style();
        for (property, value) in style.properties() {
            css.set_property(property, value).map_err(js_error)?;
        }

        let on_click = Closure::wrap(on_activate);
        button.set_onclick(Some(on_click.as_ref().unchecked_ref()));

        self.0.append_child(&button).map_err(js_error)?;

        Ok(DomControl {
            button,
            _on_click: on_click,
        })
    }
}

/// The rendered `<button>`.
///
/// Owns the click closure, so the handler stays valid exactly as long as
/// the widget keeps this control.
pub struct DomControl {
    button: HtmlButtonElement,
    _on_click: Closure<dyn FnMut()>,
}

impl Control for DomControl {
    fn set_label(&mut self, label: &str) {
        self.button.set_text_content(Some(label));
    }
}
