use brass::web::element_by_id;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

#[wasm_bindgen]
extern "C" {
    /// A `bootstrap.Modal` instance.
    #[derive(Clone, Debug)]
    type ModalInstance;

    #[wasm_bindgen(js_namespace = ["bootstrap", "Modal"], js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(element: &web_sys::Element) -> Result<ModalInstance, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn show(this: &ModalInstance) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn hide(this: &ModalInstance) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn toggle(this: &ModalInstance) -> Result<(), JsValue>;
}

/// Opens and closes a rendered modal from code.
///
/// Talks to the global `bootstrap` object, so the bundle script must be
/// loaded. All calls fail if it is not.
#[derive(Clone, Debug)]
pub struct ModalControl {
    instance: ModalInstance,
}

impl ModalControl {
    pub fn for_element(element: &web_sys::Element) -> Result<Self, JsValue> {
        let instance = get_or_create_instance(element)?;
        Ok(Self { instance })
    }

    pub fn by_id(id: &str) -> Result<Self, JsValue> {
        let element = element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no modal element with id '{}'", id)))?;
        Self::for_element(&element)
    }

    pub fn show(&self) -> Result<(), JsValue> {
        self.instance.show()
    }

    pub fn hide(&self) -> Result<(), JsValue> {
        self.instance.hide()
    }

    pub fn toggle(&self) -> Result<(), JsValue> {
        self.instance.toggle()
    }
}
