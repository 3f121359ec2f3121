//! WebAssembly bindings for picascii

use crate::{Converter, PicasciiError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmConverter {
    converter: Converter,
}

#[wasm_bindgen]
impl WasmConverter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConverter {
        WasmConverter { converter: Converter::new() }
    }

    #[wasm_bindgen]
    pub fn set_width(&mut self, width: usize) {
        self.converter = self.converter.with_width(width);
    }

    #[wasm_bindgen]
    pub fn set_vertical_correction(&mut self, correction: f64) {
        self.converter = self.converter.with_vertical_correction(correction);
    }

    /// Convert an encoded image (the raw file bytes) to newline-separated ASCII art.
    #[wasm_bindgen]
    pub fn convert(&self, image_data: &[u8]) -> Result<String, JsValue> {
        self.converter.convert_bytes(image_data).map_err(to_js)
    }
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(err: PicasciiError) -> JsValue {
    let msg = err.to_string();
    web_sys::console::warn_1(&msg.as_str().into());
    JsValue::from_str(&msg)
}
