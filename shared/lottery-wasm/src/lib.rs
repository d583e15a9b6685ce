//! WebAssembly number draw core for the lottery page.
//!
//! Exports high-level functions callable from JavaScript via wasm-bindgen.
//! The page collects the raw form fields, hands them here for validation and
//! drawing, and animates whatever comes back. Errors reach JS as an `Error`
//! whose message starts with a stable code, e.g. `INVALID_RANGE: ...`.

pub mod error;
pub mod input;
pub mod rng;
pub mod sampler;
pub mod session;
pub mod types;

pub use error::{DrawError, Field};
pub use input::RawDrawInput;
pub use rng::DrawRng;
pub use sampler::{draw, draw_numbers};
pub use session::{DrawSession, Drawn};
pub use types::{DrawRequest, DrawResult, Range};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;
    use crate::{DrawError, DrawRng, DrawSession, RawDrawInput};

    fn js_error(err: DrawError) -> JsError {
        JsError::new(&format!("{}: {}", err.code(), err))
    }

    fn read_input(input: JsValue) -> Result<RawDrawInput, JsError> {
        serde_wasm_bindgen::from_value(input)
            .map_err(|e| JsError::new(&format!("INVALID_INPUT: {e}")))
    }

    /// Validate a raw `{ count, start, end, allowRepeats }` object.
    /// Returns the normalized request `{ start, end, count, allowRepeats }`.
    #[wasm_bindgen(js_name = "parseDrawRequest")]
    pub fn wasm_parse_draw_request(input: JsValue) -> Result<JsValue, JsError> {
        let request = read_input(input)?.parse().map_err(js_error)?;
        Ok(serde_wasm_bindgen::to_value(&request)?)
    }

    /// One-shot draw from raw field text. Returns the drawn numbers as an array.
    #[wasm_bindgen(js_name = "drawNumbers")]
    pub fn wasm_draw_numbers(
        count: &str,
        start: &str,
        end: &str,
        allow_repeats: bool,
    ) -> Result<JsValue, JsError> {
        let request = RawDrawInput::new(count, start, end, allow_repeats)
            .parse()
            .map_err(js_error)?;
        let result = crate::draw(&request, &mut DrawRng::new());
        Ok(serde_wasm_bindgen::to_value(&result)?)
    }

    /// Holds a validated request and the attempt counter for "draw again".
    #[wasm_bindgen(js_name = "LotterySession")]
    pub struct WasmLotterySession {
        inner: DrawSession<DrawRng>,
    }

    #[wasm_bindgen(js_class = "LotterySession")]
    impl WasmLotterySession {
        #[wasm_bindgen(constructor)]
        pub fn new(input: JsValue) -> Result<WasmLotterySession, JsError> {
            let request = read_input(input)?.parse().map_err(js_error)?;
            Ok(Self {
                inner: DrawSession::from_entropy(request),
            })
        }

        /// Draw again with the stored request.
        /// Returns JS object: `{ attempt: number, numbers: number[] }`
        pub fn draw(&mut self) -> Result<JsValue, JsError> {
            let drawn = self.inner.draw();
            Ok(serde_wasm_bindgen::to_value(&drawn)?)
        }

        #[wasm_bindgen(getter)]
        pub fn attempts(&self) -> u32 {
            self.inner.attempts()
        }
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM lottery ready".to_string()
    }
}
