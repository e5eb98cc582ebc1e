//! Shared helpers for the WASM API
//!
//! Console logging with an `[LRC]` prefix, plus the conversions between
//! Rust results and JavaScript values used by every exported method.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::playback::PlayerError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

/// Which `console` method a line goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Write one prefixed line to the browser console
pub fn console_line(level: ConsoleLevel, msg: &str) {
    match level {
        ConsoleLevel::Debug => console_log(&format!("[LRC] {}", msg)),
        ConsoleLevel::Info => console_info(&format!("[LRC] {}", msg)),
        ConsoleLevel::Warn => console_warn(&format!("[LRC] ⚠️ {}", msg)),
        ConsoleLevel::Error => console_error(&format!("[LRC] ❌ {}", msg)),
    }
}

/// Lifecycle message via `console.log`
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::console_line(
            $crate::api::helpers::ConsoleLevel::Debug,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::console_line(
            $crate::api::helpers::ConsoleLevel::Info,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::console_line(
            $crate::api::helpers::ConsoleLevel::Warn,
            &format!($($arg)*),
        )
    };
}

/// Failure reported to the console before it is thrown to JS
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::console_line(
            $crate::api::helpers::ConsoleLevel::Error,
            &format!($($arg)*),
        )
    };
}

/// Log `msg` as an error and turn it into a thrown JS string
fn js_error(msg: String) -> JsValue {
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Deserialize a JS value (options objects and the like)
pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("{}: {}", context, e)))
}

/// Serialize a value (lyric lines) for JS
pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(format!("{}: {}", context, e)))
}

/// Convert a player error into the value thrown from `operation`
pub fn player_error(operation: &str, err: PlayerError) -> JsValue {
    js_error(format!("{} failed: {}", operation, err))
}
