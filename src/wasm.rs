//! WebAssembly bindings.
//!
//! Thin adapters: decode the course, run [`calculate`], encode the result.

use crate::calculator::calculate;
use crate::course::CourseConfig;
use wasm_bindgen::prelude::*;

/// Calculates a course passed as a JS object and returns the result object.
///
/// Fails with a JS error string when the object is not a valid course.
#[wasm_bindgen(js_name = calculateCourse)]
pub fn calculate_course(config: JsValue) -> Result<JsValue, JsValue> {
    let config: CourseConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid Input: {e}")))?;
    let result = calculate(&config);
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JSON-in, JSON-out variant of [`calculate_course`].
#[wasm_bindgen(js_name = solveJson)]
pub fn solve_json(input: &str) -> String {
    crate::calculator::solve_json(input)
}
