//! WebAssembly bindings.

use wasm_bindgen::prelude::*;

use crate::plan::{plan_route, RouteRequest};

/// Plans a route from a JS object shaped like `RouteRequest` and returns
/// the resulting `RoutePlan` as a JS object.
#[wasm_bindgen(js_name = planRoute)]
pub fn plan_route_js(request: JsValue) -> Result<JsValue, JsError> {
    let request: RouteRequest = serde_wasm_bindgen::from_value(request)?;
    let plan = plan_route(&request)?;
    Ok(serde_wasm_bindgen::to_value(&plan)?)
}

/// The built-in six-point warehouse sample request.
#[wasm_bindgen(js_name = warehouseSample)]
pub fn warehouse_sample_js() -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(&RouteRequest::warehouse_sample())?)
}
