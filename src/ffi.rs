//! C ABI bindings.
//!
//! Requests and responses are exchanged as JSON strings so callers only need
//! to manage C strings.
//!
//! # Memory Management
//!
//! - Input strings are null-terminated UTF-8 and stay owned by the caller.
//! - Returned strings are allocated by Rust and must be released with
//!   [`warehouse_route_free_string`].

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;
use serde::Serialize;

use crate::plan::{plan_route, RoutePlan, RouteRequest};

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Response {
    Ok(RoutePlan),
    Error(String),
}

fn respond(input: &str) -> Response {
    let request: RouteRequest = match serde_json::from_str(input) {
        Ok(r) => r,
        Err(e) => return Response::Error(format!("invalid request: {e}")),
    };
    match plan_route(&request) {
        Ok(plan) => Response::Ok(plan),
        Err(e) => Response::Error(e.to_string()),
    }
}

/// Plans a route from a JSON-encoded `RouteRequest`.
///
/// Returns a JSON object, either `{"ok": <RoutePlan>}` or
/// `{"error": "<message>"}`. Returns null if `request` is null or the
/// response cannot be encoded.
///
/// # Safety
///
/// `request` must be null or point to a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn warehouse_route_plan_json(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return ptr::null_mut();
    }
    let response = match CStr::from_ptr(request).to_str() {
        Ok(s) => respond(s),
        Err(_) => Response::Error("request is not valid UTF-8".to_string()),
    };
    serde_json::to_string(&response)
        .ok()
        .and_then(|s| CString::new(s).ok())
        .map_or(ptr::null_mut(), CString::into_raw)
}

/// Frees a string returned by this library.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by
/// [`warehouse_route_plan_json`] that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn warehouse_route_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
