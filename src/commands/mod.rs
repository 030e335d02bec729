//! Items API Bindings
//!
//! `fetch`-based implementation of the backend seam.

mod item;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use item_sync::{check_status, ApiError, ApiResult};

// Re-export all public items
pub use item::*;

/// Send a request and fail on any non-2xx status
async fn send(method: &str, url: &str, json_body: Option<String>) -> ApiResult<Response> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let headers = Headers::new().map_err(js_error)?;
    headers.set("Accept", "application/json").map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = json_body {
        headers.set("Content-Type", "application/json").map_err(js_error)?;
        opts.set_body(&JsValue::from_str(&body));
    }
    opts.set_headers(&JsValue::from(&headers));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    log::debug!("{} {} -> {}", method, url, resp.status());
    check_status(resp.status())?;
    Ok(resp)
}

/// Read the whole body as text
async fn body_text(resp: &Response) -> ApiResult<String> {
    let promise = resp.text().map_err(decode_error)?;
    let text = JsFuture::from(promise).await.map_err(decode_error)?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(js_message(&value))
}

fn decode_error(value: JsValue) -> ApiError {
    ApiError::Decode(js_message(&value))
}
