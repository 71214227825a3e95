//! JSON over the browser Fetch API.
//!
//! The Fetch API has no timeout of its own, so every request is raced
//! against a `setTimeout` promise and abandoned after [`FETCH_TIMEOUT_MS`].

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

enum Race {
    Settled(JsValue),
    TimedOut,
    Rejected(String),
}

/// `promise` must not resolve to `undefined`; that value marks the timeout.
async fn race_timeout(window: &Window, promise: Promise, timeout_ms: i32) -> Race {
    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::of2(&promise, &timer);
    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => Race::TimedOut,
        Ok(value) => Race::Settled(value),
        Err(e) => Race::Rejected(
            e.as_string()
                .or_else(|| e.dyn_ref::<js_sys::Error>().map(|err| String::from(err.message())))
                .unwrap_or_else(|| "Unknown error".to_string()),
        ),
    }
}

/// GET `url` and parse the body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = get_text(url).await?;
    parse_body(&body)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Relative API paths stay same-origin; an absolute API base needs CORS.
fn request_mode(url: &str) -> RequestMode {
    if url.starts_with("http://") || url.starts_with("https://") {
        RequestMode::Cors
    } else {
        RequestMode::SameOrigin
    }
}

async fn get_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(request_mode(url));

    let request =
        Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let pending = window.fetch_with_request(&request);
    let response: Response = match race_timeout(&window, pending, FETCH_TIMEOUT_MS).await {
        Race::Settled(value) => value.dyn_into().map_err(|_| FetchError::InvalidContent)?,
        Race::TimedOut => return Err(FetchError::Timeout),
        Race::Rejected(msg) => return Err(FetchError::NetworkError(msg)),
    };

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let text = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(text)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_mode_by_base() {
        assert_eq!(request_mode("/api/materials/topics"), RequestMode::SameOrigin);
        assert_eq!(request_mode("https://api.example.com/api/materials"), RequestMode::Cors);
    }

    #[test]
    fn test_bad_body_is_parse_error() {
        let parsed: Result<Vec<String>, _> = parse_body("<html>");
        assert!(matches!(parsed, Err(FetchError::JsonParseError(_))));
        let parsed: Vec<String> = parse_body(r#"["熱力學"]"#).unwrap();
        assert_eq!(parsed, vec!["熱力學".to_string()]);
    }
}
