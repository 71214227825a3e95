//! LIFF SDK bindings using web-sys.
//!
//! Talks to the global `liff` object injected by the LIFF SDK script
//! through direct JavaScript interop via the Reflect API.

use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::core::error::LiffError;
use crate::utils::dom;

/// Profile returned by `liff.getProfile()`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    #[serde(default)]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
}

/// A message for `liff.shareTargetPicker`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShareMessage {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

impl ShareMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: text.into(),
        }
    }
}

/// Name passed to `liff.isApiAvailable` for the share target picker.
pub const SHARE_TARGET_PICKER: &str = "shareTargetPicker";

/// Get the window.liff object injected by the SDK script.
fn get_liff() -> Result<Object, LiffError> {
    let window = dom::window().ok_or(LiffError::NoWindow)?;
    Reflect::get(&window, &"liff".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(LiffError::SdkMissing)
}

/// Look up `liff[name]` as a function.
fn method(liff: &Object, name: &'static str) -> Result<Function, LiffError> {
    Reflect::get(liff, &name.into())
        .map_err(|_| LiffError::CallFailed(name))?
        .dyn_into::<Function>()
        .map_err(|_| LiffError::CallFailed(name))
}

fn rejection_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Initialize the SDK. Must succeed before any other call.
pub async fn init(liff_id: &str, with_login_on_external_browser: bool) -> Result<(), LiffError> {
    let liff = get_liff()?;

    let config = Object::new();
    Reflect::set(&config, &"liffId".into(), &liff_id.into())
        .map_err(|_| LiffError::CallFailed("init"))?;
    Reflect::set(
        &config,
        &"withLoginOnExternalBrowser".into(),
        &with_login_on_external_browser.into(),
    )
    .map_err(|_| LiffError::CallFailed("init"))?;

    let promise: Promise = method(&liff, "init")?
        .call1(&liff, &config)
        .map_err(|_| LiffError::CallFailed("init"))?
        .into();

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| LiffError::InitFailed(rejection_message(&e)))
}

/// Check whether the user is logged in to LINE.
pub fn is_logged_in() -> bool {
    get_liff()
        .and_then(|liff| {
            method(&liff, "isLoggedIn")?
                .call0(&liff)
                .map_err(|_| LiffError::CallFailed("isLoggedIn"))
        })
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}

/// Redirect to the LINE login page.
pub fn login() -> Result<(), LiffError> {
    let liff = get_liff()?;
    method(&liff, "login")?
        .call0(&liff)
        .map(|_| ())
        .map_err(|_| LiffError::CallFailed("login"))
}

/// Fetch the logged-in user's profile.
pub async fn get_profile() -> Result<Profile, LiffError> {
    let liff = get_liff()?;
    let promise: Promise = method(&liff, "getProfile")?
        .call0(&liff)
        .map_err(|_| LiffError::CallFailed("getProfile"))?
        .into();

    let value = JsFuture::from(promise)
        .await
        .map_err(|e| LiffError::Rejected(rejection_message(&e)))?;

    serde_wasm_bindgen::from_value(value).map_err(|e| LiffError::InvalidProfile(e.to_string()))
}

/// Close the LIFF window (no-op in external browsers).
pub fn close_window() -> Result<(), LiffError> {
    let liff = get_liff()?;
    method(&liff, "closeWindow")?
        .call0(&liff)
        .map(|_| ())
        .map_err(|_| LiffError::CallFailed("closeWindow"))
}

/// Check whether a LIFF API can be used in the current environment.
pub fn is_api_available(api: &str) -> bool {
    get_liff()
        .and_then(|liff| {
            method(&liff, "isApiAvailable")?
                .call1(&liff, &api.into())
                .map_err(|_| LiffError::CallFailed("isApiAvailable"))
        })
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}

/// Open the share target picker.
///
/// Returns `Ok(true)` when the messages were sent and `Ok(false)` when the
/// user closed the picker.
pub async fn share_target_picker(messages: &[ShareMessage]) -> Result<bool, LiffError> {
    let liff = get_liff()?;

    let payload = serde_wasm_bindgen::to_value(messages)
        .map_err(|_| LiffError::CallFailed("shareTargetPicker"))?;
    let payload: Array = payload
        .dyn_into()
        .map_err(|_| LiffError::CallFailed("shareTargetPicker"))?;

    let promise: Promise = method(&liff, "shareTargetPicker")?
        .call1(&liff, &payload)
        .map_err(|_| LiffError::CallFailed("shareTargetPicker"))?
        .into();

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| LiffError::Rejected(rejection_message(&e)))?;

    Ok(result.is_truthy())
}
