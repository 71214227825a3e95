//! Session boot sequence.
//!
//! Initializes the LIFF SDK, sends logged-out users to the LINE login page
//! and loads the profile shown in the header.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::{AppContext, Session};
use crate::config::{LIFF_ID, LIFF_LOGIN_ON_EXTERNAL_BROWSER, text};
use crate::core::error::LiffError;
use crate::core::liff::{self, Profile};
use crate::utils::{console, dom};

/// Run the boot sequence.
///
/// 1. Initialize the SDK
/// 2. Redirect to login when the user is logged out (the page reloads after)
/// 3. Fetch the profile and mark the session ready
///
/// Any failure alerts the user and halts setup.
pub fn run(ctx: AppContext) {
    spawn_local(async move {
        let result = boot().await;
        if let Err(e) = &result {
            console::error(&format!("LIFF initialization failed: {}", e));
            dom::alert(text::INIT_FAILED);
        }
        if let Some(session) = settle(result) {
            ctx.session.set(session);
        }
    });
}

/// Session state after boot; `None` while the login redirect is pending.
fn settle(result: Result<Option<Profile>, LiffError>) -> Option<Session> {
    match result {
        Ok(Some(profile)) => {
            console::log(&format!("Logged in as {}", profile.display_name));
            Some(Session::Ready(profile))
        }
        Ok(None) => None,
        Err(_) => Some(Session::Failed),
    }
}

async fn boot() -> Result<Option<Profile>, LiffError> {
    liff::init(LIFF_ID, LIFF_LOGIN_ON_EXTERNAL_BROWSER).await?;
    console::log("LIFF initialized!");

    if !liff::is_logged_in() {
        liff::login()?;
        return Ok(None);
    }

    liff::get_profile().await.map(Some)
}
