//! Material detail modal.
//!
//! Centered dialog on desktop, bottom sheet on narrow screens.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons::{self as ic, material_glyph};
use crate::config::text;
use crate::core::liff::{self, SHARE_TARGET_PICKER, ShareMessage};
use crate::models::MaterialDetail;
use crate::utils::{console, dom};

stylance::import_crate_style!(css, "src/components/materials/detail.module.css");

const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Share `message` through the LINE share target picker.
async fn share(message: String) {
    if !liff::is_api_available(SHARE_TARGET_PICKER) {
        dom::alert(text::SHARE_UNSUPPORTED);
        return;
    }

    match liff::share_target_picker(&[ShareMessage::text(message)]).await {
        Ok(true) => dom::alert(text::SHARE_SUCCESS),
        Ok(false) => console::log("Share cancelled by user"),
        Err(e) => console::error(&format!("Share failed: {}", e)),
    }
}

#[component]
pub fn DetailModal(detail: MaterialDetail) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_mobile = use_media_query(MOBILE_QUERY);

    let close = move || ctx.navigate(|n| n.close_detail());
    let share_text = detail.share_text();

    let MaterialDetail {
        title,
        topic_type,
        description,
        icon,
        link,
        fields,
    } = detail;

    view! {
        <div class=css::backdrop on:click=move |_| { close(); }>
            <div
                class=move || {
                    if is_mobile.get() {
                        format!("{} {}", css::dialog, css::sheet)
                    } else {
                        css::dialog.to_string()
                    }
                }
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class=css::titleRow>
                    <span class=css::icon><Icon icon=material_glyph(icon) /></span>
                    <div class=css::titleText>
                        <h3 class=css::title>{title}</h3>
                        <p class=css::meta>{topic_type}</p>
                    </div>
                    <button class=css::closeButton on:click=move |_| { close(); } title="關閉">
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>

                <p class=css::description>{description}</p>

                {(!fields.is_empty()).then(|| view! {
                    <dl class=css::fields>
                        {fields
                            .into_iter()
                            .map(|field| view! {
                                <div class=css::field>
                                    <dt>{field.label}</dt>
                                    <dd>{field.value}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                })}

                {link.map(|url| {
                    let target = url.clone();
                    view! {
                        <div class=css::linkSection>
                            <span class=css::linkText>{url}</span>
                            <button
                                class=css::primary
                                on:click=move |_| dom::open_url(&target)
                            >
                                <Icon icon=ic::EXTERNAL_LINK />
                                <span>"開啟連結"</span>
                            </button>
                        </div>
                    }
                })}

                <button
                    class=css::secondary
                    on:click=move |_| spawn_local(share(share_text.clone()))
                >
                    <Icon icon=ic::SHARE />
                    <span>"分享"</span>
                </button>
            </div>
        </div>
    }
}
