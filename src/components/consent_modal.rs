use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use crate::config;
use crate::Route;

/// How long after load the gate waits before presenting itself.
const MODAL_DELAY_MS: u32 = 1_000;

/// The accept action is available only once both acknowledgements are given.
pub fn accept_enabled(cookies_accepted: bool, terms_accepted: bool) -> bool {
    cookies_accepted && terms_accepted
}

fn stored_consent() -> bool {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::CONSENT_STORAGE_KEY).ok())
        .flatten()
        .is_some()
}

fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(ConsentModal)]
pub fn consent_modal() -> Html {
    let active = use_state(|| false);
    let cookies_accepted = use_state(|| false);
    let terms_accepted = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if !stored_consent() {
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(MODAL_DELAY_MS).await;
                        active.set(true);
                        set_body_overflow("hidden");
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_cookies_change = {
        let cookies_accepted = cookies_accepted.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cookies_accepted.set(input.checked());
        })
    };

    let on_terms_change = {
        let terms_accepted = terms_accepted.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            terms_accepted.set(input.checked());
        })
    };

    let on_accept = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
                let _ = storage.set_item(config::CONSENT_STORAGE_KEY, "true");
            }
            active.set(false);
            set_body_overflow("auto");
        })
    };

    let on_disagree = Callback::from(move |_: MouseEvent| {
        if let Some(window) = window() {
            let _ = window
                .alert_with_message("You must accept the policies to access the website.");
        }
    });

    html! {
        <div id="consent-modal" class={classes!("consent-modal", (*active).then(|| "active"))}>
            <div class="consent-dialog">
                <h3>{"Before you continue"}</h3>
                <p>
                    {"We use cookies to keep the site working and to understand how it is used. \
                      Please review and accept our policies to continue."}
                </p>
                <label class="consent-check">
                    <input
                        id="cookie-consent"
                        type="checkbox"
                        checked={*cookies_accepted}
                        onchange={on_cookies_change}
                    />
                    <span>
                        {"I accept the "}
                        <Link<Route> to={Route::Privacy}>{"cookie & privacy policy"}</Link<Route>>
                    </span>
                </label>
                <label class="consent-check">
                    <input
                        id="terms-consent"
                        type="checkbox"
                        checked={*terms_accepted}
                        onchange={on_terms_change}
                    />
                    <span>
                        {"I accept the "}
                        <Link<Route> to={Route::Terms}>{"terms & conditions"}</Link<Route>>
                    </span>
                </label>
                <div class="consent-actions">
                    <button
                        id="btn-accept"
                        class="consent-accept"
                        disabled={!accept_enabled(*cookies_accepted, *terms_accepted)}
                        onclick={on_accept}
                    >
                        {"Accept & Continue"}
                    </button>
                    <button id="btn-disagree" class="consent-disagree" onclick={on_disagree}>
                        {"Disagree"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_requires_both_acknowledgements() {
        assert!(!accept_enabled(false, false));
        assert!(!accept_enabled(true, false));
        assert!(!accept_enabled(false, true));
        assert!(accept_enabled(true, true));
    }
}
