use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod scroll;
mod pages {
    pub mod home;
    pub mod termsprivacy;
}
mod components {
    pub mod consent_modal;
    pub mod contact_form;
    pub mod reviews;
}

use pages::{
    home::Home,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};
use components::consent_modal::ConsentModal;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

// Behavioral styles only: reveal transitions, filter fades, menu and modal
// visibility states. Presentation lives in the site stylesheet.
const BEHAVIOR_CSS: &str = r#"
.fade-up, .service-card, .story-card {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.fade-up.is-visible, .service-card.is-visible, .story-card.is-visible {
    opacity: 1;
    transform: none;
}
.review-card { transition: opacity 0.3s ease; }
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 10;
    transition: background 0.3s ease, box-shadow 0.3s ease;
}
.site-header.scrolled {
    background: #111;
    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.35);
}
.hamburger { display: none; }
.nav-menu { display: flex; gap: 1.5rem; }
@media (max-width: 768px) {
    .hamburger { display: block; }
    .nav-menu { display: none; }
    .nav-menu.active { display: flex; flex-direction: column; }
}
.consent-modal {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    z-index: 100;
    align-items: center;
    justify-content: center;
}
.consent-modal.active { display: flex; }
"#;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or_default();
                    is_scrolled.set(scroll::header_scrolled(offset));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // The anchor delegate lives here so fragment links work from any route.
    use_effect_with_deps(|_| scroll::mount_anchor_delegate(), ());

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header id="main-header" class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="top-nav">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Vyntyra"}
                </Link<Route>>

                <button
                    class={classes!("hamburger", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    <a href="#services" class="nav-link" onclick={close_menu.clone()}>
                        {"Services"}
                    </a>
                    <a href="#stories" class="nav-link" onclick={close_menu.clone()}>
                        {"Stories"}
                    </a>
                    <a href="#reviews" class="nav-link" onclick={close_menu.clone()}>
                        {"Reviews"}
                    </a>
                    <a href="#contact" class="nav-link" onclick={close_menu}>
                        {"Contact"}
                    </a>
                </div>
            </nav>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{BEHAVIOR_CSS}</style>
            <Nav />
            <Switch<Route> render={switch} />
            <ConsentModal />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
