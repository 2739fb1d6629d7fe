use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="legal-page">
            <h1>{"Terms & Conditions"}</h1>
            <section>
                <h2>{"Using this site"}</h2>
                <p>
                    {"By browsing this website or sending us an enquiry you agree to these \
                      terms. If you do not agree, please do not use the site."}
                </p>
            </section>
            <section>
                <h2>{"Enquiries"}</h2>
                <p>
                    {"Submitting the contact form opens a WhatsApp conversation with us and \
                      sends a copy of your enquiry to our systems so we can respond. An \
                      enquiry is not a contract; all engagements are agreed in writing \
                      separately."}
                </p>
            </section>
            <section>
                <h2>{"Content"}</h2>
                <p>
                    {"Client names and results shown on this site are published with \
                      permission. All other content belongs to Vyntyra and may not be \
                      reproduced without consent."}
                </p>
            </section>
            <Link<Route> to={Route::Home} classes="back-link">{"Back to home"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="legal-page">
            <h1>{"Privacy & Cookie Policy"}</h1>
            <section>
                <h2>{"What we collect"}</h2>
                <p>
                    {"The contact form collects your name, email address, phone number, the \
                      service you are interested in and your message. We use these only to \
                      respond to your enquiry."}
                </p>
            </section>
            <section>
                <h2>{"Cookies & storage"}</h2>
                <p>
                    {"The site stores a single flag in your browser recording that you \
                      accepted this policy, so the consent prompt is not shown again. No \
                      tracking cookies are set."}
                </p>
            </section>
            <section>
                <h2>{"Third parties"}</h2>
                <p>
                    {"Choosing to continue an enquiry on WhatsApp is subject to WhatsApp's \
                      own terms and privacy policy."}
                </p>
            </section>
            <Link<Route> to={Route::Home} classes="back-link">{"Back to home"}</Link<Route>>
        </div>
    }
}
