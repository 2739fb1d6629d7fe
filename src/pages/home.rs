use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::contact_form::ContactForm;
use crate::components::reviews::Reviews;
use crate::config;
use crate::scroll;
use crate::Route;

struct Service {
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Fast, responsive websites and web apps built to convert visitors \
                      into enquiries.",
    },
    Service {
        title: "Branding & Design",
        description: "Logos, identity systems and collateral that make your business \
                      instantly recognisable.",
    },
    Service {
        title: "Digital Marketing",
        description: "Search, social and local campaigns measured against the numbers \
                      that matter to you.",
    },
    Service {
        title: "Consulting",
        description: "Honest, practical guidance on where your online presence should \
                      go next.",
    },
];

struct Story {
    client: &'static str,
    headline: &'static str,
    detail: &'static str,
}

const STORIES: &[Story] = &[
    Story {
        client: "Saffron Table",
        headline: "3x more weekend reservations",
        detail: "A neighbourhood restaurant went from walk-ins only to a steady online \
                 booking pipeline in eight weeks.",
    },
    Story {
        client: "Kinfolk Interiors",
        headline: "From referrals to a full order book",
        detail: "A portfolio site and a focused local campaign turned a word-of-mouth \
                 studio into the area's first search result.",
    },
    Story {
        client: "Trailhead Fitness",
        headline: "Memberships sold while they sleep",
        detail: "Class schedules, payments and reminders moved online, freeing the \
                 founders to coach instead of answering calls.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    use_effect_with_deps(|_| scroll::mount_reveal_observer(), ());

    html! {
        <div class="home-page">
            <section class="hero" id="top">
                <div class="hero-content fade-up">
                    <h1>{"Your business, found and remembered."}</h1>
                    <p class="hero-subtitle">
                        {"Vyntyra builds websites, brands and campaigns for businesses \
                          that live on word of mouth and want more than that."}
                    </p>
                    <a href="#contact" class="hero-cta">{"Start a Project"}</a>
                </div>
            </section>

            <section id="services" class="services-section">
                <h2 class="fade-up">{"What We Do"}</h2>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="stories" class="stories-section">
                <h2 class="fade-up">{"Client Stories"}</h2>
                <div class="stories-grid">
                    {
                        STORIES.iter().map(|story| html! {
                            <div class="story-card">
                                <span class="story-client">{story.client}</span>
                                <h3>{story.headline}</h3>
                                <p>{story.detail}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <Reviews />

            <section id="contact" class="contact-section">
                <div class="contact-intro fade-up">
                    <h2>{"Tell Us What You're Building"}</h2>
                    <p>
                        {"Fill in the form and we'll pick the conversation up on WhatsApp, \
                          usually within the hour."}
                    </p>
                </div>
                <ContactForm />
            </section>

            <footer class="site-footer">
                <div class="footer-contact">
                    <span>{"Vyntyra"}</span>
                    <a href={format!("https://wa.me/{}", config::WHATSAPP_NUMBER)}>
                        {"+91 93905 15106"}
                    </a>
                </div>
                <div class="footer-legal">
                    <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </div>
            </footer>
        </div>
    }
}
