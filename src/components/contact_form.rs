use yew::prelude::*;
use gloo_console::log;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use crate::config;

/// Everything captured from the form at submit time. Not retained afterwards.
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

pub fn format_enquiry_message(enquiry: &Enquiry) -> String {
    format!(
        "*New Enquiry from Website*\n\
         ---------------------------\n\
         *Name:* {}\n\
         *Email:* {}\n\
         *Phone:* {}\n\
         *Service:* {}\n\
         *Message:* {}",
        enquiry.name, enquiry.email, enquiry.phone, enquiry.service, enquiry.message
    )
}

pub fn whatsapp_url(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let service_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let service_ref = service_ref.clone();
        let message_ref = message_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = match form_ref.cast() {
                Some(form) => form,
                None => return,
            };

            let enquiry = Enquiry {
                name: name_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default(),
                email: email_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default(),
                phone: phone_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default(),
                service: service_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default(),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };

            // Best-effort delivery to the backend. The WhatsApp redirect below
            // never waits on it and its failures stay in the console.
            if let Ok(form_data) = FormData::new_with_form(&form) {
                spawn_local(async move {
                    let result = Request::post(&format!(
                        "{}{}",
                        config::get_backend_url(),
                        config::ENQUIRY_PATH
                    ))
                    .body(form_data)
                    .send()
                    .await;
                    if let Err(err) = result {
                        log!("Backend submission failed:", err.to_string());
                    }
                });
            }

            let message = format_enquiry_message(&enquiry);
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&whatsapp_url(&message), "_blank");
            }

            form.reset();
        })
    };

    html! {
        <form class="contact-form" ref={form_ref} onsubmit={onsubmit}>
            <div class="form-row">
                <input
                    ref={name_ref}
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    required={true}
                />
                <input
                    ref={email_ref}
                    type="email"
                    name="email"
                    placeholder="Email Address"
                    required={true}
                />
            </div>
            <div class="form-row">
                <input
                    ref={phone_ref}
                    type="tel"
                    name="phone"
                    placeholder="Phone Number"
                    required={true}
                />
                <select ref={service_ref} name="service" required={true}>
                    <option value="" disabled={true} selected={true}>{"What do you need?"}</option>
                    <option value="Web Development">{"Web Development"}</option>
                    <option value="Branding & Design">{"Branding & Design"}</option>
                    <option value="Digital Marketing">{"Digital Marketing"}</option>
                    <option value="Consulting">{"Consulting"}</option>
                </select>
            </div>
            <textarea
                ref={message_ref}
                name="message"
                rows="5"
                placeholder="Tell us about your project"
                required={true}
            />
            <button type="submit" class="submit-btn">{"Send Enquiry"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_enquiry() -> Enquiry {
        Enquiry {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555".to_string(),
            service: "Consulting".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn message_uses_the_enquiry_template() {
        let message = format_enquiry_message(&sample_enquiry());
        assert_eq!(
            message,
            "*New Enquiry from Website*\n\
             ---------------------------\n\
             *Name:* Jane\n\
             *Email:* jane@x.com\n\
             *Phone:* 555\n\
             *Service:* Consulting\n\
             *Message:* Hi"
        );
    }

    #[test]
    fn deep_link_targets_the_fixed_recipient() {
        let url = whatsapp_url("hello");
        assert_eq!(url, "https://wa.me/919390515106?text=hello");
    }

    #[test]
    fn deep_link_percent_encodes_the_message() {
        let message = format_enquiry_message(&sample_enquiry());
        let url = whatsapp_url(&message);

        assert!(url.starts_with("https://wa.me/919390515106?text="));
        assert!(url.contains("%2ANew%20Enquiry%20from%20Website%2A"));
        assert!(url.contains("%2AName%3A%2A%20Jane"));
        assert!(url.contains("%2AService%3A%2A%20Consulting"));
        assert!(url.contains("%2AMessage%3A%2A%20Hi"));

        // The encoded text must decode back to exactly the formatted message.
        let encoded = url.split("text=").nth(1).unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), message);
    }
}
