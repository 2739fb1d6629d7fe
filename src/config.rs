#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://127.0.0.1:8000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL, same origin
}

/// Path the enquiry form posts to on the backend.
pub const ENQUIRY_PATH: &str = "/submit-enquiry/";

/// WhatsApp number enquiries are redirected to, international format
/// without the leading plus (wa.me URL scheme).
pub const WHATSAPP_NUMBER: &str = "919390515106";

/// localStorage key recording that the visitor accepted cookies and terms.
pub const CONSENT_STORAGE_KEY: &str = "vyntyra_consent";
