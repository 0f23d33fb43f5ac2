
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // relay running locally next to the dev server
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // served by the relay itself
}

/// Demo mode unless the build sets TENACARE_LIVE_CONTACT=1.
pub fn live_contact_form() -> bool {
    matches!(option_env!("TENACARE_LIVE_CONTACT"), Some("1") | Some("true"))
}
