
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8000"  // php -S localhost:8000 next to send.php
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // same origin in production
}

pub fn contact_endpoint() -> String {
    format!("{}/send.php", get_backend_url())
}

pub const SITE_NAME: &str = "Celebrate Atlantis";
