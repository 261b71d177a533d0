use log::Level;

/// Autoplay period of the gallery carousel.
pub const CAROUSEL_INTERVAL_MS: u32 = 4_000;

/// How long the Instagram feed may stay silent before the local gallery is shown.
pub const FEED_TIMEOUT_MS: u32 = 8_000;

pub const INSTAGRAM_HANDLE: &str = "nakhakala";
pub const INSTAGRAM_EMBED_SCRIPT: &str = "https://www.instagram.com/embed.js";
pub const INSTAGRAM_EMBED_SCRIPT_ID: &str = "instagram-embed-script";

pub const GALLERY_IMAGE_DIR: &str = "/assets/images/gallery";

// Scroll thresholds, in CSS pixels.
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;
pub const NAV_SECTION_PROBE: f64 = 100.0;
pub const NAV_HEIGHT_OFFSET: f64 = 80.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
pub const SWIPE_CLOSE_DISTANCE: f64 = 50.0;

pub fn instagram_profile_url() -> String {
    format!("https://instagram.com/{}", urlencoding::encode(INSTAGRAM_HANDLE))
}

pub fn instagram_permalink() -> String {
    format!("https://www.instagram.com/{}/", urlencoding::encode(INSTAGRAM_HANDLE))
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
