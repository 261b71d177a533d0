use thiserror::Error;

/// Problems with the static site configuration. These are fatal to the
/// component that hit them; the hosting view logs them and renders without it.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("carousel started with an empty slide list")]
    EmptySlides,
    #[error("gallery configuration is invalid: {0}")]
    Gallery(#[from] serde_json::Error),
}
