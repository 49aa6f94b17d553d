/// Action control shown on error pages.
///
/// The two modes are exclusive: either the button re-runs the failed request
/// ("Try Again") or it links somewhere safe ("Go Home").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorButton {
    /// Reload `reset_url` when activated.
    Retry(String),
    /// Navigate to the given destination.
    Link(String),
    /// Renders nothing.
    #[default]
    Hidden,
}

impl ErrorButton {
    /// Build from optional parts. A reset action takes precedence over a link.
    pub fn from_parts(reset_url: Option<String>, href: Option<String>) -> Self {
        match (reset_url, href) {
            (Some(url), _) => Self::Retry(url),
            (None, Some(href)) => Self::Link(href),
            (None, None) => Self::Hidden,
        }
    }

    pub fn reset_url(&self) -> Option<&str> {
        match self {
            Self::Retry(url) => Some(url),
            _ => None,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Link(href) => Some(href),
            _ => None,
        }
    }
}
