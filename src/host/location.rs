//! Page location providers

use super::UrlProvider;
use crate::errors::FormatError;

/// Reads `window.location.href`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLocation;

impl UrlProvider for WindowLocation {
    fn current_url(&self) -> Result<String, FormatError> {
        let window = web_sys::window()
            .ok_or_else(|| FormatError::Location("no global window".to_string()))?;
        window
            .location()
            .href()
            .map_err(|e| FormatError::Location(format!("{:?}", e)))
    }
}

/// Fixed URL, for callers that already know the page address
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticUrl(pub String);

impl StaticUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl UrlProvider for StaticUrl {
    fn current_url(&self) -> Result<String, FormatError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_url() {
        let provider = StaticUrl::new("https://example.org/story/demo?3");
        assert_eq!(provider.current_url().unwrap(), "https://example.org/story/demo?3");
    }
}
