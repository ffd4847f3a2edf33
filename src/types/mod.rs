use std::fmt;
use std::sync::Arc;

use crate::components::PageRenderer;
use crate::services::PageStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PageStore>,
    pub renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    pub fn new(store: PageStore, renderer: impl PageRenderer + 'static) -> Self {
        Self {
            store: Arc::new(store),
            renderer: Arc::new(renderer),
        }
    }
}

/// A page title: one or more ASCII letters or digits.
///
/// Holding a `Title` means the value is safe to use as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Validate `raw` as a title
    pub fn parse(raw: &str) -> Option<Self> {
        if is_valid_title(raw) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True when `raw` is non-empty and only ASCII alphanumerics
pub fn is_valid_title(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// A wiki page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: Title,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: Title, body: impl Into<Vec<u8>>) -> Self {
        Self { title, body: body.into() }
    }

    /// Page with no body yet
    pub fn empty(title: Title) -> Self {
        Self { title, body: Vec::new() }
    }

    /// Body as text, replacing invalid UTF-8
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_and_digits() {
        assert!(Title::parse("FrontPage").is_some());
        assert!(Title::parse("Page2").is_some());
        assert!(Title::parse("42").is_some());
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["", "a b", "a/b", "..", "a.txt", "Über", "a-b", "a_b", "%2F"] {
            assert!(Title::parse(raw).is_none(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn body_text_is_lossy() {
        let page = Page::new(Title::parse("Bin").unwrap(), vec![b'o', b'k', 0xff]);
        assert_eq!(page.body_text(), "ok\u{fffd}");
    }
}
