//! Path matching for the page routes.
//!
//! Only `/view/<title>`, `/edit/<title>` and `/save/<title>` are accepted.
//! Anything else, including a title with characters outside `[a-zA-Z0-9]`,
//! is rejected here before any handler touches the filesystem.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::WikiError;
use crate::types::Title;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    View,
    Edit,
    Save,
}

impl RouteKind {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "view" => Some(RouteKind::View),
            "edit" => Some(RouteKind::Edit),
            "save" => Some(RouteKind::Save),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteKind::View => "view",
            RouteKind::Edit => "edit",
            RouteKind::Save => "save",
        }
    }

    /// Request path for this route and `title`
    pub fn path_for(self, title: &Title) -> String {
        format!("/{}/{}", self.as_str(), title)
    }
}

/// A validated page route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: RouteKind,
    pub title: Title,
}

impl Route {
    /// Match `path` against `/<kind>/<title>`
    pub fn parse(path: &str) -> Option<Self> {
        let rest = path.strip_prefix('/')?;
        let (segment, title) = rest.split_once('/')?;
        let kind = RouteKind::from_segment(segment)?;
        let title = Title::parse(title)?;
        Some(Route { kind, title })
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Route
where
    S: Send + Sync,
{
    type Rejection = WikiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path();
        match Route::parse(path) {
            Some(route) => Ok(route),
            None => {
                log::warn!("Rejected request path: '{}'", path);
                Err(WikiError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_all_three_shapes() {
        for (path, kind) in [
            ("/view/FrontPage", RouteKind::View),
            ("/edit/FrontPage", RouteKind::Edit),
            ("/save/FrontPage", RouteKind::Save),
        ] {
            let route = Route::parse(path).unwrap();
            assert_eq!(route.kind, kind);
            assert_eq!(route.title.as_str(), "FrontPage");
        }
    }

    #[test]
    fn rejects_bad_titles() {
        for path in [
            "/view/",
            "/view/a b",
            "/view/a/b",
            "/view/../secret",
            "/edit/a.txt",
            "/save/a%2Fb",
            "/view/FrontPage/",
        ] {
            assert!(Route::parse(path).is_none(), "{path:?} should be rejected");
        }
    }

    #[test]
    fn rejects_unknown_prefixes() {
        for path in ["", "/", "/FrontPage", "/delete/FrontPage", "view/FrontPage", "/View/FrontPage"] {
            assert!(Route::parse(path).is_none(), "{path:?} should be rejected");
        }
    }

    #[test]
    fn builds_paths() {
        let title = Title::parse("Home").unwrap();
        assert_eq!(RouteKind::Edit.path_for(&title), "/edit/Home");
        assert_eq!(RouteKind::View.path_for(&title), "/view/Home");
    }
}
