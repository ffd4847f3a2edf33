use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::components::TemplateName;
use crate::errors::WikiError;
use crate::form::SaveBody;
use crate::router::{Route, RouteKind};
use crate::services::LinkRewriter;
use crate::types::{AppState, Page};
use crate::utils::escape_html;

pub const FRONT_PAGE: &str = "FrontPage";

/// 302 Found pointing at `location`
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Handle root path requests
pub async fn handle_root() -> Response {
    log::debug!("Root request, redirecting to {}", FRONT_PAGE);
    found(&format!("/view/{}", FRONT_PAGE))
}

/// Show a page with its link tokens turned into anchors.
///
/// The stored text is HTML-escaped before links are added, so markup typed
/// into a page is displayed as text rather than interpreted by the browser.
pub async fn handle_view(
    State(state): State<AppState>,
    route: Route,
) -> Result<Response, WikiError> {
    log::info!("{} request received: '{}'", route.kind.as_str(), route.title);

    let page = match state.store.load(&route.title) {
        Ok(page) => page,
        Err(_) => {
            log::info!("Page '{}' does not exist, redirecting to editor", route.title);
            return Ok(found(&RouteKind::Edit.path_for(&route.title)));
        }
    };

    let escaped = escape_html(&page.body_text());
    let body = LinkRewriter::new().rewrite(escaped.as_bytes());
    let page = Page::new(page.title, body);

    let html = state.renderer.render(TemplateName::View, &page).map_err(|e| {
        log::error!("Failed to render view for '{}': {}", page.title, e);
        e
    })?;
    Ok(Html(html).into_response())
}

/// Show the editor with the page's raw text, or an empty one for a new page.
///
/// The text is escaped for the textarea but links are left as typed.
pub async fn handle_edit(
    State(state): State<AppState>,
    route: Route,
) -> Result<Response, WikiError> {
    log::info!("{} request received: '{}'", route.kind.as_str(), route.title);

    let page = state
        .store
        .load(&route.title)
        .unwrap_or_else(|_| Page::empty(route.title.clone()));
    let body = escape_html(&page.body_text());
    let page = Page::new(page.title, body);

    let html = state.renderer.render(TemplateName::Edit, &page).map_err(|e| {
        log::error!("Failed to render editor for '{}': {}", page.title, e);
        e
    })?;
    Ok(Html(html).into_response())
}

/// Persist the posted body and send the browser back to the page
pub async fn handle_save(
    State(state): State<AppState>,
    route: Route,
    SaveBody(body): SaveBody,
) -> Result<Response, WikiError> {
    log::info!("{} request received: '{}', {} bytes", route.kind.as_str(), route.title, body.len());

    let page = Page::new(route.title, body);
    state.store.save(&page)?;
    Ok(found(&RouteKind::View.path_for(&page.title)))
}

/// Anything that is not a page route
pub async fn handle_not_found(uri: axum::http::Uri) -> WikiError {
    log::warn!("Path not found: '{}'", uri.path());
    WikiError::NotFound
}
