//! Upload page
//!
//! A single static page: two file pickers, a submit button, and a view of the
//! returned question. The JSON download is built in the browser from the
//! response it already holds.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
