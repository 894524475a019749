// SPDX-License-Identifier: Apache-2.0

//! Embedded frontend assets. The entry page and its companions are compiled
//! into the binary so the server ships as a single artifact; they are thin
//! framework configuration, not part of the API contract.

use axum::http::header;
use axum::response::{Html, IntoResponse};

pub(crate) async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

pub(crate) async fn app_js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        include_str!("../../assets/app.js"),
    )
}

pub(crate) async fn styles_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../assets/styles.css"),
    )
}
