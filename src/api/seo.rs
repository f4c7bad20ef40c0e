use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::http::server::AppState;
use crate::seo::{render_robots, render_sitemap};

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let xml = render_sitemap(&state.site.base_url, &state.catalog.slugs());
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.site.base_url),
    )
}
