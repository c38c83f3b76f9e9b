pub mod activities;
pub mod search;

use axum::response::Redirect;

/// `GET /` sends the browser to the static front-end entry point. Temporary
/// so the redirect target is re-resolved on every visit.
pub async fn root_handler() -> Redirect {
    Redirect::temporary("/static/index.html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn root_redirects_temporarily_to_static_index() {
        let response = root_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/static/index.html"
        );
    }
}
