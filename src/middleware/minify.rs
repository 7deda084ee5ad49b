use axum::{body::Body, response::Response};
cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::{body::to_bytes, http::header};
        use std::sync::LazyLock;

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_css: true,
            minify_js: true,
            ..Default::default()
        });

        async fn minify(response: Response<Body>) -> Response<Body> {
            let is_html = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("text/html"));

            if !is_html {
                return response;
            }

            let (parts, body) = response.into_parts();
            match to_bytes(body, usize::MAX).await {
                Ok(bytes) => {
                    Response::from_parts(parts, Body::from(minify_html::minify(&bytes, &MINIFY_CFG)))
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to buffer HTML response for minification");
                    Response::from_parts(parts, Body::empty())
                }
            }
        }
    } else {
        async fn minify(response: Response<Body>) -> Response<Body> {
            response
        }
    }
}

/// Minify `text/html` bodies in release builds; debug builds pass through.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    minify(response).await
}
