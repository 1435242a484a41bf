use std::path::Path;

use axum::{
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

/// Static files from `dist`, with `index.html` for every unknown path.
pub fn router(dist: &Path) -> Router {
    let index = ServeFile::new(dist.join("index.html"));

    Router::new()
        .fallback_service(ServeDir::new(dist).fallback(index))
        .layer(middleware::from_fn(log_request))
}

async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;
    tracing::debug!("{method} {path} -> {}", response.status());
    response
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{body::to_bytes, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn dist_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("workout-tracker-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>tracker</html>").unwrap();
        std::fs::write(dir.join("frontend.js"), "console.log('hi')").unwrap();
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router.oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_assets() {
        let dir = dist_dir("assets");
        let (status, body) = get(router(&dir), "/frontend.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('hi')");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = dist_dir("fallback");
        let (status, body) = get(router(&dir), "/some/page").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>tracker</html>");

        let (_, body) = get(router(&dir), "/").await;
        assert_eq!(body, "<html>tracker</html>");
    }
}
