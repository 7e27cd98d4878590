// tests/serve_routes.rs
//
// Router behavior over a temp serve root: inline index, download headers,
// alias routes, 404s.
//
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt; // oneshot

use dmm_scrape::serve::router;

async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_of(res: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn download_sets_type_and_attachment_disposition() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("game.swf"), b"FWS\x01").unwrap();
    let app = router(dir.path().to_path_buf());

    let res = get(app, "/game.swf").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[header::CONTENT_TYPE],
        "application/x-shockwave-flash"
    );
    assert_eq!(
        res.headers()[header::CONTENT_DISPOSITION],
        "attachment;filename=game.swf"
    );
    assert_eq!(body_of(res).await, b"FWS\x01");
}

#[tokio::test]
async fn alias_routes_resolve_by_basename() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("scene01.swf"), b"scene").unwrap();
    let app = router(dir.path().to_path_buf());

    // Both prefixes serve the same file from the serve root.
    let res = get(app.clone(), "/scenes/scene01.swf").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_of(res).await, b"scene");

    let res = get(app, "/resources/swf/scene01.swf").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_of(res).await, b"scene");
}

#[tokio::test]
async fn index_is_served_inline() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), b"<html>hi</html>").unwrap();
    let app = router(dir.path().to_path_buf());

    let res = get(app, "/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert!(res.headers().get(header::CONTENT_DISPOSITION).is_none());
}

#[tokio::test]
async fn main_movie_is_served_inline() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("mainD2.swf"), b"FWS\x02").unwrap();
    let app = router(dir.path().to_path_buf());

    let res = get(app, "/mainD2.swf").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[header::CONTENT_TYPE],
        "application/x-shockwave-flash"
    );
    assert!(res.headers().get(header::CONTENT_DISPOSITION).is_none());
}

#[tokio::test]
async fn missing_file_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = router(dir.path().to_path_buf());

    let res = get(app.clone(), "/nothing.swf").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = get(app, "/scenes/nothing.swf").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn traversal_shaped_names_are_404() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("real.swf"), b"x").unwrap();
    let app = router(dir.path().to_path_buf());

    let res = get(app, "/..").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
