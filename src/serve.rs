// src/serve.rs
//! Static/file-download routes for the game client.
//!
//! `/` and `/mainD2.swf` answer inline; everything else is a single-segment
//! download with `Content-Type` derived from the extension and an
//! attachment disposition. The `scenes/` and `resources/swf/` prefixes are
//! routing aliases: every download resolves by basename against the serve
//! root.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Path as FileName, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::config::consts::{INDEX_FILE, MAIN_MOVIE};
use crate::core::mime;

type ServeRoot = Arc<PathBuf>;

pub fn router(root: PathBuf) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/mainD2.swf", get(main_movie))
        .route("/{file}", get(download))
        .route("/scenes/{file}", get(download))
        .route("/resources/swf/{file}", get(download))
        .with_state(Arc::new(root))
}

async fn index(State(root): State<ServeRoot>) -> Response {
    send_inline(root.join(INDEX_FILE)).await
}

async fn main_movie(State(root): State<ServeRoot>) -> Response {
    send_inline(root.join(MAIN_MOVIE)).await
}

async fn send_inline(path: PathBuf) -> Response {
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, mime::from_path(&path))], bytes).into_response(),
        Err(_) => not_found(),
    }
}

// `/{file}`, `/scenes/{file}`, `/resources/swf/{file}`
async fn download(State(root): State<ServeRoot>, FileName(file): FileName<String>) -> Response {
    logf!("request file {file}");

    if !safe_name(&file) {
        return not_found();
    }

    let path = root.join(&file);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mimetype = mime::from_path(&path);
            logd!("serving {file} as {mimetype}");
            (
                [
                    (header::CONTENT_TYPE, s!(mimetype)),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment;filename={file}"),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(_) => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}

// One plain path segment only; no traversal
fn safe_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
