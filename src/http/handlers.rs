//! Album request handlers.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::catalog::Album;
use crate::http::response::{ApiError, PrettyJson};
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /albums`
pub async fn list_albums(State(state): State<AppState>) -> PrettyJson<Vec<Album>> {
    PrettyJson(state.store.list())
}

/// `GET /albums/{id}`
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<PrettyJson<Album>, ApiError> {
    match state.store.find(&id) {
        Some(album) => Ok(PrettyJson(album)),
        None => {
            tracing::debug!(album_id = %id, "Album lookup missed");
            Err(ApiError::AlbumNotFound)
        }
    }
}

/// `POST /albums`
///
/// The body is bound as JSON whatever the declared content type. Only the
/// first JSON value is read.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, PrettyJson<Album>), ApiError> {
    let album = Album::from_json_prefix(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected album payload");
        ApiError::from(e)
    })?;

    let len = state.store.append(album.clone());
    metrics::record_store_size(len);
    tracing::info!(album_id = %album.id, albums = len, "Album created");

    Ok((StatusCode::CREATED, PrettyJson(album)))
}
