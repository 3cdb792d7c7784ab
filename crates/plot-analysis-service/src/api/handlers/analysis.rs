//! Plot analysis handler

use crate::api::state::AppState;
use axum::{extract::State, http::Uri, Json};
use percent_encoding::percent_decode_str;
use plot_analysis_core::AnalysisResponse;
use std::borrow::Cow;

/// Analyze a plot. Every id, known or not, yields a 200 response.
///
/// The id is read from the raw path rather than through `Path<String>` so
/// that percent-encoded bytes which are not valid UTF-8 decode lossily
/// instead of being rejected.
pub async fn analyze_plot(uri: Uri, State(state): State<AppState>) -> Json<AnalysisResponse> {
    let plot_id = plot_id_from_path(uri.path());
    Json(state.analyzer.analyze(&plot_id).await)
}

/// Last path segment, percent-decoded with U+FFFD for invalid UTF-8.
fn plot_id_from_path(path: &str) -> Cow<'_, str> {
    let raw = path.rsplit('/').next().unwrap_or_default();
    percent_decode_str(raw).decode_utf8_lossy()
}
