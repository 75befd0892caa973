use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::pairs::{PairService, PairsResponse},
    error::{AppError, AppResult},
};

/// Request for POST /api/parse-bulk-text
#[derive(Debug, Serialize, Deserialize)]
pub struct BulkTextRequest {
    #[serde(default)]
    pub text: String,
}

pub struct PairsController {
    pair_service: Arc<PairService>,
}

impl PairsController {
    pub fn new(pair_service: Arc<PairService>) -> Self {
        Self { pair_service }
    }

    /// POST /api/upload-file - Parse an uploaded .csv, .txt or .json file into pairs
    pub async fn upload_file(
        State(controller): State<Arc<PairsController>>,
        mut multipart: Multipart,
    ) -> AppResult<Json<PairsResponse>> {
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some("file") {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(multipart_error)?;

            let pairs = controller.pair_service.parse_upload(&filename, &bytes)?;

            tracing::info!(
                filename = %filename,
                pair_count = pairs.len(),
                "Parsed uploaded file"
            );

            return Ok(Json(PairsResponse { pairs }));
        }

        Err(AppError::BadRequest("No file uploaded".to_string()))
    }

    /// POST /api/parse-bulk-text - Parse pasted alternating lines into pairs
    pub async fn parse_bulk_text(
        State(controller): State<Arc<PairsController>>,
        Json(request): Json<BulkTextRequest>,
    ) -> AppResult<Json<PairsResponse>> {
        let pairs = controller.pair_service.parse_bulk_text(&request.text);
        tracing::debug!(pair_count = pairs.len(), "Parsed bulk text");
        Ok(Json(PairsResponse { pairs }))
    }
}

fn multipart_error(error: MultipartError) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(error.body_text())
    } else {
        AppError::BadRequest(error.body_text())
    }
}
