use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

use crate::{
    domain::tts::{
        BulkTtsRequest, BulkTtsResponse, BulkTtsService, BulkTtsServiceApi, LanguageInfo,
        LanguagesResponse, SUPPORTED_LANGUAGES,
    },
    error::AppResult,
};

pub struct TtsController {
    bulk_tts_service: Arc<BulkTtsService>,
}

impl TtsController {
    pub fn new(bulk_tts_service: Arc<BulkTtsService>) -> Self {
        Self { bulk_tts_service }
    }

    /// POST /api/bulk-tts - Speak every pair into one audio file
    pub async fn bulk_tts(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<BulkTtsRequest>,
    ) -> AppResult<Json<BulkTtsResponse>> {
        let result = controller.bulk_tts_service.assemble(request.pairs).await?;

        tracing::info!(
            pair_count = result.pair_count,
            duration_ms = result.duration.as_millis() as u64,
            byte_count = result.audio_data.len(),
            "Bulk synthesis complete"
        );

        Ok(Json(BulkTtsResponse {
            audio: STANDARD.encode(&result.audio_data),
            format: result.format.to_string(),
        }))
    }

    /// GET /api/languages - List the languages pairs can be spoken in
    pub async fn languages() -> Json<LanguagesResponse> {
        Json(LanguagesResponse {
            languages: SUPPORTED_LANGUAGES
                .iter()
                .copied()
                .map(LanguageInfo::from)
                .collect(),
        })
    }
}
