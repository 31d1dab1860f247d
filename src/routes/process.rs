//! Screenshot processing route
//!
//! `POST /api/process` takes a multipart form with `questionImage` and
//! `answerImage`, runs OCR on both concurrently, and answers with the
//! extracted question as a downloadable `mcq.json`.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use crate::error::Result;
use crate::extraction::{self, ExtractionResult};
use crate::state::AppState;
use crate::upload::{ImageRole, ImageUpload, UploadError, UploadedImage, DEFAULT_FILE_NAME};

/// Attachment name of the JSON response
pub const RESULT_FILE_NAME: &str = "mcq.json";

/// Create the processing router
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/process", post(process_images))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// POST /api/process
async fn process_images(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Response> {
    // A body that is not multipart at all carries no images either
    let multipart = multipart.map_err(|e| {
        tracing::debug!("Multipart rejection: {}", e);
        UploadError::MissingImages
    })?;

    let (question, answer) = read_images(multipart).await?;

    let uploads = state.uploads();
    let question = uploads.persist(&question).await?;
    let answer = match uploads.persist(&answer).await {
        Ok(answer) => answer,
        Err(e) => {
            uploads.remove_all(std::slice::from_ref(&question)).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        question = %question.path.display(),
        answer = %answer.path.display(),
        "Received images"
    );

    let outcome = extract_from_images(&state, &question, &answer).await;
    uploads.remove_all(&[question, answer]).await;
    let body = outcome?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", RESULT_FILE_NAME),
            ),
        ],
        body,
    )
        .into_response())
}

/// OCR both images concurrently and build the pretty-printed JSON body
async fn extract_from_images(
    state: &AppState,
    question: &UploadedImage,
    answer: &UploadedImage,
) -> Result<String> {
    let ocr = state.ocr();
    let (question_text, answer_text) = tokio::try_join!(
        ocr.extract_text(&question.path),
        ocr.extract_text(&answer.path)
    )?;

    tracing::info!(
        question_chars = question_text.chars().count(),
        answer_chars = answer_text.chars().count(),
        "OCR extraction complete"
    );

    let result: ExtractionResult = extraction::extract(&question_text, &answer_text);
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Buffer the two image fields; other fields are skipped
///
/// A repeated field keeps its first occurrence. An empty file counts as
/// missing.
async fn read_images(
    mut multipart: Multipart,
) -> std::result::Result<(ImageUpload, ImageUpload), UploadError> {
    let mut question: Option<ImageUpload> = None;
    let mut answer: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::InvalidMultipart(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        let Some(role) = ImageRole::from_field_name(&name) else {
            tracing::debug!(field = %name, "Skipping unknown multipart field");
            continue;
        };

        let slot = match role {
            ImageRole::Question => &mut question,
            ImageRole::Answer => &mut answer,
        };
        if slot.is_some() {
            tracing::debug!(field = %name, "Skipping repeated image field");
            continue;
        }

        let file_name = field.file_name().unwrap_or(DEFAULT_FILE_NAME).to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| UploadError::InvalidMultipart(e.to_string()))?;

        if data.is_empty() {
            tracing::debug!(field = %name, "Ignoring empty image field");
            continue;
        }

        *slot = Some(ImageUpload {
            role,
            file_name,
            content_type,
            data,
        });
    }

    match (question, answer) {
        (Some(question), Some(answer)) => Ok((question, answer)),
        _ => Err(UploadError::MissingImages),
    }
}
