use axum::{
    extract::Multipart,
    response::{IntoResponse, Json},
};

use crate::{
    dto::ai_dto::{PdfExtractInfo, PdfExtractResponse},
    error::{Error, Result},
};

const MAX_PDF_BYTES: usize = 5 * 1024 * 1024;

/// Collapses runs of whitespace the way the original cleanup did, so resume
/// text pasted from a PDF stays compact.
fn clean_extracted_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[utoipa::path(
    post,
    path = "/api/pdf/extract",
    responses(
        (status = 200, description = "Extracted text", body = Json<PdfExtractResponse>),
        (status = 400, description = "Missing file, wrong type, or too large")
    )
)]
pub async fn extract(mut multipart: Multipart) -> Result<impl IntoResponse> {
    let mut file: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let is_file_field = matches!(field.name(), Some("file") | Some("pdf") | None);
        if !is_file_field {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let data = field.bytes().await?;
        if !data.is_empty() {
            file = Some((file_name, data));
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| Error::BadRequest("No PDF file uploaded".to_string()))?;

    if data.len() > MAX_PDF_BYTES {
        return Err(Error::BadRequest(
            "File size must be less than 5MB".to_string(),
        ));
    }
    if !data.starts_with(b"%PDF") {
        return Err(Error::BadRequest("File must be a PDF".to_string()));
    }

    let file_size = data.len();
    // pdf parsing is CPU-bound; keep it off the async executor
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| Error::Internal(format!("PDF extraction task failed: {}", e)))?
        .map_err(|e| Error::BadRequest(format!("Failed to extract text from PDF: {}", e)))?;

    Ok(Json(PdfExtractResponse {
        success: true,
        text: clean_extracted_text(&text),
        info: PdfExtractInfo {
            file_name,
            file_size,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_are_collapsed() {
        assert_eq!(
            clean_extracted_text("  Senior   Rust\n\nEngineer\t5 years "),
            "Senior Rust Engineer 5 years"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_extracted_text("   \n\t "), "");
    }
}
