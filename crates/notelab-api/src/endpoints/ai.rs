//! `/api/ai`
//!
//! Text operations post an [`AiRequest`]; PDF processing uploads the file
//! and passes language and operation in the query string.

use crate::client::ApiClient;
use crate::models::{AiOperation, AiRequest, AiResult, Quiz};
use crate::request::{segment, ApiRequest, Upload};
use crate::Result;

/// Response language used when the caller does not pick one
pub const DEFAULT_LANGUAGE: &str = "English";

const AI: &str = "/api/ai";

impl ApiClient {
    /// Extract text from an uploaded PDF and run `operation` over it
    pub async fn process_pdf(
        &self,
        upload: Upload,
        language: &str,
        operation: AiOperation,
    ) -> Result<AiResult> {
        tracing::info!(
            file = %upload.file_name,
            size = upload.bytes.len(),
            operation = operation.as_str(),
            "Uploading PDF"
        );

        let path = format!(
            "{}/process-pdf?language={}&operation={}",
            AI,
            segment(language),
            operation.as_str()
        );
        self.send_typed(ApiRequest::post(path).multipart(upload))
            .await
    }

    pub async fn format_text(&self, text: &str, language: &str) -> Result<AiResult> {
        self.text_operation("format-text", text, language, AiOperation::Format)
            .await
    }

    pub async fn summarize(&self, text: &str, language: &str) -> Result<AiResult> {
        self.text_operation("summarize", text, language, AiOperation::Summarize)
            .await
    }

    pub async fn fact_check_text(&self, text: &str, language: &str) -> Result<AiResult> {
        self.text_operation("fact-check", text, language, AiOperation::FactCheck)
            .await
    }

    pub async fn enhance_note(&self, text: &str, language: &str) -> Result<AiResult> {
        self.text_operation("enhance-note", text, language, AiOperation::Enhance)
            .await
    }

    pub async fn generate_quiz(&self, text: &str, language: &str) -> Result<Quiz> {
        let request = ai_request("generate-quiz", text, language, AiOperation::Quiz)?;
        self.send_typed(request).await
    }

    async fn text_operation(
        &self,
        action: &str,
        text: &str,
        language: &str,
        operation: AiOperation,
    ) -> Result<AiResult> {
        self.send_typed(ai_request(action, text, language, operation)?)
            .await
    }
}

fn ai_request(
    action: &str,
    text: &str,
    language: &str,
    operation: AiOperation,
) -> Result<ApiRequest> {
    let body = AiRequest {
        text: text.to_string(),
        language: language.to_string(),
        operation,
    };
    Ok(ApiRequest::post(format!("{}/{}", AI, action)).json(&body)?)
}
