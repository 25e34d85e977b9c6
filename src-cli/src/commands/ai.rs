//! AI commands

use anyhow::{Context, Result};
use std::path::Path;

use notelab_core::{Notelab, Upload};

use super::{print_ok, read_text};
use crate::cli::{AiCommand, AiTextArgs};

pub async fn run(app: &Notelab, command: AiCommand) -> Result<()> {
    let api = app.api();

    match command {
        AiCommand::Summarize(args) => {
            let (text, language) = text_and_language(args)?;
            print_ok(api.summarize(&text, &language).await?)
        }
        AiCommand::FactCheck(args) => {
            let (text, language) = text_and_language(args)?;
            print_ok(api.fact_check_text(&text, &language).await?)
        }
        AiCommand::Quiz(args) => {
            let (text, language) = text_and_language(args)?;
            print_ok(api.generate_quiz(&text, &language).await?)
        }
        AiCommand::Enhance(args) => {
            let (text, language) = text_and_language(args)?;
            print_ok(api.enhance_note(&text, &language).await?)
        }
        AiCommand::Format(args) => {
            let (text, language) = text_and_language(args)?;
            print_ok(api.format_text(&text, &language).await?)
        }
        AiCommand::Pdf {
            path,
            language,
            operation,
        } => {
            let upload = pdf_upload(&path)?;
            print_ok(api.process_pdf(upload, &language, operation).await?)
        }
    }
}

fn text_and_language(args: AiTextArgs) -> Result<(String, String)> {
    Ok((read_text(args.input)?, args.language))
}

fn pdf_upload(path: &Path) -> Result<Upload> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.pdf".to_string());

    Ok(Upload::new(file_name, bytes).with_mime_type("application/pdf"))
}
