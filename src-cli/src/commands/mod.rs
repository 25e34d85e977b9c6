//! Command handlers
//!
//! Each handler calls the facade and prints a [`CommandResult`] as JSON.

pub mod ai;
pub mod auth;
pub mod notes;
pub mod settings;
pub mod teams;
pub mod topics;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::cli::TextInput;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Print a successful result on stdout
pub fn print_ok<T: Serialize>(data: T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(&CommandResult::ok(data))?;
    println!("{}", rendered);
    Ok(())
}

/// Print a failure on stderr
pub fn print_error(error: &anyhow::Error) {
    let message = format!("{:#}", error);
    let result = CommandResult::<()>::err(message.clone());
    match serde_json::to_string_pretty(&result) {
        Ok(rendered) => eprintln!("{}", rendered),
        Err(_) => eprintln!("{}", message),
    }
}

/// Resolve inline text or read it from a file
pub fn read_text(input: TextInput) -> Result<String> {
    match (input.text, input.file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => read_file(&path),
        (None, None) => anyhow::bail!("either --text or --file is required"),
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
