//! Settings commands

use anyhow::Result;
use serde_json::json;

use notelab_core::Notelab;

use super::print_ok;
use crate::cli::ThemeCommand;

pub fn run(app: &Notelab, action: Option<ThemeCommand>) -> Result<()> {
    let theme = match action {
        None => app.theme()?,
        Some(ThemeCommand::Toggle) => app.toggle_theme()?,
        Some(ThemeCommand::Set { theme }) => {
            app.set_theme(theme)?;
            theme
        }
    };

    print_ok(json!({"theme": theme}))
}
