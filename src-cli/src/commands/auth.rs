//! Auth commands

use anyhow::Result;
use serde_json::json;

use notelab_core::models::NewUser;
use notelab_core::Notelab;

use super::print_ok;
use crate::cli::AuthCommand;

pub async fn run(app: &Notelab, command: AuthCommand) -> Result<()> {
    match command {
        AuthCommand::Login { email, password } => {
            let user = app.sign_in(&email, &password).await?;
            print_ok(user)
        }
        AuthCommand::Register {
            username,
            email,
            full_name,
            password,
        } => {
            let user = app
                .register(&NewUser {
                    username,
                    email,
                    full_name,
                    password,
                })
                .await?;
            print_ok(user)
        }
        AuthCommand::Logout => {
            app.sign_out().await?;
            print_ok(json!({"signed_in": false}))
        }
        AuthCommand::Whoami => match app.initialize().await? {
            Some(user) => print_ok(user),
            None => anyhow::bail!("Not signed in. Run `notelab auth login` first."),
        },
        AuthCommand::Refresh => {
            let token = app.api().refresh_token().await?;
            print_ok(json!({"refreshed": token.token.is_some()}))
        }
    }
}
