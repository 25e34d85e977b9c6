//! Team commands

use anyhow::Result;

use notelab_core::models::{NewTeam, TeamUpdate};
use notelab_core::Notelab;

use super::print_ok;
use crate::cli::TeamCommand;

pub async fn run(app: &Notelab, command: TeamCommand) -> Result<()> {
    let api = app.api();

    match command {
        TeamCommand::List => print_ok(api.list_teams().await?),
        TeamCommand::Show { team_id } => print_ok(api.get_team(&team_id).await?),
        TeamCommand::Create { name, description } => {
            print_ok(api.create_team(&NewTeam { name, description }).await?)
        }
        TeamCommand::Update {
            team_id,
            name,
            description,
        } => {
            let update = TeamUpdate { name, description };
            print_ok(api.update_team(&team_id, &update).await?)
        }
        TeamCommand::Delete { team_id } => print_ok(api.delete_team(&team_id).await?),
        TeamCommand::Invite {
            team_id,
            email,
            role,
        } => print_ok(api.invite_member(&team_id, &email, role).await?),
        TeamCommand::RemoveMember { team_id, user_id } => {
            print_ok(api.remove_member(&team_id, &user_id).await?)
        }
        TeamCommand::SetRole {
            team_id,
            user_id,
            role,
        } => print_ok(api.update_member_role(&team_id, &user_id, role).await?),
    }
}
