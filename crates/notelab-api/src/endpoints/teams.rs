//! `/api/teams`

use crate::client::ApiClient;
use crate::models::{Invitation, MessageResponse, NewTeam, RoleUpdate, Team, TeamRole, TeamUpdate};
use crate::request::{segment, ApiRequest};
use crate::Result;

const TEAMS: &str = "/api/teams";

fn team_path(team_id: &str) -> String {
    format!("{}/{}", TEAMS, segment(team_id))
}

fn member_path(team_id: &str, user_id: &str) -> String {
    format!("{}/members/{}", team_path(team_id), segment(user_id))
}

impl ApiClient {
    /// Teams the current user belongs to
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.send_typed(ApiRequest::get(format!("{}/", TEAMS))).await
    }

    pub async fn create_team(&self, team: &NewTeam) -> Result<Team> {
        let request = ApiRequest::post(format!("{}/", TEAMS)).json(team)?;
        self.send_typed(request).await
    }

    pub async fn get_team(&self, team_id: &str) -> Result<Team> {
        self.send_typed(ApiRequest::get(team_path(team_id))).await
    }

    pub async fn update_team(&self, team_id: &str, update: &TeamUpdate) -> Result<Team> {
        let request = ApiRequest::put(team_path(team_id)).json(update)?;
        self.send_typed(request).await
    }

    pub async fn delete_team(&self, team_id: &str) -> Result<MessageResponse> {
        self.send_typed(ApiRequest::delete(team_path(team_id))).await
    }

    /// Invite a user by email with the given role
    pub async fn invite_member(
        &self,
        team_id: &str,
        email: &str,
        role: TeamRole,
    ) -> Result<MessageResponse> {
        let invitation = Invitation {
            email: email.to_string(),
            role,
        };
        let request = ApiRequest::post(format!("{}/invite", team_path(team_id))).json(&invitation)?;
        self.send_typed(request).await
    }

    pub async fn remove_member(&self, team_id: &str, user_id: &str) -> Result<MessageResponse> {
        self.send_typed(ApiRequest::delete(member_path(team_id, user_id)))
            .await
    }

    pub async fn update_member_role(
        &self,
        team_id: &str,
        user_id: &str,
        role: TeamRole,
    ) -> Result<MessageResponse> {
        let request = ApiRequest::put(format!("{}/role", member_path(team_id, user_id)))
            .json(&RoleUpdate { role })?;
        self.send_typed(request).await
    }
}
