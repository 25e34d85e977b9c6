//! `/api/notes`

use crate::client::ApiClient;
use crate::models::{
    Comment, FactCheckSummary, MessageResponse, NewComment, NewNote, NewNoteVersion, Note,
    NoteUpdate, NoteVersion,
};
use crate::request::{segment, ApiRequest};
use crate::Result;

const NOTES: &str = "/api/notes";

fn note_path(note_id: &str) -> String {
    format!("{}/{}", NOTES, segment(note_id))
}

fn collaborator_path(note_id: &str, user_id: &str) -> String {
    format!("{}/collaborators/{}", note_path(note_id), segment(user_id))
}

impl ApiClient {
    /// Notes visible to the user, optionally restricted to one topic
    pub async fn list_notes(&self, topic_id: Option<&str>) -> Result<Vec<Note>> {
        let path = match topic_id {
            Some(topic_id) => format!("{}/?topic_id={}", NOTES, segment(topic_id)),
            None => format!("{}/", NOTES),
        };
        self.send_typed(ApiRequest::get(path)).await
    }

    pub async fn create_note(&self, note: &NewNote) -> Result<Note> {
        let request = ApiRequest::post(format!("{}/", NOTES)).json(note)?;
        self.send_typed(request).await
    }

    pub async fn get_note(&self, note_id: &str) -> Result<Note> {
        self.send_typed(ApiRequest::get(note_path(note_id))).await
    }

    pub async fn update_note(&self, note_id: &str, update: &NoteUpdate) -> Result<Note> {
        let request = ApiRequest::put(note_path(note_id)).json(update)?;
        self.send_typed(request).await
    }

    pub async fn delete_note(&self, note_id: &str) -> Result<MessageResponse> {
        self.send_typed(ApiRequest::delete(note_path(note_id))).await
    }

    pub async fn add_comment(&self, note_id: &str, content: &str) -> Result<Comment> {
        let body = NewComment {
            content: content.to_string(),
        };
        let request = ApiRequest::post(format!("{}/comments", note_path(note_id))).json(&body)?;
        self.send_typed(request).await
    }

    pub async fn list_comments(&self, note_id: &str) -> Result<Vec<Comment>> {
        let path = format!("{}/comments", note_path(note_id));
        self.send_typed(ApiRequest::get(path)).await
    }

    /// Run the backend fact-check over the note's current content
    pub async fn fact_check_note(&self, note_id: &str) -> Result<FactCheckSummary> {
        let path = format!("{}/fact-checks", note_path(note_id));
        self.send_typed(ApiRequest::post(path)).await
    }

    /// Snapshot new content as the next version
    pub async fn create_note_version(
        &self,
        note_id: &str,
        version: &NewNoteVersion,
    ) -> Result<NoteVersion> {
        let request =
            ApiRequest::post(format!("{}/versions", note_path(note_id))).json(version)?;
        self.send_typed(request).await
    }

    pub async fn add_collaborator(&self, note_id: &str, user_id: &str) -> Result<MessageResponse> {
        self.send_typed(ApiRequest::post(collaborator_path(note_id, user_id)))
            .await
    }

    pub async fn remove_collaborator(
        &self,
        note_id: &str,
        user_id: &str,
    ) -> Result<MessageResponse> {
        self.send_typed(ApiRequest::delete(collaborator_path(note_id, user_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{FactCheckStatus, NewNote, NewNoteVersion, NoteStatus, NoteUpdate};
    use crate::testing::{mock_client, MockResponse};
    use crate::ApiError;
    use reqwest::header::AUTHORIZATION;
    use reqwest::Method;
    use serde_json::json;

    fn note_json() -> serde_json::Value {
        json!({
            "_id": "n1",
            "title": "Mitosis",
            "content": "Cells divide.",
            "topic_id": "tp1",
            "status": "draft",
            "team_id": "t1",
            "created_by": "u1",
            "collaborators": [],
            "fact_checks": [],
            "comments": [],
            "versions": [
                {"version": 1, "content": "Cells divide.", "created_by": "u1", "created_at": "2024-01-01T00:00:00"}
            ],
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        })
    }

    #[tokio::test]
    async fn test_list_notes_topic_filter() {
        let (client, transport) = mock_client(vec![
            MockResponse::json(200, json!([note_json()])),
            MockResponse::json(200, json!([])),
        ]);

        let notes = client.list_notes(None).await.unwrap();
        assert_eq!(notes[0].latest_version().map(|v| v.version), Some(1));
        client.list_notes(Some("tp 1")).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://backend.test/api/notes/");
        assert_eq!(requests[1].url, "http://backend.test/api/notes/?topic_id=tp%201");
    }

    #[tokio::test]
    async fn test_create_and_update_note() {
        let (client, transport) = mock_client(vec![
            MockResponse::json(201, note_json()),
            MockResponse::json(200, note_json()),
        ]);
        client.set_credential(Some("abc"));

        let note = client
            .create_note(&NewNote {
                title: "Mitosis".to_string(),
                content: "Cells divide.".to_string(),
                topic_id: "tp1".to_string(),
                status: NoteStatus::Draft,
            })
            .await
            .unwrap();
        assert_eq!(note.id, "n1");

        client
            .update_note(
                "n1",
                &NoteUpdate {
                    status: Some(NoteStatus::Published),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].json_body().unwrap()["status"], "draft");
        assert_eq!(
            requests[0].header(AUTHORIZATION).as_deref(),
            Some("Bearer abc")
        );
        assert_eq!(requests[1].method, Method::PUT);
        assert_eq!(requests[1].json_body().unwrap(), json!({"status": "published"}));
    }

    #[tokio::test]
    async fn test_comments() {
        let (client, transport) = mock_client(vec![
            MockResponse::json(
                200,
                json!({"id": "c1", "user_id": "u1", "content": "Nice", "created_at": "2024-01-02T00:00:00"}),
            ),
            MockResponse::json(200, json!([{"id": "c1", "user_id": "u1", "content": "Nice"}])),
        ]);

        let comment = client.add_comment("n1", "Nice").await.unwrap();
        assert_eq!(comment.id, "c1");
        let comments = client.list_comments("n1").await.unwrap();
        assert_eq!(comments.len(), 1);

        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://backend.test/api/notes/n1/comments");
        assert_eq!(requests[0].json_body().unwrap(), json!({"content": "Nice"}));
        assert_eq!(requests[1].method, Method::GET);
    }

    #[tokio::test]
    async fn test_fact_check_note() {
        let (client, transport) = mock_client(vec![MockResponse::json(
            200,
            json!({
                "message": "Fact check completed",
                "status": "verified",
                "confidence": 92,
                "summary": "Accurate overall"
            }),
        )]);

        let summary = client.fact_check_note("n1").await.unwrap();
        assert_eq!(summary.status, FactCheckStatus::Verified);
        assert_eq!(summary.confidence, 92.0);

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url, "http://backend.test/api/notes/n1/fact-checks");
        assert_eq!(sent.body, None);
    }

    #[tokio::test]
    async fn test_versions_and_collaborators() {
        let (client, transport) = mock_client(vec![
            MockResponse::json(
                200,
                json!({"version": 2, "content": "Cells divide twice.", "changes_summary": "expanded"}),
            ),
            MockResponse::json(200, json!({"message": "Collaborator added"})),
            MockResponse::json(200, json!({"message": "Collaborator removed"})),
        ]);

        let version = client
            .create_note_version(
                "n1",
                &NewNoteVersion {
                    content: "Cells divide twice.".to_string(),
                    changes_summary: Some("expanded".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(version.version, 2);

        client.add_collaborator("n1", "u2").await.unwrap();
        let removed = client.remove_collaborator("n1", "u2").await.unwrap();
        assert_eq!(removed.message, "Collaborator removed");

        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://backend.test/api/notes/n1/versions");
        assert_eq!(requests[1].method, Method::POST);
        assert_eq!(requests[1].url, "http://backend.test/api/notes/n1/collaborators/u2");
        assert_eq!(requests[2].method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_missing_note() {
        let (client, _) = mock_client(vec![MockResponse::json(404, json!({"detail": "Note not found"}))]);

        let err = client.get_note("missing").await.unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
        assert!(matches!(err, ApiError::Request { .. }));
        assert_eq!(err.to_string(), "Note not found");
    }
}
