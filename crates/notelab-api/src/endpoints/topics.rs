//! `/api/topics`

use crate::client::ApiClient;
use crate::models::{MessageResponse, NewTopic, Topic, TopicUpdate};
use crate::request::{segment, ApiRequest};
use crate::Result;

const TOPICS: &str = "/api/topics";

fn topic_path(topic_id: &str) -> String {
    format!("{}/{}", TOPICS, segment(topic_id))
}

impl ApiClient {
    pub async fn create_topic(&self, topic: &NewTopic) -> Result<Topic> {
        let request = ApiRequest::post(format!("{}/", TOPICS)).json(topic)?;
        self.send_typed(request).await
    }

    /// Topics belonging to a team
    pub async fn list_team_topics(&self, team_id: &str) -> Result<Vec<Topic>> {
        let path = format!("{}/team/{}", TOPICS, segment(team_id));
        self.send_typed(ApiRequest::get(path)).await
    }

    pub async fn get_topic(&self, topic_id: &str) -> Result<Topic> {
        self.send_typed(ApiRequest::get(topic_path(topic_id))).await
    }

    pub async fn update_topic(&self, topic_id: &str, update: &TopicUpdate) -> Result<Topic> {
        let request = ApiRequest::put(topic_path(topic_id)).json(update)?;
        self.send_typed(request).await
    }

    pub async fn delete_topic(&self, topic_id: &str) -> Result<MessageResponse> {
        self.send_typed(ApiRequest::delete(topic_path(topic_id))).await
    }

    /// Name/description search within one team
    pub async fn search_topics(&self, team_id: &str, query: &str) -> Result<Vec<Topic>> {
        let path = format!(
            "{}/search/{}?query={}",
            TOPICS,
            segment(team_id),
            segment(query)
        );
        self.send_typed(ApiRequest::get(path)).await
    }
}
