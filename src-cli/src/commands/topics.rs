//! Topic commands

use anyhow::Result;

use notelab_core::models::{NewTopic, TopicUpdate};
use notelab_core::Notelab;

use super::print_ok;
use crate::cli::TopicCommand;

pub async fn run(app: &Notelab, command: TopicCommand) -> Result<()> {
    let api = app.api();

    match command {
        TopicCommand::List { team_id } => print_ok(api.list_team_topics(&team_id).await?),
        TopicCommand::Show { topic_id } => print_ok(api.get_topic(&topic_id).await?),
        TopicCommand::Create {
            team_id,
            name,
            description,
            tags,
        } => {
            let topic = NewTopic {
                name,
                description,
                tags,
                team_id,
            };
            print_ok(api.create_topic(&topic).await?)
        }
        TopicCommand::Update {
            topic_id,
            name,
            description,
            tags,
        } => {
            let update = TopicUpdate {
                name,
                description,
                tags,
            };
            print_ok(api.update_topic(&topic_id, &update).await?)
        }
        TopicCommand::Delete { topic_id } => print_ok(api.delete_topic(&topic_id).await?),
        TopicCommand::Search { team_id, query } => {
            print_ok(api.search_topics(&team_id, &query).await?)
        }
    }
}
