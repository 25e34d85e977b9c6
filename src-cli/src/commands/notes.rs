//! Note commands

use anyhow::Result;

use notelab_core::models::{NewNote, NewNoteVersion, NoteUpdate};
use notelab_core::Notelab;

use super::{print_ok, read_text};
use crate::cli::NoteCommand;

pub async fn run(app: &Notelab, command: NoteCommand) -> Result<()> {
    let api = app.api();

    match command {
        NoteCommand::List { topic } => print_ok(api.list_notes(topic.as_deref()).await?),
        NoteCommand::Show { note_id } => print_ok(api.get_note(&note_id).await?),
        NoteCommand::Create {
            topic_id,
            title,
            content,
            status,
        } => {
            let note = NewNote {
                title,
                content: read_text(content)?,
                topic_id,
                status,
            };
            print_ok(api.create_note(&note).await?)
        }
        NoteCommand::Update {
            note_id,
            title,
            text,
            status,
        } => {
            let update = NoteUpdate {
                title,
                content: text,
                status,
            };
            print_ok(api.update_note(&note_id, &update).await?)
        }
        NoteCommand::Delete { note_id } => print_ok(api.delete_note(&note_id).await?),
        NoteCommand::Comment { note_id, content } => {
            print_ok(api.add_comment(&note_id, &content).await?)
        }
        NoteCommand::Comments { note_id } => print_ok(api.list_comments(&note_id).await?),
        NoteCommand::FactCheck { note_id } => print_ok(api.fact_check_note(&note_id).await?),
        NoteCommand::Version {
            note_id,
            content,
            summary,
        } => {
            let version = NewNoteVersion {
                content: read_text(content)?,
                changes_summary: summary,
            };
            print_ok(api.create_note_version(&note_id, &version).await?)
        }
        NoteCommand::AddCollaborator { note_id, user_id } => {
            print_ok(api.add_collaborator(&note_id, &user_id).await?)
        }
        NoteCommand::RemoveCollaborator { note_id, user_id } => {
            print_ok(api.remove_collaborator(&note_id, &user_id).await?)
        }
    }
}
