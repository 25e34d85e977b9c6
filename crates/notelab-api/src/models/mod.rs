//! Typed backend payloads, one module per endpoint group

mod ai;
mod auth;
mod common;
mod note;
mod team;
pub mod timestamp;
mod topic;

pub use ai::{AiOperation, AiRequest, AiResult, Quiz, QuizQuestion};
pub use auth::{AuthToken, Credentials, NewUser, User, UserRole};
pub use common::MessageResponse;
pub use note::{
    Comment, FactCheck, FactCheckStatus, FactCheckSummary, NewComment, NewNote, NewNoteVersion,
    Note, NoteStatus, NoteUpdate, NoteVersion,
};
pub use team::{Invitation, NewTeam, RoleUpdate, Team, TeamMember, TeamRole, TeamUpdate};
pub use topic::{NewTopic, Topic, TopicUpdate};
