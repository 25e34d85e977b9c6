//! CLI argument parsing using clap derive macros

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use notelab_core::models::{AiOperation, NoteStatus, TeamRole};
use notelab_core::{Theme, DEFAULT_LANGUAGE};

/// Command-line client for the Notelab collaborative notes backend
///
/// Results are printed as JSON on stdout; logs and errors go to stderr.
#[derive(Parser, Debug)]
#[command(name = "notelab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backend URL (overrides NOTELAB_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in, sign out and account management
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Teams and their members
    #[command(subcommand)]
    Teams(TeamCommand),

    /// Topics within a team
    #[command(subcommand)]
    Topics(TopicCommand),

    /// Notes, comments, versions and collaborators
    #[command(subcommand)]
    Notes(NoteCommand),

    /// AI text processing
    #[command(subcommand)]
    Ai(AiCommand),

    /// Show or change the stored theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(long)]
        full_name: String,
        #[arg(short, long)]
        password: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Verify the stored session and show the signed-in user
    Whoami,

    /// Exchange the stored token for a fresh one
    Refresh,
}

#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    /// List your teams
    List,

    Show {
        team_id: String,
    },

    Create {
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },

    Update {
        team_id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },

    Delete {
        team_id: String,
    },

    /// Invite a user by email
    Invite {
        team_id: String,
        email: String,
        #[arg(short, long, default_value = "member", value_parser = parse_team_role)]
        role: TeamRole,
    },

    RemoveMember {
        team_id: String,
        user_id: String,
    },

    SetRole {
        team_id: String,
        user_id: String,
        #[arg(value_parser = parse_team_role)]
        role: TeamRole,
    },
}

#[derive(Subcommand, Debug)]
pub enum TopicCommand {
    /// List the topics of a team
    List {
        team_id: String,
    },

    Show {
        topic_id: String,
    },

    Create {
        team_id: String,
        name: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    Update {
        topic_id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },

    Delete {
        topic_id: String,
    },

    /// Search topics of a team by name or description
    Search {
        team_id: String,
        query: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    List {
        /// Only notes in this topic
        #[arg(short, long)]
        topic: Option<String>,
    },

    Show {
        note_id: String,
    },

    Create {
        topic_id: String,
        title: String,
        #[command(flatten)]
        content: TextInput,
        #[arg(short, long, default_value = "draft", value_parser = parse_note_status)]
        status: NoteStatus,
    },

    Update {
        note_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
        #[arg(short, long, value_parser = parse_note_status)]
        status: Option<NoteStatus>,
    },

    Delete {
        note_id: String,
    },

    /// Add a comment
    Comment {
        note_id: String,
        content: String,
    },

    /// List comments
    Comments {
        note_id: String,
    },

    /// Fact-check the note's content
    FactCheck {
        note_id: String,
    },

    /// Save new content as the next version
    Version {
        note_id: String,
        #[command(flatten)]
        content: TextInput,
        #[arg(short, long)]
        summary: Option<String>,
    },

    AddCollaborator {
        note_id: String,
        user_id: String,
    },

    RemoveCollaborator {
        note_id: String,
        user_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AiCommand {
    Summarize(AiTextArgs),
    FactCheck(AiTextArgs),
    Quiz(AiTextArgs),
    Enhance(AiTextArgs),
    Format(AiTextArgs),

    /// Upload a PDF and process its text
    Pdf {
        path: PathBuf,
        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        language: String,
        #[arg(short, long, default_value = "format", value_parser = parse_ai_operation)]
        operation: AiOperation,
    },
}

#[derive(Args, Debug)]
pub struct AiTextArgs {
    #[command(flatten)]
    pub input: TextInput,

    /// Response language
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,
}

/// Inline text or a file to read it from
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TextInput {
    #[arg(long)]
    pub text: Option<String>,

    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Switch between light and dark
    Toggle,

    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
}

fn parse_team_role(s: &str) -> Result<TeamRole, String> {
    s.parse()
}

fn parse_note_status(s: &str) -> Result<NoteStatus, String> {
    s.parse()
}

fn parse_ai_operation(s: &str) -> Result<AiOperation, String> {
    s.parse()
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse()
}
