pub mod backend;
pub mod comments;
pub mod giveaway;
pub mod meetup;
pub mod models;

pub use backend::{MemorySocialBackend, SocialBackend};
pub use comments::{add_comment, thread_comments};
pub use giveaway::{apply_to_giveaway, draw_winners, pick_winner, REVIEW_DEADLINE_DAYS};
pub use meetup::{apply_to_meetup, withdraw_from_meetup};
pub use models::{
    ApplicationStatus, Ban, Comment, GiveawayApplication, GiveawayEvent, GiveawayStatus,
    MeetupApplication, MeetupEvent,
};

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SocialError {
    #[error("event not found: {0}")]
    EventNotFound(String),
    #[error("event is full")]
    EventFull,
    #[error("already applied to this event")]
    AlreadyApplied,
    #[error("no active application to withdraw")]
    ApplicationNotFound,
    #[error("{user} is banned until {until}")]
    Banned { user: String, until: DateTime<Utc> },
    #[error("parent comment not found: {0}")]
    ParentNotFound(String),
    #[error("application is already selected as a winner")]
    AlreadySelected,
    #[error("all winner slots are already filled")]
    NoWinnerSlots,
    #[error("giveaway is already completed")]
    GiveawayCompleted,
    #[error("application not found: {0}")]
    UnknownApplication(String),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
