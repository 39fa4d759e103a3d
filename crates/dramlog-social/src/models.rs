use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A BYOB tasting meetup hosted by one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetupEvent {
    pub id: String,
    pub host: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_at: Option<DateTime<Utc>>,
    pub max_participants: u32,
    pub created_at: DateTime<Utc>,
}

impl MeetupEvent {
    pub fn new(host: impl Into<String>, title: impl Into<String>, max_participants: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            host: host.into(),
            title: title.into(),
            location: None,
            meeting_at: None,
            max_participants,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Withdrawn,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetupApplication {
    pub id: String,
    pub event_id: String,
    pub user: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

impl MeetupApplication {
    pub fn is_active(&self) -> bool {
        self.status == ApplicationStatus::Applied
    }
}

/// Flat comment with an optional parent reference. Storage allows chains
/// of any depth; rendering shows a single reply level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,
    pub event_id: String,
    pub author: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GiveawayStatus {
    Open,
    Completed,
}

/// A whisky-sharing giveaway: applicants enter, the host picks winners
/// manually or by random draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiveawayEvent {
    pub id: String,
    pub host: String,
    pub whisky_name: String,
    pub winner_count: u32,
    pub status: GiveawayStatus,
    /// Set when the last winner slot fills: winners owe a review by this date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl GiveawayEvent {
    pub fn new(host: impl Into<String>, whisky_name: impl Into<String>, winner_count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            host: host.into(),
            whisky_name: whisky_name.into(),
            winner_count,
            status: GiveawayStatus::Open,
            review_deadline: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiveawayApplication {
    pub id: String,
    pub event_id: String,
    pub user: String,
    pub selected: bool,
    pub created_at: DateTime<Utc>,
}

/// Ban list entry: the user cannot apply to events until the ban expires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ban {
    pub user: String,
    pub expires_at: DateTime<Utc>,
}
