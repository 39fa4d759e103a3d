use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::{
    ApplicationStatus, Ban, Comment, GiveawayApplication, GiveawayEvent, MeetupApplication,
    MeetupEvent,
};

/// The remote collaborative store, reduced to the request/response calls
/// the workflows need: insert, update-by-id, select-by-event. There are
/// no transactions; every workflow is read-then-write against this
/// interface, exactly like the original client.
#[async_trait]
pub trait SocialBackend: Send + Sync {
    async fn meetup_event(&self, id: &str) -> Result<Option<MeetupEvent>>;
    async fn insert_meetup_event(&self, event: MeetupEvent) -> Result<()>;
    async fn meetup_applications(&self, event_id: &str) -> Result<Vec<MeetupApplication>>;
    async fn insert_meetup_application(&self, application: MeetupApplication) -> Result<()>;
    async fn set_application_status(&self, id: &str, status: ApplicationStatus) -> Result<()>;

    async fn comments(&self, event_id: &str) -> Result<Vec<Comment>>;
    async fn insert_comment(&self, comment: Comment) -> Result<()>;

    async fn giveaway_event(&self, id: &str) -> Result<Option<GiveawayEvent>>;
    async fn insert_giveaway_event(&self, event: GiveawayEvent) -> Result<()>;
    async fn update_giveaway_event(&self, event: GiveawayEvent) -> Result<()>;
    async fn giveaway_applications(&self, event_id: &str) -> Result<Vec<GiveawayApplication>>;
    async fn insert_giveaway_application(&self, application: GiveawayApplication) -> Result<()>;
    async fn mark_selected(&self, application_id: &str) -> Result<()>;

    /// The caller's unexpired ban, if any.
    async fn active_ban(&self, user: &str) -> Result<Option<Ban>>;
    async fn insert_ban(&self, ban: Ban) -> Result<()>;
}

#[derive(Default)]
struct Tables {
    meetup_events: HashMap<String, MeetupEvent>,
    meetup_applications: Vec<MeetupApplication>,
    comments: Vec<Comment>,
    giveaway_events: HashMap<String, GiveawayEvent>,
    giveaway_applications: Vec<GiveawayApplication>,
    bans: Vec<Ban>,
}

/// In-memory backend for tests and single-process embedding.
#[derive(Default)]
pub struct MemorySocialBackend {
    tables: Mutex<Tables>,
}

impl MemorySocialBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SocialBackend for MemorySocialBackend {
    async fn meetup_event(&self, id: &str) -> Result<Option<MeetupEvent>> {
        Ok(self.lock().meetup_events.get(id).cloned())
    }

    async fn insert_meetup_event(&self, event: MeetupEvent) -> Result<()> {
        self.lock().meetup_events.insert(event.id.clone(), event);
        Ok(())
    }

    async fn meetup_applications(&self, event_id: &str) -> Result<Vec<MeetupApplication>> {
        Ok(self
            .lock()
            .meetup_applications
            .iter()
            .filter(|a| a.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn insert_meetup_application(&self, application: MeetupApplication) -> Result<()> {
        self.lock().meetup_applications.push(application);
        Ok(())
    }

    async fn set_application_status(&self, id: &str, status: ApplicationStatus) -> Result<()> {
        let mut tables = self.lock();
        if let Some(app) = tables.meetup_applications.iter_mut().find(|a| a.id == id) {
            app.status = status;
        }
        Ok(())
    }

    async fn comments(&self, event_id: &str) -> Result<Vec<Comment>> {
        Ok(self
            .lock()
            .comments
            .iter()
            .filter(|c| c.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn insert_comment(&self, comment: Comment) -> Result<()> {
        self.lock().comments.push(comment);
        Ok(())
    }

    async fn giveaway_event(&self, id: &str) -> Result<Option<GiveawayEvent>> {
        Ok(self.lock().giveaway_events.get(id).cloned())
    }

    async fn insert_giveaway_event(&self, event: GiveawayEvent) -> Result<()> {
        self.lock().giveaway_events.insert(event.id.clone(), event);
        Ok(())
    }

    async fn update_giveaway_event(&self, event: GiveawayEvent) -> Result<()> {
        self.lock().giveaway_events.insert(event.id.clone(), event);
        Ok(())
    }

    async fn giveaway_applications(&self, event_id: &str) -> Result<Vec<GiveawayApplication>> {
        Ok(self
            .lock()
            .giveaway_applications
            .iter()
            .filter(|a| a.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn insert_giveaway_application(&self, application: GiveawayApplication) -> Result<()> {
        self.lock().giveaway_applications.push(application);
        Ok(())
    }

    async fn mark_selected(&self, application_id: &str) -> Result<()> {
        let mut tables = self.lock();
        if let Some(app) = tables
            .giveaway_applications
            .iter_mut()
            .find(|a| a.id == application_id)
        {
            app.selected = true;
        }
        Ok(())
    }

    async fn active_ban(&self, user: &str) -> Result<Option<Ban>> {
        let now = Utc::now();
        Ok(self
            .lock()
            .bans
            .iter()
            .find(|b| b.user == user && b.expires_at > now)
            .cloned())
    }

    async fn insert_ban(&self, ban: Ban) -> Result<()> {
        self.lock().bans.push(ban);
        Ok(())
    }
}
