use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::backend::SocialBackend;
use crate::models::{ApplicationStatus, MeetupApplication};
use crate::SocialError;

/// Applies the user to a meetup. The capacity gate counts active
/// applications at read time; two concurrent applies can both pass it
/// (the backend offers no transactions), matching the original behavior.
pub async fn apply_to_meetup(
    backend: &dyn SocialBackend,
    event_id: &str,
    user: &str,
) -> Result<MeetupApplication, SocialError> {
    let event = backend
        .meetup_event(event_id)
        .await?
        .ok_or_else(|| SocialError::EventNotFound(event_id.to_string()))?;

    if let Some(ban) = backend.active_ban(user).await? {
        return Err(SocialError::Banned { user: user.to_string(), until: ban.expires_at });
    }

    let applications = backend.meetup_applications(event_id).await?;
    let active: Vec<_> = applications.iter().filter(|a| a.is_active()).collect();
    if active.iter().any(|a| a.user == user) {
        return Err(SocialError::AlreadyApplied);
    }
    if active.len() as u32 >= event.max_participants {
        return Err(SocialError::EventFull);
    }

    let application = MeetupApplication {
        id: Uuid::new_v4().to_string(),
        event_id: event_id.to_string(),
        user: user.to_string(),
        status: ApplicationStatus::Applied,
        created_at: Utc::now(),
    };
    backend.insert_meetup_application(application.clone()).await?;
    info!("{} applied to meetup {}", user, event_id);
    Ok(application)
}

/// Marks the caller's active application withdrawn, freeing a slot.
pub async fn withdraw_from_meetup(
    backend: &dyn SocialBackend,
    event_id: &str,
    user: &str,
) -> Result<(), SocialError> {
    let applications = backend.meetup_applications(event_id).await?;
    let application = applications
        .iter()
        .find(|a| a.user == user && a.is_active())
        .ok_or(SocialError::ApplicationNotFound)?;

    backend
        .set_application_status(&application.id, ApplicationStatus::Withdrawn)
        .await?;
    info!("{} withdrew from meetup {}", user, event_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemorySocialBackend;
    use crate::models::{Ban, MeetupEvent};
    use chrono::Duration;

    async fn seeded_event(max: u32) -> (MemorySocialBackend, String) {
        let backend = MemorySocialBackend::new();
        let event = MeetupEvent::new("host", "Islay night", max);
        let id = event.id.clone();
        backend.insert_meetup_event(event).await.unwrap();
        (backend, id)
    }

    #[tokio::test]
    async fn test_apply_and_capacity_gate() {
        let (backend, event_id) = seeded_event(2).await;
        apply_to_meetup(&backend, &event_id, "ana").await.unwrap();
        apply_to_meetup(&backend, &event_id, "ben").await.unwrap();

        let err = apply_to_meetup(&backend, &event_id, "cho").await.unwrap_err();
        assert!(matches!(err, SocialError::EventFull));
    }

    #[tokio::test]
    async fn test_duplicate_application_rejected() {
        let (backend, event_id) = seeded_event(5).await;
        apply_to_meetup(&backend, &event_id, "ana").await.unwrap();
        let err = apply_to_meetup(&backend, &event_id, "ana").await.unwrap_err();
        assert!(matches!(err, SocialError::AlreadyApplied));
    }

    #[tokio::test]
    async fn test_withdraw_frees_a_slot_and_allows_reapply() {
        let (backend, event_id) = seeded_event(1).await;
        apply_to_meetup(&backend, &event_id, "ana").await.unwrap();
        assert!(matches!(
            apply_to_meetup(&backend, &event_id, "ben").await.unwrap_err(),
            SocialError::EventFull
        ));

        withdraw_from_meetup(&backend, &event_id, "ana").await.unwrap();
        apply_to_meetup(&backend, &event_id, "ben").await.unwrap();
        // ana can come back once a slot opens again
        assert!(matches!(
            apply_to_meetup(&backend, &event_id, "ana").await.unwrap_err(),
            SocialError::EventFull
        ));
    }

    #[tokio::test]
    async fn test_withdraw_without_application() {
        let (backend, event_id) = seeded_event(3).await;
        let err = withdraw_from_meetup(&backend, &event_id, "ana").await.unwrap_err();
        assert!(matches!(err, SocialError::ApplicationNotFound));
    }

    #[tokio::test]
    async fn test_banned_user_cannot_apply() {
        let (backend, event_id) = seeded_event(3).await;
        backend
            .insert_ban(Ban { user: "ana".to_string(), expires_at: Utc::now() + Duration::days(7) })
            .await
            .unwrap();
        let err = apply_to_meetup(&backend, &event_id, "ana").await.unwrap_err();
        assert!(matches!(err, SocialError::Banned { .. }));
    }

    #[tokio::test]
    async fn test_expired_ban_is_ignored() {
        let (backend, event_id) = seeded_event(3).await;
        backend
            .insert_ban(Ban { user: "ana".to_string(), expires_at: Utc::now() - Duration::days(1) })
            .await
            .unwrap();
        apply_to_meetup(&backend, &event_id, "ana").await.unwrap();
    }

    #[tokio::test]
    async fn test_apply_to_unknown_event() {
        let backend = MemorySocialBackend::new();
        let err = apply_to_meetup(&backend, "missing", "ana").await.unwrap_err();
        assert!(matches!(err, SocialError::EventNotFound(_)));
    }
}
