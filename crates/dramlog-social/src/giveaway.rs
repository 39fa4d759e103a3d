use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::backend::SocialBackend;
use crate::models::{GiveawayApplication, GiveawayEvent, GiveawayStatus};
use crate::SocialError;

/// Winners owe a tasting review within two weeks of the draw completing.
pub const REVIEW_DEADLINE_DAYS: i64 = 14;

pub async fn apply_to_giveaway(
    backend: &dyn SocialBackend,
    event_id: &str,
    user: &str,
) -> Result<GiveawayApplication, SocialError> {
    let event = fetch_open_event(backend, event_id).await?;

    if let Some(ban) = backend.active_ban(user).await? {
        return Err(SocialError::Banned { user: user.to_string(), until: ban.expires_at });
    }

    let applications = backend.giveaway_applications(event_id).await?;
    if applications.iter().any(|a| a.user == user) {
        return Err(SocialError::AlreadyApplied);
    }

    let application = GiveawayApplication {
        id: Uuid::new_v4().to_string(),
        event_id: event.id,
        user: user.to_string(),
        selected: false,
        created_at: Utc::now(),
    };
    backend.insert_giveaway_application(application.clone()).await?;
    Ok(application)
}

/// Host manually marks one applicant as a winner.
pub async fn pick_winner(
    backend: &dyn SocialBackend,
    event_id: &str,
    application_id: &str,
) -> Result<(), SocialError> {
    let event = fetch_open_event(backend, event_id).await?;

    let applications = backend.giveaway_applications(event_id).await?;
    let application = applications
        .iter()
        .find(|a| a.id == application_id)
        .ok_or_else(|| SocialError::UnknownApplication(application_id.to_string()))?;
    let selected_count = applications.iter().filter(|a| a.selected).count() as u32;
    if application.selected {
        return Err(SocialError::AlreadySelected);
    }
    if selected_count >= event.winner_count {
        return Err(SocialError::NoWinnerSlots);
    }

    backend.mark_selected(application_id).await?;
    finalize_if_full(backend, event, selected_count + 1).await
}

/// Unweighted random draw: shuffles unselected applicants and selects the
/// first `remaining` of them. The remaining-slot check is read-then-write
/// with no guard against a concurrent draw, as in the original.
pub async fn draw_winners<R: Rng>(
    backend: &dyn SocialBackend,
    event_id: &str,
    rng: &mut R,
) -> Result<Vec<GiveawayApplication>, SocialError> {
    let event = fetch_open_event(backend, event_id).await?;

    let applications = backend.giveaway_applications(event_id).await?;
    let selected_count = applications.iter().filter(|a| a.selected).count() as u32;
    let remaining = event.winner_count.saturating_sub(selected_count);
    if remaining == 0 {
        return Err(SocialError::NoWinnerSlots);
    }

    let mut unselected: Vec<GiveawayApplication> =
        applications.into_iter().filter(|a| !a.selected).collect();
    unselected.shuffle(rng);
    let winners: Vec<GiveawayApplication> =
        unselected.into_iter().take(remaining as usize).collect();

    for winner in &winners {
        backend.mark_selected(&winner.id).await?;
    }
    info!("drew {} winner(s) for giveaway {}", winners.len(), event_id);

    finalize_if_full(backend, event, selected_count + winners.len() as u32).await?;
    Ok(winners)
}

async fn fetch_open_event(
    backend: &dyn SocialBackend,
    event_id: &str,
) -> Result<GiveawayEvent, SocialError> {
    let event = backend
        .giveaway_event(event_id)
        .await?
        .ok_or_else(|| SocialError::EventNotFound(event_id.to_string()))?;
    if event.status == GiveawayStatus::Completed {
        return Err(SocialError::GiveawayCompleted);
    }
    Ok(event)
}

async fn finalize_if_full(
    backend: &dyn SocialBackend,
    mut event: GiveawayEvent,
    selected_count: u32,
) -> Result<(), SocialError> {
    if selected_count >= event.winner_count {
        event.status = GiveawayStatus::Completed;
        event.review_deadline = Some(Utc::now() + Duration::days(REVIEW_DEADLINE_DAYS));
        backend.update_giveaway_event(event.clone()).await?;
        info!("giveaway {} completed, review deadline set", event.id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemorySocialBackend;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    async fn seeded(winner_count: u32, applicants: &[&str]) -> (MemorySocialBackend, String) {
        let backend = MemorySocialBackend::new();
        let event = GiveawayEvent::new("host", "Springbank 18", winner_count);
        let id = event.id.clone();
        backend.insert_giveaway_event(event).await.unwrap();
        for user in applicants {
            apply_to_giveaway(&backend, &id, user).await.unwrap();
        }
        (backend, id)
    }

    #[tokio::test]
    async fn test_draw_selects_remaining_slots() {
        let (backend, event_id) = seeded(2, &["ana", "ben", "cho", "dee"]).await;
        let mut rng = StdRng::seed_from_u64(7);

        let winners = draw_winners(&backend, &event_id, &mut rng).await.unwrap();
        assert_eq!(winners.len(), 2);

        let applications = backend.giveaway_applications(&event_id).await.unwrap();
        assert_eq!(applications.iter().filter(|a| a.selected).count(), 2);
    }

    #[tokio::test]
    async fn test_draw_completes_event_and_sets_deadline() {
        let (backend, event_id) = seeded(1, &["ana", "ben"]).await;
        let mut rng = StdRng::seed_from_u64(1);
        draw_winners(&backend, &event_id, &mut rng).await.unwrap();

        let event = backend.giveaway_event(&event_id).await.unwrap().unwrap();
        assert_eq!(event.status, GiveawayStatus::Completed);
        let deadline = event.review_deadline.unwrap();
        let expected = Utc::now() + Duration::days(REVIEW_DEADLINE_DAYS);
        assert!((deadline - expected).num_minutes().abs() < 1);
    }

    #[tokio::test]
    async fn test_draw_with_fewer_applicants_than_slots() {
        let (backend, event_id) = seeded(5, &["ana", "ben"]).await;
        let mut rng = StdRng::seed_from_u64(3);
        let winners = draw_winners(&backend, &event_id, &mut rng).await.unwrap();
        // everyone wins, but slots remain so the event stays open
        assert_eq!(winners.len(), 2);
        let event = backend.giveaway_event(&event_id).await.unwrap().unwrap();
        assert_eq!(event.status, GiveawayStatus::Open);
        assert!(event.review_deadline.is_none());
    }

    #[tokio::test]
    async fn test_second_draw_is_rejected() {
        let (backend, event_id) = seeded(1, &["ana", "ben"]).await;
        let mut rng = StdRng::seed_from_u64(9);
        draw_winners(&backend, &event_id, &mut rng).await.unwrap();

        let err = draw_winners(&backend, &event_id, &mut rng).await.unwrap_err();
        assert!(matches!(err, SocialError::GiveawayCompleted));
    }

    #[tokio::test]
    async fn test_manual_pick_then_draw_fills_the_rest() {
        let (backend, event_id) = seeded(2, &["ana", "ben", "cho"]).await;
        let applications = backend.giveaway_applications(&event_id).await.unwrap();
        pick_winner(&backend, &event_id, &applications[0].id).await.unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        let winners = draw_winners(&backend, &event_id, &mut rng).await.unwrap();
        assert_eq!(winners.len(), 1);
        assert_ne!(winners[0].id, applications[0].id);

        let event = backend.giveaway_event(&event_id).await.unwrap().unwrap();
        assert_eq!(event.status, GiveawayStatus::Completed);
    }

    #[tokio::test]
    async fn test_picking_the_same_winner_twice_rejected() {
        let (backend, event_id) = seeded(2, &["ana", "ben"]).await;
        let applications = backend.giveaway_applications(&event_id).await.unwrap();
        pick_winner(&backend, &event_id, &applications[0].id).await.unwrap();

        let err = pick_winner(&backend, &event_id, &applications[0].id).await.unwrap_err();
        assert!(matches!(err, SocialError::AlreadySelected));
    }

    #[tokio::test]
    async fn test_duplicate_giveaway_entry_rejected() {
        let (backend, event_id) = seeded(1, &["ana"]).await;
        let err = apply_to_giveaway(&backend, &event_id, "ana").await.unwrap_err();
        assert!(matches!(err, SocialError::AlreadyApplied));
    }
}
