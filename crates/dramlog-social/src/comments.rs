use chrono::Utc;
use uuid::Uuid;

use crate::backend::SocialBackend;
use crate::models::Comment;
use crate::SocialError;

/// Posts a comment on a meetup event. A reply's parent must exist on the
/// same event; replying to a reply is not rejected here (the storage is
/// flat), renderers choose how deep to show.
pub async fn add_comment(
    backend: &dyn SocialBackend,
    event_id: &str,
    author: &str,
    body: &str,
    parent_id: Option<&str>,
) -> Result<Comment, SocialError> {
    backend
        .meetup_event(event_id)
        .await?
        .ok_or_else(|| SocialError::EventNotFound(event_id.to_string()))?;

    if let Some(parent) = parent_id {
        let comments = backend.comments(event_id).await?;
        if !comments.iter().any(|c| c.id == parent) {
            return Err(SocialError::ParentNotFound(parent.to_string()));
        }
    }

    let comment = Comment {
        id: Uuid::new_v4().to_string(),
        event_id: event_id.to_string(),
        author: author.to_string(),
        body: body.to_string(),
        parent_id: parent_id.map(str::to_string),
        created_at: Utc::now(),
    };
    backend.insert_comment(comment.clone()).await?;
    Ok(comment)
}

/// Groups a flat comment list into top-level comments with one level of
/// replies, both oldest-first. Replies whose parent is itself a reply get
/// attached to that reply's thread root, so nothing is dropped.
pub fn thread_comments(mut comments: Vec<Comment>) -> Vec<(Comment, Vec<Comment>)> {
    comments.sort_by_key(|c| c.created_at);
    let top_level: Vec<Comment> = comments.iter().filter(|c| c.parent_id.is_none()).cloned().collect();

    let root_of = |comment: &Comment| -> Option<String> {
        let mut current = comment.clone();
        // walk is bounded by the list length; cyclic chains have no root
        let mut hops = 0;
        while let Some(parent_id) = current.parent_id.clone() {
            hops += 1;
            if hops > comments.len() {
                return None;
            }
            match comments.iter().find(|c| c.id == parent_id) {
                Some(parent) => current = parent.clone(),
                None => return None,
            }
        }
        Some(current.id)
    };

    top_level
        .into_iter()
        .map(|top| {
            let replies = comments
                .iter()
                .filter(|c| c.parent_id.is_some() && root_of(c).as_deref() == Some(top.id.as_str()))
                .cloned()
                .collect();
            (top, replies)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemorySocialBackend;
    use crate::models::MeetupEvent;

    async fn seeded() -> (MemorySocialBackend, String) {
        let backend = MemorySocialBackend::new();
        let event = MeetupEvent::new("host", "Speyside night", 8);
        let id = event.id.clone();
        backend.insert_meetup_event(event).await.unwrap();
        (backend, id)
    }

    #[tokio::test]
    async fn test_comment_and_reply() {
        let (backend, event_id) = seeded().await;
        let top = add_comment(&backend, &event_id, "ana", "bringing a Ledaig", None)
            .await
            .unwrap();
        let reply = add_comment(&backend, &event_id, "ben", "which one?", Some(&top.id))
            .await
            .unwrap();
        assert_eq!(reply.parent_id.as_deref(), Some(top.id.as_str()));
    }

    #[tokio::test]
    async fn test_reply_to_missing_parent() {
        let (backend, event_id) = seeded().await;
        let err = add_comment(&backend, &event_id, "ben", "?", Some("ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::ParentNotFound(_)));
    }

    #[tokio::test]
    async fn test_threading_groups_one_level() {
        let (backend, event_id) = seeded().await;
        let a = add_comment(&backend, &event_id, "ana", "first", None).await.unwrap();
        let b = add_comment(&backend, &event_id, "ben", "second", None).await.unwrap();
        add_comment(&backend, &event_id, "cho", "re: first", Some(&a.id)).await.unwrap();

        let threads = thread_comments(backend.comments(&event_id).await.unwrap());
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].0.id, a.id);
        assert_eq!(threads[0].1.len(), 1);
        assert_eq!(threads[1].0.id, b.id);
        assert!(threads[1].1.is_empty());
    }

    #[tokio::test]
    async fn test_reply_to_reply_lands_under_thread_root() {
        let (backend, event_id) = seeded().await;
        let top = add_comment(&backend, &event_id, "ana", "top", None).await.unwrap();
        let reply = add_comment(&backend, &event_id, "ben", "reply", Some(&top.id)).await.unwrap();
        // deeper nesting is stored as-is
        add_comment(&backend, &event_id, "cho", "deep", Some(&reply.id)).await.unwrap();

        let threads = thread_comments(backend.comments(&event_id).await.unwrap());
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].1.len(), 2);
    }

    #[test]
    fn test_cyclic_parent_chain_terminates() {
        let now = Utc::now();
        let a = Comment {
            id: "a".to_string(),
            event_id: "e".to_string(),
            author: "ana".to_string(),
            body: "first".to_string(),
            parent_id: Some("b".to_string()),
            created_at: now,
        };
        let mut b = a.clone();
        b.id = "b".to_string();
        b.parent_id = Some("a".to_string());

        // a cycle has no thread root; both comments are dropped
        let threads = thread_comments(vec![a, b]);
        assert!(threads.is_empty());
    }
}
