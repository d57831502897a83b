//! Kanban projection - fixed status columns plus drag-initiated moves.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Post, PostStatus};
use crate::error::DomainError;
use crate::workflow;

/// One board column: all posts sharing a status, input order preserved.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub status: PostStatus,
    pub posts: Vec<Post>,
}

/// The five fixed columns plus whatever did not fit in any of them.
///
/// Posts with an unrecognized status are surfaced in `unrecognized` for the
/// caller to report; the projection never rewrites them.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub unrecognized: Vec<Post>,
}

/// Partition posts into the fixed columns `[idea, production, ready,
/// scheduled, published]`.
pub fn project_columns(posts: &[Post]) -> Board {
    let columns = PostStatus::ALL
        .iter()
        .map(|&status| Column {
            status,
            posts: posts
                .iter()
                .filter(|p| p.status == status.as_str())
                .cloned()
                .collect(),
        })
        .collect();

    let unrecognized = posts
        .iter()
        .filter(|p| p.status.parse::<PostStatus>().is_err())
        .cloned()
        .collect();

    Board {
        columns,
        unrecognized,
    }
}

/// Move a card to a target column.
///
/// Looks the post up in the snapshot, then delegates to the workflow.
/// Returns the updated record for the caller to persist; the caller must
/// persist nothing on failure. Dropping a card on its current column is a
/// no-op that still succeeds.
pub fn move_card(posts: &[Post], id: Uuid, target: &str) -> Result<Post, DomainError> {
    let post = posts
        .iter()
        .find(|p| p.id == id)
        .ok_or(DomainError::NotFound {
            entity_type: "post",
            id,
        })?;

    workflow::transition(post, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_status(title: &str, status: &str) -> Post {
        Post::new(
            "instagram".into(),
            title.into(),
            String::new(),
            None,
            Some(status.into()),
            String::new(),
            None,
        )
    }

    #[test]
    fn partitions_each_post_into_exactly_one_column() {
        let posts = vec![
            post_with_status("a", "idea"),
            post_with_status("b", "scheduled"),
            post_with_status("c", "idea"),
            post_with_status("d", "published"),
        ];
        let board = project_columns(&posts);

        assert_eq!(board.columns.len(), 5);
        let total: usize = board.columns.iter().map(|c| c.posts.len()).sum();
        assert_eq!(total + board.unrecognized.len(), posts.len());

        let idea = &board.columns[0];
        assert_eq!(idea.status, PostStatus::Idea);
        let titles: Vec<&str> = idea.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn unrecognized_status_is_excluded_but_reported() {
        let posts = vec![
            post_with_status("ok", "ready"),
            post_with_status("odd", "limbo"),
        ];
        let board = project_columns(&posts);

        let total: usize = board.columns.iter().map(|c| c.posts.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(board.unrecognized.len(), 1);
        assert_eq!(board.unrecognized[0].title, "odd");
        // Conservation: columns + unrecognized = input.
        assert_eq!(total + board.unrecognized.len(), posts.len());
    }

    #[test]
    fn move_card_updates_the_matching_post() {
        let posts = vec![
            post_with_status("a", "idea"),
            post_with_status("b", "ready"),
        ];
        let moved = move_card(&posts, posts[1].id, "scheduled").unwrap();
        assert_eq!(moved.id, posts[1].id);
        assert_eq!(moved.status, "scheduled");
        // Snapshot untouched.
        assert_eq!(posts[1].status, "ready");
    }

    #[test]
    fn move_card_to_current_column_succeeds() {
        let posts = vec![post_with_status("a", "production")];
        let moved = move_card(&posts, posts[0].id, "production").unwrap();
        assert_eq!(moved.status, "production");
    }

    #[test]
    fn move_card_unknown_id_is_not_found() {
        let posts = vec![post_with_status("a", "idea")];
        let err = move_card(&posts, Uuid::new_v4(), "ready").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn move_card_unrecognized_target_is_validation() {
        let posts = vec![post_with_status("a", "idea")];
        let err = move_card(&posts, posts[0].id, "archived").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
