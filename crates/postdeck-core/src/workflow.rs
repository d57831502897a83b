//! Post lifecycle workflow.
//!
//! Validates status transitions. The board is free-form: any recognized
//! state may move to any other, including itself (a same-column drop is a
//! successful no-op). What gets rejected is a target outside the five
//! recognized states - silently coercing would corrupt board columns.

use crate::domain::{Post, PostStatus};
use crate::error::DomainError;

/// Apply a status transition to a post.
///
/// Pure: returns an updated copy with `status` replaced, leaving the input
/// untouched. Persistence is the caller's job. An unrecognized `new_status`
/// is a [`DomainError::Validation`].
pub fn transition(post: &Post, new_status: &str) -> Result<Post, DomainError> {
    let target: PostStatus = new_status.parse()?;

    let mut updated = post.clone();
    updated.status = target.as_str().to_string();
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_status(status: &str) -> Post {
        Post::new(
            "instagram".into(),
            "Launch".into(),
            String::new(),
            None,
            Some(status.into()),
            String::new(),
            None,
        )
    }

    #[test]
    fn moves_between_any_recognized_states() {
        let post = post_with_status("idea");
        for target in PostStatus::ALL {
            let updated = transition(&post, target.as_str()).unwrap();
            assert_eq!(updated.status, target.as_str());
            assert_eq!(updated.id, post.id);
        }
    }

    #[test]
    fn same_status_is_a_successful_noop() {
        let post = post_with_status("scheduled");
        let updated = transition(&post, "scheduled").unwrap();
        assert_eq!(updated.status, "scheduled");
    }

    #[test]
    fn rejects_unrecognized_target_and_leaves_input_unchanged() {
        let post = post_with_status("ready");
        let err = transition(&post, "archived").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(post.status, "ready");
    }
}
