//! Domain entities - the core business objects.

mod post;

mod status;

pub use post::Post;
pub use status::PostStatus;
