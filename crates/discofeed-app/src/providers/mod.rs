//! Feed providers
//!
//! Sources of feed posts. GitHub Discussions is the only provider today; the
//! trait keeps the seam open for other discussion backends.

pub mod github;
pub mod traits;
pub mod types;

// Re-exports
pub use github::GithubDiscussionsProvider;
pub use traits::FeedProvider;
pub use types::Post;
