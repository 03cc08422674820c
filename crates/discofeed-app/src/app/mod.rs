//! Feed state and refresh control

pub mod controller;
pub mod state;

pub use controller::FeedController;
pub use state::FeedSnapshot;
