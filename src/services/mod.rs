pub mod api;
pub mod feedback;
pub mod posts;

pub use api::{ApiClient, ApiError};
pub use feedback::FeedbackService;
pub use posts::PostService;
