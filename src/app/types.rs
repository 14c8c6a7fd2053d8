use crate::services::ApiError;
use crate::services::feedback::Feedback;
use crate::services::posts::Post;
use std::time::{Duration, Instant};

/// Results reported back from request worker threads
#[derive(Debug)]
pub enum ApiEvent {
    PostsLoaded(Result<Vec<Post>, ApiError>),
    FeedbackLoaded(Result<Vec<Feedback>, ApiError>),
    TotalLoaded(Result<usize, ApiError>),
    PublicSubmitted(Result<Feedback, ApiError>),
    Created(Result<Feedback, ApiError>),
    Updated(Result<Feedback, ApiError>),
    Deleted { id: String, result: Result<(), ApiError> },
}

#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}

/// Outcome line shown under the public form
#[derive(Debug, Clone, PartialEq)]
pub enum FormNotice {
    Success(String),
    Error(String),
}
