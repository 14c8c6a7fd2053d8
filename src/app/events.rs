use crate::app::{ApiEvent, App, FeedbackForm, FormNotice};
use crate::services::ApiError;

const SUBMIT_SUCCESS: &str = "Thank you for your feedback! We appreciate your time.";
const SUBMIT_FAILURE: &str = "Failed to submit feedback. Please try again later.";

impl App {
    /// Drains finished requests. Runs on the UI loop between frames.
    pub fn check_api_events(&mut self) {
        while let Ok(event) = self.api_rx.try_recv() {
            self.apply_api_event(event);
        }
    }

    pub(crate) fn apply_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::PostsLoaded(result) => {
                self.posts_loading = false;
                match result {
                    Ok(posts) => {
                        tracing::info!(count = posts.len(), "posts loaded");
                        self.posts.set_items(posts);
                    }
                    Err(error) => {
                        tracing::warn!(%error, "failed to fetch posts");
                        self.posts_error = Some(error.to_string());
                    }
                }
            }
            ApiEvent::FeedbackLoaded(result) => {
                self.dashboard.loading = false;
                match result {
                    Ok(records) => {
                        tracing::info!(count = records.len(), "feedback loaded");
                        self.dashboard.set_records(records);
                    }
                    Err(error) => {
                        tracing::warn!(%error, "failed to fetch feedback");
                        self.dashboard.error = Some("Failed to fetch feedback data".to_string());
                    }
                }
            }
            ApiEvent::TotalLoaded(result) => match result {
                Ok(total) => self.dashboard.reported_total = Some(total),
                Err(error) => tracing::warn!(%error, "failed to fetch statistics"),
            },
            ApiEvent::PublicSubmitted(result) => {
                self.form_submitting = false;
                match result {
                    Ok(record) => {
                        tracing::info!(id = %record.id, "public feedback submitted");
                        self.form = FeedbackForm::public();
                        self.form_notice = Some(FormNotice::Success(SUBMIT_SUCCESS.to_string()));
                    }
                    Err(error) => {
                        tracing::warn!(%error, "public feedback rejected");
                        let message = match error {
                            ApiError::Status { message, .. } | ApiError::Rejected(message) => {
                                message
                            }
                            ApiError::Transport(_) | ApiError::MissingData | ApiError::Decode(_) => {
                                SUBMIT_FAILURE.to_string()
                            }
                        };
                        self.form_notice = Some(FormNotice::Error(message));
                    }
                }
            }
            ApiEvent::Created(result) => match result {
                Ok(record) => {
                    self.dashboard.apply_created(record);
                    self.show_status_toast("FEEDBACK CREATED");
                    self.refresh_dashboard();
                }
                Err(error) => {
                    tracing::warn!(%error, "create failed");
                    self.show_status_toast("SUBMIT FAILED");
                }
            },
            ApiEvent::Updated(result) => match result {
                Ok(record) => {
                    self.dashboard.apply_updated(record);
                    self.show_status_toast("FEEDBACK UPDATED");
                    self.refresh_dashboard();
                }
                Err(error) => {
                    tracing::warn!(%error, "update failed");
                    self.show_status_toast("SUBMIT FAILED");
                }
            },
            ApiEvent::Deleted { id, result } => match result {
                Ok(()) => {
                    self.dashboard.apply_deleted(&id);
                    self.show_status_toast("FEEDBACK DELETED");
                }
                Err(error) => {
                    tracing::warn!(%error, id, "delete failed");
                    self.show_status_toast("DELETE FAILED");
                }
            },
        }
    }
}
