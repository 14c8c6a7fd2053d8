use crate::services::api::{ApiClient, ApiError, decode_ack, decode_envelope};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const FEEDBACK_PATH: &str = "/api/feedback/";
const STATISTICS_PATH: &str = "/api/feedback/statistics/overview";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackType {
    GeneralFeedback,
    ProductFeedback,
    CustomerService,
    WebsiteExperience,
    Suggestion,
    Complaint,
}

impl FeedbackType {
    pub const ALL: [FeedbackType; 6] = [
        FeedbackType::GeneralFeedback,
        FeedbackType::ProductFeedback,
        FeedbackType::CustomerService,
        FeedbackType::WebsiteExperience,
        FeedbackType::Suggestion,
        FeedbackType::Complaint,
    ];

    /// Human label used in the form
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FeedbackType::GeneralFeedback => "General Feedback",
            FeedbackType::ProductFeedback => "Product Feedback",
            FeedbackType::CustomerService => "Customer Service",
            FeedbackType::WebsiteExperience => "Website Experience",
            FeedbackType::Suggestion => "Suggestion",
            FeedbackType::Complaint => "Complaint",
        }
    }

    /// Wire code with underscores replaced, as shown in the admin table
    #[must_use]
    pub fn table_label(self) -> &'static str {
        match self {
            FeedbackType::GeneralFeedback => "GENERAL FEEDBACK",
            FeedbackType::ProductFeedback => "PRODUCT FEEDBACK",
            FeedbackType::CustomerService => "CUSTOMER SERVICE",
            FeedbackType::WebsiteExperience => "WEBSITE EXPERIENCE",
            FeedbackType::Suggestion => "SUGGESTION",
            FeedbackType::Complaint => "COMPLAINT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Yes,
    No,
    Maybe,
}

impl Recommendation {
    pub const ALL: [Recommendation; 3] =
        [Recommendation::Yes, Recommendation::No, Recommendation::Maybe];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Recommendation::Yes => "Yes",
            Recommendation::No => "No",
            Recommendation::Maybe => "Maybe",
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Recommendation::Yes => "YES",
            Recommendation::No => "NO",
            Recommendation::Maybe => "MAYBE",
        }
    }
}

/// Triage status. Older records may not carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl FeedbackStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FeedbackStatus::New => "New",
            FeedbackStatus::InProgress => "In Progress",
            FeedbackStatus::Resolved => "Resolved",
        }
    }
}

/// A stored feedback record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub feedback_type: FeedbackType,
    pub rating: u8,
    pub feedback_details: String,
    #[serde(default)]
    pub improvement_suggestions: Option<String>,
    pub would_recommend: Recommendation,
    #[serde(default)]
    pub status: Option<FeedbackStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Feedback {
    /// First eight characters of the id followed by an ellipsis
    #[must_use]
    pub fn short_id(&self) -> String {
        let prefix: String = self.id.chars().take(8).collect();
        format!("{}...", prefix)
    }

    /// Creation date as `YYYY-MM-DD`, or empty when unknown
    #[must_use]
    pub fn created_date(&self) -> String {
        self.created_at
            .as_deref()
            .map(format_date)
            .unwrap_or_default()
    }
}

fn format_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.with_timezone(&chrono::Utc).format("%Y-%m-%d").to_string(),
        Err(_) => raw.chars().take(10).collect(),
    }
}

/// Body sent on create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub feedback_type: FeedbackType,
    pub rating: u8,
    pub feedback_details: String,
    pub improvement_suggestions: String,
    pub would_recommend: Recommendation,
}

/// Figures shown on the dashboard stat cards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeedbackStats {
    pub total: usize,
    pub average_rating: Option<f32>,
    pub recommend_percent: Option<u32>,
}

impl FeedbackStats {
    #[must_use]
    pub fn from_records(records: &[Feedback]) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        let count = records.len() as f32;
        let rating_sum: u32 = records.iter().map(|record| u32::from(record.rating)).sum();
        let recommending = records
            .iter()
            .filter(|record| record.would_recommend == Recommendation::Yes)
            .count();
        Self {
            total: records.len(),
            average_rating: Some(rating_sum as f32 / count),
            recommend_percent: Some((recommending as f32 / count * 100.0).round() as u32),
        }
    }

    #[must_use]
    pub fn average_label(&self) -> String {
        self.average_rating
            .map_or_else(|| "N/A".to_string(), |average| format!("{:.1}", average))
    }

    #[must_use]
    pub fn recommend_label(&self) -> String {
        self.recommend_percent
            .map_or_else(|| "N/A".to_string(), |percent| format!("{}%", percent))
    }
}

#[derive(Debug, Deserialize)]
struct StatisticsData {
    stats: StatisticsOverview,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatisticsOverview {
    #[serde(default)]
    total_feedbacks: usize,
}

/// CRUD access to `/api/feedback`
#[derive(Debug, Clone)]
pub struct FeedbackService {
    api: ApiClient,
}

impl FeedbackService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn list(&self) -> Result<Vec<Feedback>, ApiError> {
        let (status, body) = self
            .api
            .send(self.api.request(Method::GET, FEEDBACK_PATH), "list feedback")?;
        decode_envelope(status, &body)
    }

    pub fn create(&self, submission: &FeedbackSubmission) -> Result<Feedback, ApiError> {
        tracing::info!(feedback_type = ?submission.feedback_type, "creating feedback");
        let request = self.api.request(Method::POST, FEEDBACK_PATH).json(submission);
        let (status, body) = self.api.send(request, "create feedback")?;
        decode_envelope(status, &body)
    }

    pub fn update(&self, id: &str, submission: &FeedbackSubmission) -> Result<Feedback, ApiError> {
        tracing::info!(id, "updating feedback");
        let request = self
            .api
            .request(Method::PUT, &format!("{}{}", FEEDBACK_PATH, id))
            .json(submission);
        let (status, body) = self.api.send(request, "update feedback")?;
        decode_envelope(status, &body)
    }

    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!(id, "deleting feedback");
        let request = self
            .api
            .request(Method::DELETE, &format!("{}{}", FEEDBACK_PATH, id));
        let (status, body) = self.api.send(request, "delete feedback")?;
        decode_ack(status, &body)
    }

    /// Total count reported by the statistics endpoint
    pub fn total_count(&self) -> Result<usize, ApiError> {
        let (status, body) = self
            .api
            .send(self.api.request(Method::GET, STATISTICS_PATH), "feedback statistics")?;
        let data: StatisticsData = decode_envelope(status, &body)?;
        Ok(data.stats.total_feedbacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, rating: u8, recommend: Recommendation) -> Feedback {
        Feedback {
            id: id.to_string(),
            full_name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: None,
            feedback_type: FeedbackType::ProductFeedback,
            rating,
            feedback_details: "Works well".to_string(),
            improvement_suggestions: None,
            would_recommend: recommend,
            status: None,
            created_at: None,
        }
    }

    #[test]
    fn test_parse_record() {
        let body = r#"{
            "success": true,
            "data": [{
                "_id": "65f1c0ffee1234567890abcd",
                "fullName": "Bob Johnson",
                "email": "bob@example.com",
                "feedbackType": "CUSTOMER_SERVICE",
                "rating": 4,
                "feedbackDetails": "Quick answer",
                "wouldRecommend": "MAYBE",
                "status": "In Progress",
                "createdAt": "2025-03-14T09:26:53.589Z"
            }]
        }"#;
        let records: Vec<Feedback> = decode_envelope(200, body).unwrap();
        let record = &records[0];
        assert_eq!(record.full_name, "Bob Johnson");
        assert_eq!(record.feedback_type, FeedbackType::CustomerService);
        assert_eq!(record.would_recommend, Recommendation::Maybe);
        assert_eq!(record.status, Some(FeedbackStatus::InProgress));
        assert_eq!(record.phone_number, None);
        assert_eq!(record.short_id(), "65f1c0ff...");
        assert_eq!(record.created_date(), "2025-03-14");
    }

    #[test]
    fn test_submission_uses_wire_names() {
        let submission = FeedbackSubmission {
            full_name: "Eve Evans".to_string(),
            email: "eve@example.com".to_string(),
            phone_number: String::new(),
            feedback_type: FeedbackType::WebsiteExperience,
            rating: 3,
            feedback_details: "Slow checkout".to_string(),
            improvement_suggestions: String::new(),
            would_recommend: Recommendation::No,
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["fullName"], "Eve Evans");
        assert_eq!(value["feedbackType"], "WEBSITE_EXPERIENCE");
        assert_eq!(value["wouldRecommend"], "NO");
        assert_eq!(value["rating"], 3);
    }

    #[test]
    fn test_stats_from_records() {
        let records = vec![
            sample("a", 5, Recommendation::Yes),
            sample("b", 4, Recommendation::Yes),
            sample("c", 2, Recommendation::No),
        ];
        let stats = FeedbackStats::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_label(), "3.7");
        assert_eq!(stats.recommend_label(), "67%");
    }

    #[test]
    fn test_stats_empty() {
        let stats = FeedbackStats::from_records(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_label(), "N/A");
        assert_eq!(stats.recommend_label(), "N/A");
    }

    #[test]
    fn test_statistics_overview_shape() {
        let body = r#"{"success":true,"data":{"stats":{"totalFeedbacks":12,"averageRating":4.1}}}"#;
        let data: StatisticsData = decode_envelope(200, body).unwrap();
        assert_eq!(data.stats.total_feedbacks, 12);
    }

    #[test]
    fn test_created_date_fallback() {
        let mut record = sample("x", 3, Recommendation::Yes);
        record.created_at = Some("2024-01-02 10:00".to_string());
        assert_eq!(record.created_date(), "2024-01-02");
    }
}
