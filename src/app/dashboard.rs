use crate::app::{ApiEvent, App, FeedbackForm, Navigable};
use crate::services::feedback::{Feedback, FeedbackStats, FeedbackStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FeedbackStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(FeedbackStatus::New),
            StatusFilter::Only(FeedbackStatus::New) => StatusFilter::Only(FeedbackStatus::InProgress),
            StatusFilter::Only(FeedbackStatus::InProgress) => {
                StatusFilter::Only(FeedbackStatus::Resolved)
            }
            StatusFilter::Only(FeedbackStatus::Resolved) => StatusFilter::All,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Statuses",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Records without a status only show up under `All`
    #[must_use]
    pub fn matches(self, record: &Feedback) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.status == Some(status),
        }
    }
}

/// Admin table state
#[derive(Debug, Default)]
pub struct Dashboard {
    pub records: Vec<Feedback>,
    pub stats: FeedbackStats,
    /// Count from the statistics endpoint; dropped on any local create, update or delete
    pub reported_total: Option<usize>,
    pub filter: StatusFilter,
    pub loading: bool,
    pub error: Option<String>,
    pub editor: Option<FeedbackForm>,
    /// Id awaiting delete confirmation
    pub confirm_delete: Option<String>,
    selected_index: usize,
}

impl Dashboard {
    #[must_use]
    pub fn filtered(&self) -> Vec<&Feedback> {
        self.records
            .iter()
            .filter(|record| self.filter.matches(record))
            .collect()
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&Feedback> {
        self.filtered().get(self.selected_index).copied()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.reported_total.unwrap_or(self.stats.total)
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected_index = 0;
    }

    /// Wholesale replacement after a list fetch
    pub fn set_records(&mut self, records: Vec<Feedback>) {
        self.records = records;
        self.error = None;
        self.recompute_stats();
    }

    pub fn apply_created(&mut self, record: Feedback) {
        self.records.push(record);
        self.reported_total = None;
        self.recompute_stats();
    }

    pub fn apply_updated(&mut self, record: Feedback) {
        if let Some(existing) = self.records.iter_mut().find(|item| item.id == record.id) {
            *existing = record;
        }
        self.reported_total = None;
        self.recompute_stats();
    }

    pub fn apply_deleted(&mut self, id: &str) {
        self.records.retain(|item| item.id != id);
        self.reported_total = None;
        self.recompute_stats();
    }

    fn recompute_stats(&mut self) {
        self.stats = FeedbackStats::from_records(&self.records);
        self.clamp_selection();
    }
}

impl Navigable for Dashboard {
    fn item_count(&self) -> usize {
        self.filtered().len()
    }

    fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }
}

impl App {
    /// Reloads the table and the statistics overview
    pub fn refresh_dashboard(&mut self) {
        let Some(service) = self.feedback_service.clone() else {
            self.dashboard.error = Some("API client is not configured".to_string());
            return;
        };
        self.dashboard.loading = true;
        let stats_service = service.clone();
        self.spawn_request(move || ApiEvent::FeedbackLoaded(service.list()));
        self.spawn_request(move || ApiEvent::TotalLoaded(stats_service.total_count()));
    }

    pub fn open_new_feedback(&mut self) {
        self.dashboard.editor = Some(FeedbackForm::editor());
    }

    pub fn open_edit_feedback(&mut self) {
        if let Some(record) = self.dashboard.selected_record() {
            self.dashboard.editor = Some(FeedbackForm::edit(record));
        }
    }

    pub fn close_editor(&mut self) {
        self.dashboard.editor = None;
    }

    pub fn submit_editor(&mut self) {
        let Some(editor) = &self.dashboard.editor else {
            return;
        };
        let submission = match editor.validate() {
            Ok(submission) => submission,
            Err(error) => {
                self.show_status_toast(error.to_string().to_uppercase());
                return;
            }
        };
        let editing_id = editor.editing_id().map(str::to_string);
        let Some(service) = self.feedback_service.clone() else {
            self.show_status_toast("API UNAVAILABLE");
            return;
        };
        match editing_id {
            Some(id) => self.spawn_request(move || {
                ApiEvent::Updated(service.update(&id, &submission))
            }),
            None => self.spawn_request(move || ApiEvent::Created(service.create(&submission))),
        }
        self.dashboard.editor = None;
    }

    pub fn request_delete(&mut self) {
        self.dashboard.confirm_delete = self
            .dashboard
            .selected_record()
            .map(|record| record.id.clone());
    }

    pub fn cancel_delete(&mut self) {
        self.dashboard.confirm_delete = None;
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.dashboard.confirm_delete.take() else {
            return;
        };
        let Some(service) = self.feedback_service.clone() else {
            self.show_status_toast("API UNAVAILABLE");
            return;
        };
        self.spawn_request(move || {
            let result = service.delete(&id);
            ApiEvent::Deleted { id, result }
        });
    }

    pub fn close_dashboard(&mut self) {
        self.dashboard.editor = None;
        self.dashboard.confirm_delete = None;
        self.enter_home();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::feedback::{FeedbackType, Recommendation};

    fn record(id: &str, rating: u8, status: Option<FeedbackStatus>) -> Feedback {
        Feedback {
            id: id.to_string(),
            full_name: format!("Customer {}", id),
            email: format!("{}@example.com", id),
            phone_number: None,
            feedback_type: FeedbackType::Complaint,
            rating,
            feedback_details: "Late delivery".to_string(),
            improvement_suggestions: None,
            would_recommend: Recommendation::No,
            status,
            created_at: None,
        }
    }

    fn dashboard() -> Dashboard {
        let mut dashboard = Dashboard::default();
        dashboard.set_records(vec![
            record("a", 1, None),
            record("b", 3, Some(FeedbackStatus::New)),
            record("c", 5, Some(FeedbackStatus::Resolved)),
        ]);
        dashboard
    }

    #[test]
    fn test_filter_cycle() {
        let mut filter = StatusFilter::All;
        let mut labels = Vec::new();
        for _ in 0..4 {
            filter = filter.next();
            labels.push(filter.label());
        }
        assert_eq!(labels, vec!["New", "In Progress", "Resolved", "All Statuses"]);
    }

    #[test]
    fn test_filter_skips_records_without_status() {
        let mut dashboard = dashboard();
        assert_eq!(dashboard.filtered().len(), 3);
        dashboard.cycle_filter();
        let ids: Vec<&str> = dashboard.filtered().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
        dashboard.cycle_filter();
        assert!(dashboard.filtered().is_empty());
        assert!(dashboard.selected_record().is_none());
    }

    #[test]
    fn test_delete_recomputes_and_clamps() {
        let mut dashboard = dashboard();
        dashboard.reported_total = Some(40);
        dashboard.next_item();
        dashboard.next_item();
        assert_eq!(dashboard.selected_record().map(|item| item.id.as_str()), Some("c"));

        dashboard.apply_deleted("c");
        assert_eq!(dashboard.total(), 2);
        assert_eq!(dashboard.stats.average_label(), "2.0");
        assert_eq!(dashboard.selected_record().map(|item| item.id.as_str()), Some("b"));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut dashboard = dashboard();
        let mut changed = record("b", 5, Some(FeedbackStatus::Resolved));
        changed.full_name = "Renamed".to_string();
        dashboard.apply_updated(changed);
        assert_eq!(dashboard.records.len(), 3);
        assert_eq!(dashboard.records[1].full_name, "Renamed");
        assert_eq!(dashboard.stats.average_label(), "3.7");
    }

    #[test]
    fn test_create_appends() {
        let mut dashboard = dashboard();
        dashboard.apply_created(record("d", 4, None));
        assert_eq!(dashboard.total(), 4);
        assert_eq!(dashboard.records.last().map(|item| item.id.as_str()), Some("d"));
    }

    #[test]
    fn test_reload_keeps_reported_total() {
        let mut dashboard = dashboard();
        dashboard.reported_total = Some(40);
        dashboard.set_records(vec![record("a", 2, None)]);
        assert_eq!(dashboard.total(), 40);

        dashboard.apply_created(record("b", 4, None));
        assert_eq!(dashboard.total(), 2);
    }
}
