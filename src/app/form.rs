use crate::app::{ApiEvent, App, FormNotice, Navigable, TextInput};
use crate::services::feedback::{Feedback, FeedbackSubmission, FeedbackType, Recommendation};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    PhoneNumber,
    FeedbackType,
    Rating,
    FeedbackDetails,
    ImprovementSuggestions,
    WouldRecommend,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::FullName,
        FormField::Email,
        FormField::PhoneNumber,
        FormField::FeedbackType,
        FormField::Rating,
        FormField::FeedbackDetails,
        FormField::ImprovementSuggestions,
        FormField::WouldRecommend,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email",
            FormField::PhoneNumber => "Phone Number",
            FormField::FeedbackType => "Feedback Type",
            FormField::Rating => "Rating",
            FormField::FeedbackDetails => "Feedback Details",
            FormField::ImprovementSuggestions => "Improvement Suggestions",
            FormField::WouldRecommend => "Would Recommend",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(
            self,
            FormField::PhoneNumber | FormField::ImprovementSuggestions
        )
    }

    /// Fields edited with Left/Right instead of typing
    #[must_use]
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            FormField::FeedbackType | FormField::Rating | FormField::WouldRecommend
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),
}

/// Field state shared by the public form and the dashboard editor
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    pub full_name: TextInput,
    pub email: TextInput,
    pub phone_number: TextInput,
    pub feedback_type: Option<FeedbackType>,
    pub rating: Option<u8>,
    pub feedback_details: TextInput,
    pub improvement_suggestions: TextInput,
    pub would_recommend: Option<Recommendation>,
    focused: usize,
    editing_id: Option<String>,
}

impl FeedbackForm {
    /// Blank form with every choice unset
    pub fn public() -> Self {
        Self::default()
    }

    /// Admin editor defaults for a new record
    pub fn editor() -> Self {
        Self {
            feedback_type: Some(FeedbackType::GeneralFeedback),
            rating: Some(5),
            would_recommend: Some(Recommendation::Yes),
            ..Self::default()
        }
    }

    /// Editor prefilled from an existing record
    pub fn edit(record: &Feedback) -> Self {
        Self {
            full_name: TextInput::from(record.full_name.as_str()),
            email: TextInput::from(record.email.as_str()),
            phone_number: TextInput::from(record.phone_number.as_deref().unwrap_or_default()),
            feedback_type: Some(record.feedback_type),
            rating: Some(record.rating.clamp(1, 5)),
            feedback_details: TextInput::from(record.feedback_details.as_str()),
            improvement_suggestions: TextInput::from(
                record.improvement_suggestions.as_deref().unwrap_or_default(),
            ),
            would_recommend: Some(record.would_recommend),
            focused: 0,
            editing_id: Some(record.id.clone()),
        }
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    #[must_use]
    pub fn focused_field(&self) -> FormField {
        FormField::ALL
            .get(self.focused)
            .copied()
            .unwrap_or(FormField::FullName)
    }

    fn focused_text_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field() {
            FormField::FullName => Some(&mut self.full_name),
            FormField::Email => Some(&mut self.email),
            FormField::PhoneNumber => Some(&mut self.phone_number),
            FormField::FeedbackDetails => Some(&mut self.feedback_details),
            FormField::ImprovementSuggestions => Some(&mut self.improvement_suggestions),
            FormField::FeedbackType | FormField::Rating | FormField::WouldRecommend => None,
        }
    }

    /// Types into the focused field. On the rating field digits 1-5 pick the value.
    pub fn input_char(&mut self, character: char) {
        if self.focused_field() == FormField::Rating {
            if let Some(digit) = character.to_digit(10)
                && (1..=5).contains(&digit)
            {
                self.rating = u8::try_from(digit).ok();
            }
            return;
        }
        if let Some(input) = self.focused_text_mut() {
            input.insert_char(character);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_text_mut() {
            input.backspace();
        }
    }

    /// Left/Right: cycles choices, or moves the text cursor
    pub fn shift(&mut self, forward: bool) {
        match self.focused_field() {
            FormField::FeedbackType => {
                self.feedback_type =
                    cycle(&FeedbackType::ALL, self.feedback_type, forward).or(self.feedback_type);
            }
            FormField::WouldRecommend => {
                self.would_recommend = cycle(&Recommendation::ALL, self.would_recommend, forward)
                    .or(self.would_recommend);
            }
            FormField::Rating => {
                self.rating = cycle(&[1, 2, 3, 4, 5], self.rating, forward).or(self.rating);
            }
            FormField::FullName
            | FormField::Email
            | FormField::PhoneNumber
            | FormField::FeedbackDetails
            | FormField::ImprovementSuggestions => {
                if let Some(input) = self.focused_text_mut() {
                    if forward {
                        input.move_right();
                    } else {
                        input.move_left();
                    }
                }
            }
        }
    }

    /// Home/End inside the focused text field
    pub fn jump_cursor(&mut self, to_end: bool) {
        if let Some(input) = self.focused_text_mut() {
            if to_end {
                input.move_end();
            } else {
                input.move_home();
            }
        }
    }

    /// Checks required fields in display order and builds the request body
    pub fn validate(&self) -> Result<FeedbackSubmission, FormError> {
        let required_text = |field: FormField, input: &TextInput| {
            if input.is_blank() {
                Err(FormError::Missing(field))
            } else {
                Ok(input.value())
            }
        };

        let full_name = required_text(FormField::FullName, &self.full_name)?;
        let email = required_text(FormField::Email, &self.email)?;
        let feedback_type = self
            .feedback_type
            .ok_or(FormError::Missing(FormField::FeedbackType))?;
        let rating = self.rating.ok_or(FormError::Missing(FormField::Rating))?;
        let feedback_details = required_text(FormField::FeedbackDetails, &self.feedback_details)?;
        let would_recommend = self
            .would_recommend
            .ok_or(FormError::Missing(FormField::WouldRecommend))?;

        Ok(FeedbackSubmission {
            full_name,
            email,
            phone_number: self.phone_number.value(),
            feedback_type,
            rating,
            feedback_details,
            improvement_suggestions: self.improvement_suggestions.value(),
            would_recommend,
        })
    }

    /// Text shown for a field in the form view
    #[must_use]
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::FullName => self.full_name.content().to_string(),
            FormField::Email => self.email.content().to_string(),
            FormField::PhoneNumber => self.phone_number.content().to_string(),
            FormField::FeedbackDetails => self.feedback_details.content().to_string(),
            FormField::ImprovementSuggestions => {
                self.improvement_suggestions.content().to_string()
            }
            FormField::FeedbackType => self
                .feedback_type
                .map_or_else(|| "Select".to_string(), |kind| kind.label().to_string()),
            FormField::Rating => self
                .rating
                .map_or_else(|| "Select".to_string(), |rating| format!("{} / 5", rating)),
            FormField::WouldRecommend => self
                .would_recommend
                .map_or_else(|| "Select".to_string(), |choice| choice.label().to_string()),
        }
    }

    /// Cursor position inside the focused text field, if it is one
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match self.focused_field() {
            FormField::FullName => Some(self.full_name.cursor()),
            FormField::Email => Some(self.email.cursor()),
            FormField::PhoneNumber => Some(self.phone_number.cursor()),
            FormField::FeedbackDetails => Some(self.feedback_details.cursor()),
            FormField::ImprovementSuggestions => Some(self.improvement_suggestions.cursor()),
            FormField::FeedbackType | FormField::Rating | FormField::WouldRecommend => None,
        }
    }
}

impl Navigable for FeedbackForm {
    fn item_count(&self) -> usize {
        FormField::ALL.len()
    }

    fn selected_index(&self) -> usize {
        self.focused
    }

    fn set_selected_index(&mut self, index: usize) {
        self.focused = index;
    }
}

impl App {
    pub fn submit_public_form(&mut self) {
        if self.form_submitting {
            return;
        }
        let submission = match self.form.validate() {
            Ok(submission) => submission,
            Err(error) => {
                self.form_notice = Some(FormNotice::Error(error.to_string()));
                return;
            }
        };
        let Some(service) = self.feedback_service.clone() else {
            self.form_notice = Some(FormNotice::Error(
                "Failed to submit feedback. Please try again later.".to_string(),
            ));
            return;
        };
        self.form_submitting = true;
        self.form_notice = None;
        self.spawn_request(move || ApiEvent::PublicSubmitted(service.create(&submission)));
    }

    /// Esc from the public form; clears everything like a fresh visit
    pub fn close_feedback_form(&mut self) {
        self.form = FeedbackForm::public();
        self.form_notice = None;
        self.enter_home();
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let len = options.len();
    let position = current.and_then(|value| options.iter().position(|option| *option == value));
    let next = match (position, forward) {
        (None, true) => 0,
        (None, false) => len.saturating_sub(1),
        (Some(index), true) => (index + 1) % len,
        (Some(index), false) => (index + len - 1) % len,
    };
    options.get(next).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut FeedbackForm, text: &str) {
        for character in text.chars() {
            form.input_char(character);
        }
    }

    fn filled_public_form() -> FeedbackForm {
        let mut form = FeedbackForm::public();
        type_text(&mut form, "Alice Brown");
        form.next_item();
        type_text(&mut form, "alice@example.com");
        form.next_item();
        form.next_item();
        form.shift(true);
        form.next_item();
        form.input_char('4');
        form.next_item();
        type_text(&mut form, "Navigation is confusing");
        form.next_item();
        form.next_item();
        form.shift(false);
        form
    }

    #[test]
    fn test_public_form_starts_unset() {
        let form = FeedbackForm::public();
        assert_eq!(form.display_value(FormField::FeedbackType), "Select");
        assert_eq!(form.display_value(FormField::Rating), "Select");
        assert_eq!(
            form.validate(),
            Err(FormError::Missing(FormField::FullName))
        );
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let mut form = FeedbackForm::public();
        type_text(&mut form, "Alice");
        let error = form.validate().unwrap_err();
        assert_eq!(error, FormError::Missing(FormField::Email));
        assert_eq!(error.to_string(), "Email is required");
    }

    #[test]
    fn test_complete_form_builds_submission() {
        let submission = filled_public_form().validate().unwrap();
        assert_eq!(submission.full_name, "Alice Brown");
        assert_eq!(submission.feedback_type, FeedbackType::GeneralFeedback);
        assert_eq!(submission.rating, 4);
        assert_eq!(submission.would_recommend, Recommendation::Maybe);
        assert_eq!(submission.phone_number, "");
    }

    #[test]
    fn test_editor_defaults() {
        let form = FeedbackForm::editor();
        assert_eq!(form.feedback_type, Some(FeedbackType::GeneralFeedback));
        assert_eq!(form.rating, Some(5));
        assert_eq!(form.would_recommend, Some(Recommendation::Yes));
        assert!(form.editing_id().is_none());
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = FeedbackForm::public();
        form.previous_item();
        assert_eq!(form.focused_field(), FormField::WouldRecommend);
        form.next_item();
        assert_eq!(form.focused_field(), FormField::FullName);
    }

    #[test]
    fn test_rating_ignores_out_of_range_digits() {
        let mut form = FeedbackForm::editor();
        for _ in 0..4 {
            form.next_item();
        }
        form.input_char('9');
        assert_eq!(form.rating, Some(5));
        form.shift(true);
        assert_eq!(form.rating, Some(1));
        form.shift(false);
        assert_eq!(form.rating, Some(5));
    }

    #[test]
    fn test_edit_prefills_from_record() {
        let record = Feedback {
            id: "abc123".to_string(),
            full_name: "Charlie Davis".to_string(),
            email: "charlie@example.com".to_string(),
            phone_number: Some("555-0100".to_string()),
            feedback_type: FeedbackType::Suggestion,
            rating: 3,
            feedback_details: "Add dark mode".to_string(),
            improvement_suggestions: None,
            would_recommend: Recommendation::No,
            status: None,
            created_at: None,
        };
        let form = FeedbackForm::edit(&record);
        assert_eq!(form.editing_id(), Some("abc123"));
        let submission = form.validate().unwrap();
        assert_eq!(submission.phone_number, "555-0100");
        assert_eq!(submission.feedback_type, FeedbackType::Suggestion);
        assert_eq!(submission.improvement_suggestions, "");
    }

    #[test]
    fn test_home_end_move_text_cursor_only() {
        let mut form = FeedbackForm::public();
        type_text(&mut form, "Alice");
        form.jump_cursor(false);
        assert_eq!(form.cursor(), Some(0));
        form.input_char('>');
        assert_eq!(form.display_value(FormField::FullName), ">Alice");
        form.jump_cursor(true);
        assert_eq!(form.cursor(), Some(6));

        form.set_selected_index(3);
        form.jump_cursor(true);
        assert_eq!(form.cursor(), None);
        assert_eq!(form.feedback_type, None);
    }
}
