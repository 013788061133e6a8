use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::dataset::Dataset;
use crate::models::performance::{Feedback, FeedbackCategory, Sentiment};
use crate::models::views::{FeedbackDigest, FeedbackEntry, FeedbackSubmitInput};
use crate::services::directory_service::DirectoryService;

/// Read models for the feedback screen plus the submit echo.
pub struct FeedbackService;

impl FeedbackService {
    /// All feedback from the newest month, flattened and bucketed by
    /// category.
    pub fn recent(dataset: &Dataset) -> FeedbackDigest {
        let month = dataset.months_desc().into_iter().next().unwrap_or_default();

        let mut digest = FeedbackDigest {
            month: month.clone(),
            peer: Vec::new(),
            manager: Vec::new(),
            self_assessment: Vec::new(),
            system: Vec::new(),
        };
        if month.is_empty() {
            return digest;
        }

        for record in dataset
            .performance_data
            .iter()
            .filter(|record| record.month == month)
        {
            let Some(employee) = dataset
                .employees
                .iter()
                .find(|e| e.id == record.employee_id)
            else {
                continue;
            };
            for feedback in &record.feedback {
                let entry = FeedbackEntry {
                    feedback: feedback.clone(),
                    employee_id: employee.id.clone(),
                    employee_name: employee.name.clone(),
                };
                match feedback.category {
                    FeedbackCategory::Peer => digest.peer.push(entry),
                    FeedbackCategory::Manager => digest.manager.push(entry),
                    FeedbackCategory::SelfAssessment => digest.self_assessment.push(entry),
                    FeedbackCategory::System => digest.system.push(entry),
                }
            }
        }

        digest
    }

    /// Validates and echoes a submitted entry. The dataset snapshot is
    /// replace-only, so nothing is persisted; the caller renders the echo
    /// optimistically.
    pub fn submit(dataset: &Dataset, input: &FeedbackSubmitInput) -> AppResult<FeedbackEntry> {
        let employee = DirectoryService::find(dataset, &input.employee_id)?;
        let category = FeedbackCategory::from_str(&input.category)
            .map_err(AppError::validation)?;
        let text = input.text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Feedback text must not be empty"));
        }

        let from = dataset
            .current_user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_else(|| "Anonymous".to_string());

        Ok(FeedbackEntry {
            feedback: Feedback {
                id: Uuid::new_v4().to_string(),
                from,
                date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
                text: text.to_string(),
                category,
                sentiment: Sentiment::Neutral,
                topics: None,
            },
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
        })
    }
}
