//! Advice request service

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use super::{queries, workflow};
use crate::{
    error::{AppError, AppResult},
    models::{
        advice::{Advice, CreateAdvice},
        workflow::{Decision, RequestStatus},
    },
    repository::advice::AdviceRepository,
};

#[derive(Debug, Clone, Default)]
pub struct AdviceService {
    repository: AdviceRepository,
}

impl AdviceService {
    pub fn new(repository: AdviceRepository) -> Self {
        Self { repository }
    }

    /// All advice requests, newest first
    pub fn list(&self) -> Vec<&Advice> {
        self.repository.list().collect()
    }

    pub fn get_by_id(&self, id: Uuid) -> AppResult<&Advice> {
        self.repository
            .get_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Advice request {} not found", id)))
    }

    /// Submit a new advice request.
    ///
    /// Selected requirements must come from the type's vocabulary; duplicates
    /// collapse and the result follows vocabulary order.
    pub fn create(&mut self, data: &CreateAdvice) -> AppResult<Advice> {
        let data = CreateAdvice {
            description: data.description.trim().to_string(),
            additional_notes: data.additional_notes.trim().to_string(),
            ..data.clone()
        };
        data.validate()?;

        if let Some(unknown) = data
            .requirements
            .iter()
            .find(|r| !data.advice_type.allows(r))
        {
            return Err(AppError::validation(format!(
                "'{}' is not a requirement for {}",
                unknown, data.advice_type
            )));
        }

        let requirements = data
            .advice_type
            .requirements()
            .iter()
            .filter(|option| data.requirements.iter().any(|r| r.as_str() == **option))
            .map(|option| option.to_string())
            .collect();

        let advice = Advice {
            id: Uuid::new_v4(),
            advice_type: data.advice_type,
            description: data.description,
            requirements,
            additional_notes: data.additional_notes,
            created_at: Utc::now(),
            status: RequestStatus::Pending,
        };

        tracing::info!("Advice request {} submitted ({})", advice.id, advice.advice_type);
        self.repository.insert(advice.clone());
        Ok(advice)
    }

    /// Approve or reject a pending advice request
    pub fn update_status(
        &mut self,
        id: Uuid,
        status: Decision,
        rejection_reason: Option<&str>,
    ) -> AppResult<Advice> {
        let advice = self
            .repository
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Advice request {} not found", id)))?;

        if let Err(e) = workflow::transition(advice, status, rejection_reason, Utc::now()) {
            tracing::warn!("Advice request {} not {}: {}", id, status, e);
            return Err(e);
        }

        tracing::info!("Advice request {} {}", id, status);
        Ok(advice.clone())
    }

    pub fn pending(&self) -> Vec<&Advice> {
        queries::pending_of(self.repository.list())
    }

    pub fn processed(&self) -> Vec<&Advice> {
        queries::processed_of(self.repository.list())
    }

    pub fn count(&self) -> usize {
        self.repository.count()
    }
}
