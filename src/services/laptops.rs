//! Laptop inventory service: records, remarks and problem reports

use chrono::Utc;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{queries, workflow};
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::LaptopStatus,
        laptop::{
            is_valid_email, CreateLaptop, Laptop, Problem, ProblemState, ReportProblem,
            ResolveProblem,
        },
    },
    repository::laptops::LaptopsRepository,
};

const NO_CHANGE: &str = "No change was made.";

#[derive(Debug, Clone, Default)]
pub struct LaptopsService {
    repository: LaptopsRepository,
}

impl LaptopsService {
    pub fn new(repository: LaptopsRepository) -> Self {
        Self { repository }
    }

    /// All laptops in creation order
    pub fn list(&self) -> Vec<&Laptop> {
        self.repository.list().collect()
    }

    pub fn get_by_id(&self, id: Uuid) -> AppResult<&Laptop> {
        self.repository
            .get_by_id(id)
            .ok_or_else(|| not_found(id))
    }

    /// Register a new laptop. It always starts `in_use` with no remarks or
    /// problems; the form is checked by the caller (see `CreateLaptop::check`).
    /// Fields are stored trimmed, as the form check sees them.
    pub fn create(&mut self, data: &CreateLaptop) -> Laptop {
        let data = data.trimmed();
        let laptop = Laptop {
            id: Uuid::new_v4(),
            computer_name: data.computer_name,
            cpu: data.cpu,
            ram: data.ram,
            gpu: data.gpu,
            software_version: data.software_version,
            status: LaptopStatus::InUse,
            remarks: Vec::new(),
            problems: Vec::new(),
        };

        tracing::info!("Laptop {} created ({})", laptop.id, laptop.computer_name);
        self.repository.insert(laptop.clone());
        laptop
    }

    /// Replace a laptop record.
    ///
    /// Unknown ids are ignored. The saved record must carry a status different
    /// from the stored one, otherwise the save is refused as "no change".
    pub fn update(&mut self, laptop: Laptop) -> AppResult<()> {
        let Some(current) = self.repository.get_by_id(laptop.id) else {
            tracing::debug!("Ignoring update of unknown laptop {}", laptop.id);
            return Ok(());
        };

        if current.status == laptop.status {
            tracing::warn!(
                "Laptop {} update rejected: status unchanged ({})",
                laptop.id,
                laptop.status.slug()
            );
            return Err(AppError::validation(NO_CHANGE));
        }

        tracing::info!("Laptop {} updated (status {})", laptop.id, laptop.status.slug());
        self.repository.replace(laptop);
        Ok(())
    }

    /// Move a laptop to another status. Any status may follow any other, but
    /// the new value must differ from the current one.
    pub fn change_status(&mut self, id: Uuid, status: LaptopStatus) -> AppResult<()> {
        let laptop = self.repository.get_mut(id).ok_or_else(|| not_found(id))?;

        if laptop.status == status {
            tracing::warn!("Laptop {} status change rejected: already {}", id, status.slug());
            return Err(AppError::validation(NO_CHANGE));
        }

        tracing::info!(
            "Laptop {} status {} -> {}",
            id,
            laptop.status.slug(),
            status.slug()
        );
        laptop.status = status;
        Ok(())
    }

    /// Remove a laptop with its remarks and problems. Deleting an absent id is a no-op.
    pub fn delete(&mut self, id: Uuid) {
        match self.repository.delete(id) {
            Some(laptop) => tracing::info!("Laptop {} deleted ({})", id, laptop.computer_name),
            None => tracing::debug!("Laptop {} already absent", id),
        }
    }

    /// Append a remark to the laptop's remark list
    pub fn add_remark(&mut self, id: Uuid, text: &str) -> AppResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Remark is required."));
        }

        let laptop = self.repository.get_mut(id).ok_or_else(|| not_found(id))?;
        laptop.remarks.push(text.to_string());
        tracing::info!("Remark added to laptop {} ({} total)", id, laptop.remarks.len());
        Ok(())
    }

    /// Report a problem against a laptop.
    ///
    /// Fields are checked in a fixed order (description, name, email) and
    /// the first failure is returned. Description and name are trimmed; the
    /// email must match as entered. The new problem goes to the front.
    pub fn report_problem(&mut self, id: Uuid, data: &ReportProblem) -> AppResult<Problem> {
        let description = data.description.trim();
        if description.is_empty() {
            return Err(AppError::validation(
                "Report failed: a problem description is required.",
            ));
        }

        let reporter_name = data.reporter_name.trim();
        if reporter_name.is_empty() {
            return Err(AppError::validation("Report failed: name is required."));
        }

        let reporter_email = data.reporter_email.as_str();
        if reporter_email.trim().is_empty() {
            return Err(AppError::validation("Report failed: email is required."));
        }
        if !is_valid_email(reporter_email) {
            return Err(AppError::validation(
                "Report failed: enter a valid email address.",
            ));
        }

        let laptop = self.repository.get_mut(id).ok_or_else(|| not_found(id))?;

        let problem = Problem {
            id: Uuid::new_v4(),
            description: description.to_string(),
            reporter_name: reporter_name.to_string(),
            reporter_email: reporter_email.to_string(),
            date_reported: Utc::now(),
            state: ProblemState::Open,
        };
        laptop.problems.insert(0, problem.clone());

        tracing::info!("Problem {} reported on laptop {}", problem.id, id);
        Ok(problem)
    }

    /// Mark an open problem as resolved
    pub fn resolve_problem(
        &mut self,
        laptop_id: Uuid,
        problem_id: Uuid,
        data: &ResolveProblem,
    ) -> AppResult<Problem> {
        let laptop = self
            .repository
            .get_mut(laptop_id)
            .ok_or_else(|| not_found(laptop_id))?;
        let problem = laptop.problem_mut(problem_id).ok_or_else(|| {
            AppError::NotFound(format!(
                "Problem {} not found on laptop {}",
                problem_id, laptop_id
            ))
        })?;

        workflow::resolve(problem, data, Utc::now())?;

        tracing::info!("Problem {} on laptop {} resolved", problem_id, laptop_id);
        Ok(problem.clone())
    }

    pub fn active_problems(&self, id: Uuid) -> AppResult<Vec<&Problem>> {
        Ok(queries::active_problems(self.get_by_id(id)?))
    }

    pub fn resolved_problems(&self, id: Uuid) -> AppResult<Vec<&Problem>> {
        Ok(queries::resolved_problems(self.get_by_id(id)?))
    }

    /// Laptop count per status (for the overview)
    pub fn status_counts(&self) -> BTreeMap<LaptopStatus, usize> {
        queries::laptop_status_counts(self.repository.list())
    }

    pub fn count(&self) -> usize {
        self.repository.count()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Laptop {} not found", id))
}
