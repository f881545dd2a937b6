//! Status transition rules
//!
//! Reservations and advice requests share one review machine:
//! `pending -> approved | rejected`, both terminal. Problems follow
//! `open -> resolved`, also terminal. Every check runs before anything is
//! written, so a rejected transition leaves the record untouched.

use chrono::{DateTime, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{
        laptop::{Problem, ProblemState, ResolveProblem},
        workflow::{Decision, RequestStatus, Reviewable},
    },
};

/// Move a pending request to `target`, stamping the processed time.
///
/// Rejecting requires a non-blank reason; the reason is ignored when
/// approving. Requests that already left `pending` are refused.
pub fn transition<T: Reviewable>(
    entity: &mut T,
    target: Decision,
    reason: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if !entity.status().is_pending() {
        return Err(AppError::validation(format!(
            "{} {} has already been processed ({})",
            T::KIND,
            entity.id(),
            entity.status().slug()
        )));
    }

    let next = match target {
        Decision::Approved => RequestStatus::Approved { processed_at: now },
        Decision::Rejected => {
            let reason = reason
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .ok_or_else(|| AppError::validation("A reason is required to reject a request"))?;
            RequestStatus::Rejected {
                processed_at: now,
                reason: reason.to_string(),
            }
        }
    };

    *entity.status_mut() = next;
    Ok(())
}

/// Close an open problem with the resolver's name and repair details
pub fn resolve(problem: &mut Problem, data: &ResolveProblem, now: DateTime<Utc>) -> AppResult<()> {
    if problem.is_resolved() {
        return Err(AppError::validation(format!(
            "Problem {} has already been resolved",
            problem.id
        )));
    }

    let resolver_name = data.resolver_name.trim();
    if resolver_name.is_empty() {
        return Err(AppError::validation("Resolver name is required"));
    }
    let repair_details = data.repair_details.trim();
    if repair_details.is_empty() {
        return Err(AppError::validation("Repair details are required"));
    }

    problem.state = ProblemState::Resolved {
        resolver_name: resolver_name.to_string(),
        repair_details: repair_details.to_string(),
        date_resolved: now,
    };
    Ok(())
}
