//! Business rules a student's set of preferences has to follow.
//!
//! These work on values the caller already loaded: the target project and the
//! preferences the student has already recorded.

use thiserror::Error;

use super::{PreferenceCreateRequest, PreferenceResponse};
use crate::data::project::ProjectResponse;
use crate::role::PreferenceStatus;

pub const MAX_PREFERENCES_PER_STUDENT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceConflict {
    #[error("project {project_id} is no longer available")]
    ProjectClosed { project_id: i64 },
    #[error("project {project_id} is already full")]
    ProjectFull { project_id: i64 },
    #[error("project {project_id} has already been selected")]
    DuplicateProject { project_id: i64 },
    #[error("rank {rank} is already used, choose another rank")]
    DuplicateRank { rank: i32 },
    #[error("the maximum of {max} preferences has been reached")]
    LimitReached { max: usize },
    #[error("only pending preferences can be withdrawn, this one is {status}")]
    NotPending { status: PreferenceStatus },
}

pub fn check_project_open(project: &ProjectResponse) -> Result<(), PreferenceConflict> {
    if !project.active {
        return Err(PreferenceConflict::ProjectClosed {
            project_id: project.id,
        });
    }
    if project.full {
        return Err(PreferenceConflict::ProjectFull {
            project_id: project.id,
        });
    }
    Ok(())
}

/// Checks a validated request against the student's recorded preferences.
/// Entries of `existing` that belong to another student are ignored.
pub fn check_new_preference(
    existing: &[PreferenceResponse],
    request: &PreferenceCreateRequest,
    max: usize,
) -> Result<(), PreferenceConflict> {
    let mine: Vec<&PreferenceResponse> = existing
        .iter()
        .filter(|it| Some(it.student_id) == request.student_id)
        .collect();

    if let Some(project_id) = request.project_id {
        if mine.iter().any(|it| it.project_id == project_id) {
            return Err(PreferenceConflict::DuplicateProject { project_id });
        }
    }

    if let Some(rank) = request.rank {
        if mine.iter().any(|it| it.rank == rank) {
            return Err(PreferenceConflict::DuplicateRank { rank });
        }
    }

    if mine.len() >= max {
        tracing::debug!(student_id = ?request.student_id, count = mine.len(), "preference limit reached");
        return Err(PreferenceConflict::LimitReached { max });
    }

    Ok(())
}

pub fn check_withdrawable(preference: &PreferenceResponse) -> Result<(), PreferenceConflict> {
    match preference.status {
        PreferenceStatus::Pending => Ok(()),
        status => Err(PreferenceConflict::NotPending { status }),
    }
}
