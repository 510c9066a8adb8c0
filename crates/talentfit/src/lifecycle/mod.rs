//! Transition tables for job posts and applications.
//!
//! The guard only answers whether a requested status change is legal; storing the new
//! status is the caller's job.

mod status;

pub use status::{ApplicationStatus, EntityType, JobPostStatus, LifecycleState};

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("{entity} cannot move from {from} to {to}")]
    InvalidTransition {
        entity: EntityType,
        from: &'static str,
        to: &'static str,
    },
    #[error("'{state}' is not a known {entity} status")]
    UnknownState { entity: EntityType, state: String },
}

/// Transition request in the string shape used at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub entity_type: EntityType,
    pub current_state: String,
    pub requested_state: String,
}

/// Status reached by an accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LifecycleStatus {
    JobPost(JobPostStatus),
    Application(ApplicationStatus),
}

impl LifecycleStatus {
    pub fn label(self) -> &'static str {
        match self {
            LifecycleStatus::JobPost(status) => status.label(),
            LifecycleStatus::Application(status) => status.label(),
        }
    }
}

/// Accepted string-shaped request, with both states in their canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AcceptedTransition {
    pub from: LifecycleStatus,
    pub to: LifecycleStatus,
}

/// Policy dials for the transition tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecyclePolicy {
    /// Allow PUBLISHED → DRAFT so a live post can be taken down for edits.
    pub allow_unpublish: bool,
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            allow_unpublish: true,
        }
    }
}

/// Validates requested status changes against the transition tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifecycleGuard {
    policy: LifecyclePolicy,
}

impl LifecycleGuard {
    pub fn new(policy: LifecyclePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LifecyclePolicy {
        self.policy
    }

    pub fn job_post(
        &self,
        current: JobPostStatus,
        requested: JobPostStatus,
    ) -> Result<JobPostStatus, TransitionError> {
        if !self.permits(current, requested) {
            return Err(rejected(current, requested));
        }
        self.transition(current, requested)
    }

    pub fn application(
        &self,
        current: ApplicationStatus,
        requested: ApplicationStatus,
    ) -> Result<ApplicationStatus, TransitionError> {
        self.transition(current, requested)
    }

    /// States reachable from `current` under this guard's policy.
    pub fn allowed_job_post_transitions(&self, current: JobPostStatus) -> Vec<JobPostStatus> {
        current
            .allowed_from()
            .iter()
            .copied()
            .filter(|next| self.permits(current, *next))
            .collect()
    }

    /// Policy check only; the transition table is consulted separately.
    fn permits(&self, current: JobPostStatus, requested: JobPostStatus) -> bool {
        let unpublish = current == JobPostStatus::Published && requested == JobPostStatus::Draft;
        !unpublish || self.policy.allow_unpublish
    }

    /// Check a request arriving in string form.
    pub fn check(&self, request: &TransitionRequest) -> Result<AcceptedTransition, TransitionError> {
        match request.entity_type {
            EntityType::JobPost => {
                let current = parse_state::<JobPostStatus>(&request.current_state)?;
                let requested = parse_state::<JobPostStatus>(&request.requested_state)?;
                let reached = self.job_post(current, requested)?;
                Ok(AcceptedTransition {
                    from: LifecycleStatus::JobPost(current),
                    to: LifecycleStatus::JobPost(reached),
                })
            }
            EntityType::Application => {
                let current = parse_state::<ApplicationStatus>(&request.current_state)?;
                let requested = parse_state::<ApplicationStatus>(&request.requested_state)?;
                let reached = self.application(current, requested)?;
                Ok(AcceptedTransition {
                    from: LifecycleStatus::Application(current),
                    to: LifecycleStatus::Application(reached),
                })
            }
        }
    }

    fn transition<S: LifecycleState>(&self, current: S, requested: S) -> Result<S, TransitionError> {
        if current.can_transition_to(requested) {
            Ok(requested)
        } else {
            Err(rejected(current, requested))
        }
    }
}

fn rejected<S: LifecycleState>(current: S, requested: S) -> TransitionError {
    warn!(
        entity = S::ENTITY.label(),
        from = current.label(),
        to = requested.label(),
        "rejected lifecycle transition"
    );
    TransitionError::InvalidTransition {
        entity: S::ENTITY,
        from: current.label(),
        to: requested.label(),
    }
}

fn parse_state<S: LifecycleState>(raw: &str) -> Result<S, TransitionError> {
    S::parse(raw).ok_or_else(|| TransitionError::UnknownState {
        entity: S::ENTITY,
        state: raw.to_string(),
    })
}
