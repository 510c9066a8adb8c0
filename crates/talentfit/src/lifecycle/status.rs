use std::fmt;

use serde::{Deserialize, Serialize};

/// Status enum with an explicit outgoing-transition table.
pub trait LifecycleState: Copy + Eq + fmt::Debug + 'static {
    const ENTITY: EntityType;

    /// Every state reachable in one step. No transition exists unless it is listed here.
    fn allowed_from(self) -> &'static [Self];

    fn label(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self>;

    fn is_terminal(self) -> bool {
        self.allowed_from().is_empty()
    }

    fn can_transition_to(self, requested: Self) -> bool {
        self.allowed_from().contains(&requested)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    JobPost,
    Application,
}

impl EntityType {
    pub const fn label(self) -> &'static str {
        match self {
            EntityType::JobPost => "job post",
            EntityType::Application => "application",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "job_post" | "jobpost" => Some(EntityType::JobPost),
            "application" => Some(EntityType::Application),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobPostStatus {
    Draft,
    Published,
    Closed,
}

impl LifecycleState for JobPostStatus {
    const ENTITY: EntityType = EntityType::JobPost;

    fn allowed_from(self) -> &'static [Self] {
        match self {
            JobPostStatus::Draft => &[JobPostStatus::Published],
            JobPostStatus::Published => &[JobPostStatus::Closed, JobPostStatus::Draft],
            JobPostStatus::Closed => &[],
        }
    }

    fn label(self) -> &'static str {
        match self {
            JobPostStatus::Draft => "DRAFT",
            JobPostStatus::Published => "PUBLISHED",
            JobPostStatus::Closed => "CLOSED",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Some(JobPostStatus::Draft),
            "PUBLISHED" => Some(JobPostStatus::Published),
            "CLOSED" => Some(JobPostStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    InReview,
    Hired,
    Rejected,
    Withdrawn,
}

impl LifecycleState for ApplicationStatus {
    const ENTITY: EntityType = EntityType::Application;

    fn allowed_from(self) -> &'static [Self] {
        match self {
            ApplicationStatus::Applied => &[ApplicationStatus::InReview, ApplicationStatus::Withdrawn],
            ApplicationStatus::InReview => &[
                ApplicationStatus::Hired,
                ApplicationStatus::Rejected,
                ApplicationStatus::Withdrawn,
            ],
            ApplicationStatus::Hired | ApplicationStatus::Rejected | ApplicationStatus::Withdrawn => {
                &[]
            }
        }
    }

    fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::InReview => "IN_REVIEW",
            ApplicationStatus::Hired => "HIRED",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::Withdrawn => "WITHDRAWN",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "APPLIED" => Some(ApplicationStatus::Applied),
            "IN_REVIEW" => Some(ApplicationStatus::InReview),
            "HIRED" => Some(ApplicationStatus::Hired),
            "REJECTED" => Some(ApplicationStatus::Rejected),
            "WITHDRAWN" => Some(ApplicationStatus::Withdrawn),
            _ => None,
        }
    }
}
