use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::quiz::PersonalityProfile;

/// What a job seeker brings: skills, work styles, and an optional quiz profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekerAttributes {
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub work_styles: BTreeSet<String>,
    #[serde(default)]
    pub profile: Option<PersonalityProfile>,
}

impl SeekerAttributes {
    pub fn new<S, W>(skills: S, work_styles: W, profile: Option<PersonalityProfile>) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            work_styles: work_styles.into_iter().map(Into::into).collect(),
            profile,
        }
    }
}

/// What a job post asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    #[serde(default)]
    pub required_work_styles: BTreeSet<String>,
    #[serde(default)]
    pub preferred_profiles: Vec<PersonalityProfile>,
}

impl JobRequirements {
    pub fn new<S, W>(
        required_skills: S,
        required_work_styles: W,
        preferred_profiles: Vec<PersonalityProfile>,
    ) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            required_skills: required_skills.into_iter().map(Into::into).collect(),
            required_work_styles: required_work_styles.into_iter().map(Into::into).collect(),
            preferred_profiles,
        }
    }
}
