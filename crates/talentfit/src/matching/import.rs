use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::attributes::SeekerAttributes;
use super::ranking::Candidate;
use crate::quiz::PersonalityProfile;

const LIST_SEPARATOR: char = ';';

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read candidate roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate roster CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("candidate {candidate_id} has unknown personality profile '{value}'")]
    UnknownProfile { candidate_id: String, value: String },
}

/// Loads seekers from a CSV roster with columns `candidate_id,skills,work_styles,profile`.
///
/// List columns are `;`-separated and a blank profile means the seeker has not taken the quiz.
pub struct CandidateRoster;

impl CandidateRoster {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut candidates = Vec::new();

        for record in csv_reader.deserialize::<RosterRow>() {
            let row = record?;
            let profile = match row.profile {
                Some(value) => Some(PersonalityProfile::from_id(&value).ok_or_else(|| {
                    ImportError::UnknownProfile {
                        candidate_id: row.candidate_id.clone(),
                        value,
                    }
                })?),
                None => None,
            };

            candidates.push(Candidate {
                candidate_id: row.candidate_id,
                attributes: SeekerAttributes {
                    skills: split_list(row.skills.as_deref()),
                    work_styles: split_list(row.work_styles.as_deref()),
                    profile,
                },
            });
        }

        Ok(candidates)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    candidate_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    work_styles: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    profile: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn split_list(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|value| {
        value
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
