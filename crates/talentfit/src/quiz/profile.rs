use serde::{Deserialize, Serialize};

/// Language used when rendering profile metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// The five personality profiles a completed quiz can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityProfile {
    ActionOriented,
    SteadySpecialist,
    EmpatheticCoordinator,
    IndependentSolver,
    FlexibleAllRounder,
}

impl PersonalityProfile {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ActionOriented,
            Self::SteadySpecialist,
            Self::EmpatheticCoordinator,
            Self::IndependentSolver,
            Self::FlexibleAllRounder,
        ]
    }

    /// Stable string identifier stored against the user by the profile repository.
    pub const fn id(self) -> &'static str {
        match self {
            Self::ActionOriented => "action_oriented",
            Self::SteadySpecialist => "steady_specialist",
            Self::EmpatheticCoordinator => "empathetic_coordinator",
            Self::IndependentSolver => "independent_solver",
            Self::FlexibleAllRounder => "flexible_all_rounder",
        }
    }

    /// Stable numeric identifier for integer-keyed profile tables.
    pub const fn numeric_id(self) -> u8 {
        match self {
            Self::ActionOriented => 1,
            Self::SteadySpecialist => 2,
            Self::EmpatheticCoordinator => 3,
            Self::IndependentSolver => 4,
            Self::FlexibleAllRounder => 5,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ordered()
            .into_iter()
            .find(|profile| profile.id() == id)
    }

    pub fn from_numeric_id(id: u8) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|profile| profile.numeric_id() == id)
    }

    pub const fn name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::ActionOriented, Locale::En) => "Action-Oriented Driver",
            (Self::ActionOriented, Locale::Ja) => "行動派ドライバー",
            (Self::SteadySpecialist, Locale::En) => "Steady Specialist",
            (Self::SteadySpecialist, Locale::Ja) => "堅実スペシャリスト",
            (Self::EmpatheticCoordinator, Locale::En) => "Empathetic Coordinator",
            (Self::EmpatheticCoordinator, Locale::Ja) => "共感型コーディネーター",
            (Self::IndependentSolver, Locale::En) => "Independent Solver",
            (Self::IndependentSolver, Locale::Ja) => "自律型ソルバー",
            (Self::FlexibleAllRounder, Locale::En) => "Flexible All-Rounder",
            (Self::FlexibleAllRounder, Locale::Ja) => "柔軟オールラウンダー",
        }
    }

    pub const fn description(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::ActionOriented, Locale::En) => {
                "Moves fast, decides early and learns by doing. Thrives where momentum matters."
            }
            (Self::ActionOriented, Locale::Ja) => {
                "素早く動き、早く決断し、実践から学ぶタイプ。スピードが求められる環境で力を発揮します。"
            }
            (Self::SteadySpecialist, Locale::En) => {
                "Plans carefully and values accuracy. Builds deep expertise and reliable results."
            }
            (Self::SteadySpecialist, Locale::Ja) => {
                "計画的で正確さを重んじるタイプ。専門性を深め、安定した成果を出します。"
            }
            (Self::EmpatheticCoordinator, Locale::En) => {
                "Energised by people and shared goals. Keeps teams aligned and customers heard."
            }
            (Self::EmpatheticCoordinator, Locale::Ja) => {
                "人との関わりやチームの目標から力を得るタイプ。チームをまとめ、顧客の声を大切にします。"
            }
            (Self::IndependentSolver, Locale::En) => {
                "Works best with a clear goal and room to roam. Untangles hard problems alone."
            }
            (Self::IndependentSolver, Locale::Ja) => {
                "明確なゴールと裁量があると最も力を発揮するタイプ。難しい課題を自力で解決します。"
            }
            (Self::FlexibleAllRounder, Locale::En) => {
                "Balances speed and care, solo work and teamwork. Adapts to what the role needs."
            }
            (Self::FlexibleAllRounder, Locale::Ja) => {
                "スピードと慎重さ、個人作業とチームワークのバランスが取れたタイプ。役割に応じて柔軟に対応します。"
            }
        }
    }

    pub fn view(self, locale: Locale) -> ProfileView {
        ProfileView {
            id: self.id(),
            numeric_id: self.numeric_id(),
            name: self.name(locale),
            description: self.description(locale),
        }
    }
}

/// Rendered profile metadata for a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub id: &'static str,
    pub numeric_id: u8,
    pub name: &'static str,
    pub description: &'static str,
}
