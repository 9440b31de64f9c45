// src/persona/mod.rs
// Counseling personas a user can pick before chatting.
// Each persona carries its own instruction template plus the display data
// the client shows on the selection screen.

pub mod family;
pub mod psychological;
pub mod quranic;

use serde::{Deserialize, Serialize};

use crate::error::SakinaError;

/// Closed set of counseling personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaId {
    #[default]
    Psychological,
    Family,
    Quranic,
}

/// Catalog entry for one persona
#[derive(Debug)]
pub struct PersonaProfile {
    pub id: PersonaId,
    pub title: &'static str,
    pub description: &'static str,
    pub greeting: &'static str,
    pub features: &'static [&'static str],
    /// Instruction template placed at the head of the assembled prompt
    pub template: &'static str,
}

static PSYCHOLOGICAL: PersonaProfile = PersonaProfile {
    id: PersonaId::Psychological,
    title: "معالج نفسي",
    description: "إرشادات نفسية متخصصة مع القيم الإسلامية",
    greeting: psychological::GREETING,
    features: psychological::FEATURES,
    template: psychological::PSYCHOLOGICAL_PROMPT,
};

static FAMILY: PersonaProfile = PersonaProfile {
    id: PersonaId::Family,
    title: "معالج أسري",
    description: "توجيه لحل المشاكل الأسرية والعلاقات",
    greeting: family::GREETING,
    features: family::FEATURES,
    template: family::FAMILY_PROMPT,
};

static QURANIC: PersonaProfile = PersonaProfile {
    id: PersonaId::Quranic,
    title: "معالج بالقرآن",
    description: "العلاج بالرقية الشرعية والآيات القرآنية",
    greeting: quranic::GREETING,
    features: quranic::FEATURES,
    template: quranic::QURANIC_PROMPT,
};

impl PersonaId {
    pub const ALL: [PersonaId; 3] = [PersonaId::Psychological, PersonaId::Family, PersonaId::Quranic];

    pub fn profile(self) -> &'static PersonaProfile {
        match self {
            PersonaId::Psychological => &PSYCHOLOGICAL,
            PersonaId::Family => &FAMILY,
            PersonaId::Quranic => &QURANIC,
        }
    }

    pub fn template(self) -> &'static str {
        self.profile().template
    }

    pub fn greeting(self) -> &'static str {
        self.profile().greeting
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PersonaId::Psychological => "psychological",
            PersonaId::Family => "family",
            PersonaId::Quranic => "quranic",
        }
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PersonaId {
    type Err = SakinaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "psychological" => Ok(PersonaId::Psychological),
            "family" => Ok(PersonaId::Family),
            "quranic" => Ok(PersonaId::Quranic),
            other => Err(SakinaError::InvalidInput(format!("unknown persona '{other}'"))),
        }
    }
}
