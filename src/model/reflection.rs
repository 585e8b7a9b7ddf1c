//! Daily, weekly and monthly reflections.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionType {
    Daily,
    Weekly,
    Monthly,
}

impl ReflectionType {
    pub const ALL: [ReflectionType; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Prompts shown on the reflection form for this cadence.
    pub fn prompts(&self) -> &'static [&'static str] {
        match self {
            Self::Daily => &[
                "What am I grateful for today?",
                "What did I do today that mattered?",
                "What would I do differently?",
            ],
            Self::Weekly => &[
                "What moved me closer to my goals this week?",
                "Where did my time go?",
                "What will I focus on next week?",
            ],
            Self::Monthly => &[
                "What changed in my life this month?",
                "Which goal deserves more attention?",
                "If this were my last month, what would I regret?",
            ],
        }
    }
}

impl std::fmt::Display for ReflectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReflectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(format!("unknown reflection type: {s}")),
        }
    }
}

/// A 1 to 5 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(field: &'static str, value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::ScoreOutOfRange { field, value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Filled/empty dots, e.g. `●●●○○` for 3.
    pub fn dots(self) -> String {
        let filled = self.0 as usize;
        let empty = (Self::MAX as usize).saturating_sub(filled);
        format!("{}{}", "●".repeat(filled), "○".repeat(empty))
    }
}

impl TryFrom<u8> for Score {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new("score", value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reflection {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(rename = "type")]
    pub reflection_type: ReflectionType,
    pub mood_score: Score,
    pub productivity_score: Score,
    #[serde(default)]
    pub prompts: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for `POST /api/reflections`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectionDraft {
    pub user_id: String,
    #[serde(rename = "type")]
    pub reflection_type: ReflectionType,
    pub mood_score: Score,
    pub productivity_score: Score,
    pub prompts: Vec<String>,
    pub responses: Vec<String>,
}

impl ReflectionDraft {
    /// Pair each of the cadence's prompts with a response. Blank responses are
    /// dropped together with their prompt.
    pub fn new(
        user_id: impl Into<String>,
        reflection_type: ReflectionType,
        mood: u8,
        productivity: u8,
        responses: &[String],
    ) -> Result<Self, ValidationError> {
        let mood_score = Score::new("mood_score", mood)?;
        let productivity_score = Score::new("productivity_score", productivity)?;

        let (prompts, responses): (Vec<String>, Vec<String>) = reflection_type
            .prompts()
            .iter()
            .zip(responses)
            .filter(|(_, r)| !r.trim().is_empty())
            .map(|(p, r)| (p.to_string(), r.trim().to_string()))
            .unzip();

        Ok(Self {
            user_id: user_id.into(),
            reflection_type,
            mood_score,
            productivity_score,
            prompts,
            responses,
        })
    }
}
