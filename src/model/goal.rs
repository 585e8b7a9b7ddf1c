//! Goals and their closed category/priority/status enumerations.
//!
//! Every enumeration carries an exhaustive label and color table, so adding a
//! variant fails to compile until both tables cover it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Life area a goal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Career,
    Health,
    Personal,
    Financial,
    Relationship,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 5] = [
        Self::Career,
        Self::Health,
        Self::Personal,
        Self::Financial,
        Self::Relationship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Health => "health",
            Self::Personal => "personal",
            Self::Financial => "financial",
            Self::Relationship => "relationship",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Health => "Health",
            Self::Personal => "Personal",
            Self::Financial => "Financial",
            Self::Relationship => "Relationships",
        }
    }

    /// Accent color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Career => "#3B82F6",
            Self::Health => "#10B981",
            Self::Personal => "#8B5CF6",
            Self::Financial => "#F59E0B",
            Self::Relationship => "#EC4899",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    Low,
    Medium,
    High,
}

impl GoalPriority {
    pub const ALL: [GoalPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#6B7280",
            Self::Medium => "#F59E0B",
            Self::High => "#EF4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 3] = [Self::Active, Self::Completed, Self::Paused];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Paused => "Paused",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Active => "#3B82F6",
            Self::Completed => "#10B981",
            Self::Paused => "#9CA3AF",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(GoalCategory, GoalPriority, GoalStatus);

impl std::str::FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "career" => Ok(Self::Career),
            "health" => Ok(Self::Health),
            "personal" => Ok(Self::Personal),
            "financial" => Ok(Self::Financial),
            "relationship" => Ok(Self::Relationship),
            _ => Err(format!("unknown goal category: {s}")),
        }
    }
}

impl std::str::FromStr for GoalPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown goal priority: {s}")),
        }
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "paused" => Ok(Self::Paused),
            _ => Err(format!("unknown goal status: {s}")),
        }
    }
}

/// A goal as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub status: GoalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for `POST /api/goals` and `PUT /api/goals/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalDraft {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub status: GoalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

impl GoalDraft {
    /// Build a draft from form input. The title is trimmed and must not be empty.
    pub fn new(
        user_id: impl Into<String>,
        title: &str,
        description: &str,
        category: GoalCategory,
        priority: GoalPriority,
        target_date: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyGoalTitle);
        }

        let target_date = match target_date.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidTargetDate(raw.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            user_id: user_id.into(),
            title: title.to_string(),
            description: description.trim().to_string(),
            category,
            priority,
            status: GoalStatus::Active,
            target_date,
        })
    }

    /// Draft carrying an existing goal's fields, used for updates.
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            user_id: goal.user_id.clone(),
            title: goal.title.clone(),
            description: goal.description.clone(),
            category: goal.category,
            priority: goal.priority,
            status: goal.status,
            target_date: goal.target_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_strings_round_trip_through_from_str() {
        for c in GoalCategory::ALL {
            assert_eq!(c.as_str().parse::<GoalCategory>().unwrap(), c);
        }
        for p in GoalPriority::ALL {
            assert_eq!(p.to_string().parse::<GoalPriority>().unwrap(), p);
        }
        assert!("urgent".parse::<GoalPriority>().is_err());
        assert_eq!(
            "archived".parse::<GoalStatus>().unwrap_err(),
            "unknown goal status: archived"
        );
    }

    #[test]
    fn every_variant_has_a_hex_color() {
        let colors = GoalCategory::ALL
            .iter()
            .map(|c| c.color())
            .chain(GoalPriority::ALL.iter().map(|p| p.color()))
            .chain(GoalStatus::ALL.iter().map(|s| s.color()));
        for color in colors {
            assert!(color.starts_with('#') && color.len() == 7, "bad color {color}");
        }
    }

    #[test]
    fn draft_rejects_blank_title() {
        let err = GoalDraft::new("u1", "   ", "", GoalCategory::Health, GoalPriority::Low, None)
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyGoalTitle);
    }

    #[test]
    fn draft_trims_and_defaults_to_active() {
        let draft = GoalDraft::new(
            "u1",
            "  Run a marathon ",
            " spring ",
            GoalCategory::Health,
            GoalPriority::High,
            Some("2027-04-01"),
        )
        .unwrap();
        assert_eq!(draft.title, "Run a marathon");
        assert_eq!(draft.description, "spring");
        assert_eq!(draft.status, GoalStatus::Active);
        assert_eq!(draft.target_date, NaiveDate::from_ymd_opt(2027, 4, 1));
    }

    #[test]
    fn draft_rejects_bad_target_date() {
        let err = GoalDraft::new(
            "u1",
            "Save",
            "",
            GoalCategory::Financial,
            GoalPriority::Medium,
            Some("next spring"),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTargetDate(_)));
    }

    #[test]
    fn goal_deserializes_backend_shape() {
        let goal: Goal = serde_json::from_str(
            r#"{"id":"g1","user_id":"u1","title":"Learn piano","category":"personal",
                "priority":"medium","status":"paused","target_date":null}"#,
        )
        .unwrap();
        assert_eq!(goal.category, GoalCategory::Personal);
        assert_eq!(goal.status, GoalStatus::Paused);
        assert!(goal.description.is_empty());
        assert!(goal.target_date.is_none());
    }
}
