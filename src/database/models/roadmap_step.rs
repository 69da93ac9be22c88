use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Column bound on `roadmap_steps.description`, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub duration: Option<String>,
    /// Comma separated topic names
    pub topics: Option<String>,
    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRoadmapStep {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub topics: Option<String>,
}

/// Partial update for a roadmap step. Absent and `null` keys keep the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadmapStepPatch {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub topics: Option<String>,
}

impl RoadmapStepPatch {
    pub fn apply(self, step: &mut RoadmapStep) {
        if let Some(status) = self.status {
            step.status = Some(status);
        }
        if let Some(title) = self.title {
            step.title = title;
        }
        if let Some(description) = self.description {
            step.description = Some(description);
        }
        if let Some(duration) = self.duration {
            step.duration = Some(duration);
        }
        if let Some(topics) = self.topics {
            step.topics = Some(topics);
        }
    }
}

pub fn description_too_long(description: Option<&str>) -> bool {
    description.is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_CHARS)
}
