use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub level: Option<String>,
    pub category: Option<String>,
    pub user_id: i64,
}

/// Body of `POST /api/skills/add/:user_id`. Ids and owners in the body are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Partial update for a skill; only the level may change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPatch {
    #[serde(default)]
    pub level: Option<String>,
}

impl SkillPatch {
    pub fn apply(self, skill: &mut Skill) {
        if let Some(level) = self.level {
            skill.level = Some(level);
        }
    }
}
