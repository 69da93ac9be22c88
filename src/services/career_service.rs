use std::sync::Arc;

use tracing::{debug, info};

use crate::auth::PasswordMode;
use crate::database::models::roadmap_step::{description_too_long, DESCRIPTION_MAX_CHARS};
use crate::database::models::{
    NewRoadmapStep, NewSkill, NewUser, RoadmapStep, RoadmapStepPatch, Skill, SkillPatch, User,
};
use crate::database::store::CareerStore;

use super::ServiceError;

/// What `init_data` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Initialized,
    AlreadyExists,
}

impl SeedOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SeedOutcome::Initialized => "Data Initialized",
            SeedOutcome::AlreadyExists => "Data already exists",
        }
    }
}

/// Profile, skill and roadmap operations behind the dashboard routes
#[derive(Clone)]
pub struct CareerService {
    store: Arc<dyn CareerStore>,
    mode: PasswordMode,
}

impl CareerService {
    pub fn new(store: Arc<dyn CareerStore>, mode: PasswordMode) -> Self {
        Self { store, mode }
    }

    /// Insert the demo user and skills when the user table is empty.
    /// Two concurrent calls on an empty table may both seed.
    pub async fn init_data(&self) -> Result<SeedOutcome, ServiceError> {
        if self.store.count_users().await? > 0 {
            return Ok(SeedOutcome::AlreadyExists);
        }

        let user = self
            .store
            .insert_user(NewUser {
                name: "Anamika Singh".to_string(),
                email: "anamika@example.com".to_string(),
                password: self.mode.store("password")?,
                career_goal: Some("Full Stack Developer".to_string()),
            })
            .await?;

        let demo_skills = [
            ("Java", "Advanced", "Backend"),
            ("React", "Beginner", "Frontend"),
            ("SQL", "Intermediate", "Database"),
        ];
        for (name, level, category) in demo_skills {
            self.store
                .insert_skill(
                    user.id,
                    NewSkill {
                        name: name.to_string(),
                        level: Some(level.to_string()),
                        category: Some(category.to_string()),
                    },
                )
                .await?;
        }

        info!("Seeded demo user {} with {} skills", user.id, demo_skills.len());
        Ok(SeedOutcome::Initialized)
    }

    pub async fn find_user(&self, email: &str) -> Result<Option<User>, ServiceError> {
        Ok(self.store.find_user_by_email(email).await?)
    }

    pub async fn skills(&self, user_id: i64) -> Result<Vec<Skill>, ServiceError> {
        Ok(self.store.skills_for_user(user_id).await?)
    }

    pub async fn add_skill(&self, user_id: i64, skill: NewSkill) -> Result<Skill, ServiceError> {
        self.require_user(user_id).await?;
        let skill = self.store.insert_skill(user_id, skill).await?;
        debug!("Added skill {} for user {}", skill.id, user_id);
        Ok(skill)
    }

    pub async fn update_skill(&self, skill_id: i64, patch: SkillPatch) -> Result<Skill, ServiceError> {
        let mut skill = self
            .store
            .find_skill(skill_id)
            .await?
            .ok_or(ServiceError::SkillNotFound)?;

        patch.apply(&mut skill);
        self.store
            .save_skill(&skill)
            .await?
            .ok_or(ServiceError::SkillNotFound)
    }

    pub async fn roadmap(&self, user_id: i64) -> Result<Vec<RoadmapStep>, ServiceError> {
        Ok(self.store.steps_for_user(user_id).await?)
    }

    pub async fn add_step(
        &self,
        user_id: i64,
        step: NewRoadmapStep,
    ) -> Result<RoadmapStep, ServiceError> {
        check_description(step.description.as_deref())?;
        self.require_user(user_id).await?;
        let step = self.store.insert_step(user_id, step).await?;
        debug!("Added roadmap step {} for user {}", step.id, user_id);
        Ok(step)
    }

    pub async fn update_step(
        &self,
        step_id: i64,
        patch: RoadmapStepPatch,
    ) -> Result<RoadmapStep, ServiceError> {
        check_description(patch.description.as_deref())?;
        let mut step = self
            .store
            .find_step(step_id)
            .await?
            .ok_or(ServiceError::StepNotFound)?;

        patch.apply(&mut step);
        self.store
            .save_step(&step)
            .await?
            .ok_or(ServiceError::StepNotFound)
    }

    /// Deleting a missing step is not an error.
    pub async fn delete_step(&self, step_id: i64) -> Result<(), ServiceError> {
        let removed = self.store.delete_step(step_id).await?;
        if removed == 0 {
            debug!("Delete of missing roadmap step {} ignored", step_id);
        }
        Ok(())
    }

    async fn require_user(&self, user_id: i64) -> Result<User, ServiceError> {
        self.store
            .find_user(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound)
    }
}

fn check_description(description: Option<&str>) -> Result<(), ServiceError> {
    if description_too_long(description) {
        return Err(ServiceError::DescriptionTooLong(DESCRIPTION_MAX_CHARS));
    }
    Ok(())
}
