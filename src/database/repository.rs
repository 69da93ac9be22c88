use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewRoadmapStep, NewSkill, NewUser, RoadmapStep, Skill, User};
use crate::database::store::CareerStore;

const USER_COLUMNS: &str = "id, name, email, password, career_goal";
const SKILL_COLUMNS: &str = "id, name, level, category, user_id";
const STEP_COLUMNS: &str = "id, title, description, status, duration, topics, user_id";

/// `CareerStore` over a PostgreSQL pool
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CareerStore for PgRepository {
    async fn count_users(&self) -> Result<i64, DatabaseError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert_user(&self, new: NewUser) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password, career_goal)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(new.name)
        .bind(new.email)
        .bind(new.password)
        .bind(new.career_goal)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn skills_for_user(&self, user_id: i64) -> Result<Vec<Skill>, DatabaseError> {
        let skills = sqlx::query_as::<_, Skill>(&format!(
            "SELECT {SKILL_COLUMNS} FROM skills WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(skills)
    }

    async fn find_skill(&self, id: i64) -> Result<Option<Skill>, DatabaseError> {
        let skill = sqlx::query_as::<_, Skill>(&format!(
            "SELECT {SKILL_COLUMNS} FROM skills WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(skill)
    }

    async fn insert_skill(&self, user_id: i64, new: NewSkill) -> Result<Skill, DatabaseError> {
        let skill = sqlx::query_as::<_, Skill>(&format!(
            "INSERT INTO skills (name, level, category, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {SKILL_COLUMNS}"
        ))
        .bind(new.name)
        .bind(new.level)
        .bind(new.category)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(skill)
    }

    async fn save_skill(&self, skill: &Skill) -> Result<Option<Skill>, DatabaseError> {
        let saved = sqlx::query_as::<_, Skill>(&format!(
            "UPDATE skills SET name = $2, level = $3, category = $4
             WHERE id = $1
             RETURNING {SKILL_COLUMNS}"
        ))
        .bind(skill.id)
        .bind(&skill.name)
        .bind(&skill.level)
        .bind(&skill.category)
        .fetch_optional(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn steps_for_user(&self, user_id: i64) -> Result<Vec<RoadmapStep>, DatabaseError> {
        let steps = sqlx::query_as::<_, RoadmapStep>(&format!(
            "SELECT {STEP_COLUMNS} FROM roadmap_steps WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(steps)
    }

    async fn find_step(&self, id: i64) -> Result<Option<RoadmapStep>, DatabaseError> {
        let step = sqlx::query_as::<_, RoadmapStep>(&format!(
            "SELECT {STEP_COLUMNS} FROM roadmap_steps WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(step)
    }

    async fn insert_step(
        &self,
        user_id: i64,
        new: NewRoadmapStep,
    ) -> Result<RoadmapStep, DatabaseError> {
        let step = sqlx::query_as::<_, RoadmapStep>(&format!(
            "INSERT INTO roadmap_steps (title, description, status, duration, topics, user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {STEP_COLUMNS}"
        ))
        .bind(new.title)
        .bind(new.description)
        .bind(new.status)
        .bind(new.duration)
        .bind(new.topics)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(step)
    }

    async fn save_step(&self, step: &RoadmapStep) -> Result<Option<RoadmapStep>, DatabaseError> {
        let saved = sqlx::query_as::<_, RoadmapStep>(&format!(
            "UPDATE roadmap_steps
             SET title = $2, description = $3, status = $4, duration = $5, topics = $6
             WHERE id = $1
             RETURNING {STEP_COLUMNS}"
        ))
        .bind(step.id)
        .bind(&step.title)
        .bind(&step.description)
        .bind(&step.status)
        .bind(&step.duration)
        .bind(&step.topics)
        .fetch_optional(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_step(&self, id: i64) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM roadmap_steps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
