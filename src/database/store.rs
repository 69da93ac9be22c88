use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewRoadmapStep, NewSkill, NewUser, RoadmapStep, Skill, User};

/// Per-table access used by the services.
///
/// Every method is a single statement; callers get no transaction spanning
/// two calls. `insert_user` expects `new.password` to already be in its
/// stored form.
#[async_trait]
pub trait CareerStore: Send + Sync {
    async fn count_users(&self) -> Result<i64, DatabaseError>;
    async fn find_user(&self, id: i64) -> Result<Option<User>, DatabaseError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;
    async fn insert_user(&self, new: NewUser) -> Result<User, DatabaseError>;

    async fn skills_for_user(&self, user_id: i64) -> Result<Vec<Skill>, DatabaseError>;
    async fn find_skill(&self, id: i64) -> Result<Option<Skill>, DatabaseError>;
    async fn insert_skill(&self, user_id: i64, new: NewSkill) -> Result<Skill, DatabaseError>;
    /// `None` when the row is gone by the time it is written
    async fn save_skill(&self, skill: &Skill) -> Result<Option<Skill>, DatabaseError>;

    async fn steps_for_user(&self, user_id: i64) -> Result<Vec<RoadmapStep>, DatabaseError>;
    async fn find_step(&self, id: i64) -> Result<Option<RoadmapStep>, DatabaseError>;
    async fn insert_step(
        &self,
        user_id: i64,
        new: NewRoadmapStep,
    ) -> Result<RoadmapStep, DatabaseError>;
    async fn save_step(&self, step: &RoadmapStep) -> Result<Option<RoadmapStep>, DatabaseError>;
    /// Returns the number of rows removed; zero on a miss.
    async fn delete_step(&self, id: i64) -> Result<u64, DatabaseError>;
}
