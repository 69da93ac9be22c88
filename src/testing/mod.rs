use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::app::AppState;
use crate::config::AppConfig;
use crate::database::manager::DatabaseError;
use crate::database::models::{NewRoadmapStep, NewSkill, NewUser, RoadmapStep, Skill, User};
use crate::database::store::CareerStore;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    skills: Vec<Skill>,
    steps: Vec<RoadmapStep>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// `CareerStore` kept in process memory, with the unique-email index enforced
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CareerStore for MemoryStore {
    async fn count_users(&self) -> Result<i64, DatabaseError> {
        Ok(self.tables.read().await.users.len() as i64)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, new: NewUser) -> Result<User, DatabaseError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == new.email) {
            return Err(DatabaseError::UniqueViolation("users_email_key".to_string()));
        }
        let user = User {
            id: tables.next_id(),
            name: new.name,
            email: new.email,
            password: new.password,
            career_goal: new.career_goal,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn skills_for_user(&self, user_id: i64) -> Result<Vec<Skill>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.skills.iter().filter(|s| s.user_id == user_id).cloned().collect())
    }

    async fn find_skill(&self, id: i64) -> Result<Option<Skill>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.skills.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_skill(&self, user_id: i64, new: NewSkill) -> Result<Skill, DatabaseError> {
        let mut tables = self.tables.write().await;
        let skill = Skill {
            id: tables.next_id(),
            name: new.name,
            level: new.level,
            category: new.category,
            user_id,
        };
        tables.skills.push(skill.clone());
        Ok(skill)
    }

    async fn save_skill(&self, skill: &Skill) -> Result<Option<Skill>, DatabaseError> {
        let mut tables = self.tables.write().await;
        let Some(slot) = tables.skills.iter_mut().find(|s| s.id == skill.id) else {
            return Ok(None);
        };
        slot.name = skill.name.clone();
        slot.level = skill.level.clone();
        slot.category = skill.category.clone();
        Ok(Some(slot.clone()))
    }

    async fn steps_for_user(&self, user_id: i64) -> Result<Vec<RoadmapStep>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.steps.iter().filter(|s| s.user_id == user_id).cloned().collect())
    }

    async fn find_step(&self, id: i64) -> Result<Option<RoadmapStep>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.steps.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_step(
        &self,
        user_id: i64,
        new: NewRoadmapStep,
    ) -> Result<RoadmapStep, DatabaseError> {
        let mut tables = self.tables.write().await;
        let step = RoadmapStep {
            id: tables.next_id(),
            title: new.title,
            description: new.description,
            status: new.status,
            duration: new.duration,
            topics: new.topics,
            user_id,
        };
        tables.steps.push(step.clone());
        Ok(step)
    }

    async fn save_step(&self, step: &RoadmapStep) -> Result<Option<RoadmapStep>, DatabaseError> {
        let mut tables = self.tables.write().await;
        let Some(slot) = tables.steps.iter_mut().find(|s| s.id == step.id) else {
            return Ok(None);
        };
        let user_id = slot.user_id;
        *slot = RoadmapStep {
            user_id,
            ..step.clone()
        };
        Ok(Some(slot.clone()))
    }

    async fn delete_step(&self, id: i64) -> Result<u64, DatabaseError> {
        let mut tables = self.tables.write().await;
        let before = tables.steps.len();
        tables.steps.retain(|s| s.id != id);
        Ok((before - tables.steps.len()) as u64)
    }
}

/// Router state over a fresh `MemoryStore`
pub fn memory_state(config: AppConfig) -> (Arc<MemoryStore>, AppState) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), Arc::new(config));
    (store, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn enforces_unique_email() {
        let store = MemoryStore::new();
        let new = NewUser {
            name: "A".into(),
            email: "a@example.com".into(),
            password: "x".into(),
            career_goal: None,
        };
        store.insert_user(new.clone()).await.unwrap();
        let err = store.insert_user(new).await.unwrap_err();
        assert!(matches!(err, DatabaseError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let store = MemoryStore::new();
        let user = store
            .insert_user(NewUser {
                name: "A".into(),
                email: "a@example.com".into(),
                password: "x".into(),
                career_goal: None,
            })
            .await
            .unwrap();
        let first = store
            .insert_skill(user.id, NewSkill { name: "Rust".into(), level: None, category: None })
            .await
            .unwrap();
        let second = store
            .insert_skill(user.id, NewSkill { name: "Go".into(), level: None, category: None })
            .await
            .unwrap();
        assert!(second.id > first.id);
        assert_eq!(store.delete_step(first.id).await.unwrap(), 0);
    }
}
