pub mod account_service;
pub mod career_service;

pub use account_service::{AccountService, LoginOutcome};
pub use career_service::{CareerService, SeedOutcome};

use crate::auth::AuthError;
use crate::database::manager::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("Skill not found")]
    SkillNotFound,
    #[error("Step not found")]
    StepNotFound,
    #[error("Description must be at most {0} characters")]
    DescriptionTooLong(usize),
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}
