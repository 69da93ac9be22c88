use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::{PasswordMode, TokenIssuer};
use crate::database::manager::DatabaseError;
use crate::database::models::{LoginRequest, NewUser, User};
use crate::database::store::CareerStore;

use super::ServiceError;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    /// Present when a signing secret is configured
    pub token: Option<String>,
}

/// Registration and credential checks
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn CareerStore>,
    mode: PasswordMode,
    tokens: TokenIssuer,
}

impl AccountService {
    pub fn new(store: Arc<dyn CareerStore>, mode: PasswordMode, tokens: TokenIssuer) -> Self {
        Self { store, mode, tokens }
    }

    pub fn password_mode(&self) -> PasswordMode {
        self.mode
    }

    /// Create a user unless the email is already taken.
    ///
    /// The existence check and the unique index together reject duplicates;
    /// a concurrent insert that slips past the check hits the index.
    pub async fn register(&self, mut new: NewUser) -> Result<User, ServiceError> {
        if self.store.find_user_by_email(&new.email).await?.is_some() {
            info!("Registration rejected, email already registered");
            return Err(ServiceError::EmailTaken);
        }

        new.password = self.mode.store(&new.password)?;

        match self.store.insert_user(new).await {
            Ok(user) => {
                info!("Registered user {}", user.id);
                Ok(user)
            }
            Err(DatabaseError::UniqueViolation(_)) => Err(ServiceError::EmailTaken),
            Err(e) => Err(e.into()),
        }
    }

    /// Same error for an unknown email and a wrong password.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, ServiceError> {
        let user = match self.store.find_user_by_email(&request.email).await? {
            Some(user) if self.mode.verify(&user.password, &request.password) => user,
            _ => {
                warn!("Failed login attempt");
                return Err(ServiceError::InvalidCredentials);
            }
        };

        let token = if self.tokens.is_configured() {
            Some(self.tokens.issue(user.id, &user.email)?)
        } else {
            None
        };

        info!("User {} logged in", user.id);
        Ok(LoginOutcome { user, token })
    }
}
