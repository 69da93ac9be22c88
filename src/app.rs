use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::{PasswordMode, TokenIssuer};
use crate::config::AppConfig;
use crate::database::store::CareerStore;
use crate::handlers::{protected, public};
use crate::middleware::{cors_layer, jwt_auth_middleware};
use crate::services::{AccountService, CareerService};

/// Shared request state; the store is injected, never global
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub accounts: AccountService,
    pub career: CareerService,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(store: Arc<dyn CareerStore>, config: Arc<AppConfig>) -> Self {
        let mode = PasswordMode::from_legacy_flag(config.security.legacy_compat);
        let tokens = TokenIssuer::from_config(&config.security);

        Self {
            accounts: AccountService::new(store.clone(), mode, tokens.clone()),
            career: CareerService::new(store, mode),
            tokens,
            config,
        }
    }
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.cors_origins);

    Router::new()
        // Public
        .merge(public_routes())
        // Dashboard
        .merge(protected_routes(&state))
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/api/health", get(public::health_get))
        .route("/api/auth/register", post(auth::register_post))
        .route("/api/auth/login", post(auth::login_post))
}

fn protected_routes(state: &AppState) -> Router<AppState> {
    use protected::{roadmap, skills};

    let routes = Router::new()
        .route("/api/init", post(protected::init_post))
        .route("/api/user/:email", get(protected::user_get))
        // Skills
        .route("/api/skills/:user_id", get(skills::list))
        .route("/api/skills/add/:user_id", post(skills::add))
        .route("/api/skills/update/:skill_id", put(skills::update))
        // Roadmap steps
        .route("/api/roadmap/:user_id", get(roadmap::list))
        .route("/api/roadmap/add/:user_id", post(roadmap::add))
        .route("/api/roadmap/update/:step_id", put(roadmap::update))
        .route("/api/roadmap/delete/:step_id", delete(roadmap::delete));

    if state.config.security.require_auth {
        routes.route_layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ))
    } else {
        routes
    }
}
