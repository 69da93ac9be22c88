// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Account creation and credential checks, plus the liveness probe.
pub mod auth;
pub mod health;

pub use health::health_get;
