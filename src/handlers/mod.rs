// handlers/mod.rs - two-tier handler layout
//
// Public (no auth)       -> /api/auth/*, /api/health
// Protected (bearer JWT) -> every other /api/* route, enforced only when
//                           security.require_auth is on
pub mod public;
pub mod protected;
