// handlers/protected/mod.rs - Dashboard handlers
//
// Route Prefix: /api/*
// Middleware: bearer token check when security.require_auth is enabled
pub mod dashboard; // seed data and profile lookup
pub mod roadmap;   // roadmap step CRUD
pub mod skills;    // skill list/add/update

pub use dashboard::{init_post, user_get};
