pub mod roadmap_step;
pub mod skill;
pub mod user;

pub use roadmap_step::{NewRoadmapStep, RoadmapStep, RoadmapStepPatch};
pub use skill::{NewSkill, Skill, SkillPatch};
pub use user::{LoginRequest, NewUser, User, UserResponse};
