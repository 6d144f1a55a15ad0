mod entities;

pub use entities::{Proficiency, SkillCategory, SkillPayload, SkillRecord};
