// src/skills/mod.rs
pub mod inference;
pub mod response;

pub use inference::{infer_base_skills, SkillInferenceEngine};
pub use response::{build_enhancement_prompt, parse_skill_list, strip_code_fence};
