// src/catalog/mod.rs
//! Read-only configuration tables: job categories, recency filters, skill
//! rules and location aliases.

pub mod job_keywords;
pub mod locations;
pub mod skills_db;

pub use job_keywords::{find_category, search_keywords, DateFilter, JobCategory, JOB_CATEGORIES};
pub use locations::{AliasGroup, CITY_ALIASES, REGION_ALIASES};
pub use skills_db::{
    category_skills, CategorySkills, SkillCategory, TitleTrigger, TriggerSkills, OTHER_CATEGORY,
    SKILLS_DATABASE, SKILL_CATEGORIES, TITLE_TRIGGERS,
};
