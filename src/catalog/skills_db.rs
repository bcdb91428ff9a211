// src/catalog/skills_db.rs
//! Static rule tables used by skill inference and skill categorization.
//!
//! Every table is an ordered slice: lookups walk it front to back and the
//! first hit wins, so declaration order is part of the behaviour.

pub const CORE_SKILLS: &str = "core_skills";
pub const ADVANCED_SKILLS: &str = "advanced_skills";

pub struct SkillList {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct CategorySkills {
    pub category: &'static str,
    pub lists: &'static [SkillList],
}

impl CategorySkills {
    /// Named list for this category, empty when the category lacks it.
    pub fn list(&self, name: &str) -> &'static [&'static str] {
        self.lists
            .iter()
            .find(|list| list.name == name)
            .map(|list| list.skills)
            .unwrap_or(&[])
    }
}

pub const SKILLS_DATABASE: &[CategorySkills] = &[
    CategorySkills {
        category: "AI ENGINEER",
        lists: &[
            SkillList {
                name: CORE_SKILLS,
                skills: &[
                    "Python",
                    "Machine Learning",
                    "Deep Learning",
                    "TensorFlow",
                    "PyTorch",
                    "Scikit-learn",
                    "Pandas",
                    "NumPy",
                    "Computer Vision",
                    "Natural Language Processing",
                ],
            },
            SkillList {
                name: ADVANCED_SKILLS,
                skills: &[
                    "MLOps",
                    "Kubernetes",
                    "Docker",
                    "AWS",
                    "Azure",
                    "GCP",
                    "Apache Airflow",
                ],
            },
        ],
    },
    CategorySkills {
        category: "DATA SCIENCE ENGINEER",
        lists: &[
            SkillList {
                name: CORE_SKILLS,
                skills: &[
                    "Python",
                    "R",
                    "SQL",
                    "Statistics",
                    "Data Analysis",
                    "Pandas",
                    "NumPy",
                ],
            },
            SkillList {
                name: "ml_skills",
                skills: &["Machine Learning", "Scikit-learn", "XGBoost", "Apache Spark"],
            },
        ],
    },
    CategorySkills {
        category: "PYTHON DEVELOPER",
        lists: &[
            SkillList {
                name: CORE_SKILLS,
                skills: &["Python", "Django", "Flask", "FastAPI", "REST API", "PostgreSQL"],
            },
            SkillList {
                name: "web_skills",
                skills: &["HTML", "CSS", "JavaScript", "React", "Docker"],
            },
        ],
    },
];

pub fn category_skills<'a>(
    skills_db: &'a [CategorySkills],
    category: &str,
) -> Option<&'a CategorySkills> {
    skills_db.iter().find(|entry| entry.category == category)
}

pub enum TriggerSkills {
    Fixed(&'static [&'static str]),
    /// Leading entries of one of the category's own lists.
    FromCategory {
        list: &'static str,
        take: usize,
    },
}

pub struct TitleTrigger {
    pub keyword: &'static str,
    pub skills: TriggerSkills,
}

pub const TITLE_TRIGGERS: &[TitleTrigger] = &[
    TitleTrigger {
        keyword: "senior",
        skills: TriggerSkills::FromCategory {
            list: ADVANCED_SKILLS,
            take: 3,
        },
    },
    TitleTrigger {
        keyword: "machine learning",
        skills: TriggerSkills::Fixed(&["Machine Learning", "Python", "Scikit-learn"]),
    },
    TitleTrigger {
        keyword: "data scientist",
        skills: TriggerSkills::Fixed(&["Python", "R", "SQL", "Statistics"]),
    },
    TitleTrigger {
        keyword: "python",
        skills: TriggerSkills::Fixed(&["Python", "Django", "Flask"]),
    },
    TitleTrigger {
        keyword: "ai",
        skills: TriggerSkills::Fixed(&["AI", "Machine Learning", "Python"]),
    },
];

pub struct SkillCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const OTHER_CATEGORY: &str = "Other";

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        keywords: &["Python", "Java", "JavaScript", "R", "Scala", "Go", "C++"],
    },
    SkillCategory {
        name: "ML/AI Frameworks",
        keywords: &["TensorFlow", "PyTorch", "Scikit-learn", "Keras", "XGBoost"],
    },
    SkillCategory {
        name: "Cloud Platforms",
        keywords: &["AWS", "Azure", "GCP", "Google Cloud"],
    },
    SkillCategory {
        name: "Databases",
        keywords: &["SQL", "PostgreSQL", "MongoDB", "Redis", "MySQL"],
    },
    SkillCategory {
        name: "Tools & Platforms",
        keywords: &["Docker", "Kubernetes", "Git", "Jenkins", "Airflow"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_list_lookup() {
        let ai = category_skills(SKILLS_DATABASE, "AI ENGINEER").unwrap();
        assert_eq!(ai.list(CORE_SKILLS).len(), 10);
        assert_eq!(ai.list(ADVANCED_SKILLS)[0], "MLOps");
    }

    #[test]
    fn test_missing_list_is_empty() {
        let data = category_skills(SKILLS_DATABASE, "DATA SCIENCE ENGINEER").unwrap();
        assert!(data.list(ADVANCED_SKILLS).is_empty());
        assert!(category_skills(SKILLS_DATABASE, "CHEF").is_none());
    }
}
