use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MIN_SKILL_LEVEL: i32 = 0;
pub const MAX_SKILL_LEVEL: i32 = 100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    #[error("skill '{skill}' in category '{category}' has level {level}, expected 0..=100")]
    SkillLevelOutOfRange {
        category: String,
        skill: String,
        level: i32,
    },
}

/// Everything the page shows. Built once at startup, read-only afterwards.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PortfolioContent {
    pub page: PageMeta,
    pub profile: Profile,
    pub links: Vec<Link>,
    pub about: AboutContent,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    /// Where the browser fetches the picture from.
    pub profile_pic_url: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Link {
    pub platform: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AboutContent {
    /// Authored text, may contain inline HTML. Blank lines separate paragraphs.
    pub summary: String,
    pub metrics: Vec<Metric>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: String,
    #[schema(minimum = 0, maximum = 100)]
    pub level: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub repo_url: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub details: Vec<String>,
}

impl Skill {
    pub fn validate(&self, category: &str) -> Result<u8, ContentError> {
        if (MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&self.level) {
            // In range, so the narrowing cannot fail.
            Ok(self.level as u8)
        } else {
            Err(ContentError::SkillLevelOutOfRange {
                category: category.to_string(),
                skill: self.name.clone(),
                level: self.level,
            })
        }
    }
}

impl PortfolioContent {
    /// Checks the invariants the renderers rely on. Reports the first offending skill.
    pub fn validate(&self) -> Result<(), ContentError> {
        for category in &self.skills {
            for skill in &category.skills {
                skill.validate(&category.name)?;
            }
        }
        Ok(())
    }
}
