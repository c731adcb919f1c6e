//! Skills catalogue and category filter

use crate::error::{Error, Result};
use crate::types::{Skill, SkillCategory};
use std::fmt;
use std::str::FromStr;

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

/// Width of the level bar in [`render_table`]
pub const BAR_WIDTH: usize = 20;

/// Every skill, in display order
pub static SKILLS: [Skill; 15] = [
    skill("HTML/CSS", 95, SkillCategory::Frontend),
    skill("JavaScript", 90, SkillCategory::Frontend),
    skill("React", 90, SkillCategory::Frontend),
    skill("TypeScript", 85, SkillCategory::Frontend),
    skill("Tailwind CSS", 90, SkillCategory::Frontend),
    skill("Next.js", 80, SkillCategory::Frontend),
    skill("Node.js", 80, SkillCategory::Backend),
    skill("Express", 75, SkillCategory::Backend),
    skill("MongoDB", 70, SkillCategory::Backend),
    skill("PostgreSQL", 75, SkillCategory::Backend),
    skill("MySQL", 83, SkillCategory::Backend),
    skill("AWS", 60, SkillCategory::CloudDevOps),
    skill("Docker", 80, SkillCategory::CloudDevOps),
    skill("CI/CD", 65, SkillCategory::CloudDevOps),
    skill("Git/GitHub", 78, SkillCategory::CloudDevOps),
];

/// Active filter: everything, or one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillFilter {
    /// No filtering
    #[default]
    All,
    /// Only skills in this category
    Category(SkillCategory),
}

impl SkillFilter {
    /// Whether `skill` passes the filter
    pub fn matches(self, skill: &Skill) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => skill.category == category,
        }
    }
}

impl fmt::Display for SkillFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for SkillFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "frontend" => Ok(Self::Category(SkillCategory::Frontend)),
            "backend" => Ok(Self::Category(SkillCategory::Backend)),
            "cloud & devops" | "cloud" | "devops" | "cloud-devops" => {
                Ok(Self::Category(SkillCategory::CloudDevOps))
            }
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// Filter choices in display order: `all` first, then each category
pub fn categories() -> Vec<SkillFilter> {
    std::iter::once(SkillFilter::All)
        .chain(SkillCategory::ALL.into_iter().map(SkillFilter::Category))
        .collect()
}

/// Skills passing `filter`, in catalogue order
pub fn filter_skills(filter: SkillFilter) -> Vec<&'static Skill> {
    SKILLS.iter().filter(|s| filter.matches(s)).collect()
}

/// Fixed-width level bar, e.g. `[#########-]`
pub fn level_bar(level: u8, width: usize) -> String {
    let level = usize::from(level.min(100));
    let filled = (level * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Plain-text table: name, level bar and percentage, one skill per line
pub fn render_table(skills: &[&Skill]) -> String {
    let width = skills.iter().map(|s| s.name.len()).max().unwrap_or(0);
    skills
        .iter()
        .map(|s| {
            format!(
                "{:<width$}  {}  {:>3}%",
                s.name,
                level_bar(s.level, BAR_WIDTH),
                s.level
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
