use crate::content::domain::entities::{ContentError, ExperienceEntry, SkillCategory};
use crate::page::domain::blocks::{Block, Span};

const INTRO: &str = "I am proficient in a wide range of technologies. Here's a breakdown:";

fn experience_card(job: &ExperienceEntry) -> Block {
    Block::Container {
        bordered: true,
        children: vec![
            Block::Heading {
                level: 3,
                spans: vec![
                    Span::strong(&job.role),
                    Span::plain(format!(" | {}", job.company)),
                ],
            },
            Block::Caption(vec![Span::emphasis(&job.period)]),
            Block::Expander {
                label: "Key Responsibilities & Achievements".to_string(),
                children: vec![Block::BulletList(job.details.clone())],
            },
        ],
    }
}

/// Skill bars per category, then one card per job.
///
/// Fails on the first skill whose level is outside `0..=100` instead of
/// drawing a bar that cannot be represented.
pub fn render_skills_and_experience(
    categories: &[SkillCategory],
    experience: &[ExperienceEntry],
) -> Result<Vec<Block>, ContentError> {
    let mut blocks = vec![Block::heading(2, "Technical Skills"), Block::paragraph(INTRO)];

    for category in categories {
        blocks.push(Block::heading(3, &category.name));
        for skill in &category.skills {
            let percent = skill.validate(&category.name)?;
            blocks.push(Block::Progress {
                percent,
                label: format!("{} ({}%)", skill.name, percent),
            });
        }
    }

    blocks.push(Block::Divider);
    blocks.push(Block::heading(2, "Work Experience"));
    blocks.extend(experience.iter().map(experience_card));

    Ok(blocks)
}
