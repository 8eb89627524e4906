use crate::content::domain::entities::Project;
use crate::page::domain::blocks::{Block, Span};

const INTRO: &str = "Here are some of the key projects I've worked on, showcasing my skills across different technologies.";

fn project_card(project: &Project) -> Block {
    let image = vec![Block::Image {
        src: project.image_url.clone(),
        alt: project.title.clone(),
        width: None,
    }];

    let details = vec![
        Block::heading(3, &project.title),
        Block::paragraph(&project.description),
        Block::Paragraph(vec![Span::strong("Technologies Used:")]),
        Block::Code(project.technologies.join(", ")),
        Block::LinkButton {
            label: "View on GitHub ↗".to_string(),
            url: project.repo_url.clone(),
            full_width: false,
        },
    ];

    Block::Container {
        bordered: true,
        children: vec![Block::Columns {
            weights: vec![1, 2],
            columns: vec![image, details],
        }],
    }
}

/// One card per project, in authoring order.
pub fn render_projects(projects: &[Project]) -> Vec<Block> {
    let mut blocks = vec![
        Block::heading(2, "My Projects"),
        Block::paragraph(INTRO),
        Block::Divider,
    ];
    blocks.extend(projects.iter().map(project_card));
    blocks
}
