use crate::assets::domain::asset::AssetFile;
use crate::content::domain::entities::{Link, Profile};
use crate::contact::domain::outcome::ContactOutcome;
use crate::page::domain::blocks::{Block, ContactFormView, NoticeLevel};
use crate::page::domain::ui_state::UiState;

pub const RESUME_HREF: &str = "/resume";
pub const CONTACT_ACTION: &str = "/contact";

const PROFILE_PIC_WIDTH: u32 = 200;

/// Profile header, link buttons, resume download (only when the file was found)
/// and the contact form.
pub fn render_sidebar(
    profile: &Profile,
    links: &[Link],
    resume: Option<&AssetFile>,
    ui: &UiState,
) -> Vec<Block> {
    let mut blocks = vec![
        Block::Image {
            src: profile.profile_pic_url.clone(),
            alt: profile.name.clone(),
            width: Some(PROFILE_PIC_WIDTH),
        },
        Block::heading(1, &profile.name),
        Block::heading(3, &profile.title),
        Block::Divider,
        Block::heading(3, "🔗 Connect with Me"),
        Block::equal_columns(
            links
                .iter()
                .map(|link| {
                    vec![Block::LinkButton {
                        label: link.platform.clone(),
                        url: link.url.clone(),
                        full_width: true,
                    }]
                })
                .collect(),
        ),
        Block::Divider,
    ];

    if let Some(file) = resume.filter(|f| !f.is_empty()) {
        blocks.push(Block::DownloadButton {
            label: "📄 Download My Resume".to_string(),
            href: RESUME_HREF.to_string(),
            file_name: file.file_name.clone(),
            mime: file.mime.to_string(),
            full_width: true,
        });
        blocks.push(Block::Divider);
    }

    blocks.push(Block::heading(3, "Contact Me"));
    blocks.push(Block::ContactForm(ContactFormView {
        action: format!("{}?tab={}", CONTACT_ACTION, ui.selected_tab.as_str()),
        name: ui.form.name.clone(),
        email: ui.form.email.clone(),
        message: ui.form.message.clone(),
        submit_label: "Send Message".to_string(),
    }));

    if let Some(outcome) = ui.form.outcome {
        let level = match outcome {
            ContactOutcome::Incomplete => NoticeLevel::Warning,
            ContactOutcome::Accepted => NoticeLevel::Success,
        };
        blocks.push(Block::notice(level, outcome.message()));
    }

    blocks
}
