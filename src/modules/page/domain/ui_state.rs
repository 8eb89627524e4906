use serde::Deserialize;

use crate::contact::domain::outcome::ContactOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectedTab {
    #[default]
    About,
    Projects,
    Skills,
}

impl SelectedTab {
    pub const ALL: [SelectedTab; 3] = [
        SelectedTab::About,
        SelectedTab::Projects,
        SelectedTab::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectedTab::About => "about",
            SelectedTab::Projects => "projects",
            SelectedTab::Skills => "skills",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SelectedTab::About => "🏠 About Me",
            SelectedTab::Projects => "🚀 My Projects",
            SelectedTab::Skills => "🛠️ Skills & Experience",
        }
    }

    /// Unknown or missing values fall back to the first tab.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("projects") => SelectedTab::Projects,
            Some("skills") => SelectedTab::Skills,
            _ => SelectedTab::About,
        }
    }
}

/// Contact form state for the current request only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub outcome: Option<ContactOutcome>,
}

impl FormState {
    /// State after a submission: the form clears itself and only the outcome is kept.
    pub fn submitted(outcome: ContactOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub selected_tab: SelectedTab,
    pub form: FormState,
}

impl UiState {
    pub fn on_tab(tab: SelectedTab) -> Self {
        Self {
            selected_tab: tab,
            form: FormState::default(),
        }
    }
}
