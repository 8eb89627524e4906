use crate::content::domain::entities::PageMeta;
use crate::page::domain::blocks::Block;
use crate::page::domain::ui_state::SelectedTab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHeader {
    pub tab: SelectedTab,
    pub label: String,
    pub active: bool,
}

/// A fully assembled page, ready for a presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub meta: PageMeta,
    /// Stylesheet text, if one was found.
    pub style: Option<String>,
    /// Page-level problems that did not stop the render.
    pub notices: Vec<Block>,
    pub sidebar: Vec<Block>,
    pub tabs: Vec<TabHeader>,
    pub selected_tab: SelectedTab,
    pub body: Vec<Block>,
}

impl TabHeader {
    pub fn all(selected: SelectedTab) -> Vec<TabHeader> {
        SelectedTab::ALL
            .iter()
            .map(|tab| TabHeader {
                tab: *tab,
                label: tab.label().to_string(),
                active: *tab == selected,
            })
            .collect()
    }
}
