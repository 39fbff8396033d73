use crate::core::markup::Markup;
use crate::domain::ports::{Page, SelectOption};

/// Rendering target kept in memory, used by the CLI and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    team_options: Vec<SelectOption>,
    content: Option<Markup>,
    replacements: usize,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_options(&self) -> &[SelectOption] {
        &self.team_options
    }

    pub fn content(&self) -> Option<&Markup> {
        self.content.as_ref()
    }

    /// Serialized container content; empty before the first render.
    pub fn content_html(&self) -> String {
        self.content.as_ref().map(Markup::to_html).unwrap_or_default()
    }

    /// How many times the container was replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Page for MemoryPage {
    fn append_team_option(&mut self, option: SelectOption) {
        self.team_options.push(option);
    }

    fn replace_content(&mut self, content: Markup) {
        self.content = Some(content);
        self.replacements += 1;
    }
}
