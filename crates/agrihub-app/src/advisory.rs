//! Advisory page browsing state

use agrihub_core::prelude::*;
use agrihub_core::{lookup_topic, topics_in, AdvisoryTab, AdvisoryTopic};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisoryState {
    tab: AdvisoryTab,
    /// Index into the topics of the current tab
    selected: usize,
    /// Topic shown in the detail panel
    open: Option<&'static AdvisoryTopic>,
}

impl AdvisoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AdvisoryTab {
        self.tab
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn topics(&self) -> Vec<&'static AdvisoryTopic> {
        topics_in(self.tab).collect()
    }

    pub fn selected_topic(&self) -> Option<&'static AdvisoryTopic> {
        topics_in(self.tab).nth(self.selected)
    }

    pub fn open_topic(&self) -> Option<&'static AdvisoryTopic> {
        self.open
    }

    pub fn switch_tab(&mut self) {
        self.tab = self.tab.toggle();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let count = topics_in(self.tab).count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = topics_in(self.tab).count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Show a topic's detail panel, switching tab and selection to it
    pub fn open(&mut self, id: &str) -> Result<&'static AdvisoryTopic> {
        let topic = lookup_topic(id)?;
        self.tab = topic.tab;
        self.selected = topics_in(topic.tab)
            .position(|t| t.id == topic.id)
            .unwrap_or(0);
        self.open = Some(topic);
        Ok(topic)
    }

    pub fn open_selected(&mut self) -> Option<&'static AdvisoryTopic> {
        let topic = self.selected_topic()?;
        self.open = Some(topic);
        Some(topic)
    }

    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }
}
