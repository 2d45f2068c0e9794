//! Keyboard/mouse navigation over grouped suggestions.
//!
//! `SuggestionNavigator` is a small state machine with pure transitions. It
//! owns the query text, the flat suggestion list, the derived sections, the
//! open/closed flag and the active `(section, item)` pair. Rendering reads it;
//! nothing here touches the terminal.

use super::types::{Category, SuggestionItem};

/// One dropdown section: all suggestions of a category, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Category shared by every item.
    pub category: Category,
    /// Heading shown above the items.
    pub title: &'static str,
    /// Items in their original relative order.
    pub items: Vec<SuggestionItem>,
}

/// What: Group suggestions into display sections.
///
/// Inputs:
/// - `items`: Flat suggestions in any category order.
///
/// Output:
/// - One section per non-empty category, ordered by [`Category::DISPLAY_ORDER`].
#[must_use]
pub fn group_sections(items: &[SuggestionItem]) -> Vec<Section> {
    Category::DISPLAY_ORDER
        .iter()
        .filter_map(|&category| {
            let members: Vec<SuggestionItem> = items
                .iter()
                .filter(|it| it.category == category)
                .cloned()
                .collect();
            (!members.is_empty()).then_some(Section {
                category,
                title: category.section_title(),
                items: members,
            })
        })
        .collect()
}

/// Result of a transition that may select an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Nothing to act on.
    None,
    /// Navigate to this item's detail view.
    Commit(SuggestionItem),
}

/// Dropdown navigation state.
#[derive(Clone, Debug, Default)]
pub struct SuggestionNavigator {
    /// Current input text.
    query: String,
    /// Flat suggestions as last received.
    suggestions: Vec<SuggestionItem>,
    /// Sections derived from `suggestions`.
    sections: Vec<Section>,
    /// Whether the dropdown is visible.
    open: bool,
    /// Active section index.
    active_section: Option<usize>,
    /// Active item index within the active section.
    active_index: Option<usize>,
}

impl SuggestionNavigator {
    /// Fresh navigator: empty query, closed, nothing active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Flat suggestion list.
    #[must_use]
    pub fn suggestions(&self) -> &[SuggestionItem] {
        &self.suggestions
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the dropdown is open and has something to show.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.open && !self.sections.is_empty()
    }

    /// Active `(section, item)` pair, when both are set.
    #[must_use]
    pub const fn active(&self) -> Option<(usize, usize)> {
        match (self.active_section, self.active_index) {
            (Some(s), Some(i)) => Some((s, i)),
            _ => None,
        }
    }

    /// Item under the active pair.
    #[must_use]
    pub fn active_item(&self) -> Option<&SuggestionItem> {
        let (s, i) = self.active()?;
        self.sections.get(s)?.items.get(i)
    }

    /// What: Flat row of the active item in the rendered list.
    ///
    /// Output:
    /// - Row index counting one header row per section, or `None` when nothing is active.
    ///
    /// Details:
    /// - Used by the dropdown to keep the active row scrolled into view.
    #[must_use]
    pub fn active_row(&self) -> Option<usize> {
        let (s, i) = self.active()?;
        let before: usize = self.sections[..s].iter().map(|sec| sec.items.len() + 1).sum();
        Some(before + 1 + i)
    }

    /// What: Map a rendered row back to `(section, item)`.
    ///
    /// Output:
    /// - `None` for header rows and rows past the end.
    #[must_use]
    pub fn row_to_position(&self, row: usize) -> Option<(usize, usize)> {
        let mut start = 0;
        for (s, sec) in self.sections.iter().enumerate() {
            if row == start {
                return None;
            }
            let end = start + sec.items.len();
            if row <= end {
                return Some((s, row - start - 1));
            }
            start = end + 1;
        }
        None
    }

    /// Total rendered rows, headers included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|sec| sec.items.len() + 1).sum()
    }

    fn clear_active(&mut self) {
        self.active_section = None;
        self.active_index = None;
    }

    fn set_active(&mut self, section: usize, index: usize) {
        self.active_section = Some(section);
        self.active_index = Some(index);
    }

    fn is_valid(&self, section: usize, index: usize) -> bool {
        self.sections
            .get(section)
            .is_some_and(|sec| index < sec.items.len())
    }

    fn commit(&mut self, item: SuggestionItem) -> NavOutcome {
        self.open = false;
        self.clear_active();
        NavOutcome::Commit(item)
    }

    /// What: Update the query text.
    ///
    /// Details:
    /// - Opens the dropdown when the new text is non-empty.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        if !self.query.is_empty() {
            self.open = true;
        }
    }

    /// What: Replace the suggestions.
    ///
    /// Details:
    /// - Regroups sections and clears the active pair; the open flag is unchanged.
    pub fn set_suggestions(&mut self, items: Vec<SuggestionItem>) {
        self.sections = group_sections(&items);
        self.suggestions = items;
        self.clear_active();
    }

    /// What: Move the active item down.
    ///
    /// Details:
    /// - Closed with suggestions: opens without moving.
    /// - Nothing active: first item of the first section.
    /// - Otherwise the next item, wrapping into the next section; the very last item stays put.
    pub fn arrow_down(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        if !self.open {
            self.open = true;
            return;
        }
        match self.active() {
            None => self.set_active(0, 0),
            Some((s, i)) => {
                if i + 1 < self.sections[s].items.len() {
                    self.set_active(s, i + 1);
                } else if s + 1 < self.sections.len() {
                    self.set_active(s + 1, 0);
                }
            }
        }
    }

    /// What: Move the active item up.
    ///
    /// Details:
    /// - Closed: no-op.
    /// - Nothing active: last item of the last section.
    /// - Otherwise the previous item, wrapping into the previous section; the very first item stays put.
    pub fn arrow_up(&mut self) {
        if !self.open || self.sections.is_empty() {
            return;
        }
        match self.active() {
            None => {
                let last = self.sections.len() - 1;
                self.set_active(last, self.sections[last].items.len() - 1);
            }
            Some((s, i)) => {
                if i > 0 {
                    self.set_active(s, i - 1);
                } else if s > 0 {
                    self.set_active(s - 1, self.sections[s - 1].items.len() - 1);
                }
            }
        }
    }

    /// What: Commit the active item, or the first suggestion when nothing is active.
    pub fn enter(&mut self) -> NavOutcome {
        let target = self
            .active_item()
            .cloned()
            .or_else(|| self.suggestions.first().cloned());
        target.map_or(NavOutcome::None, |item| self.commit(item))
    }

    /// Close and clear the active pair.
    pub fn escape(&mut self) {
        self.open = false;
        self.clear_active();
    }

    /// Make `(section, index)` active without closing.
    pub fn hover(&mut self, section: usize, index: usize) {
        if self.is_valid(section, index) {
            self.set_active(section, index);
        }
    }

    /// Commit the item at `(section, index)` immediately.
    pub fn click(&mut self, section: usize, index: usize) -> NavOutcome {
        match self.sections.get(section).and_then(|sec| sec.items.get(index)) {
            Some(item) => {
                let item = item.clone();
                self.commit(item)
            }
            None => NavOutcome::None,
        }
    }

    /// Close on a pointer press outside the input and dropdown.
    pub fn click_outside(&mut self) {
        self.open = false;
    }

    /// Reopen on input focus when there is a query and something to show.
    pub fn focus(&mut self) {
        if !self.query.is_empty() && !self.suggestions.is_empty() {
            self.open = true;
        }
    }
}
