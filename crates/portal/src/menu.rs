//! Portal screen state: search box, filters and the highlighted card

use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogFilter, GameRecord};
use crate::types::{GameKind, MenuAction};

/// Result of one menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Updated,
    Unchanged,
    Launch(GameKind),
    Quit,
}

#[derive(Debug, Clone)]
pub struct PortalMenu {
    catalog: Catalog,
    filter: CatalogFilter,
    selected: usize,
}

impl PortalMenu {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: CatalogFilter::default(),
            selected: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn query(&self) -> &str {
        &self.filter.query
    }

    /// Category label shown on screen
    pub fn category_label(&self) -> &str {
        self.filter.category.as_deref().unwrap_or("All")
    }

    pub fn featured_only(&self) -> bool {
        self.filter.featured_only
    }

    /// Records passing the current filter, in display order
    pub fn visible(&self) -> Vec<&GameRecord> {
        self.catalog.filter(&self.filter)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&GameRecord> {
        self.visible().into_iter().nth(self.selected)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// All, then each category in catalog order, then All again
    fn next_category(&mut self) {
        let categories = self.catalog.categories();
        let next = match &self.filter.category {
            None => categories.first().map(|c| c.to_string()),
            Some(current) => categories
                .iter()
                .position(|c| c.eq_ignore_ascii_case(current))
                .and_then(|i| categories.get(i + 1))
                .map(|c| c.to_string()),
        };
        self.filter.category = next;
    }

    pub fn apply(&mut self, action: MenuAction) -> MenuOutcome {
        match action {
            MenuAction::Up => {
                if self.selected == 0 {
                    return MenuOutcome::Unchanged;
                }
                self.selected -= 1;
            }
            MenuAction::Down => {
                if self.selected + 1 >= self.visible().len() {
                    return MenuOutcome::Unchanged;
                }
                self.selected += 1;
            }
            MenuAction::NextCategory => {
                self.next_category();
                self.selected = 0;
            }
            MenuAction::ToggleFeatured => {
                self.filter.featured_only = !self.filter.featured_only;
                self.selected = 0;
            }
            MenuAction::Type(c) => {
                if c.is_control() {
                    return MenuOutcome::Unchanged;
                }
                self.filter.query.push(c);
                self.selected = 0;
            }
            MenuAction::Backspace => {
                if self.filter.query.pop().is_none() {
                    return MenuOutcome::Unchanged;
                }
                self.selected = 0;
            }
            MenuAction::ClearSearch => {
                if self.filter.query.is_empty() {
                    return MenuOutcome::Unchanged;
                }
                self.filter.query.clear();
                self.selected = 0;
            }
            MenuAction::Launch => {
                let Some(record) = self.selected() else {
                    return MenuOutcome::Unchanged;
                };
                return match record.game_kind() {
                    Ok(kind) => {
                        debug!(title = %record.title, ?kind, "launching game");
                        MenuOutcome::Launch(kind)
                    }
                    Err(e) => {
                        warn!(error = %e, "catalog record does not launch a game");
                        MenuOutcome::Unchanged
                    }
                };
            }
            MenuAction::Quit => return MenuOutcome::Quit,
        }
        self.clamp_selection();
        MenuOutcome::Updated
    }
}
