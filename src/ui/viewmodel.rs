//! View descriptors produced by the list renderer.
//!
//! A [`RenderTree`] is the complete, immutable description of one list frame:
//! an optional title row, an optional search row, and one [`SectionView`] per
//! rendered category. Descriptors carry display-ready data only. Interactive
//! descriptors know which [`NavigationEvent`] they produce, but they hold no
//! mutable state and never act on their own.

use crate::navigation::{NavigationDispatcher, NavigationEvent};

/// Title row shown above the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRowView {
    /// Row identity in the hosting list.
    pub key: String,
    pub title: String,
    pub subtitle: String,
}

impl TitleRowView {
    /// Activating the title row clears the filter.
    #[must_use]
    pub fn on_press(&self) -> NavigationEvent {
        NavigationEvent::FilterChanged(String::new())
    }
}

/// Search input row bound to the current filter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRowView {
    /// Current filter text displayed in the input.
    pub query: String,
    pub placeholder: String,
    /// Pass-through style name for the text input.
    pub input_style: Option<String>,
}

impl SearchRowView {
    /// Every change of the input text is forwarded verbatim.
    #[must_use]
    pub fn on_change_text(&self, text: &str) -> NavigationEvent {
        NavigationEvent::FilterChanged(text.to_string())
    }
}

/// Section header for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeaderView {
    /// Category name as it appears in the catalog.
    pub name: String,
    /// Upper-cased display label.
    pub label: String,
    /// Number of rows in the section after filtering.
    pub count: usize,
}

/// One matched catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowView {
    /// Row identity: the item key, or its title when the key is absent.
    pub key: String,
    pub title: String,
    pub description: String,
    /// Char range of the title that matched the filter, if any.
    pub highlight: Option<(usize, usize)>,
}

impl ItemRowView {
    #[must_use]
    pub fn on_press(&self) -> NavigationEvent {
        NavigationEvent::ItemSelected(self.key.clone())
    }
}

/// A header plus its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub header: SectionHeaderView,
    pub rows: Vec<ItemRowView>,
}

/// Position of an activatable row inside a [`RenderTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowTarget {
    TitleRow,
    Item { section: usize, row: usize },
}

/// Complete description of one rendered list frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderTree {
    /// Pass-through style name for the list container.
    pub container_style: Option<String>,
    pub title_row: Option<TitleRowView>,
    pub search_row: Option<SearchRowView>,
    pub sections: Vec<SectionView>,
}

impl RenderTree {
    /// Activatable rows in display order: the title row first, then items.
    #[must_use]
    pub fn activatable(&self) -> Vec<RowTarget> {
        let title = self.title_row.as_ref().map(|_| RowTarget::TitleRow);
        let items = self.sections.iter().enumerate().flat_map(|(section, view)| {
            (0..view.rows.len()).map(move |row| RowTarget::Item { section, row })
        });
        title.into_iter().chain(items).collect()
    }

    /// Number of item rows across all sections.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    #[must_use]
    pub fn item_row(&self, target: RowTarget) -> Option<&ItemRowView> {
        match target {
            RowTarget::TitleRow => None,
            RowTarget::Item { section, row } => self.sections.get(section)?.rows.get(row),
        }
    }

    /// Activates the row at `target`, dispatching its event.
    ///
    /// Returns `false` if the target does not exist in this tree.
    pub fn activate<D: NavigationDispatcher>(&self, target: RowTarget, dispatcher: &mut D) -> bool {
        let event = match target {
            RowTarget::TitleRow => self.title_row.as_ref().map(TitleRowView::on_press),
            RowTarget::Item { .. } => self.item_row(target).map(ItemRowView::on_press),
        };

        event.map_or(false, |event| {
            tracing::debug!(?target, ?event, "row activated");
            dispatcher.dispatch(event);
            true
        })
    }

    /// Forwards a text change from the search input.
    ///
    /// Returns `false` when the tree has no search row.
    pub fn change_search_text<D: NavigationDispatcher>(&self, text: &str, dispatcher: &mut D) -> bool {
        self.search_row.as_ref().map_or(false, |search| {
            tracing::trace!(text_len = text.len(), "search text changed");
            dispatcher.dispatch(search.on_change_text(text));
            true
        })
    }
}

/// Notice painted when no row matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Content of the detail page for a selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub key: String,
    pub title: String,
    pub description: String,
}

/// Everything the terminal list needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub tree: RenderTree,
    /// Ordinal of the cursor row in [`RenderTree::activatable`] order.
    pub selected: Option<usize>,
    /// Whether typing goes into the search row.
    pub search_focused: bool,
    /// Key hints for the footer.
    pub footer: String,
    pub empty_state: Option<EmptyState>,
}

/// The screen the plugin is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(UIViewModel),
    Detail(DetailView),
}
