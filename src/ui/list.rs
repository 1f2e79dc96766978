//! List renderer: render plan in, view descriptors out.
//!
//! [`ListRenderer::render`] is a pure function of the display options, the
//! render plan and the current filter text. It produces a [`RenderTree`] that
//! any [`ListWidget`] can consume through [`RenderTree::drive`].
//!
//! # Emitted Elements
//!
//! ```text
//! [Title row]        only with show_title_row; press → FilterChanged("")
//! [Search row]       only with show_search; change → FilterChanged(text)
//! [SECTION HEADER]   one per category, name upper-cased
//! [Item rows]        one per matched item; press → ItemSelected(key)
//! ```

use crate::filter::FilterPredicate;
use crate::plan::RenderPlan;
use crate::ui::viewmodel::{
    ItemRowView, RenderTree, SearchRowView, SectionHeaderView, SectionView, TitleRowView,
};

/// Row key of the title row.
pub const TITLE_ROW_KEY: &str = "home_key";

/// Title row heading.
pub const TITLE_ROW_TITLE: &str = "Catalog";

/// Title row subtitle.
pub const TITLE_ROW_SUBTITLE: &str = "Browse all entries";

/// Placeholder shown in an empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Display toggles supplied by the caller on every cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Render the title row.
    pub show_title_row: bool,
    /// Render the search row.
    pub show_search: bool,
    /// Skip sections that filtered down to zero rows.
    ///
    /// Off by default: every category keeps its labeled header even when
    /// nothing in it matches.
    pub hide_empty_sections: bool,
    /// Style name for the list container, passed through untouched.
    pub container_style: Option<String>,
    /// Style name for the search input, passed through untouched.
    pub search_input_style: Option<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            show_title_row: false,
            show_search: true,
            hide_empty_sections: false,
            container_style: None,
            search_input_style: None,
        }
    }
}

/// Consumer of rendered rows: the scrollable list that actually draws them.
///
/// [`RenderTree::drive`] calls the title and search callbacks first, then for
/// each section its header followed by its rows. Empty sections get a header
/// call and no row calls.
pub trait ListWidget {
    fn title_row(&mut self, row: &TitleRowView);
    fn search_row(&mut self, row: &SearchRowView);
    fn section_header(&mut self, header: &SectionHeaderView);
    fn item_row(&mut self, row: &ItemRowView);

    /// Whether row presses still register while the search input has focus.
    ///
    /// The browser relies on this so a result can be picked without leaving
    /// the search box first.
    fn keeps_taps_while_typing(&self) -> bool {
        true
    }
}

impl RenderTree {
    /// Feeds every element of the tree to `widget` in display order.
    pub fn drive<W: ListWidget + ?Sized>(&self, widget: &mut W) {
        if let Some(title) = &self.title_row {
            widget.title_row(title);
        }
        if let Some(search) = &self.search_row {
            widget.search_row(search);
        }
        for section in &self.sections {
            widget.section_header(&section.header);
            for row in &section.rows {
                widget.item_row(row);
            }
        }
    }
}

/// Turns render plans into [`RenderTree`]s.
#[derive(Debug, Clone, Default)]
pub struct ListRenderer {
    options: ListOptions,
}

impl ListRenderer {
    #[must_use]
    pub const fn new(options: ListOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Renders one frame.
    ///
    /// `predicate` must be the one `plan` was built with; it only supplies
    /// highlight ranges here.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_browser::{
    ///     DataSourceBuilder, FilterPredicate, Item, ListOptions, ListRenderer, NavigationEvent,
    ///     SectionedCatalog,
    /// };
    ///
    /// let catalog = SectionedCatalog::standard(vec![Item::new("btn", "Button", "tap target")], vec![]);
    /// let predicate = FilterPredicate::new("");
    /// let plan = DataSourceBuilder::build(&catalog, &predicate);
    ///
    /// let tree = ListRenderer::new(ListOptions::default()).render(&plan, "", &predicate);
    /// assert_eq!(tree.sections[0].header.label, "COMPONENTS");
    /// assert_eq!(tree.sections[0].rows[0].on_press(), NavigationEvent::ItemSelected("btn".into()));
    /// ```
    #[must_use]
    pub fn render(&self, plan: &RenderPlan<'_>, filter_text: &str, predicate: &FilterPredicate) -> RenderTree {
        let title_row = self.options.show_title_row.then(|| TitleRowView {
            key: TITLE_ROW_KEY.to_string(),
            title: TITLE_ROW_TITLE.to_string(),
            subtitle: TITLE_ROW_SUBTITLE.to_string(),
        });

        let search_row = self.options.show_search.then(|| SearchRowView {
            query: filter_text.to_string(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            input_style: self.options.search_input_style.clone(),
        });

        let sections = plan
            .sections()
            .iter()
            .filter(|section| !(self.options.hide_empty_sections && section.is_empty()))
            .map(|section| SectionView {
                header: SectionHeaderView {
                    name: section.name.to_string(),
                    label: section.name.to_uppercase(),
                    count: section.items.len(),
                },
                rows: section
                    .items
                    .iter()
                    .map(|item| ItemRowView {
                        key: item.row_key().to_string(),
                        title: item.title.clone(),
                        description: item.description.clone(),
                        highlight: predicate.match_range(&item.title),
                    })
                    .collect(),
            })
            .collect();

        RenderTree {
            container_style: self.options.container_style.clone(),
            title_row,
            search_row,
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, SectionedCatalog};
    use crate::navigation::NavigationEvent;
    use crate::plan::DataSourceBuilder;
    use crate::ui::viewmodel::RowTarget;

    fn sample_catalog() -> SectionedCatalog {
        SectionedCatalog::standard(
            vec![
                Item::new("btn", "Button", "tap target"),
                Item::keyless("Switch", "boolean input"),
            ],
            vec![Item::new("net", "NetInfo", "network state")],
        )
    }

    fn render(catalog: &SectionedCatalog, query: &str, options: ListOptions) -> RenderTree {
        let predicate = FilterPredicate::new(query);
        let plan = DataSourceBuilder::build(catalog, &predicate);
        ListRenderer::new(options).render(&plan, query, &predicate)
    }

    /// Records widget callbacks as strings.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl ListWidget for Recorder {
        fn title_row(&mut self, row: &TitleRowView) {
            self.0.push(format!("title:{}", row.key));
        }
        fn search_row(&mut self, row: &SearchRowView) {
            self.0.push(format!("search:{}", row.query));
        }
        fn section_header(&mut self, header: &SectionHeaderView) {
            self.0.push(format!("header:{}", header.label));
        }
        fn item_row(&mut self, row: &ItemRowView) {
            self.0.push(format!("row:{}", row.key));
        }
    }

    #[test]
    fn toggles_control_title_and_search_rows() {
        let catalog = sample_catalog();

        let bare = render(&catalog, "", ListOptions { show_search: false, ..ListOptions::default() });
        assert!(bare.title_row.is_none());
        assert!(bare.search_row.is_none());

        let full = render(
            &catalog,
            "",
            ListOptions { show_title_row: true, show_search: true, ..ListOptions::default() },
        );
        assert_eq!(full.title_row.as_ref().map(|t| t.key.as_str()), Some(TITLE_ROW_KEY));
        assert_eq!(full.search_row.as_ref().map(|s| s.placeholder.as_str()), Some(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn drive_emits_elements_in_display_order() {
        let catalog = sample_catalog();
        let tree = render(
            &catalog,
            "t",
            ListOptions { show_title_row: true, ..ListOptions::default() },
        );

        let mut recorder = Recorder::default();
        tree.drive(&mut recorder);

        assert_eq!(
            recorder.0,
            [
                "title:home_key",
                "search:t",
                "header:COMPONENTS",
                "row:btn",
                "row:Switch",
                "header:APIS",
                "row:net",
            ]
        );
    }

    #[test]
    fn empty_sections_render_headers_unless_hidden() {
        let catalog = sample_catalog();

        let shown = render(&catalog, "switch", ListOptions::default());
        let labels: Vec<&str> = shown.sections.iter().map(|s| s.header.label.as_str()).collect();
        assert_eq!(labels, ["COMPONENTS", "APIS"]);
        assert_eq!(shown.sections[1].header.count, 0);

        let hidden = render(
            &catalog,
            "switch",
            ListOptions { hide_empty_sections: true, ..ListOptions::default() },
        );
        let labels: Vec<&str> = hidden.sections.iter().map(|s| s.header.label.as_str()).collect();
        assert_eq!(labels, ["COMPONENTS"]);
    }

    #[test]
    fn widgets_keep_taps_while_typing_by_default() {
        assert!(Recorder::default().keeps_taps_while_typing());
    }

    #[test]
    fn title_row_press_clears_filter() {
        let catalog = sample_catalog();
        let tree = render(
            &catalog,
            "net",
            ListOptions { show_title_row: true, ..ListOptions::default() },
        );

        let mut events = Vec::new();
        assert!(tree.activate(RowTarget::TitleRow, &mut events));
        assert_eq!(events, [NavigationEvent::FilterChanged(String::new())]);
    }

    #[test]
    fn keyless_item_is_selected_by_title() {
        let catalog = sample_catalog();
        let tree = render(&catalog, "", ListOptions::default());

        let mut events = Vec::new();
        assert!(tree.activate(RowTarget::Item { section: 0, row: 1 }, &mut events));
        assert_eq!(events, [NavigationEvent::ItemSelected("Switch".to_string())]);
    }

    #[test]
    fn missing_targets_dispatch_nothing() {
        let catalog = sample_catalog();
        let tree = render(&catalog, "", ListOptions { show_search: false, ..ListOptions::default() });

        let mut events = Vec::new();
        assert!(!tree.activate(RowTarget::TitleRow, &mut events));
        assert!(!tree.activate(RowTarget::Item { section: 5, row: 0 }, &mut events));
        assert!(!tree.change_search_text("x", &mut events));
        assert!(events.is_empty());
    }

    #[test]
    fn highlight_marks_literal_match() {
        let catalog = sample_catalog();
        let tree = render(&catalog, "INFO", ListOptions::default());
        assert_eq!(tree.sections[1].rows[0].highlight, Some((3, 7)));
        assert_eq!(tree.sections[0].rows.len(), 0);
    }

    #[test]
    fn styles_pass_through() {
        let catalog = sample_catalog();
        let tree = render(
            &catalog,
            "",
            ListOptions {
                container_style: Some("sidebar".into()),
                search_input_style: Some("compact".into()),
                ..ListOptions::default()
            },
        );
        assert_eq!(tree.container_style.as_deref(), Some("sidebar"));
        assert_eq!(tree.search_row.and_then(|s| s.input_style).as_deref(), Some("compact"));
    }
}
