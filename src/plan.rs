//! Render plan construction.
//!
//! [`DataSourceBuilder::build`] projects a [`SectionedCatalog`] through a
//! [`FilterPredicate`] into a [`RenderPlan`]: one section per category, in
//! catalog order, each holding the matching items in their original order.
//!
//! The plan borrows items from the catalog, so building it can never modify
//! the catalog, and it lives only for the render cycle that built it. A
//! category with no matches is kept as an empty section; whether empty
//! sections are drawn is up to the list renderer.

use crate::domain::{Item, SectionedCatalog};
use crate::filter::FilterPredicate;

/// One category after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSection<'a> {
    /// Category name, unchanged from the catalog.
    pub name: &'a str,
    /// Matching items in catalog order.
    pub items: Vec<&'a Item>,
}

impl PlanSection<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filtered, sectioned projection of a catalog for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan<'a> {
    sections: Vec<PlanSection<'a>>,
}

impl<'a> RenderPlan<'a> {
    /// Sections in catalog order, including empty ones.
    #[must_use]
    pub fn sections(&self) -> &[PlanSection<'a>] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&PlanSection<'a>> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Total number of matching items across all sections.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Returns `true` when no item matched; sections may still be present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Iterates over every matching item, section by section.
    pub fn items(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.sections.iter().flat_map(|s| s.items.iter().copied())
    }
}

/// Builds render plans from a catalog and a predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataSourceBuilder;

impl DataSourceBuilder {
    /// Filters every category of `catalog` through `predicate`.
    ///
    /// Deterministic and side-effect free; cheap enough to run on every
    /// keystroke.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_browser::{DataSourceBuilder, FilterPredicate, Item, SectionedCatalog};
    ///
    /// let catalog = SectionedCatalog::standard(
    ///     vec![Item::new("btn", "Button", "tap target")],
    ///     vec![Item::new("net", "NetInfo", "network state")],
    /// );
    ///
    /// let plan = DataSourceBuilder::build(&catalog, &FilterPredicate::new("but"));
    /// assert_eq!(plan.section("components").map(|s| s.items.len()), Some(1));
    /// assert_eq!(plan.section("apis").map(|s| s.items.len()), Some(0));
    /// ```
    #[must_use]
    pub fn build<'a>(catalog: &'a SectionedCatalog, predicate: &FilterPredicate) -> RenderPlan<'a> {
        let _span = tracing::debug_span!(
            "build_render_plan",
            categories = catalog.categories().len(),
            total_items = catalog.item_count(),
            match_all = predicate.is_match_all()
        )
        .entered();

        let sections: Vec<PlanSection<'a>> = catalog
            .categories()
            .iter()
            .map(|category| PlanSection {
                name: category.name.as_str(),
                items: category
                    .items
                    .iter()
                    .filter(|item| predicate.matches(&item.title))
                    .collect(),
            })
            .collect();

        let plan = RenderPlan { sections };

        tracing::debug!(matched = plan.item_count(), "render plan built");

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn sample_catalog() -> SectionedCatalog {
        SectionedCatalog::new(vec![
            Category::new(
                "components",
                vec![
                    Item::new("btn", "Button", "tap target"),
                    Item::new("sw", "Switch", "boolean input"),
                    Item::new("btn2", "Button", "duplicate title"),
                ],
            ),
            Category::new("apis", vec![Item::new("net", "NetInfo", "network state")]),
            Category::new("empty", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn match_all_reproduces_catalog() {
        let catalog = sample_catalog();
        let plan = DataSourceBuilder::build(&catalog, &FilterPredicate::default());

        assert_eq!(plan.sections().len(), 3);
        for (section, category) in plan.sections().iter().zip(catalog.categories()) {
            assert_eq!(section.name, category.name);
            let expected: Vec<&Item> = category.items.iter().collect();
            assert_eq!(section.items, expected);
        }
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let catalog = sample_catalog();
        let plan = DataSourceBuilder::build(&catalog, &FilterPredicate::new("button"));

        let keys: Vec<&str> = plan.items().map(Item::row_key).collect();
        assert_eq!(keys, ["btn", "btn2"]);
    }

    #[test]
    fn unmatched_sections_are_retained_empty() {
        let catalog = sample_catalog();
        let plan = DataSourceBuilder::build(&catalog, &FilterPredicate::new("zzz"));

        let names: Vec<&str> = plan.sections().iter().map(|s| s.name).collect();
        assert_eq!(names, ["components", "apis", "empty"]);
        assert!(plan.is_empty());
        assert!(plan.sections().iter().all(PlanSection::is_empty));
    }

    #[test]
    fn description_is_never_searched() {
        let catalog = sample_catalog();
        let plan = DataSourceBuilder::build(&catalog, &FilterPredicate::new("network"));
        assert!(plan.is_empty());
    }

    #[test]
    fn untitled_item_survives_as_empty_row() {
        let catalog = SectionedCatalog::standard(
            vec![
                Item { key: Some("broken".into()), title: String::new(), description: String::new() },
                Item::new("btn", "Button", ""),
            ],
            vec![],
        );

        let all = DataSourceBuilder::build(&catalog, &FilterPredicate::default());
        assert_eq!(all.item_count(), 2);

        let filtered = DataSourceBuilder::build(&catalog, &FilterPredicate::new("b"));
        let keys: Vec<&str> = filtered.items().map(Item::row_key).collect();
        assert_eq!(keys, ["btn"]);
    }
}
