// src/services/filter.rs

//! Supplier classification and normalization.
//!
//! Decides which raw elements look like shoe material suppliers and
//! projects the relevant ones into normalized records.

use std::collections::HashSet;

use crate::models::{Element, ElementKind, FilterConfig, Supplier};

/// Classifier for supplier candidates.
pub struct SupplierFilter {
    shop_types: Vec<String>,
    craft_types: Vec<String>,
    name_keywords: Vec<String>,
}

impl SupplierFilter {
    /// Create a filter from the configured rule lists.
    ///
    /// Rule values are lowercased once up front; matching is
    /// case-insensitive while output casing stays untouched.
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            shop_types: lowercase_all(&config.shop_types),
            craft_types: lowercase_all(&config.craft_types),
            name_keywords: lowercase_all(&config.name_keywords),
        }
    }

    /// Filter raw elements into supplier records.
    ///
    /// Elements are processed in source order. Duplicate (kind, id)
    /// pairs beyond the first occurrence are skipped; the seen-set is
    /// local to this call.
    pub fn filter_elements(&self, elements: &[Element]) -> Vec<Supplier> {
        let mut seen: HashSet<(ElementKind, i64)> = HashSet::new();
        let mut suppliers = Vec::new();

        for element in elements {
            if !seen.insert(element.identity()) {
                continue;
            }
            if self.is_relevant(element) {
                suppliers.push(Supplier::from_element(element));
            }
        }

        suppliers
    }

    /// Relevance check: shop whitelist, craft match, or name keyword.
    fn is_relevant(&self, element: &Element) -> bool {
        let shop = lowercased(&element.tags.shop);
        if self.shop_types.iter().any(|t| t == &shop) {
            return true;
        }

        let craft = lowercased(&element.tags.craft);
        if self.craft_types.iter().any(|t| t == &craft) {
            return true;
        }

        let name = lowercased(&element.tags.name);
        self.name_keywords.iter().any(|k| name.contains(k.as_str()))
    }
}

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

fn lowercased(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementTags;

    fn filter() -> SupplierFilter {
        SupplierFilter::new(&FilterConfig::default())
    }

    fn named_node(id: i64, name: &str) -> Element {
        Element {
            kind: ElementKind::Node,
            id,
            tags: ElementTags {
                name: Some(name.to_string()),
                ..ElementTags::default()
            },
            lat: None,
            lon: None,
            center: None,
        }
    }

    fn shop_node(id: i64, shop: &str) -> Element {
        let mut element = named_node(id, "Magazin");
        element.tags.shop = Some(shop.to_string());
        element
    }

    #[test]
    fn accepts_whitelisted_shop_types() {
        let filter = filter();
        for shop in ["wholesale", "trade", "industrial"] {
            assert_eq!(filter.filter_elements(&[shop_node(1, shop)]).len(), 1);
        }
        assert!(filter.filter_elements(&[shop_node(1, "bakery")]).is_empty());
    }

    #[test]
    fn shop_match_is_case_insensitive_and_preserves_casing() {
        let suppliers = filter().filter_elements(&[shop_node(1, "Wholesale")]);
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].shop, "Wholesale");
    }

    #[test]
    fn accepts_shoemaker_craft() {
        let mut element = named_node(1, "Atelier");
        element.tags.craft = Some("shoemaker".to_string());
        assert_eq!(filter().filter_elements(&[element]).len(), 1);

        let mut other = named_node(2, "Atelier");
        other.tags.craft = Some("carpenter".to_string());
        assert!(filter().filter_elements(&[other]).is_empty());
    }

    #[test]
    fn accepts_keyword_in_name_case_insensitively() {
        let filter = filter();
        assert_eq!(
            filter
                .filter_elements(&[named_node(1, "DEPOZIT CENTRAL")])
                .len(),
            1
        );
        assert_eq!(
            filter
                .filter_elements(&[named_node(2, "Atelier de Cizmărie")])
                .len(),
            1
        );
        assert_eq!(
            filter
                .filter_elements(&[named_node(3, "Shoe Factory Outlet")])
                .len(),
            1
        );
    }

    #[test]
    fn discards_unmatched_elements() {
        let filter = filter();
        assert!(
            filter
                .filter_elements(&[named_node(1, "Florăria Magnolia")])
                .is_empty()
        );
        // Matched remotely by the query's "provizionare" regex branch,
        // but no local keyword covers it.
        assert!(
            filter
                .filter_elements(&[named_node(2, "Provizionare Alfa")])
                .is_empty()
        );
        // Unnamed, untagged elements never match.
        let bare = Element {
            kind: ElementKind::Node,
            id: 3,
            tags: ElementTags::default(),
            lat: None,
            lon: None,
            center: None,
        };
        assert!(filter.filter_elements(&[bare]).is_empty());
    }

    #[test]
    fn bakery_names_still_match_via_brut() {
        // "brutăria" contains the "brut" keyword, so bakeries swept up
        // by the remote name regex survive the local filter too.
        let mut element = named_node(7, "Brutăria Centrală");
        element.kind = ElementKind::Way;
        element.center = Some(crate::models::Center {
            lat: Some(44.0),
            lon: Some(26.0),
        });

        let suppliers = filter().filter_elements(&[element]);
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].latitude, Some(44.0));
        assert_eq!(suppliers[0].longitude, Some(26.0));
    }

    #[test]
    fn duplicate_identity_keeps_first_occurrence() {
        let first = shop_node(10, "wholesale");
        let mut second = shop_node(10, "wholesale");
        second.tags.name = Some("Duplicat".to_string());

        let suppliers = filter().filter_elements(&[first, second]);
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].name, "Magazin");
    }

    #[test]
    fn same_id_across_kinds_is_not_a_duplicate() {
        let node = shop_node(10, "wholesale");
        let mut way = shop_node(10, "wholesale");
        way.kind = ElementKind::Way;

        assert_eq!(filter().filter_elements(&[node, way]).len(), 2);
    }

    #[test]
    fn duplicate_skipping_applies_before_relevance() {
        // An irrelevant first occurrence still claims the identity.
        let first = named_node(11, "Irrelevant");
        let second = shop_node(11, "wholesale");

        assert!(filter().filter_elements(&[first, second]).is_empty());
    }

    #[test]
    fn projects_expected_record_for_wholesale_node() {
        let mut element = named_node(42, "Depozit Piele SRL");
        element.tags.shop = Some("wholesale".to_string());
        element.lat = Some(44.43);
        element.lon = Some(26.10);

        let suppliers = filter().filter_elements(&[element]);
        assert_eq!(suppliers.len(), 1);

        let supplier = &suppliers[0];
        assert_eq!(supplier.id, 42);
        assert_eq!(supplier.kind, ElementKind::Node);
        assert_eq!(supplier.name, "Depozit Piele SRL");
        assert_eq!(supplier.shop, "wholesale");
        assert_eq!(supplier.address, "");
        assert_eq!(supplier.city, "București");
        assert_eq!(supplier.latitude, Some(44.43));
        assert_eq!(supplier.longitude, Some(26.10));
    }

    #[test]
    fn node_without_coordinates_yields_none() {
        let suppliers = filter().filter_elements(&[shop_node(5, "trade")]);
        assert_eq!(suppliers[0].latitude, None);
        assert_eq!(suppliers[0].longitude, None);
    }
}
