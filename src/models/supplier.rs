//! Normalized supplier record.

use serde::Serialize;

use super::element::{Element, ElementKind};

/// City assumed when an element carries no `addr:city` tag.
const DEFAULT_CITY: &str = "București";

/// Placeholder for an unnamed location.
const MISSING_NAME: &str = "N/A";

/// A supplier record projected from a relevant element.
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Display name, `"N/A"` when the element is unnamed
    pub name: String,

    /// Street and house number, trimmed; empty when both are absent
    pub address: String,

    /// Tagged city, `"București"` when absent
    pub city: String,

    pub postcode: String,
    pub shop: String,
    pub craft: String,
    pub description: String,
    pub phone: String,
    pub website: String,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Supplier {
    /// Project a raw element into a supplier record.
    ///
    /// Absent tags degrade to defaults; this never fails.
    pub fn from_element(element: &Element) -> Self {
        let tags = &element.tags;
        let (latitude, longitude) = element.coordinates();

        let address = format!(
            "{} {}",
            tags.street.as_deref().unwrap_or(""),
            tags.housenumber.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();

        Self {
            id: element.id,
            kind: element.kind,
            name: tags
                .name
                .clone()
                .unwrap_or_else(|| MISSING_NAME.to_string()),
            address,
            city: tags
                .city
                .clone()
                .unwrap_or_else(|| DEFAULT_CITY.to_string()),
            postcode: tags.postcode.clone().unwrap_or_default(),
            shop: tags.shop.clone().unwrap_or_default(),
            craft: tags.craft.clone().unwrap_or_default(),
            description: tags.description.clone().unwrap_or_default(),
            phone: tags.phone.clone().unwrap_or_default(),
            website: tags.website.clone().unwrap_or_default(),
            latitude,
            longitude,
        }
    }

    /// "address, city" line for the console report.
    ///
    /// Empty when the record has no street address.
    pub fn location_line(&self) -> String {
        if self.address.is_empty() {
            String::new()
        } else {
            format!("{}, {}", self.address, self.city)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementTags;

    fn bare_element(kind: ElementKind, id: i64) -> Element {
        Element {
            kind,
            id,
            tags: ElementTags::default(),
            lat: None,
            lon: None,
            center: None,
        }
    }

    #[test]
    fn projects_full_node() {
        let mut element = bare_element(ElementKind::Node, 42);
        element.tags.name = Some("Depozit Piele SRL".to_string());
        element.tags.shop = Some("wholesale".to_string());
        element.lat = Some(44.43);
        element.lon = Some(26.10);

        let supplier = Supplier::from_element(&element);

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
    fn tagless_element_gets_defaults() {
        let supplier = Supplier::from_element(&bare_element(ElementKind::Node, 1));

        assert_eq!(supplier.name, "N/A");
        assert_eq!(supplier.address, "");
        assert_eq!(supplier.city, "București");
        assert_eq!(supplier.postcode, "");
        assert_eq!(supplier.latitude, None);
        assert_eq!(supplier.longitude, None);
    }

    #[test]
    fn address_is_trimmed_when_one_part_is_missing() {
        let mut element = bare_element(ElementKind::Node, 2);
        element.tags.housenumber = Some("12".to_string());
        assert_eq!(Supplier::from_element(&element).address, "12");

        let mut element = bare_element(ElementKind::Node, 3);
        element.tags.street = Some("Strada Păcii".to_string());
        assert_eq!(Supplier::from_element(&element).address, "Strada Păcii");
    }

    #[test]
    fn location_line_includes_city_only_with_address() {
        let mut element = bare_element(ElementKind::Node, 4);
        element.tags.street = Some("Calea Victoriei".to_string());
        element.tags.housenumber = Some("120".to_string());

        let supplier = Supplier::from_element(&element);
        assert_eq!(supplier.location_line(), "Calea Victoriei 120, București");

        let unaddressed = Supplier::from_element(&bare_element(ElementKind::Node, 5));
        assert_eq!(unaddressed.location_line(), "");
    }
}
