//! The fixed category table.
//!
//! Each category maps a stable key to a human label and one or more
//! OpenStreetMap tag predicates used to build the Overpass query. The table
//! is process-wide immutable state; categories are not user-extensible.

use serde::Serialize;

/// One `key=value` OSM tag filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPredicate {
    pub key: &'static str,
    pub value: &'static str,
}

/// A searchable point-of-interest category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip)]
    pub predicates: &'static [TagPredicate],
}

const fn tag(key: &'static str, value: &'static str) -> TagPredicate {
    TagPredicate { key, value }
}

pub static CATEGORIES: &[Category] = &[
    Category {
        key: "cafe",
        label: "Cafés",
        predicates: &[tag("amenity", "cafe")],
    },
    Category {
        key: "restaurant",
        label: "Restaurants",
        predicates: &[tag("amenity", "restaurant")],
    },
    Category {
        key: "bar",
        label: "Bars & Pubs",
        predicates: &[tag("amenity", "bar")],
    },
    Category {
        key: "barber",
        label: "Barbers & Hairdressers",
        predicates: &[tag("shop", "hairdresser")],
    },
    Category {
        key: "coffeeshop",
        label: "Coffee Shops",
        predicates: &[tag("amenity", "cafe")],
    },
    Category {
        key: "cinema",
        label: "Cinemas & Theatres",
        predicates: &[tag("amenity", "cinema")],
    },
    Category {
        key: "toilet",
        label: "Public Toilets",
        predicates: &[tag("amenity", "toilets")],
    },
    Category {
        key: "bakery",
        label: "Bakeries",
        predicates: &[tag("shop", "bakery")],
    },
    Category {
        key: "pharmacy",
        label: "Pharmacies",
        predicates: &[tag("amenity", "pharmacy")],
    },
    Category {
        key: "park",
        label: "Parks & Gardens",
        predicates: &[tag("leisure", "park")],
    },
];

/// Looks up a category by its stable key.
#[must_use]
pub fn find_category(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_category_returns_known_keys() {
        let cafe = find_category("cafe").expect("cafe should exist");
        assert_eq!(cafe.label, "Cafés");
        assert_eq!(cafe.predicates, &[tag("amenity", "cafe")]);

        let barber = find_category("barber").expect("barber should exist");
        assert_eq!(barber.predicates, &[tag("shop", "hairdresser")]);
    }

    #[test]
    fn find_category_rejects_unknown_keys() {
        assert!(find_category("spaceport").is_none());
        assert!(find_category("").is_none());
    }

    #[test]
    fn category_keys_are_unique() {
        let mut keys: Vec<_> = CATEGORIES.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CATEGORIES.len());
    }

    #[test]
    fn category_serializes_without_predicates() {
        let json = serde_json::to_value(find_category("park").expect("park")).expect("serialize");
        assert_eq!(json["key"], "park");
        assert_eq!(json["label"], "Parks & Gardens");
        assert!(json.get("predicates").is_none());
    }
}
