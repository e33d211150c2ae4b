//! Client-side filtering over lists that are already in memory.
//!
//! Nothing here reorders its input: every filter is a single stable pass.

use crate::models::listing::{Category, Listing};

/// Candidates whose lower-cased form starts with the lower-cased `query`.
/// An empty query suggests nothing.
pub fn filter_by_prefix<S: AsRef<str>>(candidates: &[S], query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
        .map(|candidate| candidate.to_string())
        .collect()
}

/// Lower-cased, whitespace-separated search terms with empties dropped.
pub fn search_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Active predicates of the listings page. All present predicates must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub category: Option<Category>,
    pub city_contains: Option<String>,
    pub query: Option<String>,
}

impl ListingFilter {
    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn city_contains(mut self, city: impl Into<String>) -> Self {
        self.city_contains = Some(city.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.city_needle().is_none()
            && self.terms().is_empty()
    }

    fn city_needle(&self) -> Option<String> {
        self.city_contains
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase)
    }

    fn terms(&self) -> Vec<String> {
        self.query.as_deref().map(search_terms).unwrap_or_default()
    }

    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        let city = self.city_needle();
        let terms = self.terms();

        listings
            .iter()
            .filter(|listing| self.category.map_or(true, |c| listing.category() == c))
            .filter(|listing| {
                city.as_deref()
                    .map_or(true, |needle| listing.city().to_lowercase().contains(needle))
            })
            .filter(|listing| {
                if terms.is_empty() {
                    return true;
                }
                let haystack = listing.search_haystack();
                terms.iter().all(|term| haystack.contains(term.as_str()))
            })
            .cloned()
            .collect()
    }
}

/// Free-function form of [`ListingFilter::apply`].
pub fn filter_listings(
    listings: &[Listing],
    category: Option<Category>,
    city_contains: Option<&str>,
    query: Option<&str>,
) -> Vec<Listing> {
    ListingFilter {
        category,
        city_contains: city_contains.map(str::to_string),
        query: query.map(str::to_string),
    }
    .apply(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{ListingStatus, PickupLocation};
    use chrono::{TimeZone, Utc};

    fn listing(id: &str, name: &str, category: Category, city: &str, state: &str) -> Listing {
        Listing {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            quantity: 1.0,
            unit: "kg".to_string(),
            category_name: category.as_str().to_string(),
            expiry_date: Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap(),
            pickup_time: None,
            pickup_location: Some(PickupLocation {
                city: city.to_string(),
                state: state.to_string(),
                ..Default::default()
            }),
            allergens: vec![],
            dietary: vec![],
            pickup_instructions: None,
            status: ListingStatus::Available,
            donor: None,
            created_at: None,
        }
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing("1", "Rice", Category::Grains, "Pune", "Maharashtra"),
            listing("2", "Milk", Category::Dairy, "Pune", "Maharashtra"),
        ]
    }

    fn names(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn prefix_filter_is_case_insensitive() {
        let states = ["Goa", "Gujarat", "Haryana", "gangtok"];
        assert_eq!(filter_by_prefix(&states, "g"), vec!["Goa", "Gujarat", "gangtok"]);
        assert_eq!(filter_by_prefix(&states, "GU"), vec!["Gujarat"]);
        assert!(filter_by_prefix(&states, "x").is_empty());
    }

    #[test]
    fn empty_prefix_suggests_nothing() {
        assert!(filter_by_prefix(&["Goa"], "").is_empty());
    }

    #[test]
    fn prefix_filter_matches_exact_definition() {
        let candidates = crate::lookup::STATES;
        for query in ["a", "Ma", "west", "tamil n", "zz"] {
            let expected: Vec<String> = candidates
                .iter()
                .filter(|c| c.to_lowercase().starts_with(&query.to_lowercase()))
                .map(|c| c.to_string())
                .collect();
            assert_eq!(filter_by_prefix(candidates, query), expected, "query {query:?}");
        }
    }

    #[test]
    fn category_filter_is_exact() {
        let result = filter_listings(&sample(), Some(Category::Grains), None, None);
        assert_eq!(names(&result), vec!["Rice"]);
    }

    #[test]
    fn query_requires_every_term() {
        let result = filter_listings(&sample(), None, None, Some("milk pune"));
        assert_eq!(names(&result), vec!["Milk"]);
        let result = filter_listings(&sample(), None, None, Some("milk rice"));
        assert!(result.is_empty());
    }

    #[test]
    fn city_substring_is_case_insensitive() {
        let result = filter_listings(&sample(), None, Some("pun"), None);
        assert_eq!(names(&result), vec!["Rice", "Milk"]);
        let result = filter_listings(&sample(), None, Some("MUMBAI"), None);
        assert!(result.is_empty());
    }

    #[test]
    fn term_order_does_not_matter() {
        let listings = sample();
        for (a, b) in [("pune milk", "milk pune"), ("grains maha", "maha grains")] {
            assert_eq!(
                filter_listings(&listings, None, None, Some(a)),
                filter_listings(&listings, None, None, Some(b))
            );
        }
    }

    #[test]
    fn blank_predicates_match_everything() {
        let listings = sample();
        assert_eq!(filter_listings(&listings, None, Some(""), Some("   ")), listings);
        assert!(ListingFilter::default().city_contains("").query("  ").is_empty());
        assert!(filter_listings(&[], None, None, Some("rice")).is_empty());
    }

    #[test]
    fn categories_partition_the_input() {
        let listings = vec![
            listing("1", "Rice", Category::Grains, "Pune", "Maharashtra"),
            listing("2", "Milk", Category::Dairy, "Pune", "Maharashtra"),
            listing("3", "Apples", Category::Fruits, "Shimla", "Himachal Pradesh"),
            listing("4", "Curry", Category::Cooked, "Chennai", "Tamil Nadu"),
            listing("5", "Wheat", Category::Grains, "Patna", "Bihar"),
        ];

        let mut union: Vec<Listing> = Category::ALL
            .into_iter()
            .flat_map(|c| filter_listings(&listings, Some(c), None, None))
            .collect();
        union.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(union, listings);
        assert_eq!(filter_listings(&listings, None, None, None), listings);
    }

    #[test]
    fn filter_preserves_input_order() {
        let listings = vec![
            listing("9", "Wheat", Category::Grains, "Patna", "Bihar"),
            listing("1", "Rice", Category::Grains, "Pune", "Maharashtra"),
        ];
        let result = filter_listings(&listings, Some(Category::Grains), None, None);
        assert_eq!(names(&result), vec!["Wheat", "Rice"]);
    }
}
