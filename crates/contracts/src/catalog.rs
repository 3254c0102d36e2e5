//! Bundled listing catalog.
//!
//! The dataset ships inside the binary and is decoded once on first access.
//! A listing that does not exist is a normal `None`, not an error.

use crate::listing::Listing;
use once_cell::sync::Lazy;

const RAW: &str = include_str!("../data/listings.json");

static CATALOG: Lazy<Result<Vec<Listing>, serde_json::Error>> =
    Lazy::new(|| serde_json::from_str(RAW));

/// All listings, in dataset order. Empty if the bundled data failed to decode.
pub fn listings() -> &'static [Listing] {
    match &*CATALOG {
        Ok(items) => items,
        Err(_) => &[],
    }
}

/// Forces the catalog decode and reports the outcome.
///
/// Used by the route loaders so a decode problem shows up as a prefetch
/// warning instead of an empty page with no trace.
pub fn load() -> Result<&'static [Listing], &'static serde_json::Error> {
    CATALOG.as_ref().map(|items| items.as_slice())
}

/// Looks up a listing by its identifier.
pub fn find(id: &str) -> Option<&'static Listing> {
    listings().iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_decodes() {
        let items = load().expect("bundled dataset must decode");
        assert!(items.len() >= 2);
    }

    #[test]
    fn test_find_returns_fields_verbatim() {
        let listing = find("1").expect("listing 1 exists");
        assert_eq!(listing.id, "1");
        assert!(!listing.title.is_empty());
        assert!(!listing.cover.is_empty());
        assert!(!listing.pictures.is_empty());
        assert!(!listing.host.name.is_empty());
        assert!(!listing.location.is_empty());
    }

    #[test]
    fn test_find_second_listing() {
        assert!(find("2").is_some());
    }

    #[test]
    fn test_find_unknown_id_is_none() {
        assert!(find("99").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_ratings_are_single_digits() {
        for listing in listings() {
            assert!(
                matches!(listing.rating.as_str(), "0" | "1" | "2" | "3" | "4" | "5"),
                "listing {} has rating {:?}",
                listing.id,
                listing.rating
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let items = listings();
        for (i, a) in items.iter().enumerate() {
            assert!(
                items[i + 1..].iter().all(|b| b.id != a.id),
                "duplicate id {}",
                a.id
            );
        }
    }
}
