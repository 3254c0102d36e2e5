use serde::{Deserialize, Serialize};

/// Owner of a listing, shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    pub picture: String,
}

/// A rentable property record.
///
/// Loaded once from the bundled catalog and looked up by `id` equality.
/// `rating` is a string digit `"0"`..`"5"`, kept as-is from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub cover: String,
    pub pictures: Vec<String>,
    pub description: String,
    pub host: Host,
    pub rating: String,
    pub location: String,
    pub equipments: Vec<String>,
    pub tags: Vec<String>,
}

impl Listing {
    /// Rating as a number of filled stars, clamped to 0..=5.
    pub fn rating_value(&self) -> u8 {
        self.rating.parse::<u8>().unwrap_or(0).min(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_with_rating(rating: &str) -> Listing {
        Listing {
            id: "1".to_string(),
            title: String::new(),
            cover: String::new(),
            pictures: vec![],
            description: String::new(),
            host: Host {
                name: String::new(),
                picture: String::new(),
            },
            rating: rating.to_string(),
            location: String::new(),
            equipments: vec![],
            tags: vec![],
        }
    }

    #[test]
    fn test_rating_value() {
        assert_eq!(listing_with_rating("4").rating_value(), 4);
        assert_eq!(listing_with_rating("0").rating_value(), 0);
    }

    #[test]
    fn test_rating_value_out_of_range() {
        assert_eq!(listing_with_rating("9").rating_value(), 5);
        assert_eq!(listing_with_rating("not-a-digit").rating_value(), 0);
    }
}
