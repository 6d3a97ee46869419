//! Search filters accepted by the home listing query.

use serde::{Deserialize, Serialize};

use crate::domain::entities::home::PropertyType;

/// Inclusive price bounds; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound (price >= gte)
    pub gte: Option<f64>,

    /// Upper bound (price <= lte)
    pub lte: Option<f64>,
}

/// Optional, AND-combined filters for listing homes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeFilters {
    /// Exact city match
    pub city: Option<String>,

    /// Price range; present only when at least one bound was given
    pub price: Option<PriceRange>,

    /// Property category
    pub property_type: Option<PropertyType>,
}

impl HomeFilters {
    /// Builds filters from raw query inputs. The price range is materialized
    /// only when at least one bound is present.
    pub fn new(
        city: Option<String>,
        min_price: Option<f64>,
        max_price: Option<f64>,
        property_type: Option<PropertyType>,
    ) -> Self {
        let price = if min_price.is_some() || max_price.is_some() {
            Some(PriceRange {
                gte: min_price,
                lte: max_price,
            })
        } else {
            None
        };

        Self {
            city,
            price,
            property_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_and_min_price_build_partial_range() {
        let filters = HomeFilters::new(Some("Toronto".to_string()), Some(1_500_000.0), None, None);

        assert_eq!(filters.city.as_deref(), Some("Toronto"));
        let price = filters.price.expect("price range should be present");
        assert_eq!(price.gte, Some(1_500_000.0));
        assert_eq!(price.lte, None);
        assert_eq!(filters.property_type, None);
    }

    #[test]
    fn test_no_bounds_means_no_price_filter() {
        let filters = HomeFilters::new(Some("Ottawa".to_string()), None, None, None);
        assert!(filters.price.is_none());
    }

    #[test]
    fn test_both_bounds_are_kept() {
        let filters = HomeFilters::new(None, Some(500_000.0), Some(900_000.0), Some(PropertyType::Condo));

        let price = filters.price.unwrap();
        assert_eq!(price.gte, Some(500_000.0));
        assert_eq!(price.lte, Some(900_000.0));
        assert_eq!(filters.property_type, Some(PropertyType::Condo));
    }
}
