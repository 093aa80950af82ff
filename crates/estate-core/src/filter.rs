//! Multi-criteria listing filter.
//!
//! Every criterion is optional and all set criteria combine with logical AND.
//! Contradictory bounds (e.g. `min_price > max_price`) are not rejected; they
//! simply match nothing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::listing::{AdKind, Feature, Listing, PropertyKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_rooms: Option<f64>,
    pub max_rooms: Option<f64>,
    pub max_size: Option<i64>,
    pub ad_kind: Option<AdKind>,
    pub property_kind: Option<PropertyKind>,
    #[serde(default)]
    pub required_features: BTreeSet<Feature>,
}

impl FilterCriteria {
    /// Returns `true` when no criterion is set.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Returns `true` if `listing` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.min_price.is_none_or(|min| listing.price >= min)
            && self.max_price.is_none_or(|max| listing.price <= max)
            && self.min_rooms.is_none_or(|min| listing.rooms >= min)
            && self.max_rooms.is_none_or(|max| listing.rooms <= max)
            && self.max_size.is_none_or(|max| listing.size <= max)
            && self.ad_kind.is_none_or(|kind| listing.ad_kind == kind)
            && self
                .property_kind
                .is_none_or(|kind| listing.property_kind == kind)
            && self
                .required_features
                .iter()
                .all(|feature| listing.features.has(*feature))
    }
}

/// Returns the listings that satisfy `criteria`, in their original order.
#[must_use]
pub fn apply(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::geo::Coordinate;
    use crate::listing::Features;

    fn listing(id: i64, price: i64) -> Listing {
        Listing {
            id,
            ad_kind: AdKind::Sale,
            property_kind: PropertyKind::Apartment,
            location: Coordinate::new(31.25, 34.79),
            address: format!("{id} Rager Blvd"),
            rooms: 3.0,
            size: 80,
            price,
            floor: Some(2),
            features: Features::default(),
            publisher_name: "Dana".to_string(),
            contact_phone: "050-0000000".to_string(),
            description: None,
            publish_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            score: None,
            stars: None,
        }
    }

    fn ids(listings: &[Listing]) -> Vec<i64> {
        listings.iter().map(|l| l.id).collect()
    }

    #[test]
    fn price_range_keeps_only_listings_inside_bounds() {
        let listings = vec![listing(1, 500_000), listing(2, 800_000), listing(3, 1_200_000)];
        let criteria = FilterCriteria {
            min_price: Some(600_000),
            max_price: Some(1_000_000),
            ..FilterCriteria::default()
        };
        let filtered = apply(&listings, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].price, 800_000);
    }

    #[test]
    fn default_criteria_is_identity() {
        let listings = vec![listing(3, 10), listing(1, 20), listing(2, 30)];
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());
        assert_eq!(apply(&listings, &criteria), listings);
    }

    #[test]
    fn bounds_are_inclusive() {
        let listings = vec![listing(1, 100), listing(2, 200)];
        let criteria = FilterCriteria {
            min_price: Some(100),
            max_price: Some(200),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&listings, &criteria)), vec![1, 2]);
    }

    #[test]
    fn contradictory_bounds_match_nothing() {
        let listings = vec![listing(1, 500), listing(2, 700)];
        let criteria = FilterCriteria {
            min_price: Some(900),
            max_price: Some(100),
            ..FilterCriteria::default()
        };
        assert!(apply(&listings, &criteria).is_empty());
    }

    #[test]
    fn rooms_support_half_rooms() {
        let mut a = listing(1, 1);
        a.rooms = 2.5;
        let mut b = listing(2, 1);
        b.rooms = 3.5;
        let mut c = listing(3, 1);
        c.rooms = 4.0;
        let criteria = FilterCriteria {
            min_rooms: Some(3.0),
            max_rooms: Some(3.5),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&[a, b, c], &criteria)), vec![2]);
    }

    #[test]
    fn max_size_and_kinds_combine_with_and() {
        let mut rent_studio = listing(1, 1);
        rent_studio.ad_kind = AdKind::Rent;
        rent_studio.property_kind = PropertyKind::Studio;
        rent_studio.size = 35;
        let mut rent_house = listing(2, 1);
        rent_house.ad_kind = AdKind::Rent;
        rent_house.property_kind = PropertyKind::House;
        rent_house.size = 35;
        let mut big_rent_studio = listing(3, 1);
        big_rent_studio.ad_kind = AdKind::Rent;
        big_rent_studio.property_kind = PropertyKind::Studio;
        big_rent_studio.size = 60;
        let sale_studio = {
            let mut l = listing(4, 1);
            l.property_kind = PropertyKind::Studio;
            l.size = 30;
            l
        };

        let criteria = FilterCriteria {
            max_size: Some(40),
            ad_kind: Some(AdKind::Rent),
            property_kind: Some(PropertyKind::Studio),
            ..FilterCriteria::default()
        };
        let listings = vec![rent_studio, rent_house, big_rent_studio, sale_studio];
        assert_eq!(ids(&apply(&listings, &criteria)), vec![1]);
    }

    #[test]
    fn every_required_feature_must_be_present() {
        let mut both = listing(1, 1);
        both.features = [Feature::Parking, Feature::Elevator].into_iter().collect();
        let mut parking_only = listing(2, 1);
        parking_only.features = [Feature::Parking].into_iter().collect();

        let criteria = FilterCriteria {
            required_features: [Feature::Parking, Feature::Elevator].into_iter().collect(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&[both, parking_only], &criteria)), vec![1]);
    }

    #[test]
    fn result_is_ordered_subset_and_idempotent() {
        let listings: Vec<Listing> = [900, 100, 500, 300, 700]
            .iter()
            .enumerate()
            .map(|(i, p)| listing(i64::try_from(i).unwrap(), *p))
            .collect();
        let criteria = FilterCriteria {
            max_price: Some(600),
            ..FilterCriteria::default()
        };
        let once = apply(&listings, &criteria);
        assert_eq!(ids(&once), vec![1, 2, 3]);
        assert_eq!(apply(&once, &criteria), once);
    }
}
