use crate::core::classifier::classify;
use crate::models::{Badges, Listing, PrimaryBadge, SecondaryBadge};

/// Primary and secondary UI badges for a listing
pub fn badges(listing: &Listing) -> Badges {
    let facts = classify(listing);

    let primary = match (facts.has_tickets, facts.has_wants) {
        (true, true) => PrimaryBadge::Swap,
        (true, false) => PrimaryBadge::ForSale,
        _ => PrimaryBadge::LookingFor,
    };

    let secondary = if is_flexible(listing) {
        Some(SecondaryBadge::Flexible)
    } else {
        None
    };

    Badges { primary, secondary }
}

/// Explicit flag, or any wanted zone mentioning "any" (e.g. "Any zone")
#[inline]
pub fn is_flexible(listing: &Listing) -> bool {
    listing.flexible()
        || listing
            .want_zones
            .iter()
            .any(|zone| zone.to_lowercase().contains("any"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingType;
    use chrono::NaiveDate;

    fn listing() -> Listing {
        Listing::new("l1", NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn test_empty_listing_is_looking_for() {
        let b = badges(&listing());
        assert_eq!(b.primary, PrimaryBadge::LookingFor);
        assert_eq!(b.secondary, None);
    }

    #[test]
    fn test_primary_badges() {
        let mut l = listing();
        l.listing_type = Some(ListingType::Have);
        assert_eq!(badges(&l).primary, PrimaryBadge::ForSale);

        l.want_zones = vec!["Lower Bowl".to_string()];
        assert_eq!(badges(&l).primary, PrimaryBadge::Swap);

        let mut w = listing();
        w.listing_type = Some(ListingType::Want);
        assert_eq!(badges(&w).primary, PrimaryBadge::LookingFor);
    }

    #[test]
    fn test_flexible_from_flag() {
        let mut l = listing();
        l.listing_type = Some(ListingType::Have);
        l.want_sections = vec!["110".to_string()];
        l.flexible = Some(true);
        assert_eq!(badges(&l).secondary, Some(SecondaryBadge::Flexible));
    }

    #[test]
    fn test_flexible_from_any_zone_case_insensitive() {
        let mut l = listing();
        l.want_zones = vec!["Club".to_string(), "ANY Level".to_string()];
        assert_eq!(badges(&l).secondary, Some(SecondaryBadge::Flexible));

        l.want_zones = vec!["Club".to_string()];
        l.flexible = Some(false);
        assert_eq!(badges(&l).secondary, None);
    }
}
