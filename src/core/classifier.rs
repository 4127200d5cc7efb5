use crate::models::{Listing, ListingFacts, ListingType};

/// Derive the "has tickets" / "has wants" facts for a listing
///
/// This is the only place these facts are computed. Badges, intent,
/// transaction type and the matcher all go through here.
///
/// * `has_tickets` - tagged HAVE, or section, row and seat all present
/// * `has_wants` - tagged WANT, or at least one want list is non-empty
#[inline]
pub fn classify(listing: &Listing) -> ListingFacts {
    let has_tickets = listing.listing_type == Some(ListingType::Have)
        || (!listing.section().is_empty()
            && !listing.row().is_empty()
            && !listing.seat().is_empty());

    let has_wants = listing.listing_type == Some(ListingType::Want)
        || !listing.want_zones.is_empty()
        || !listing.want_sections.is_empty();

    ListingFacts {
        has_tickets,
        has_wants,
    }
}
