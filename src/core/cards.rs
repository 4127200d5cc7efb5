use crate::core::{
    badges::badges,
    classifier::classify,
    intent::intent,
    labels::{format_request_label, format_seat_label},
    transaction::{cta, header, helper_text, score_label, transaction_type},
};
use crate::models::{Listing, ListingSummary, MatchCard};

/// Card data for a single listing
pub fn summarize(listing: &Listing) -> ListingSummary {
    ListingSummary {
        listing_id: listing.id.clone(),
        facts: classify(listing),
        badges: badges(listing),
        seat_label: format_seat_label(listing),
        request_label: format_request_label(listing),
    }
}

/// Card data for `other` as seen from `viewer`, with its match score
pub fn match_card(viewer: &Listing, other: &Listing, score: i64) -> MatchCard {
    let kind = transaction_type(viewer, other);

    MatchCard {
        transaction_type: kind,
        intent: intent(viewer, other),
        header: header(kind).to_string(),
        cta: cta(kind).to_string(),
        helper_text: helper_text(kind).to_string(),
        score,
        score_label: score_label(score).to_string(),
        seat_label: format_seat_label(other),
        request_label: format_request_label(other),
        badges: badges(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Intent, ListingType, PrimaryBadge, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_sell_card() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let mut seller = Listing::new("seller", day);
        seller.listing_type = Some(ListingType::Have);
        seller.have_section = "101".to_string();
        let mut buyer = Listing::new("buyer", day);
        buyer.listing_type = Some(ListingType::Want);
        buyer.want_zones = vec!["Lower Bowl".to_string()];

        let card = match_card(&seller, &buyer, 125);

        assert_eq!(card.transaction_type, TransactionType::Sell);
        assert_eq!(card.intent, Intent::ForSale);
        assert_eq!(card.header, "Someone wants your seat");
        assert_eq!(card.cta, "Offer your seat");
        assert_eq!(card.score_label, "Strong match");
        assert_eq!(card.seat_label, "Flexible on exact seat");
        assert_eq!(card.request_label, "Lower Bowl");
        assert_eq!(card.badges.primary, PrimaryBadge::LookingFor);
    }

    #[test]
    fn test_summary_of_empty_listing() {
        let l = Listing::new("x", NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        let summary = summarize(&l);

        assert_eq!(summary.badges.primary, PrimaryBadge::LookingFor);
        assert_eq!(summary.seat_label, "Section: Not specified");
        assert_eq!(summary.request_label, "Flexible on location");
    }
}
