use crate::models::{Listing, ListingType};

const SECTION_NOT_SPECIFIED: &str = "Section: Not specified";

/// Render the seat a listing holds, never leaving blank interpolations
///
/// WANT listings have no concrete seat and always read as flexible. A
/// missing section becomes a placeholder, unless the zone is known and
/// nothing else is, in which case the zone stands in for the section.
pub fn format_seat_label(listing: &Listing) -> String {
    if listing.listing_type == Some(ListingType::Want) {
        return "Flexible on exact seat".to_string();
    }

    let mut parts = Vec::with_capacity(3);

    let section = listing.section();
    if section.is_empty() {
        parts.push(SECTION_NOT_SPECIFIED.to_string());
    } else {
        parts.push(format!("Section {}", section));
    }

    let row = listing.row();
    if !row.is_empty() {
        parts.push(format!("Row {}", row));
    }

    let seat = listing.seat();
    if !seat.is_empty() {
        parts.push(format!("Seat {}", seat));
    }

    let zone = listing.zone();
    if parts.len() == 1 && parts[0] == SECTION_NOT_SPECIFIED && !zone.is_empty() {
        return format!("{} (section not specified)", zone);
    }

    parts.join(", ")
}

/// Render what a listing asks for in exchange
pub fn format_request_label(listing: &Listing) -> String {
    let zones: Vec<&str> = non_blank(&listing.want_zones).collect();
    let sections: Vec<String> = non_blank(&listing.want_sections)
        .map(|s| format!("Sec {}", s))
        .collect();

    if zones.is_empty() && sections.is_empty() {
        return if listing.listing_type == Some(ListingType::Have) {
            "Not requesting a swap".to_string()
        } else {
            "Flexible on location".to_string()
        };
    }

    let mut parts = Vec::with_capacity(2);
    if !zones.is_empty() {
        parts.push(zones.join(", "));
    }
    if !sections.is_empty() {
        parts.push(sections.join(", "));
    }

    parts.join(" · ")
}

fn non_blank(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn listing() -> Listing {
        Listing::new("l1", NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn test_want_listing_is_flexible_on_seat() {
        let mut l = listing();
        l.listing_type = Some(ListingType::Want);
        l.have_section = "101".to_string();
        l.have_row = "A".to_string();
        l.have_seat = "3".to_string();
        assert_eq!(format_seat_label(&l), "Flexible on exact seat");
    }

    #[test]
    fn test_full_seat_label() {
        let mut l = listing();
        l.have_section = " 101 ".to_string();
        l.have_row = "A".to_string();
        l.have_seat = "3".to_string();
        assert_eq!(format_seat_label(&l), "Section 101, Row A, Seat 3");
    }

    #[test]
    fn test_missing_section_placeholder() {
        let mut l = listing();
        l.have_row = "A".to_string();
        l.have_zone = "Lower Bowl".to_string();
        assert_eq!(format_seat_label(&l), "Section: Not specified, Row A");
    }

    #[test]
    fn test_zone_replaces_lone_placeholder() {
        let mut l = listing();
        l.have_zone = "Lower Bowl".to_string();
        assert_eq!(format_seat_label(&l), "Lower Bowl (section not specified)");

        l.have_zone = "   ".to_string();
        assert_eq!(format_seat_label(&l), "Section: Not specified");
    }

    #[test]
    fn test_whitespace_fields_never_leak() {
        let mut l = listing();
        l.have_section = " ".to_string();
        l.have_row = "\t".to_string();
        l.have_seat = "  ".to_string();
        let label = format_seat_label(&l);
        assert!(!label.contains("Section , Row"));
        assert!(!label.contains("Row ,"));
    }

    #[test]
    fn test_request_label_variants() {
        let mut l = listing();
        l.listing_type = Some(ListingType::Have);
        assert_eq!(format_request_label(&l), "Not requesting a swap");

        l.listing_type = None;
        assert_eq!(format_request_label(&l), "Flexible on location");

        l.want_zones = vec!["Lower Bowl".to_string(), "Club".to_string()];
        assert_eq!(format_request_label(&l), "Lower Bowl, Club");

        l.want_sections = vec!["101".to_string(), "102".to_string()];
        assert_eq!(format_request_label(&l), "Lower Bowl, Club · Sec 101, Sec 102");

        l.want_zones.clear();
        assert_eq!(format_request_label(&l), "Sec 101, Sec 102");
    }
}
