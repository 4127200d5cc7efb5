use crate::core::classifier::classify;
use crate::models::{Intent, Listing};

/// Intent between two listings, from the viewer's point of view
///
/// Rules are checked in order and the first match wins. The mutual swap
/// rule must come before the one-sided rules since their preconditions
/// overlap. When nothing pairs up, the viewer's own listing decides.
pub fn intent(viewer: &Listing, other: &Listing) -> Intent {
    let me = classify(viewer);
    let them = classify(other);

    if me.has_tickets && me.has_wants && them.has_tickets && them.has_wants {
        return Intent::Swap;
    }

    if me.has_tickets && them.has_wants && !me.has_wants {
        return Intent::ForSale;
    }

    if me.has_wants && !me.has_tickets && them.has_tickets && !them.has_wants {
        return Intent::LookingFor;
    }

    match (me.has_tickets, me.has_wants) {
        (true, true) => Intent::Swap,
        (true, false) => Intent::ForSale,
        _ => Intent::LookingFor,
    }
}
