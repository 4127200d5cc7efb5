use crate::core::classifier::classify;
use crate::models::{Listing, TransactionType};

/// Score at or above which a match is labelled strong
pub const STRONG_MATCH_SCORE: i64 = 100;
/// Score at or above which a match is labelled good
pub const GOOD_MATCH_SCORE: i64 = 50;

/// Relationship between two listings, used to pick the card layout
///
/// `TransactionType::Giveaway` is never returned: listings carry no
/// free-transfer signal to derive it from.
pub fn transaction_type(viewer: &Listing, other: &Listing) -> TransactionType {
    let me = classify(viewer);
    let them = classify(other);

    if me.has_tickets && me.has_wants && them.has_tickets && them.has_wants {
        TransactionType::Swap
    } else if me.has_tickets && them.has_wants && !me.has_wants {
        TransactionType::Sell
    } else if me.has_wants && them.has_tickets && !them.has_wants {
        TransactionType::Buy
    } else {
        TransactionType::GenericAsymmetric
    }
}

/// Card header for a transaction type
pub fn header(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Swap => "Swap match",
        TransactionType::Sell => "Someone wants your seat",
        TransactionType::Buy => "You requested their seat",
        TransactionType::Giveaway => "Giveaway match",
        TransactionType::GenericAsymmetric => "Potential match",
    }
}

/// Call-to-action button copy
pub fn cta(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Swap => "Start swap chat",
        TransactionType::Sell => "Offer your seat",
        TransactionType::Buy => "Message seller",
        TransactionType::Giveaway => "Message giver",
        TransactionType::GenericAsymmetric => "Start conversation",
    }
}

pub fn helper_text(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Swap => {
            "Confirm both seats, the game, and how tickets will be transferred before exchanging."
        }
        TransactionType::Sell => {
            "This isn't a swap. You're responding to their request, so confirm pricing and transfer details in chat."
        }
        TransactionType::Buy => {
            "This is a request for their seat. Confirm pricing and transfer details with the seller."
        }
        TransactionType::Giveaway => "Confirm the transfer method and timing with the giver.",
        TransactionType::GenericAsymmetric => {
            "Review both listings and message them to confirm the details."
        }
    }
}

/// Human-readable bucket for a match score
pub fn score_label(score: i64) -> &'static str {
    if score >= STRONG_MATCH_SCORE {
        "Strong match"
    } else if score >= GOOD_MATCH_SCORE {
        "Good match"
    } else {
        "Low match"
    }
}
