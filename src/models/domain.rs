use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Explicit listing tag. Authoritative when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingType {
    Have,
    Want,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingStatus {
    #[default]
    Active,
    Inactive,
}

/// Marketplace listing as fetched by the caller
///
/// String fields may be empty or whitespace-only; both mean "unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    #[serde(default)]
    pub listing_type: Option<ListingType>,
    #[serde(default)]
    pub have_section: String,
    #[serde(default)]
    pub have_row: String,
    #[serde(default)]
    pub have_seat: String,
    #[serde(default)]
    pub have_zone: String,
    #[serde(default)]
    pub want_zones: Vec<String>,
    #[serde(default)]
    pub want_sections: Vec<String>,
    #[serde(default)]
    pub flexible: Option<bool>,
    #[serde(default)]
    pub seat_count: Option<u32>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    pub game_date: NaiveDate,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub user: String,
}

impl Listing {
    /// Empty listing for the given id and game date; every other field unknown
    pub fn new(id: impl Into<String>, game_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            listing_type: None,
            have_section: String::new(),
            have_row: String::new(),
            have_seat: String::new(),
            have_zone: String::new(),
            want_zones: Vec::new(),
            want_sections: Vec::new(),
            flexible: None,
            seat_count: None,
            price_cents: None,
            game_date,
            status: ListingStatus::Active,
            user: String::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }

    /// Helper to get flexible as a bool, defaulting to false
    pub fn flexible(&self) -> bool {
        self.flexible.unwrap_or(false)
    }

    pub fn section(&self) -> &str {
        self.have_section.trim()
    }

    pub fn row(&self) -> &str {
        self.have_row.trim()
    }

    pub fn seat(&self) -> &str {
        self.have_seat.trim()
    }

    pub fn zone(&self) -> &str {
        self.have_zone.trim()
    }
}

/// Facts derived from a listing by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFacts {
    pub has_tickets: bool,
    pub has_wants: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryBadge {
    #[serde(rename = "Swap")]
    Swap,
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "Looking For")]
    LookingFor,
}

impl PrimaryBadge {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryBadge::Swap => "Swap",
            PrimaryBadge::ForSale => "For Sale",
            PrimaryBadge::LookingFor => "Looking For",
        }
    }
}

impl fmt::Display for PrimaryBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecondaryBadge {
    Flexible,
}

impl SecondaryBadge {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecondaryBadge::Flexible => "Flexible",
        }
    }
}

impl fmt::Display for SecondaryBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badges {
    pub primary: PrimaryBadge,
    pub secondary: Option<SecondaryBadge>,
}

/// Viewer-relative intent between two listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    Swap,
    ForSale,
    LookingFor,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Swap => "swap",
            Intent::ForSale => "forSale",
            Intent::LookingFor => "lookingFor",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symmetric relationship between two listings, drives card layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Swap,
    Sell,
    Buy,
    /// No free-transfer signal exists on listings yet, so nothing resolves here.
    Giveaway,
    GenericAsymmetric,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Swap => "SWAP",
            TransactionType::Sell => "SELL",
            TransactionType::Buy => "BUY",
            TransactionType::Giveaway => "GIVEAWAY",
            TransactionType::GenericAsymmetric => "GENERIC_ASYMMETRIC",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub listing_id: String,
    pub score: i64,
    pub reason: String,
}

/// Match produced while aggregating over every listing a user owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerMatch {
    pub my_listing_id: String,
    pub listing_id: String,
    pub score: i64,
    pub reason: String,
}

/// Everything the UI needs to render a single listing card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    pub listing_id: String,
    pub facts: ListingFacts,
    pub badges: Badges,
    pub seat_label: String,
    pub request_label: String,
}

/// Presentation bundle for a viewer/other match card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCard {
    pub transaction_type: TransactionType,
    pub intent: Intent,
    pub header: String,
    pub cta: String,
    pub helper_text: String,
    pub score: i64,
    pub score_label: String,
    pub seat_label: String,
    pub request_label: String,
    pub badges: Badges,
}
