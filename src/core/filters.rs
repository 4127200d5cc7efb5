use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::badges::badges;
use crate::models::{Listing, PrimaryBadge};

/// Errors that can occur parsing filter parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("Unknown tab: {0} (expected all, for-sale, looking-for or swap)")]
    UnknownTab(String),

    #[error("Invalid seat count: {0} (expected \"any\" or a positive integer)")]
    InvalidSeatCount(String),
}

/// Listing tab on the browse page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    ForSale,
    LookingFor,
    Swap,
}

impl Tab {
    /// Badge a listing must carry to show up under this tab
    pub fn badge(&self) -> Option<PrimaryBadge> {
        match self {
            Tab::All => None,
            Tab::ForSale => Some(PrimaryBadge::ForSale),
            Tab::LookingFor => Some(PrimaryBadge::LookingFor),
            Tab::Swap => Some(PrimaryBadge::Swap),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::ForSale => "for-sale",
            Tab::LookingFor => "looking-for",
            Tab::Swap => "swap",
        }
    }
}

impl FromStr for Tab {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "for-sale" => Ok(Tab::ForSale),
            "looking-for" => Ok(Tab::LookingFor),
            "swap" => Ok(Tab::Swap),
            _ => Err(FilterParseError::UnknownTab(s.to_string())),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many seats the browsing user needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatsNeeded {
    #[default]
    Any,
    Exactly(u32),
}

impl FromStr for SeatsNeeded {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("any") {
            return Ok(SeatsNeeded::Any);
        }
        match trimmed.parse::<u32>() {
            Ok(n) if n > 0 => Ok(SeatsNeeded::Exactly(n)),
            _ => Err(FilterParseError::InvalidSeatCount(s.to_string())),
        }
    }
}

/// Keep listings whose primary badge belongs to `tab`
pub fn filter_by_tab(listings: &[Listing], tab: Tab) -> Vec<Listing> {
    match tab.badge() {
        None => listings.to_vec(),
        Some(badge) => listings
            .iter()
            .filter(|l| badges(l).primary == badge)
            .cloned()
            .collect(),
    }
}

/// Keep listings that can cover `seats_needed`
///
/// Requests must ask for exactly that many seats; offers must have at
/// least that many. An unknown seat count always passes.
pub fn filter_by_seat_count(listings: &[Listing], seats_needed: SeatsNeeded) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| matches_seat_count(l, seats_needed))
        .cloned()
        .collect()
}

#[inline]
pub fn matches_seat_count(listing: &Listing, seats_needed: SeatsNeeded) -> bool {
    let needed = match seats_needed {
        SeatsNeeded::Any => return true,
        SeatsNeeded::Exactly(n) => n,
    };

    match (badges(listing).primary, listing.seat_count) {
        (_, None) => true,
        (PrimaryBadge::LookingFor, Some(count)) => count == needed,
        (_, Some(count)) => count >= needed,
    }
}
