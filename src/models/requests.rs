use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::filters::{FilterParseError, SeatsNeeded};
use crate::models::domain::Listing;

/// Request to find matches for every listing a user owns
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    /// Full listing set; the user's own listings are picked out by `user`
    #[serde(default)]
    pub listings: Vec<Listing>,
    /// Candidate pool. When empty, `listings` doubles as the pool.
    #[serde(default)]
    pub pool: Vec<Listing>,
    /// Falls back to the configured default when absent
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to summarize listings for card rendering
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[validate(length(min = 1))]
    pub listings: Vec<Listing>,
}

/// Request to filter listings by tab and seat count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default = "default_tab")]
    pub tab: String,
    #[serde(default = "default_seats_needed", alias = "seats_needed", rename = "seatsNeeded")]
    pub seats_needed: SeatsNeededParam,
}

/// `seatsNeeded` as sent by clients: `2`, `"2"` or `"any"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeatsNeededParam {
    Num(u32),
    Text(String),
}

impl SeatsNeededParam {
    pub fn parse(&self) -> Result<SeatsNeeded, FilterParseError> {
        match self {
            SeatsNeededParam::Num(0) => Err(FilterParseError::InvalidSeatCount("0".to_string())),
            SeatsNeededParam::Num(n) => Ok(SeatsNeeded::Exactly(*n)),
            SeatsNeededParam::Text(s) => s.parse(),
        }
    }
}

fn default_tab() -> String {
    "all".to_string()
}

fn default_seats_needed() -> SeatsNeededParam {
    SeatsNeededParam::Text("any".to_string())
}

/// Request to render a viewer/other match card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCardRequest {
    pub viewer: Listing,
    pub other: Listing,
    #[serde(default)]
    pub score: i64,
}
