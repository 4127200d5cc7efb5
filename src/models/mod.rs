// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Badges, Intent, Listing, ListingFacts, ListingStatus, ListingSummary, ListingType, MatchCard,
    MatchScore, OwnerMatch, PrimaryBadge, SecondaryBadge, TransactionType,
};
pub use requests::{FilterRequest, FindMatchesRequest, MatchCardRequest, SeatsNeededParam, SummarizeRequest};
pub use responses::{ErrorResponse, FilterResponse, FindMatchesResponse, HealthResponse, SummarizeResponse};
