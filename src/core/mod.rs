// Core engine exports
pub mod badges;
pub mod cards;
pub mod classifier;
pub mod filters;
pub mod intent;
pub mod labels;
pub mod matcher;
pub mod transaction;

pub use badges::{badges, is_flexible};
pub use cards::{match_card, summarize};
pub use classifier::classify;
pub use filters::{filter_by_seat_count, filter_by_tab, FilterParseError, SeatsNeeded, Tab};
pub use intent::intent;
pub use labels::{format_request_label, format_seat_label};
pub use matcher::{find_matches, find_matches_for_owner, MatchResult};
pub use transaction::{cta, header, helper_text, score_label, transaction_type};
