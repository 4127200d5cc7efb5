//! Seat Match - listing classification and matching engine for the seat swap marketplace
//!
//! The `core` module is a set of pure functions: given already-fetched listings it
//! classifies them, derives badges and labels, and ranks compatible counterparts.
//! `routes` exposes the same functions over a stateless HTTP API.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{badges, classify, find_matches, format_request_label, format_seat_label, intent, transaction_type};
pub use crate::models::{Listing, ListingFacts, ListingType, MatchScore, TransactionType};
