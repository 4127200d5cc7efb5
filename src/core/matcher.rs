use std::cmp::Ordering;

use crate::core::classifier::classify;
use crate::models::{Listing, ListingType, MatchScore, OwnerMatch};

/// Score every eligible pair starts from
pub const BASE_SCORE: i64 = 100;
/// Bonus when the wanted section lines up with the held section
pub const SECTION_BONUS: i64 = 50;
/// Bonus when the wanted zone lines up with the held zone
pub const ZONE_BONUS: i64 = 25;

const REASON_SEPARATOR: &str = " • ";

/// Role a listing plays in a pairing
///
/// An explicit tag decides. Untagged listings fall back to the classifier facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Have,
    Want,
    Neither,
}

impl Side {
    fn of(listing: &Listing) -> Self {
        match listing.listing_type {
            Some(ListingType::Have) => return Side::Have,
            Some(ListingType::Want) => return Side::Want,
            None => {}
        }

        let facts = classify(listing);
        if facts.has_tickets {
            Side::Have
        } else if facts.has_wants {
            Side::Want
        } else {
            Side::Neither
        }
    }
}

/// Result of aggregating matches over every listing a user owns
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<OwnerMatch>,
    pub total_candidates: usize,
}

/// Find listings in `pool` that can trade with `subject`, best first
///
/// # Pipeline Stages
/// 1. Exclude the subject itself, other game dates and inactive listings
/// 2. Check eligibility for the HAVE/WANT pairing
/// 3. Score and explain each eligible pair
/// 4. Stable sort by score, ties keep pool order
pub fn find_matches(subject: &Listing, pool: &[Listing]) -> Vec<MatchScore> {
    rank_candidates(subject, pool, |_| true)
}

/// Shared pipeline behind `find_matches`, with an extra candidate filter
fn rank_candidates(
    subject: &Listing,
    pool: &[Listing],
    include: impl Fn(&Listing) -> bool,
) -> Vec<MatchScore> {
    let subject_side = Side::of(subject);

    let scored: Vec<(usize, MatchScore)> = pool
        .iter()
        .enumerate()
        .filter(|(_, candidate)| include(*candidate) && is_comparable(subject, candidate))
        .filter_map(|(index, candidate)| {
            score_pair(subject, subject_side, candidate).map(|m| (index, m))
        })
        .collect();

    stable_by_score(scored, |m| m.score)
}

/// Find matches for every active listing in `owned` across `pool`
///
/// Candidates belonging to the same user as the subject listing are
/// skipped. Results are tagged with the subject listing id, ranked by
/// score and truncated to `limit`.
pub fn find_matches_for_owner(owned: &[Listing], pool: &[Listing], limit: usize) -> MatchResult {
    let mut collected = Vec::new();

    for subject in owned.iter().filter(|l| l.is_active()) {
        let matches = rank_candidates(subject, pool, |c| {
            subject.user.is_empty() || c.user != subject.user
        });
        tracing::trace!(
            "Listing {} matched {} of {} pool listings",
            subject.id,
            matches.len(),
            pool.len()
        );

        collected.extend(matches.into_iter().map(|m| OwnerMatch {
            my_listing_id: subject.id.clone(),
            listing_id: m.listing_id,
            score: m.score,
            reason: m.reason,
        }));
    }

    let total_candidates = collected.len();
    let decorated: Vec<(usize, OwnerMatch)> = collected.into_iter().enumerate().collect();
    let mut matches = stable_by_score(decorated, |m| m.score);
    matches.truncate(limit);

    tracing::debug!(
        "Aggregated {} matches across {} listings, returning {}",
        total_candidates,
        owned.len(),
        matches.len()
    );

    MatchResult {
        matches,
        total_candidates,
    }
}

#[inline]
fn is_comparable(subject: &Listing, candidate: &Listing) -> bool {
    candidate.id != subject.id
        && candidate.game_date == subject.game_date
        && candidate.is_active()
}

fn score_pair(subject: &Listing, subject_side: Side, candidate: &Listing) -> Option<MatchScore> {
    let (score, reasons) = match (subject_side, Side::of(candidate)) {
        (Side::Have, Side::Have) => {
            if !accepts_seat(candidate, subject) || !accepts_seat(subject, candidate) {
                return None;
            }
            score_swap(subject, candidate)
        }
        (Side::Want, Side::Have) => {
            if !accepts_seat(subject, candidate) {
                return None;
            }
            score_request(subject, candidate, RequestView::TheyHave)
        }
        (Side::Have, Side::Want) => {
            if !accepts_seat(candidate, subject) {
                return None;
            }
            score_request(candidate, subject, RequestView::TheyWant)
        }
        _ => return None,
    };

    let reason = if reasons.is_empty() {
        "Compatible match".to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    };

    Some(MatchScore {
        listing_id: candidate.id.clone(),
        score,
        reason,
    })
}

/// Both sides hold seats and each accepts the other's
fn score_swap(subject: &Listing, candidate: &Listing) -> (i64, Vec<String>) {
    let mut score = BASE_SCORE;
    let mut reasons = Vec::new();

    // Only the first wanted section counts here, not the whole list
    let exact_section = first_wanted_section(candidate) == Some(subject.section())
        && first_wanted_section(subject) == Some(candidate.section());
    let reciprocal_zone = wants_value(&candidate.want_zones, subject.zone())
        && wants_value(&subject.want_zones, candidate.zone());

    if exact_section {
        score += SECTION_BONUS;
    }
    if reciprocal_zone {
        score += ZONE_BONUS;
    }

    if exact_section {
        reasons.push("Exact section match".to_string());
    } else if reciprocal_zone {
        reasons.push(format!("Your want matches their {}", candidate.zone()));
    }

    (score, reasons)
}

#[derive(Debug, Clone, Copy)]
enum RequestView {
    /// Subject is the request, candidate holds the seat
    TheyHave,
    /// Subject holds the seat, candidate is the request
    TheyWant,
}

/// One side holds a seat, the other is asking for one
fn score_request(wanter: &Listing, holder: &Listing, view: RequestView) -> (i64, Vec<String>) {
    let mut score = BASE_SCORE;
    let mut reasons = Vec::new();

    let section_wanted = wants_value(&wanter.want_sections, holder.section());
    let zone_wanted = wants_value(&wanter.want_zones, holder.zone());

    if section_wanted {
        score += SECTION_BONUS;
    }
    if zone_wanted {
        score += ZONE_BONUS;
    }

    let reason = match (view, section_wanted, zone_wanted) {
        (RequestView::TheyHave, true, _) => {
            Some(format!("They have Section {} that you want", holder.section()))
        }
        (RequestView::TheyHave, false, true) => Some(format!("They have {} tickets", holder.zone())),
        (RequestView::TheyWant, true, _) => {
            Some(format!("They want Section {} that you have", holder.section()))
        }
        (RequestView::TheyWant, false, true) => Some(format!("They want {} tickets", holder.zone())),
        _ => None,
    };
    reasons.extend(reason);

    (score, reasons)
}

/// Does `wanter` accept the seat `holder` has? Empty want lists accept anything.
#[inline]
fn accepts_seat(wanter: &Listing, holder: &Listing) -> bool {
    accepts(&wanter.want_zones, holder.zone()) && accepts(&wanter.want_sections, holder.section())
}

#[inline]
fn accepts(wanted: &[String], value: &str) -> bool {
    wanted.is_empty() || wanted.iter().any(|w| w.trim() == value)
}

/// Strict membership: a blank value is never "wanted"
#[inline]
fn wants_value(wanted: &[String], value: &str) -> bool {
    !value.is_empty() && wanted.iter().any(|w| w.trim() == value)
}

#[inline]
fn first_wanted_section(listing: &Listing) -> Option<&str> {
    listing
        .want_sections
        .first()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Sort descending by score, breaking ties on the original position
fn stable_by_score<T>(mut decorated: Vec<(usize, T)>, score: impl Fn(&T) -> i64) -> Vec<T> {
    decorated.sort_by(|(ia, a), (ib, b)| match score(b).cmp(&score(a)) {
        Ordering::Equal => ia.cmp(ib),
        other => other,
    });
    decorated.into_iter().map(|(_, item)| item).collect()
}
