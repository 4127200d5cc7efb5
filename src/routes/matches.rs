use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{
    filter_by_seat_count, filter_by_tab, find_matches_for_owner, match_card, summarize, Tab,
};
use crate::models::{
    ErrorResponse, FilterRequest, FilterResponse, FindMatchesRequest, FindMatchesResponse,
    HealthResponse, Listing, MatchCardRequest, SummarizeRequest, SummarizeResponse,
};

/// Application state shared across all handlers
///
/// The engine is stateless, so this only carries request bounds.
#[derive(Debug, Clone)]
pub struct AppState {
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/listings/summaries", web::post().to(summarize_listings))
        .route("/listings/filter", web::post().to(filter_listings))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/card", web::post().to(render_match_card));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "listings": [Listing],
///   "pool": [Listing],
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let pool: &[Listing] = if req.pool.is_empty() { &req.listings } else { &req.pool };
    if pool.len() > state.matching.max_pool_size {
        return bad_request(
            "Pool too large",
            format!(
                "Pool has {} listings, maximum is {}",
                pool.len(),
                state.matching.max_pool_size
            ),
        );
    }

    let user_id = &req.user_id;
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    let owned: Vec<Listing> = req
        .listings
        .iter()
        .filter(|l| &l.user == user_id)
        .cloned()
        .collect();

    tracing::info!(
        "Finding matches for user: {}, listings: {}, pool: {}, limit: {}",
        user_id,
        owned.len(),
        pool.len(),
        limit
    );

    let result = find_matches_for_owner(&owned, pool, limit);

    let response = FindMatchesResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        matches: result.matches,
        total_results: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches for user {} (from {} eligible)",
        response.matches.len(),
        user_id,
        response.total_results
    );

    HttpResponse::Ok().json(response)
}

/// Summarize listings endpoint
///
/// POST /api/v1/listings/summaries
async fn summarize_listings(req: web::Json<SummarizeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let summaries = req.listings.iter().map(summarize).collect();

    HttpResponse::Ok().json(SummarizeResponse { summaries })
}

/// Filter listings endpoint
///
/// POST /api/v1/listings/filter
///
/// `tab` is one of all|for-sale|looking-for|swap, `seatsNeeded` is "any"
/// or a positive integer.
async fn filter_listings(req: web::Json<FilterRequest>) -> impl Responder {
    let tab: Tab = match req.tab.parse() {
        Ok(tab) => tab,
        Err(e) => return bad_request("Invalid tab", e.to_string()),
    };
    let seats_needed = match req.seats_needed.parse() {
        Ok(n) => n,
        Err(e) => return bad_request("Invalid seat count", e.to_string()),
    };

    let by_tab = filter_by_tab(&req.listings, tab);
    let listings = filter_by_seat_count(&by_tab, seats_needed);

    tracing::debug!(
        "Filtered {} listings to {} (tab={}, seats={:?})",
        req.listings.len(),
        listings.len(),
        tab,
        seats_needed
    );

    HttpResponse::Ok().json(FilterResponse {
        count: listings.len(),
        listings,
    })
}

/// Match card endpoint
///
/// POST /api/v1/matches/card
async fn render_match_card(req: web::Json<MatchCardRequest>) -> impl Responder {
    HttpResponse::Ok().json(match_card(&req.viewer, &req.other, req.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::json;

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState {
            matching: MatchingSettings::default(),
        })
    }

    fn listing_json(id: &str, user: &str, extra: serde_json::Value) -> serde_json::Value {
        let mut base = json!({
            "id": id,
            "user": user,
            "gameDate": "2025-03-14",
            "status": "ACTIVE",
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        base
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
    }

    #[actix_web::test]
    async fn test_find_matches_for_user() {
        let app = test::init_service(
            App::new().app_data(app_state()).configure(configure),
        )
        .await;

        let body = json!({
            "userId": "alice",
            "listings": [
                listing_json("mine", "alice", json!({
                    "listingType": "HAVE",
                    "haveSection": "101",
                    "haveZone": "Lower Bowl",
                    "wantZones": ["Upper Bowl"],
                })),
                listing_json("theirs", "bob", json!({
                    "listingType": "HAVE",
                    "haveSection": "202",
                    "haveZone": "Upper Bowl",
                    "wantZones": ["Lower Bowl"],
                })),
            ],
        });

        let req = test::TestRequest::post()
            .uri("/matches/find")
            .set_json(&body)
            .to_request();
        let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.matches.len(), 1);
        assert_eq!(resp.matches[0].listing_id, "theirs");
        assert_eq!(resp.matches[0].score, 125);
    }

    #[actix_web::test]
    async fn test_find_matches_rejects_empty_user() {
        let app = test::init_service(
            App::new().app_data(app_state()).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/find")
            .set_json(json!({ "userId": "", "listings": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_filter_rejects_zero_seats() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/listings/filter")
            .set_json(json!({ "listings": [], "seatsNeeded": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_filter_rejects_unknown_tab() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/listings/filter")
            .set_json(json!({ "listings": [], "tab": "trades" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_filter_by_tab_and_seats() {
        let app = test::init_service(App::new().configure(configure)).await;

        let body = json!({
            "listings": [
                listing_json("sale", "a", json!({ "listingType": "HAVE", "seatCount": null })),
                listing_json("request", "b", json!({ "listingType": "WANT", "seatCount": 4 })),
            ],
            "tab": "all",
            "seatsNeeded": 2,
        });

        let req = test::TestRequest::post()
            .uri("/listings/filter")
            .set_json(&body)
            .to_request();
        let resp: FilterResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.count, 1);
        assert_eq!(resp.listings[0].id, "sale");
    }
}
