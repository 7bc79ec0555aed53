use std::sync::Arc;
use rocket::{State, get, post, http::Status, serde::json::Json};
use tracing::{debug, info, instrument};
use shared::{models::*, user_info::UserInfo};
use crate::{
    config::ServerConfig,
    error::ApiError,
    processor::PlaylistProcessor,
    rate_limiter::RateLimiter,
    store::PlaylistStore,
    utils::{comment_limit_key, parse_playlist_id, vote_limit_key},
};

pub struct AppState {
    pub store: PlaylistStore,
    pub vote_limiter: Arc<RateLimiter>,
    pub comment_limiter: Arc<RateLimiter>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(store: PlaylistStore, config: ServerConfig) -> Self {
        Self {
            store,
            vote_limiter: Arc::new(RateLimiter::per_minute(config.votes_per_minute)),
            comment_limiter: Arc::new(RateLimiter::per_minute(config.comments_per_minute)),
            config,
        }
    }

    pub fn limiters(&self) -> Vec<Arc<RateLimiter>> {
        vec![self.vote_limiter.clone(), self.comment_limiter.clone()]
    }
}

#[get("/playlists/featured")]
pub async fn featured_playlists(state: &State<AppState>) -> Result<Json<Vec<PlaylistSummary>>, ApiError> {
    Ok(Json(state.store.featured(state.config.featured_limit)?))
}

#[get("/playlists/<id>")]
pub async fn get_playlist(
    state: &State<AppState>,
    id: &str,
    user_info: UserInfo,
) -> Result<Json<PlaylistDetail>, ApiError> {
    let uuid = parse_playlist_id(id)?;
    Ok(Json(state.store.detail(uuid, &user_info.user_fingerprint)?))
}

#[get("/playlists/<id>/similar")]
pub async fn similar_playlists(state: &State<AppState>, id: &str) -> Result<Json<Vec<PlaylistSummary>>, ApiError> {
    let uuid = parse_playlist_id(id)?;
    Ok(Json(state.store.similar(uuid, state.config.similar_limit)?))
}

#[instrument(skip(state, request, user_info), fields(playlist_id = %id))]
#[post("/playlists/<id>/vote", format = "json", data = "<request>")]
pub async fn cast_vote(
    state: &State<AppState>,
    id: &str,
    request: Json<VoteRequest>,
    user_info: UserInfo,
) -> Result<Json<VoteResponse>, ApiError> {
    let uuid = parse_playlist_id(id)?;
    state.store.ensure_exists(uuid)?;

    state.vote_limiter
        .check_rate_limit(&vote_limit_key(&user_info.ip))
        .map_err(ApiError::RateLimited)?;

    let response = state.store.cast_vote(uuid, &user_info.user_fingerprint, request.action)?;
    debug!("Vote recorded: score={} user_vote={:?}", response.score, response.user_vote);
    Ok(Json(response))
}

#[instrument(skip(state, request, user_info), fields(playlist_id = %id))]
#[post("/playlists/<id>/comments", format = "json", data = "<request>")]
pub async fn post_comment(
    state: &State<AppState>,
    id: &str,
    request: Json<CreateCommentRequest>,
    user_info: UserInfo,
) -> Result<Json<Comment>, ApiError> {
    let uuid = parse_playlist_id(id)?;
    state.store.ensure_exists(uuid)?;

    state.comment_limiter
        .check_rate_limit(&comment_limit_key(&user_info.ip, uuid))
        .map_err(ApiError::RateLimited)?;

    let comment = PlaylistProcessor::build_comment(uuid, &request)?;
    let comment = state.store.add_comment(comment)?;
    info!("Comment {} posted", comment.id);
    Ok(Json(comment))
}

#[get("/plans")]
pub async fn premium_plans(state: &State<AppState>) -> Json<Vec<PremiumPlan>> {
    Json(state.store.plans().to_vec())
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
