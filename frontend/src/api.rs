use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{Error, ErrorResponse, Result, CLIENT_ID_HEADER};
use shared::models::*;
use shared::vote_logic::VoteAction;
use uuid::Uuid;
use crate::config::CONFIG;
use crate::storage::client_id;

fn url(path: &str) -> String {
    format!("{}{}", CONFIG.api_base_url, path)
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T> {
    if response.ok() {
        response.json::<T>().await
            .map_err(|e| Error::network(format!("Failed to parse response: {}", e)))
    } else {
        let body = response.json::<ErrorResponse>().await.ok();
        Err(Error::from_response(response.status(), body))
    }
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T> {
    let response = Request::get(&url(path))
        .header(CLIENT_ID_HEADER, &client_id())
        .send()
        .await
        .map_err(|e| Error::network(e.to_string()))?;
    read(response).await
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let response = Request::post(&url(path))
        .header(CLIENT_ID_HEADER, &client_id())
        .json(body)
        .map_err(|e| Error::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::network(e.to_string()))?;
    read(response).await
}

pub async fn featured_playlists() -> Result<Vec<PlaylistSummary>> {
    get("/playlists/featured").await
}

pub async fn playlist(id: Uuid) -> Result<PlaylistDetail> {
    get(&format!("/playlists/{}", id)).await
}

pub async fn similar_playlists(id: Uuid) -> Result<Vec<PlaylistSummary>> {
    get(&format!("/playlists/{}/similar", id)).await
}

pub async fn vote(id: Uuid, action: VoteAction) -> Result<VoteResponse> {
    post(&format!("/playlists/{}/vote", id), &VoteRequest { action }).await
}

pub async fn post_comment(id: Uuid, request: &CreateCommentRequest) -> Result<Comment> {
    post(&format!("/playlists/{}/comments", id), request).await
}

pub async fn premium_plans() -> Result<Vec<PremiumPlan>> {
    get("/plans").await
}
