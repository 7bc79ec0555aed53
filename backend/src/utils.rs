use crate::error::ApiError;
use uuid::Uuid;

pub fn parse_playlist_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::InvalidId)
}

/// Limits are keyed by address; the fingerprint carries a client-chosen id.
pub fn vote_limit_key(ip: &str) -> String {
    format!("vote:{}", ip)
}

pub fn comment_limit_key(ip: &str, playlist_id: Uuid) -> String {
    format!("comment:{}:{}", ip, playlist_id)
}
