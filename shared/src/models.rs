use serde::{Serialize, Deserialize};
use time::OffsetDateTime;
use uuid::Uuid;
use crate::vote_logic::{Score, VoteAction, VoteState};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub duration_seconds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Curator {
    pub name: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub curator: Curator,
    pub cover_url: String,
    pub tags: Vec<String>,
    pub tracks: Vec<Track>,
    pub score: Score,
    pub follower_count: u64,
    #[serde(default)]
    pub premium: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub id: Uuid,
    pub title: String,
    pub curator_name: String,
    pub cover_url: String,
    pub tags: Vec<String>,
    pub track_count: usize,
    pub total_duration_seconds: u64,
    pub score: Score,
    pub comment_count: usize,
    pub premium: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub playlist_id: Uuid,
    pub author: String,
    pub body: String,
    pub posted_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetail {
    pub playlist: Playlist,
    pub comments: Vec<Comment>,
    pub user_vote: VoteState,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub action: VoteAction,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub playlist_id: Uuid,
    pub score: Score,
    pub user_vote: VoteState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub author: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PremiumPlan {
    pub id: String,
    pub name: String,
    pub monthly_price_cents: u32,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

impl Playlist {
    pub fn total_duration_seconds(&self) -> u64 {
        self.tracks.iter().map(|t| u64::from(t.duration_seconds)).sum()
    }

    pub fn shares_tag_with(&self, other: &Playlist) -> usize {
        self.tags.iter()
            .filter(|tag| other.tags.iter().any(|o| o.eq_ignore_ascii_case(tag)))
            .count()
    }

    pub fn summary(&self, comment_count: usize) -> PlaylistSummary {
        PlaylistSummary {
            id: self.id,
            title: self.title.clone(),
            curator_name: self.curator.name.clone(),
            cover_url: self.cover_url.clone(),
            tags: self.tags.clone(),
            track_count: self.tracks.len(),
            total_duration_seconds: self.total_duration_seconds(),
            score: self.score,
            comment_count,
            premium: self.premium,
        }
    }
}

impl PremiumPlan {
    pub fn monthly_price_label(&self) -> String {
        if self.monthly_price_cents == 0 {
            "Free".into()
        } else {
            format!("${}.{:02}/mo", self.monthly_price_cents / 100, self.monthly_price_cents % 100)
        }
    }
}

pub fn format_duration(total_seconds: u64) -> String {
    let (hours, minutes, seconds) = (total_seconds / 3600, (total_seconds / 60) % 60, total_seconds % 60);
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
