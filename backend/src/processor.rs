use std::cmp::Ordering;
use rustrict::CensorStr;
use time::OffsetDateTime;
use uuid::Uuid;
use shared::models::*;
use shared::validation::{validate_comment_request, ValidationError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommentError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Possible profanity detected in {0}")]
    Inappropriate(&'static str),
}

pub struct PlaylistProcessor;

impl PlaylistProcessor {
    fn by_score_then_title(a: &Playlist, b: &Playlist) -> Ordering {
        b.score.cmp(&a.score).then_with(|| a.title.cmp(&b.title))
    }

    pub fn sort_featured(playlists: &mut [&Playlist]) {
        playlists.sort_by(|a, b| Self::by_score_then_title(a, b));
    }

    /// Other playlists sharing at least one tag with `target`, most shared tags first.
    pub fn rank_similar<'a>(
        target: &Playlist,
        candidates: impl Iterator<Item = &'a Playlist>,
        limit: usize,
    ) -> Vec<&'a Playlist> {
        let mut ranked: Vec<_> = candidates
            .filter(|p| p.id != target.id)
            .map(|p| (target.shares_tag_with(p), p))
            .filter(|(shared, _)| *shared > 0)
            .collect();

        ranked.sort_by(|(sa, a), (sb, b)| sb.cmp(sa).then_with(|| Self::by_score_then_title(a, b)));
        ranked.into_iter().take(limit).map(|(_, p)| p).collect()
    }

    pub fn build_comment(playlist_id: Uuid, request: &CreateCommentRequest) -> Result<Comment, CommentError> {
        let valid = validate_comment_request(request)?;

        if valid.body.is_inappropriate() {
            return Err(CommentError::Inappropriate("comment"));
        }
        if valid.author.is_inappropriate() {
            return Err(CommentError::Inappropriate("name"));
        }

        Ok(Comment {
            id: Uuid::new_v4(),
            playlist_id,
            author: valid.author,
            body: valid.body,
            posted_at: OffsetDateTime::now_utc(),
        })
    }
}
