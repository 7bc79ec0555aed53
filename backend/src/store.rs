use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error};
use uuid::Uuid;
use shared::models::*;
use shared::vote_logic::{self, VoteAction, VoteState};
use crate::processor::PlaylistProcessor;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Playlist not found")]
    NotFound,
    #[error("Store lock poisoned")]
    LockFailed,
    #[error("Invalid fixture data: {0}")]
    Fixtures(String),
}

#[derive(Debug, Default)]
struct StoreInner {
    playlists: HashMap<Uuid, Playlist>,
    order: Vec<Uuid>,
    votes: HashMap<(Uuid, String), VoteState>,
    comments: HashMap<Uuid, VecDeque<Comment>>,
}

impl StoreInner {
    fn playlist(&self, id: Uuid) -> Result<&Playlist, StoreError> {
        self.playlists.get(&id).ok_or(StoreError::NotFound)
    }

    fn comment_count(&self, id: Uuid) -> usize {
        self.comments.get(&id).map_or(0, VecDeque::len)
    }

    fn ordered(&self) -> impl Iterator<Item = &Playlist> {
        self.order.iter().filter_map(|id| self.playlists.get(id))
    }
}

/// Fixture-seeded playlists with the votes and comments made since startup.
#[derive(Debug)]
pub struct PlaylistStore {
    inner: Mutex<StoreInner>,
    plans: Vec<PremiumPlan>,
}

impl PlaylistStore {
    pub fn new(playlists: Vec<Playlist>, plans: Vec<PremiumPlan>) -> Result<Self, StoreError> {
        let mut inner = StoreInner::default();
        for playlist in playlists {
            if inner.playlists.contains_key(&playlist.id) {
                return Err(StoreError::Fixtures(format!("duplicate playlist id {}", playlist.id)));
            }
            inner.order.push(playlist.id);
            inner.playlists.insert(playlist.id, playlist);
        }
        Ok(Self { inner: Mutex::new(inner), plans })
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, StoreError> {
        self.inner.lock().map_err(|e| {
            error!("Failed to acquire store lock: {}", e);
            StoreError::LockFailed
        })
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.playlists.len())
    }

    pub fn ensure_exists(&self, id: Uuid) -> Result<(), StoreError> {
        self.lock()?.playlist(id).map(|_| ())
    }

    pub fn featured(&self, limit: usize) -> Result<Vec<PlaylistSummary>, StoreError> {
        let inner = self.lock()?;
        let mut playlists: Vec<_> = inner.ordered().collect();
        PlaylistProcessor::sort_featured(&mut playlists);
        Ok(playlists.into_iter()
            .take(limit)
            .map(|p| p.summary(inner.comment_count(p.id)))
            .collect())
    }

    pub fn detail(&self, id: Uuid, voter: &str) -> Result<PlaylistDetail, StoreError> {
        let inner = self.lock()?;
        let playlist = inner.playlist(id)?.clone();
        let user_vote = inner.votes.get(&(id, voter.to_string())).copied().unwrap_or_default();
        Ok(PlaylistDetail {
            playlist,
            comments: inner.comments.get(&id)
                .map(|comments| comments.iter().cloned().collect())
                .unwrap_or_default(),
            user_vote,
        })
    }

    pub fn similar(&self, id: Uuid, limit: usize) -> Result<Vec<PlaylistSummary>, StoreError> {
        let inner = self.lock()?;
        let target = inner.playlist(id)?;
        Ok(PlaylistProcessor::rank_similar(target, inner.ordered(), limit)
            .into_iter()
            .map(|p| p.summary(inner.comment_count(p.id)))
            .collect())
    }

    pub fn cast_vote(&self, id: Uuid, voter: &str, action: VoteAction) -> Result<VoteResponse, StoreError> {
        let mut inner = self.lock()?;
        let key = (id, voter.to_string());
        let current = inner.votes.get(&key).copied().unwrap_or_default();

        let playlist = inner.playlists.get_mut(&id).ok_or(StoreError::NotFound)?;
        let (score, next) = vote_logic::apply(playlist.score, current, action);
        playlist.score = score;

        if next == VoteState::None {
            inner.votes.remove(&key);
        } else {
            inner.votes.insert(key, next);
        }
        debug!("Vote {:?} on {}: {:?} -> {:?}, score {}", action, id, current, next, score);

        Ok(VoteResponse { playlist_id: id, score, user_vote: next })
    }

    pub fn add_comment(&self, comment: Comment) -> Result<Comment, StoreError> {
        let mut inner = self.lock()?;
        inner.playlist(comment.playlist_id)?;
        inner.comments.entry(comment.playlist_id).or_default().push_front(comment.clone());
        Ok(comment)
    }

    pub fn plans(&self) -> &[PremiumPlan] {
        &self.plans
    }
}
