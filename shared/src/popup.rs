use serde::{Serialize, Deserialize};

pub const FEATURE_MIN_VISITS: u32 = 2;
pub const POPUP_DELAY_MS: u32 = 1_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureAnnouncement {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const CURRENT_FEATURE: FeatureAnnouncement = FeatureAnnouncement {
    id: "similar-playlists-v1",
    title: "Similar playlists",
    body: "Every playlist page now lists playlists that share its genres. Scroll past the comments to find your next favourite.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Welcome,
    Feature,
}

/// What a visitor has already seen, persisted by the client between visits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopupHistory {
    pub visits: u32,
    pub welcome_dismissed: bool,
    pub dismissed_features: Vec<String>,
}

impl PopupHistory {
    pub fn record_visit(&mut self) {
        self.visits = self.visits.saturating_add(1);
    }

    pub fn next_popup(&self, announcement: &FeatureAnnouncement) -> Option<Popup> {
        if !self.welcome_dismissed {
            return Some(Popup::Welcome);
        }
        if self.visits >= FEATURE_MIN_VISITS
            && !self.dismissed_features.iter().any(|id| id == announcement.id)
        {
            return Some(Popup::Feature);
        }
        None
    }

    pub fn dismiss(&mut self, popup: Popup, announcement: &FeatureAnnouncement) {
        match popup {
            Popup::Welcome => self.welcome_dismissed = true,
            Popup::Feature => {
                if !self.dismissed_features.iter().any(|id| id == announcement.id) {
                    self.dismissed_features.push(announcement.id.to_string());
                }
            }
        }
    }
}
