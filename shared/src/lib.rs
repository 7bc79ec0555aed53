pub mod error;
pub mod models;
pub mod validation;
pub mod user_info;
pub mod vote_logic;
pub mod popup;

pub use error::{Error, ErrorCode, Result, ErrorResponse};
pub use models::*;
pub use validation::*;
pub use user_info::*;
pub use vote_logic::{apply, OptimisticTally, Score, VoteAction, VoteState, VoteTally};
pub use popup::{FeatureAnnouncement, Popup, PopupHistory, CURRENT_FEATURE};
