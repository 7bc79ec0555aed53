use yew::prelude::*;
use uuid::Uuid;
use shared::models::VoteResponse;
use shared::vote_logic::{OptimisticTally, Score, VoteAction, VoteState, VoteTally};
use crate::api;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub playlist_id: Uuid,
    pub score: Score,
    pub user_vote: VoteState,
}

pub enum Msg {
    Press(VoteAction),
    Confirmed(VoteResponse),
    Failed(String),
}

/// Applies votes locally right away, then settles on whatever the server answers.
/// Remounted by `PlaylistView` for each playlist, so props never change under it.
pub struct VoteButtons {
    tally: OptimisticTally,
    error: Option<String>,
}

impl Component for VoteButtons {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            tally: OptimisticTally::new(VoteTally::new(ctx.props().score, ctx.props().user_vote)),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Press(action) => {
                if !self.tally.press(action) {
                    return false;
                }
                self.error = None;

                let playlist_id = ctx.props().playlist_id;
                ctx.link().send_future(async move {
                    match api::vote(playlist_id, action).await {
                        Ok(response) => Msg::Confirmed(response),
                        Err(e) => Msg::Failed(e.message),
                    }
                });
                true
            }
            Msg::Confirmed(response) => {
                self.tally.confirm(&response);
                true
            }
            Msg::Failed(error) => {
                self.tally.fail();
                self.error = Some(error);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let shown = self.tally.shown();
        let pending = self.tally.is_pending();
        let button = |action: VoteAction, label: &'static str, active: bool, active_class: &'static str| {
            html! {
                <button
                    type="button"
                    title={if active { "Remove vote" } else { label }}
                    aria-pressed={active.to_string()}
                    disabled={pending}
                    onclick={ctx.link().callback(move |_| Msg::Press(action))}
                    class={combine_classes(VOTE_BUTTON, if active { active_class } else { VOTE_IDLE })}
                >
                    {if action == VoteAction::Up { "▲" } else { "▼" }}
                </button>
            }
        };

        html! {
            <div class="flex flex-col items-start gap-1">
                <div class="flex items-center gap-3">
                    {button(VoteAction::Up, "Upvote", shown.vote.is_up(), VOTE_UP_ACTIVE)}
                    <span class="text-2xl font-bold text-gray-100 min-w-[3rem] text-center">{shown.score}</span>
                    {button(VoteAction::Down, "Downvote", shown.vote.is_down(), VOTE_DOWN_ACTIVE)}
                </div>
                {if let Some(error) = &self.error {
                    html! { <p class={TEXT_ERROR}>{error}</p> }
                } else { html! {} }}
            </div>
        }
    }
}
