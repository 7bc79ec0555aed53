use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use futures::try_join;
use uuid::Uuid;
use shared::ErrorCode;
use shared::models::*;
use crate::{Route, api};
use crate::comments::Comments;
use crate::featured::render_card;
use crate::styles::*;
use crate::vote_buttons::VoteButtons;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: Uuid,
}

#[derive(Clone)]
enum State {
    Loading,
    Loaded { detail: Rc<PlaylistDetail>, similar: Rc<Vec<PlaylistSummary>> },
    Error(String),
    NotFound,
}

pub struct PlaylistView {
    state: State,
}

pub enum Msg {
    DataReceived(PlaylistDetail, Vec<PlaylistSummary>),
    Error(shared::Error),
}

/// Replies are tagged with the id they were requested for.
pub struct Reply {
    id: Uuid,
    msg: Msg,
}

impl Reply {
    /// Drops replies for a playlist the user has already navigated away from.
    fn into_current(self, current: Uuid) -> Option<Msg> {
        (self.id == current).then_some(self.msg)
    }
}

impl PlaylistView {
    fn load(ctx: &Context<Self>) {
        let id = ctx.props().id;
        ctx.link().send_future(async move {
            let msg = match try_join!(api::playlist(id), api::similar_playlists(id)) {
                Ok((detail, similar)) => Msg::DataReceived(detail, similar),
                Err(e) => Msg::Error(e),
            };
            Reply { id, msg }
        });
    }
}

impl Component for PlaylistView {
    type Message = Reply;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self::load(ctx);
        Self { state: State::Loading }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id == old_props.id {
            return false;
        }
        self.state = State::Loading;
        Self::load(ctx);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, reply: Self::Message) -> bool {
        let Some(msg) = reply.into_current(ctx.props().id) else {
            return false;
        };
        match msg {
            Msg::DataReceived(detail, similar) => {
                self.state = State::Loaded { detail: Rc::new(detail), similar: Rc::new(similar) };
                true
            }
            Msg::Error(error) => {
                self.state = if error.code == ErrorCode::NotFound {
                    State::NotFound
                } else {
                    State::Error(error.message)
                };
                true
            }
        }
    }

    fn view(&self, _: &Context<Self>) -> Html {
        match &self.state {
            State::Loading => render_loading(),
            State::Loaded { detail, similar } => render_loaded(detail, similar),
            State::Error(error) => render_error(error),
            State::NotFound => render_error("Playlist not found"),
        }
    }
}

fn render_loading() -> Html {
    html! {
        <div class="flex justify-center p-8">
            <div class="animate-pulse text-lg text-gray-400">{"Loading playlist..."}</div>
        </div>
    }
}

fn render_error(error: &str) -> Html {
    html! {
        <div class={CONTAINER_SM}>
            <div class={alert_style("error")}>{error}</div>
            <Link<Route> to={Route::Home} classes={classes!(button_secondary())}>{"Back to Discover"}</Link<Route>>
        </div>
    }
}

fn render_loaded(detail: &PlaylistDetail, similar: &[PlaylistSummary]) -> Html {
    let playlist = &detail.playlist;

    html! {
        <div class={CONTAINER_SM}>
            <div class="bg-gray-800 rounded-lg shadow-xl p-6 text-white mb-8">
                <div class="flex gap-6 items-start">
                    <img src={playlist.cover_url.clone()} alt={playlist.title.clone()}
                        class="w-32 h-32 rounded-lg object-cover bg-gray-700 flex-shrink-0" />
                    <div class="flex-1">
                        <div class={FLEX_BETWEEN}>
                            <h1 class="text-2xl font-bold break-words text-gray-100">{&playlist.title}</h1>
                            {if playlist.premium {
                                html! { <span class={BADGE_PREMIUM}>{"PREMIUM"}</span> }
                            } else { html! {} }}
                        </div>
                        <p class={combine_classes(TEXT_MUTED, "mb-2")}>
                            {"Curated by "}{&playlist.curator.name}
                            {if playlist.curator.verified { " ✓" } else { "" }}
                            {format!(" · {} followers", playlist.follower_count)}
                        </p>
                        <p class="mb-4 text-gray-300 break-words">{&playlist.description}</p>
                        <div>{for playlist.tags.iter().map(|tag| html! { <span class={TAG}>{tag}</span> })}</div>
                    </div>
                    <VoteButtons playlist_id={playlist.id} score={playlist.score} user_vote={detail.user_vote} />
                </div>
            </div>

            <section class="mb-8">
                <h2 class={HEADING_MD}>
                    {format!("Tracks · {}", format_duration(playlist.total_duration_seconds()))}
                </h2>
                <ol class="divide-y divide-gray-700 bg-gray-800 rounded-lg">
                    {for playlist.tracks.iter().enumerate().map(|(i, track)| html! {
                        <li class="flex justify-between px-4 py-3 text-gray-200">
                            <span>
                                <span class="text-gray-500 mr-3">{i + 1}</span>
                                {&track.title}
                                <span class={combine_classes(TEXT_MUTED, "ml-2")}>{&track.artist}</span>
                            </span>
                            <span class={TEXT_MUTED}>{format_duration(u64::from(track.duration_seconds))}</span>
                        </li>
                    })}
                </ol>
            </section>

            <div class="mb-8">
                <Comments playlist_id={playlist.id} comments={detail.comments.clone()} />
            </div>

            <section>
                <h2 class={HEADING_MD}>{"Similar playlists"}</h2>
                {if similar.is_empty() {
                    html! { <p class={TEXT_MUTED}>{"Nothing similar yet."}</p> }
                } else {
                    html! {
                        <div class="grid gap-4 md:grid-cols-2">
                            {similar.iter().map(render_card).collect::<Html>()}
                        </div>
                    }
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_error_is_dropped() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let stale = Reply { id: a, msg: Msg::Error(shared::Error::new(ErrorCode::NotFound, "Playlist not found")) };
        assert!(stale.into_current(b).is_none());

        let current = Reply { id: b, msg: Msg::Error(shared::Error::network("offline")) };
        assert!(matches!(current.into_current(b), Some(Msg::Error(e)) if e.message == "offline"));
    }
}
