use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::models::{format_duration, PlaylistSummary};
use crate::{Route, api, styles::*};

#[derive(Clone, Default, PartialEq)]
pub struct FeaturedState {
    playlists: Vec<PlaylistSummary>,
    error: Option<String>,
    loaded: bool,
}

impl Reducible for FeaturedState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::PlaylistsReceived(playlists) => {
                next.playlists = playlists;
                next.error = None;
                next.loaded = true;
            },
            Msg::Error(error) => {
                next.error = Some(error);
                next.loaded = true;
            },
        }
        Rc::new(next)
    }
}

pub enum Msg {
    PlaylistsReceived(Vec<PlaylistSummary>),
    Error(String),
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        format!("{}...", text.chars().take(limit).collect::<String>())
    } else {
        text.to_string()
    }
}

pub fn render_card(playlist: &PlaylistSummary) -> Html {
    html! {
        <Link<Route> to={Route::Playlist { id: playlist.id.to_string() }}
            classes={classes!(CARD_HOVER_SCALE, "hover:shadow-lg", "transition-shadow")}>
            <div class="h-full flex flex-col">
                <div class={FLEX_BETWEEN}>
                    <h2 class={HEADING_SM} title={playlist.title.clone()}>
                        {truncate(&playlist.title, 28)}
                    </h2>
                    {if playlist.premium {
                        html! { <span class={BADGE_PREMIUM}>{"PREMIUM"}</span> }
                    } else { html! {} }}
                </div>
                <p class={combine_classes(TEXT_MUTED, "mb-2")}>{"by "}{&playlist.curator_name}</p>
                <div class="mb-3">
                    {for playlist.tags.iter().map(|tag| html! { <span class={TAG}>{tag}</span> })}
                </div>
                <div class="mt-auto space-y-1">
                    <p class={TEXT_MUTED}>
                        {format!("{} tracks · {}", playlist.track_count, format_duration(playlist.total_duration_seconds))}
                    </p>
                    <div class={FLEX_BETWEEN}>
                        <span class="font-semibold text-green-300">{format!("▲ {}", playlist.score)}</span>
                        <span class={TEXT_MUTED}>{format!("{} comments", playlist.comment_count)}</span>
                    </div>
                </div>
            </div>
        </Link<Route>>
    }
}

#[function_component]
pub fn FeaturedPlaylists() -> Html {
    let state = use_reducer(FeaturedState::default);

    use_effect_with_deps({
        let state = state.clone();
        move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::featured_playlists().await {
                    Ok(playlists) => state.dispatch(Msg::PlaylistsReceived(playlists)),
                    Err(e) => state.dispatch(Msg::Error(e.message)),
                }
            });
            || ()
        }
    }, ());

    html! {
        <div>
            {if let Some(error) = &state.error {
                html! { <div class={alert_style("error")}>{error}</div> }
            } else { html! {} }}

            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                {state.playlists.iter().map(render_card).collect::<Html>()}
            </div>

            {if !state.loaded {
                html! {
                    <div class="flex justify-center p-8">
                        <div class={combine_classes("animate-pulse", TEXT_MUTED)}>{"Loading playlists..."}</div>
                    </div>
                }
            } else if state.playlists.is_empty() && state.error.is_none() {
                html! { <p class={combine_classes(TEXT_MUTED, "text-center")}>{"No featured playlists yet."}</p> }
            } else { html! {} }}
        </div>
    }
}
