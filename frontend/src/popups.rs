use yew::prelude::*;
use yew_router::prelude::*;
use gloo_timers::callback::Timeout;
use shared::popup::{FeatureAnnouncement, Popup, PopupHistory, CURRENT_FEATURE, POPUP_DELAY_MS};
use crate::config::CONFIG;
use crate::storage::{load_json, store_json};
use crate::{Route, styles::*};

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    pub on_dismiss: Callback<()>,
}

#[function_component(WelcomePopup)]
pub fn welcome_popup(props: &PopupProps) -> Html {
    let dismiss = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class={OVERLAY}>
            <div class={MODAL} role="dialog" aria-modal="true">
                <h2 class={HEADING_MD}>{"Welcome!"}</h2>
                <p class="text-gray-300 mb-4">
                    {"Browse featured playlists, vote with ▲ and ▼, and tell curators what you think in the comments."}
                </p>
                <p class="text-gray-300 mb-6">
                    {"Want curator exclusives? "}
                    <Link<Route> to={Route::Premium} classes="text-blue-400 hover:underline">{"See Premium"}</Link<Route>>
                </p>
                <button type="button" class={button_primary()} onclick={dismiss}>{"Start exploring"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturePopupProps {
    pub announcement: FeatureAnnouncement,
    pub on_dismiss: Callback<()>,
}

#[function_component(FeaturePopup)]
pub fn feature_popup(props: &FeaturePopupProps) -> Html {
    let dismiss = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class={OVERLAY}>
            <div class={MODAL} role="dialog" aria-modal="true">
                <span class={combine_classes(BADGE_PREMIUM, "mb-3")}>{"NEW"}</span>
                <h2 class={HEADING_MD}>{props.announcement.title}</h2>
                <p class="text-gray-300 mb-6">{props.announcement.body}</p>
                <button type="button" class={button_secondary()} onclick={dismiss}>{"Got it"}</button>
            </div>
        </div>
    }
}

fn load_history() -> PopupHistory {
    let mut history = load_json::<PopupHistory>(CONFIG.popup_history_key).unwrap_or_default();
    history.record_visit();
    store_json(CONFIG.popup_history_key, &history);
    history
}

/// Shows at most one popup per page load, after a short delay.
#[function_component(PopupHost)]
pub fn popup_host() -> Html {
    let history = use_state(load_history);
    let visible = use_state(|| None::<Popup>);

    {
        let visible = visible.clone();
        let next = history.next_popup(&CURRENT_FEATURE);
        use_effect_with_deps(move |_| {
            let timeout = next.map(|popup| Timeout::new(POPUP_DELAY_MS, move || visible.set(Some(popup))));
            move || drop(timeout)
        }, ());
    }

    let on_dismiss = {
        let history = history.clone();
        let visible = visible.clone();
        Callback::from(move |_: ()| {
            if let Some(popup) = *visible {
                let mut next = (*history).clone();
                next.dismiss(popup, &CURRENT_FEATURE);
                store_json(CONFIG.popup_history_key, &next);
                history.set(next);
            }
            visible.set(None);
        })
    };

    match *visible {
        Some(Popup::Welcome) => html! { <WelcomePopup {on_dismiss} /> },
        Some(Popup::Feature) => html! { <FeaturePopup announcement={CURRENT_FEATURE} {on_dismiss} /> },
        None => html! {},
    }
}
