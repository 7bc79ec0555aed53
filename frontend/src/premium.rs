use yew::prelude::*;
use shared::models::PremiumPlan;
use crate::{api, styles::*};

fn render_plan(plan: &PremiumPlan) -> Html {
    let card = if plan.highlighted {
        combine_classes(CARD_SECTION, "ring-2 ring-yellow-400 scale-105")
    } else {
        CARD_SECTION.to_string()
    };

    html! {
        <div class={combine_classes(&card, "flex flex-col p-6")}>
            {if plan.highlighted {
                html! { <span class={combine_classes(BADGE_PREMIUM, "self-start mb-2")}>{"MOST POPULAR"}</span> }
            } else { html! {} }}
            <h2 class={HEADING_SM}>{&plan.name}</h2>
            <p class="text-3xl font-extrabold text-white mb-4">{plan.monthly_price_label()}</p>
            <ul class="list-disc pl-6 space-y-2 text-gray-300 mb-6">
                {for plan.features.iter().map(|f| html! { <li>{f}</li> })}
            </ul>
            <button type="button" class={combine_classes(&button_primary(), "mt-auto")}>
                {if plan.monthly_price_cents == 0 { "Current plan" } else { "Choose plan" }}
            </button>
        </div>
    }
}

#[function_component]
pub fn Premium() -> Html {
    let plans = use_state(|| None::<Vec<PremiumPlan>>);
    let error = use_state(|| None::<String>);

    {
        let plans = plans.clone();
        let error = error.clone();
        use_effect_with_deps(move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::premium_plans().await {
                    Ok(list) => plans.set(Some(list)),
                    Err(e) => error.set(Some(e.message)),
                }
            });
            || ()
        }, ());
    }

    html! {
        <div class={CONTAINER}>
            <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Go Premium"}</h1>
            <p class="text-center text-gray-300 mb-10">
                {"Curator-exclusive playlists, no ads, and your music offline."}
            </p>

            {if let Some(error) = &*error {
                html! { <div class={alert_style("error")}>{error}</div> }
            } else { html! {} }}

            {match &*plans {
                Some(list) => html! {
                    <div class="grid gap-6 md:grid-cols-3">
                        {for list.iter().map(render_plan)}
                    </div>
                },
                None if error.is_none() => html! {
                    <div class="flex justify-center p-8">
                        <div class={combine_classes("animate-pulse", TEXT_MUTED)}>{"Loading plans..."}</div>
                    </div>
                },
                None => html! {},
            }}
        </div>
    }
}
