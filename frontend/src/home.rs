use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, featured::FeaturedPlaylists, styles::*};

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class={CONTAINER}>
            <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Discover Playlists"}</h1>
            <div class="text-center mb-8">
                <p class="text-gray-300 mb-4">
                    {"Hand-picked playlists from curators who care. Vote up the ones you love, 
                    leave a comment, and follow the trail of similar playlists to find your next favourite."}
                </p>
                <Link<Route> to={Route::Premium} classes="text-blue-400 hover:underline">
                    {"Unlock premium playlists"}
                </Link<Route>>
            </div>

            <h2 class={HEADING_MD}>{"Featured"}</h2>
            <FeaturedPlaylists />
        </div>
    }
}
