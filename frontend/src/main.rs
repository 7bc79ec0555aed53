use yew::prelude::*;
use yew_router::prelude::*;
use uuid::Uuid;

mod api;
mod comments;
mod config;
mod featured;
mod home;
mod playlist_view;
mod popups;
mod premium;
mod storage;
mod styles;
mod vote_buttons;

use crate::{
    home::Home,
    playlist_view::PlaylistView,
    popups::PopupHost,
    premium::Premium,
    styles::*,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/playlist/:id")] Playlist { id: String },
    #[at("/premium")] Premium,
    #[not_found]
    #[at("/404")] NotFound,
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let current_route = use_route::<Route>();

    html! {
        <Link<Route> to={props.to.clone()} classes={classes!(
            "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
            "transition-colors", "duration-200", "ease-in-out",
            "text-gray-200", "border", "border-transparent", "hover:border-blue-400", "hover:text-blue-400",
            if current_route.as_ref() == Some(&props.to) {
                "text-blue-400 border-blue-400 ring-2 ring-blue-500 ring-offset-1 ring-offset-gray-900"
            } else {
                ""
            }
        )}>
            {props.label}
        </Link<Route>>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-40">
            <div class="container mx-auto px-6 py-4 flex justify-center space-x-8">
                <NavLink to={Route::Home} label="Discover" />
                <NavLink to={Route::Premium} label="Premium" />
            </div>
        </nav>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class={CONTAINER_SM}>
            <div class={alert_style("error")}>{"Page not found"}</div>
            <Link<Route> to={Route::Home} classes={classes!(button_primary())}>{"Back to Discover"}</Link<Route>>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-900">
                <Navigation />
                <div class="pt-16">
                    <Switch<Route> render={switch} />
                </div>
                <PopupHost />
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Playlist { id } => match Uuid::parse_str(&id) {
            Ok(id) => html! { <PlaylistView {id} /> },
            Err(_) => html! { <NotFound /> },
        },
        Route::Premium => html! { <Premium /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
