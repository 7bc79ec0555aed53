pub mod processor;
pub mod routes;
pub mod store;
pub mod cors;
pub mod error;
pub mod utils;
pub mod rate_limiter;
pub mod catchers;
pub mod config;
pub mod fixtures;

use rocket::{Build, Rocket, catchers, routes};
use routes::AppState;

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    let cors = cors::Cors::new(state.config.cors_origin_prefix.clone());

    rocket::build()
        .attach(cors)
        .manage(state)
        .mount(
            "/api",
            routes![
                routes::featured_playlists,
                routes::get_playlist,
                routes::similar_playlists,
                routes::cast_vote,
                routes::post_comment,
                routes::premium_plans,
                routes::all_options
            ],
        )
        .register(
            "/",
            catchers![
                catchers::bad_request,
                catchers::forbidden,
                catchers::not_found,
                catchers::unprocessable,
                catchers::too_many_requests,
                catchers::internal_error
            ],
        )
}

#[cfg(test)]
mod tests;
