#[cfg(test)]
mod tests {
    use rocket::http::{ContentType, Header, Status};
    use rocket::local::blocking::{Client, LocalResponse};
    use serde_json::json;
    use uuid::Uuid;
    use shared::error::ErrorResponse;
    use shared::models::*;
    use shared::vote_logic::VoteState;
    use crate::{
        build_rocket,
        config::ServerConfig,
        fixtures::{seed_playlists, seeded_store},
        processor::{CommentError, PlaylistProcessor},
        routes::AppState,
    };

    const LATE_NIGHT: &str = "3f1c2a9e-6b1d-4c55-9a0e-1d2f3a4b5c01";
    const DEEP_FOCUS: &str = "3f1c2a9e-6b1d-4c55-9a0e-1d2f3a4b5c03";

    fn client_with(config: ServerConfig) -> Client {
        let state = AppState::new(seeded_store().unwrap(), config);
        Client::tracked(build_rocket(state)).expect("valid rocket instance")
    }

    fn client() -> Client {
        client_with(ServerConfig::default())
    }

    fn vote<'c>(client: &'c Client, id: &str, voter: &str, action: &str) -> LocalResponse<'c> {
        vote_from(client, "198.51.100.1", id, voter, action)
    }

    fn vote_from<'c>(client: &'c Client, ip: &str, id: &str, voter: &str, action: &str) -> LocalResponse<'c> {
        client.post(format!("/api/playlists/{}/vote", id))
            .header(ContentType::JSON)
            .header(Header::new("X-Real-IP", ip.to_string()))
            .header(Header::new("X-Client-Id", voter.to_string()))
            .body(json!({ "action": action }).to_string())
            .dispatch()
    }

    fn comment<'c>(client: &'c Client, id: &str, voter: &str, body: serde_json::Value) -> LocalResponse<'c> {
        client.post(format!("/api/playlists/{}/comments", id))
            .header(ContentType::JSON)
            .header(Header::new("X-Client-Id", voter.to_string()))
            .body(body.to_string())
            .dispatch()
    }

    fn detail(client: &Client, id: &str, voter: &str) -> PlaylistDetail {
        let response = client.get(format!("/api/playlists/{}", id))
            .header(Header::new("X-Client-Id", voter.to_string()))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        response.into_json().unwrap()
    }

    #[test]
    fn test_featured_sorted_and_limited() {
        let client = client();
        let response = client.get("/api/playlists/featured").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let featured: Vec<PlaylistSummary> = response.into_json().unwrap();
        let titles: Vec<_> = featured.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, [
            "Deep Focus Electronica",
            "Peak Hour Workout",
            "Late Night Lo-Fi",
            "Acoustic Rainy Day",
            "Sunday Morning Jazz",
            "Classical for Concentration",
        ]);
        assert_eq!(featured[2].track_count, 4);
        assert_eq!(featured[2].total_duration_seconds, 154 + 187 + 142 + 173);

        let client = client_with(ServerConfig { featured_limit: 2, ..ServerConfig::default() });
        let featured: Vec<PlaylistSummary> = client.get("/api/playlists/featured").dispatch().into_json().unwrap();
        assert_eq!(featured.len(), 2);
    }

    #[test]
    fn test_playlist_detail_errors() {
        let client = client();

        let response = client.get(format!("/api/playlists/{}", Uuid::new_v4())).dispatch();
        assert_eq!(response.status(), Status::NotFound);
        let body: ErrorResponse = response.into_json().unwrap();
        assert_eq!(body.error, "Playlist not found");

        let response = client.get("/api/playlists/not-a-uuid").dispatch();
        assert_eq!(response.status(), Status::BadRequest);

        let response = client.get("/api/playlists/not-a-uuid/similar").dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[test]
    fn test_vote_toggle_round_trip() {
        let client = client();
        assert_eq!(detail(&client, LATE_NIGHT, "alice").user_vote, VoteState::None);

        let response = vote(&client, LATE_NIGHT, "alice", "up");
        assert_eq!(response.status(), Status::Ok);
        let voted: VoteResponse = response.into_json().unwrap();
        assert_eq!((voted.score, voted.user_vote), (129, VoteState::Up));

        let after = detail(&client, LATE_NIGHT, "alice");
        assert_eq!(after.user_vote, VoteState::Up);
        assert_eq!(after.playlist.score, 129);

        let voted: VoteResponse = vote(&client, LATE_NIGHT, "alice", "up").into_json().unwrap();
        assert_eq!((voted.score, voted.user_vote), (128, VoteState::None));
    }

    #[test]
    fn test_voters_are_independent() {
        let client = client();

        let a: VoteResponse = vote(&client, LATE_NIGHT, "alice", "up").into_json().unwrap();
        let b: VoteResponse = vote(&client, LATE_NIGHT, "bob", "up").into_json().unwrap();
        assert_eq!(a.score, 129);
        assert_eq!(b.score, 130);

        let flipped: VoteResponse = vote(&client, LATE_NIGHT, "alice", "down").into_json().unwrap();
        assert_eq!((flipped.score, flipped.user_vote), (128, VoteState::Down));

        assert_eq!(detail(&client, LATE_NIGHT, "bob").user_vote, VoteState::Up);
        assert_eq!(detail(&client, LATE_NIGHT, "carol").user_vote, VoteState::None);
    }

    #[test]
    fn test_vote_rejects_bad_requests() {
        let client = client();

        let response = vote(&client, LATE_NIGHT, "alice", "none");
        assert_eq!(response.status(), Status::UnprocessableEntity);

        let response = vote(&client, &Uuid::new_v4().to_string(), "alice", "up");
        assert_eq!(response.status(), Status::NotFound);
    }

    #[test]
    fn test_vote_rate_limit() {
        let client = client_with(ServerConfig { votes_per_minute: 2, ..ServerConfig::default() });

        assert_eq!(vote(&client, LATE_NIGHT, "alice", "up").status(), Status::Ok);
        assert_eq!(vote(&client, LATE_NIGHT, "alice", "up").status(), Status::Ok);

        let response = vote(&client, LATE_NIGHT, "alice", "up");
        assert_eq!(response.status(), Status::TooManyRequests);
        let body: ErrorResponse = response.into_json().unwrap();
        assert!(body.error.starts_with("Rate limit exceeded"));

        assert_eq!(vote_from(&client, "203.0.113.7", LATE_NIGHT, "bob", "up").status(), Status::Ok);
        assert_eq!(detail(&client, LATE_NIGHT, "alice").playlist.score, 129);
    }

    #[test]
    fn test_vote_rate_limit_ignores_client_id() {
        let client = client_with(ServerConfig { votes_per_minute: 2, ..ServerConfig::default() });

        let statuses: Vec<_> = (0..5)
            .map(|i| vote(&client, LATE_NIGHT, &format!("client-{}", i), "up").status())
            .collect();
        assert_eq!(statuses, [
            Status::Ok,
            Status::Ok,
            Status::TooManyRequests,
            Status::TooManyRequests,
            Status::TooManyRequests,
        ]);
        assert_eq!(detail(&client, LATE_NIGHT, "client-0").playlist.score, 130);
    }

    #[test]
    fn test_unknown_playlist_does_not_use_vote_allowance() {
        let client = client_with(ServerConfig { votes_per_minute: 1, ..ServerConfig::default() });

        let missing = Uuid::new_v4().to_string();
        for _ in 0..3 {
            assert_eq!(vote(&client, &missing, "alice", "up").status(), Status::NotFound);
        }
        assert_eq!(vote(&client, LATE_NIGHT, "alice", "up").status(), Status::Ok);
    }

    #[test]
    fn test_similar_playlists() {
        let client = client();

        let similar: Vec<PlaylistSummary> = client.get(format!("/api/playlists/{}/similar", LATE_NIGHT))
            .dispatch()
            .into_json()
            .unwrap();
        let titles: Vec<_> = similar.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, [
            "Deep Focus Electronica",
            "Acoustic Rainy Day",
            "Sunday Morning Jazz",
            "Classical for Concentration",
        ]);

        let similar: Vec<PlaylistSummary> = client.get(format!("/api/playlists/{}/similar", DEEP_FOCUS))
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(similar[0].title, "Classical for Concentration");
        assert!(similar.iter().all(|p| p.id.to_string() != DEEP_FOCUS));

        let response = client.get(format!("/api/playlists/{}/similar", Uuid::new_v4())).dispatch();
        assert_eq!(response.status(), Status::NotFound);
    }

    #[test]
    fn test_comments_newest_first() {
        let client = client();

        let first = comment(&client, LATE_NIGHT, "alice", json!({ "author": "Alice", "body": "Perfect for coding" }));
        assert_eq!(first.status(), Status::Ok);
        let first: Comment = first.into_json().unwrap();
        assert_eq!(first.author, "Alice");

        let second: Comment = comment(&client, LATE_NIGHT, "bob", json!({ "body": "  more please  " }))
            .into_json()
            .unwrap();
        assert_eq!(second.author, "Anonymous");
        assert_eq!(second.body, "more please");

        let detail = detail(&client, LATE_NIGHT, "carol");
        let ids: Vec<_> = detail.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, [second.id, first.id]);

        let featured: Vec<PlaylistSummary> = client.get("/api/playlists/featured").dispatch().into_json().unwrap();
        let late_night = featured.iter().find(|p| p.id.to_string() == LATE_NIGHT).unwrap();
        assert_eq!(late_night.comment_count, 2);
    }

    #[test]
    fn test_comment_validation_errors() {
        let client = client();

        let response = comment(&client, LATE_NIGHT, "alice", json!({ "body": "   " }));
        assert_eq!(response.status(), Status::BadRequest);
        let body: ErrorResponse = response.into_json().unwrap();
        assert_eq!(body.error, "Comment cannot be empty");

        let response = comment(&client, LATE_NIGHT, "bob", json!({ "author": "Bob" }));
        assert_eq!(response.status(), Status::UnprocessableEntity);

        let response = comment(&client, &Uuid::new_v4().to_string(), "carol", json!({ "body": "hello" }));
        assert_eq!(response.status(), Status::NotFound);
    }

    #[test]
    fn test_comment_rate_limit_is_per_playlist() {
        let client = client_with(ServerConfig { comments_per_minute: 1, ..ServerConfig::default() });

        assert_eq!(comment(&client, LATE_NIGHT, "alice", json!({ "body": "one" })).status(), Status::Ok);
        assert_eq!(comment(&client, LATE_NIGHT, "alice", json!({ "body": "two" })).status(), Status::TooManyRequests);
        assert_eq!(comment(&client, LATE_NIGHT, "bob", json!({ "body": "two" })).status(), Status::TooManyRequests);
        assert_eq!(comment(&client, DEEP_FOCUS, "alice", json!({ "body": "three" })).status(), Status::Ok);
    }

    #[test]
    fn test_plans_and_preflight() {
        let client = client();

        let plans: Vec<PremiumPlan> = client.get("/api/plans").dispatch().into_json().unwrap();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans.iter().filter(|p| p.highlighted).count(), 1);

        let response = client.options("/api/playlists/featured")
            .header(Header::new("Origin", "http://localhost:8080"))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), Some("http://localhost:8080"));

        let response = client.get("/api/plans")
            .header(Header::new("Origin", "https://elsewhere.example"))
            .dispatch();
        assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), None);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "FEATURED_LIMIT" => Some("3".into()),
            "SIMILAR_LIMIT" => Some("lots".into()),
            "CORS_ORIGIN_PREFIX" => Some("https://playlists.example".into()),
            _ => None,
        });
        assert_eq!(config.featured_limit, 3);
        assert_eq!(config.similar_limit, ServerConfig::default().similar_limit);
        assert_eq!(config.cors_origin_prefix, "https://playlists.example");
        assert_eq!(config.votes_per_minute, ServerConfig::default().votes_per_minute);
    }

    #[test]
    fn test_rank_similar_excludes_unrelated() {
        let playlists = seed_playlists().unwrap();
        let punk = playlists.iter().find(|p| p.title == "Basement Punk").unwrap();

        let ranked = PlaylistProcessor::rank_similar(punk, playlists.iter(), 10);
        let titles: Vec<_> = ranked.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Indie Road Trip"]);

        assert!(PlaylistProcessor::rank_similar(punk, playlists.iter(), 0).is_empty());
    }

    #[test]
    fn test_build_comment_rejects_profanity() {
        let id = Uuid::new_v4();
        let request = CreateCommentRequest { author: None, body: "fuck you".into() };
        assert_eq!(PlaylistProcessor::build_comment(id, &request), Err(CommentError::Inappropriate("comment")));

        let request = CreateCommentRequest { author: Some("Ivy".into()), body: "Lovely picks".into() };
        let built = PlaylistProcessor::build_comment(id, &request).unwrap();
        assert_eq!(built.playlist_id, id);
        assert_eq!(built.author, "Ivy");
    }
}
