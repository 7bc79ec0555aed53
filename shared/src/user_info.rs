use serde::{Serialize, Deserialize};

pub const CLIENT_ID_HEADER: &str = "X-Client-Id";

/// Identifies the voter behind a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_fingerprint: String,
    pub ip: String,
}

pub fn generate_server_fingerprint(ip: &str, user_agent: Option<&str>, client_id: Option<&str>) -> String {
    use base64::engine::general_purpose::URL_SAFE;
    use base64::Engine;
    use sha2::{Sha256, Digest};

    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    if let Some(ua) = user_agent {
        hasher.update(b"|ua:");
        hasher.update(ua.as_bytes());
    }
    if let Some(id) = client_id.filter(|id| !id.trim().is_empty()) {
        hasher.update(b"|client:");
        hasher.update(id.trim().as_bytes());
    }
    URL_SAFE.encode(hasher.finalize())
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for UserInfo {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            let headers = req.headers();
            let ip = headers.get_one("X-Real-IP")
                .or_else(|| headers.get_one("X-Forwarded-For").and_then(|v| v.split(',').next()))
                .map(str::trim)
                .unwrap_or("0.0.0.0")
                .to_string();

            let user_agent = headers.get_one("User-Agent");
            let client_id = headers.get_one(CLIENT_ID_HEADER);
            let fingerprint = generate_server_fingerprint(&ip, user_agent, client_id);

            Outcome::Success(UserInfo {
                user_fingerprint: fingerprint,
                ip,
            })
        }
    }
}
