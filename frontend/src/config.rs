pub struct Config {
    pub api_base_url: &'static str,
    pub client_id_key: &'static str,
    pub popup_history_key: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            client_id_key: "playlist-discovery.client-id",
            popup_history_key: "playlist-discovery.popups",
        }
    }
}

pub const CONFIG: Config = Config::new();
