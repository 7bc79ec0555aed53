use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use web_sys::Storage;
use crate::config::CONFIG;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn store_json<T: Serialize>(key: &str, value: &T) {
    if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(value)) {
        let _ = storage.set_item(key, &raw);
    }
}

/// Random per-browser id sent with every API call. Empty when storage is unavailable.
pub fn client_id() -> String {
    let Some(storage) = local_storage() else { return String::new() };
    if let Ok(Some(id)) = storage.get_item(CONFIG.client_id_key) {
        return id;
    }
    let id = Uuid::new_v4().to_string();
    match storage.set_item(CONFIG.client_id_key, &id) {
        Ok(()) => id,
        Err(_) => String::new(),
    }
}
