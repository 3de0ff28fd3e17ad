//! Typed accessors over the persisted admin session.
//!
//! Two local-storage entries make up a session: the admin info JSON and the
//! auth token the HTTP layer attaches to every request. Presence alone
//! gates access; there is no expiry or refresh.

use contracts::auth::AdminInfo;
use web_sys::window;

const ADMIN_KEY: &str = "school_admin_session";
const TOKEN_KEY: &str = "school_admin_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(admin: &AdminInfo, token: &str) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(admin) {
            let _ = storage.set_item(ADMIN_KEY, &json);
        }
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn get_admin() -> Option<AdminInfo> {
    let json = local_storage()?.get_item(ADMIN_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ADMIN_KEY);
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
