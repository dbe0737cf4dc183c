//! Session persistence for the frontend
//!
//! The access token and the user profile are kept in localStorage under
//! `pujante_token` / `pujante_user`. A session exists only when both are
//! present and the user entry parses.

use crate::core::User;

/// Storage key for the access token
#[allow(dead_code)]
const STORAGE_KEY_TOKEN: &str = "pujante_token";
/// Storage key for the serialized user
#[allow(dead_code)]
const STORAGE_KEY_USER: &str = "pujante_user";

#[cfg(not(feature = "ssr"))]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Get the access token from localStorage
#[cfg(not(feature = "ssr"))]
pub fn load_token() -> Option<String> {
    storage()?
        .get_item(STORAGE_KEY_TOKEN)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Restore token and user; `None` unless both are stored and valid
#[cfg(not(feature = "ssr"))]
pub fn load_session() -> Option<(String, User)> {
    let token = load_token()?;
    let user_json = storage()?.get_item(STORAGE_KEY_USER).ok()??;
    let user = serde_json::from_str::<User>(&user_json).ok()?;
    Some((token, user))
}

/// Persist a fresh session
#[cfg(not(feature = "ssr"))]
pub fn save_session(token: &str, user: &User) -> Result<(), String> {
    let storage = storage().ok_or("localStorage not available")?;
    let user_json = serde_json::to_string(user).map_err(|e| e.to_string())?;

    storage
        .set_item(STORAGE_KEY_TOKEN, token)
        .map_err(|_| "Failed to store token")?;
    storage
        .set_item(STORAGE_KEY_USER, &user_json)
        .map_err(|_| "Failed to store user")?;
    Ok(())
}

/// Remove the session from localStorage
#[cfg(not(feature = "ssr"))]
pub fn clear_session() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY_TOKEN);
        let _ = storage.remove_item(STORAGE_KEY_USER);
    }
}

/// SSR stubs - there is no session on the server
#[cfg(feature = "ssr")]
pub fn load_token() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn load_session() -> Option<(String, User)> {
    None
}

#[cfg(feature = "ssr")]
pub fn save_session(_token: &str, _user: &User) -> Result<(), String> {
    Ok(())
}

#[cfg(feature = "ssr")]
pub fn clear_session() {}
