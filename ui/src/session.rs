//! Bearer token persisted in `localStorage` across reloads.

use payloads::BearerToken;
use web_sys::Storage;

const TOKEN_KEY: &str = "token";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_token() -> Option<BearerToken> {
    let token = storage()?.get_item(TOKEN_KEY).ok().flatten()?;
    if token.is_empty() {
        return None;
    }
    Some(BearerToken::new(token))
}

pub fn store_token(token: &BearerToken) {
    let stored = storage()
        .map(|storage| storage.set_item(TOKEN_KEY, token.expose()).is_ok());
    if stored != Some(true) {
        tracing::warn!("Could not persist session; it will end on reload");
    }
}

pub fn clear_token() {
    if let Some(storage) = storage() {
        if storage.remove_item(TOKEN_KEY).is_err() {
            tracing::warn!("Could not remove stored session");
        }
    }
}
