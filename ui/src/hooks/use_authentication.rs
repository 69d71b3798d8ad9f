use payloads::ClientError;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client, session};

/// Hook to restore the stored session on startup
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            let Some(token) = session::load_token() else {
                dispatch.reduce_mut(|state| state.logout());
                return;
            };

            yew::platform::spawn_local(async move {
                let api_client =
                    get_api_client().with_token(Some(token.clone()));
                match api_client.user_profile().await {
                    Ok(profile) => {
                        tracing::debug!("Restored session for {}", profile.email);
                        dispatch.reduce_mut(|state| state.login(token, profile));
                    }
                    Err(ClientError::Network(e)) => {
                        // Keep the stored token; the backend may be back
                        // on the next reload.
                        tracing::warn!("Could not check session: {e}");
                        dispatch.reduce_mut(|state| {
                            state.auth_state = crate::AuthState::LoggedOut;
                        });
                    }
                    Err(e) => {
                        tracing::info!("Stored session rejected: {e}");
                        dispatch.reduce_mut(|state| state.logout());
                    }
                }
            });
        }
    });
}
