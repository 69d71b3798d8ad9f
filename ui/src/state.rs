use payloads::{BearerToken, responses::UserProfile};
use yewdux::prelude::*;

use crate::session;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn {
        token: BearerToken,
        profile: UserProfile,
    },
}

impl AuthState {
    pub fn token(&self) -> Option<&BearerToken> {
        match self {
            Self::LoggedIn { token, .. } => Some(token),
            Self::Unknown | Self::LoggedOut => None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::LoggedIn { profile, .. } => Some(profile),
            Self::Unknown | Self::LoggedOut => None,
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn { .. })
    }

    pub fn login(&mut self, token: BearerToken, profile: UserProfile) {
        session::store_token(&token);
        self.auth_state = AuthState::LoggedIn { token, profile };
    }

    /// Swap in a refreshed profile, keeping the session token.
    pub fn update_profile(&mut self, updated: UserProfile) {
        if let AuthState::LoggedIn { profile, .. } = &mut self.auth_state {
            *profile = updated;
        }
    }

    pub fn logout(&mut self) {
        session::clear_token();
        self.auth_state = AuthState::LoggedOut;
    }
}
