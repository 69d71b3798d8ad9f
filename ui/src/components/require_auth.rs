use payloads::responses::UserProfile;
use yew::prelude::*;

use crate::hooks::{login_form, use_require_auth};

/// Renders `render` with the signed-in profile, or an inline login form.
///
/// Children mount only once a profile exists, so their hooks never run for
/// signed-out visitors.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub render: Callback<UserProfile, Html>,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    match use_require_auth() {
        Some(profile) => props.render.emit(profile),
        None => login_form(),
    }
}
