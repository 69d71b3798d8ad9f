use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::LoginForm;
use crate::hooks::use_push_route;
use crate::state::State;
use crate::utils::redirect::LoginQuery;

#[function_component]
pub fn LoginPage() -> Html {
    let push_route = use_push_route();
    let (state, _) = use_store::<State>();
    let destination = use_location()
        .and_then(|location| location.query::<LoginQuery>().ok())
        .unwrap_or_default()
        .destination();

    // Already signed in, or just signed in: go where we were sent from.
    {
        let push_route = push_route.clone();
        let destination = destination.clone();
        use_effect_with(state.is_authenticated(), move |is_auth| {
            if *is_auth {
                push_route.emit(destination);
            }
        });
    }

    let on_auth_success = Callback::from(move |_profile: responses::UserProfile| {
        push_route.emit(destination.clone());
    });

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <LoginForm
                title="Welcome"
                description="Sign in or create an account to continue"
                on_success={on_auth_success}
            />
        </div>
    }
}
