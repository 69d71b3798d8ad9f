use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::utils::redirect::LoginQuery;
use crate::{AuthState, Route, State};

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let on_logout = use_logout();
    let current_route = use_route::<Route>();

    let link_class = "text-sm font-medium text-neutral-700 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white";

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"Rentals"}
                    </Link<Route>>
                    <div class="flex items-center space-x-4">
                        {match &state.auth_state {
                            AuthState::LoggedIn { profile, .. } => html! {
                                <>
                                    if profile.can_publish_ads() {
                                        <Link<Route> to={Route::CreateAd} classes={link_class}>
                                            {"New ad"}
                                        </Link<Route>>
                                    }
                                    <Link<Route> to={Route::Settings} classes={link_class}>
                                        {profile.display_name()}
                                    </Link<Route>>
                                    <button onclick={on_logout} class={link_class}>
                                        {"Sign out"}
                                    </button>
                                </>
                            },
                            AuthState::LoggedOut => html! {
                                <Link<Route, LoginQuery>
                                    to={Route::Login}
                                    query={Some(LoginQuery::returning_to(current_route.as_ref()))}
                                    classes={link_class}
                                >
                                    {"Sign in"}
                                </Link<Route, LoginQuery>>
                            },
                            AuthState::Unknown => html! {},
                        }}
                    </div>
                </div>
            </div>
        </header>
    }
}
