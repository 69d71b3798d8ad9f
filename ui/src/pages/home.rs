use payloads::requests::AdQuery;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{AdCard, Pagination};
use crate::hooks::use_ads;
use crate::{AuthState, Route, State};

#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_store::<State>();
    let query = use_state(AdQuery::default);
    let listing = use_ads((*query).clone());
    let search_ref = use_node_ref();

    let button_class = "inline-flex py-2 px-4 rounded-md text-sm font-medium text-white \
                        bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 \
                        dark:text-neutral-900 dark:hover:bg-neutral-200";

    let on_search = {
        let query = query.clone();
        let search_ref = search_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = search_ref.cast::<HtmlInputElement>() else {
                return;
            };
            query.set(AdQuery::page(1).with_search(&input.value()));
        })
    };

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |page: u32| {
            query.set(AdQuery {
                page: page.max(1),
                ..(*query).clone()
            });
        })
    };

    let on_retry = {
        let refetch = listing.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let greeting = match &state.auth_state {
        AuthState::LoggedIn { profile, .. } => html! {
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {format!("Welcome back, {}", profile.first_name)}
                </h1>
                if profile.can_publish_ads() {
                    <Link<Route> to={Route::CreateAd} classes={button_class}>
                        {"Create an ad"}
                    </Link<Route>>
                }
            </div>
        },
        AuthState::LoggedOut | AuthState::Unknown => html! {
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Find a place to stay, or list your own"}
            </h1>
        },
    };

    let grid = match (listing.data.as_ref(), &listing.error) {
        (_, Some(error)) => html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 space-y-2">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading ads: {error}")}
                </p>
                <button onclick={on_retry} class="text-sm underline">{"Try again"}</button>
            </div>
        },
        (Some(page), None) if page.results.is_empty() => html! {
            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                {"No ads match your search."}
            </p>
        },
        (Some(page), None) => html! {
            <>
                <div class="grid gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3">
                    {for page.results.iter().map(|ad| html! {
                        <AdCard key={ad.id.0.clone()} ad={ad.clone()} />
                    })}
                </div>
                <Pagination
                    current_page={page.current_page}
                    total_pages={page.total_pages}
                    has_previous={page.has_previous()}
                    has_next={page.has_next()}
                    on_page_change={on_page_change}
                    disabled={listing.is_loading}
                />
            </>
        },
        (None, None) => html! {
            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                {"Loading ads..."}
            </p>
        },
    };

    html! {
        <div class="space-y-6">
            {greeting}
            <form onsubmit={on_search} class="flex gap-2">
                <input
                    ref={search_ref}
                    type="search"
                    placeholder="Search cities, regions or keywords..."
                    class="flex-1 px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md
                           bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                />
                <button type="submit" class={button_class}>{"Search"}</button>
            </form>
            if listing.is_loading && listing.data.is_fetched() {
                <p class="text-xs text-neutral-500 dark:text-neutral-400">{"Updating..."}</p>
            }
            {grid}
        </div>
    }
}
