use payloads::{APIClient, AdId};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod ad_form;
mod components;
mod contexts;
mod hooks;
pub mod logs;
mod pages;
mod session;
mod state;
mod utils;

pub use state::{AuthState, State};

use components::{ToastContainer, layout::Header};
use contexts::toast::ToastProvider;
use hooks::use_authentication;
use pages::{
    AdDetailPage, CreateAdPage, HomePage, LoginPage, NotFoundPage, SettingsPage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    APIClient::new(address)
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <AppShell />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[function_component]
fn AppShell() -> Html {
    use_authentication();

    html! {
        <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
            <Header />
            <ToastContainer />
            <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth")]
    Login,
    #[at("/settings")]
    Settings,
    #[at("/ads/new")]
    CreateAd,
    #[at("/ads/:id")]
    AdDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn ad_detail(ad_id: &AdId) -> Self {
        Self::AdDetail {
            id: ad_id.0.clone(),
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::CreateAd => html! { <CreateAdPage /> },
        Route::AdDetail { id } => html! {
            <AdDetailPage ad_id={AdId(id)} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
