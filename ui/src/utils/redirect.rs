use serde::{Deserialize, Serialize};
use yew_router::Routable;

use crate::Route;

/// Query string of the sign-in page: where to go once signed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl LoginQuery {
    /// Come back to `route` after signing in.
    pub fn returning_to(route: Option<&Route>) -> Self {
        Self {
            redirect: route
                .filter(|route| is_destination(route))
                .map(Route::to_path),
        }
    }

    /// Only paths inside the app are followed; anything else lands on home.
    pub fn destination(&self) -> Route {
        self.redirect
            .as_deref()
            .filter(|path| path.starts_with('/') && !path.starts_with("//"))
            .and_then(Route::recognize)
            .filter(is_destination)
            .unwrap_or(Route::Home)
    }
}

fn is_destination(route: &Route) -> bool {
    !matches!(route, Route::Login | Route::NotFound)
}
