pub mod use_ad;
pub mod use_ads;
pub mod use_authentication;
pub mod use_fetch;
pub mod use_logout;
pub mod use_push_route;
pub mod use_require_auth;

pub use use_ad::use_ad;
pub use use_ads::use_ads;
pub use use_authentication::use_authentication;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_logout::use_logout;
pub use use_push_route::use_push_route;
pub use use_require_auth::{login_form, use_require_auth};

/// Distinguishes "not fetched yet" from a fetched value.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
