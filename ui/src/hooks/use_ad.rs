use payloads::{AdId, responses::Ad};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Fetch one ad by id. Ads are public, so no session is needed.
#[hook]
pub fn use_ad(ad_id: AdId) -> FetchHookReturn<Ad> {
    use_fetch(ad_id.clone(), move || {
        let ad_id = ad_id.clone();
        async move {
            get_api_client()
                .get_ad(&ad_id)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
