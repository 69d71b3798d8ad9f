use payloads::{requests::AdQuery, responses::AdPage};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Fetch one page of the public listing. Refetches when the query changes.
#[hook]
pub fn use_ads(query: AdQuery) -> FetchHookReturn<AdPage> {
    use_fetch(query.clone(), move || {
        let query = query.clone();
        async move {
            get_api_client()
                .list_ads(&query)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
