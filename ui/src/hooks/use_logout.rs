use crate::{Route, State};
use yew::prelude::*;
use yewdux::prelude::*;

use super::use_push_route;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let push_route = use_push_route();

    Callback::from(move |_| {
        dispatch.reduce_mut(|state| state.logout());
        push_route.emit(Route::Login);
    })
}
