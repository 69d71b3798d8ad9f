use payloads::responses::Ad;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AdCardProps {
    pub ad: Ad,
}

/// Summary tile for the listing grid.
#[function_component]
pub fn AdCard(props: &AdCardProps) -> Html {
    let ad = &props.ad;
    let property = &ad.property;
    let capacity = &property.capacity;

    html! {
        <Link<Route> to={Route::ad_detail(&ad.id)}
            classes="block overflow-hidden rounded-lg border border-neutral-200 dark:border-neutral-700 hover:shadow-md transition-shadow">
            if let Some(picture) = ad.pictures.first() {
                <img src={picture.url.clone()} alt={ad.title.clone()}
                    class="w-full h-48 object-cover" />
            } else {
                <div class="w-full h-48 bg-neutral-100 dark:bg-neutral-800"></div>
            }
            <div class="p-4 space-y-3">
                <div>
                    <h2 class="font-semibold text-neutral-900 dark:text-neutral-100">{&ad.title}</h2>
                    <p class="text-sm text-neutral-500 dark:text-neutral-400">
                        {format!("{}, {}", property.address.city, property.address.country)}
                    </p>
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-400 line-clamp-2">
                    {&ad.description}
                </p>
                <div class="flex justify-between items-center">
                    <span class="font-semibold">{property.price.to_string()}</span>
                    <span class="px-2 py-0.5 rounded-full bg-neutral-100 dark:bg-neutral-800 text-xs">
                        {property.property_type.label()}
                    </span>
                </div>
                <p class="text-xs text-neutral-500 dark:text-neutral-400">
                    {format!(
                        "{} rooms · {} beds · {} baths",
                        capacity.rooms, capacity.beds, capacity.bathrooms
                    )}
                </p>
            </div>
        </Link<Route>>
    }
}
