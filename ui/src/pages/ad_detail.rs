use payloads::{AdId, responses::Ad};
use yew::prelude::*;

use crate::hooks::use_ad;
use crate::utils::time::format_local_date;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ad_id: AdId,
}

#[function_component]
pub fn AdDetailPage(props: &Props) -> Html {
    let ad_hook = use_ad(props.ad_id.clone());

    ad_hook.render("ad", |ad| html! { <AdDetails ad={ad.clone()} /> })
}

#[derive(Properties, PartialEq)]
struct AdDetailsProps {
    ad: Ad,
}

#[function_component]
fn AdDetails(props: &AdDetailsProps) -> Html {
    let ad = &props.ad;
    let property = &ad.property;
    let capacity = &property.capacity;
    let address = &property.address;
    let amenities = property.amenities.enabled_labels();

    let price = property.price.to_string();
    let guests = match capacity.guests.children {
        0 => format!("{} adults", capacity.guests.adults),
        children => {
            format!("{} adults, {children} children", capacity.guests.adults)
        }
    };

    html! {
        <article class="space-y-6">
            <header class="space-y-2">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {&ad.title}
                </h1>
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!(
                        "{} · {} · {}, {}",
                        ad.rental_type.label(),
                        property.property_type.label(),
                        address.city,
                        address.country
                    )}
                </p>
                if !ad.is_verified {
                    <p class="text-xs text-amber-700 dark:text-amber-400">
                        {"Awaiting verification"}
                    </p>
                }
            </header>

            if !ad.pictures.is_empty() {
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    {for ad.pictures.iter().map(|picture| html! {
                        <img
                            key={picture.key.clone()}
                            src={picture.url.clone()}
                            alt={picture.name.clone().unwrap_or_else(|| ad.title.clone())}
                            class="w-full aspect-video object-cover rounded-lg"
                        />
                    })}
                </div>
            }

            <p class="text-neutral-700 dark:text-neutral-300 whitespace-pre-line">
                {&ad.description}
            </p>

            <dl class="grid grid-cols-2 md:grid-cols-3 gap-4 text-sm">
                <Detail term="Price" value={price} />
                <Detail term="Rooms" value={capacity.rooms.to_string()} />
                <Detail term="Beds" value={capacity.beds.to_string()} />
                <Detail term="Bathrooms" value={capacity.bathrooms.to_string()} />
                <Detail term="Guests" value={guests} />
                <Detail
                    term="Living area"
                    value={format!("{} {}", property.living_area.value, property.living_area.symbol)}
                />
                <Detail
                    term="Address"
                    value={format!("{}, {} {}, {}", address.street, address.postal_code, address.city, address.region)}
                />
                <Detail term="Listed" value={format_local_date(ad.created_at)} />
            </dl>

            if !amenities.is_empty() {
                <ul class="flex flex-wrap gap-2">
                    {for amenities.into_iter().map(|label| html! {
                        <li class="px-3 py-1 rounded-full bg-neutral-100 dark:bg-neutral-800 text-sm">
                            {label}
                        </li>
                    })}
                </ul>
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct DetailProps {
    term: AttrValue,
    value: AttrValue,
}

#[function_component]
fn Detail(props: &DetailProps) -> Html {
    html! {
        <div>
            <dt class="text-neutral-500 dark:text-neutral-400">{&props.term}</dt>
            <dd class="font-medium text-neutral-900 dark:text-neutral-100">{&props.value}</dd>
        </div>
    }
}
