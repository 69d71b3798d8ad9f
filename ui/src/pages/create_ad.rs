use std::cell::RefCell;
use std::rc::Rc;

use payloads::{
    Amenities, BearerToken, MeasureSymbol, MeasureUnit, PriceUnit, PropertyType,
    RentalType, responses::UserProfile, schema,
};
use web_sys::File;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    Route, State,
    ad_form::{
        FormAction, FormStore, Notification, NotificationVariant, Notifier,
        RejectedFiles, StagedImage, SubmissionPipeline, SubmitError, Wizard,
        WizardSection,
        browser::{BrowserAdService, BrowserStaging, ObjectUrls},
    },
    components::{
        CheckboxField, FormHandle, ImageStagingGrid, NumberField, RequireAuth,
        SelectField, TextAreaField, TextField, WizardTabs,
    },
    contexts::toast::use_toast,
    get_api_client,
    hooks::use_push_route,
};

/// `(wire value, label)` pairs for a choice enum.
macro_rules! options {
    ($choice:ty) => {
        <$choice>::ALL
            .iter()
            .map(|choice| (choice.as_str(), choice.label()))
            .collect::<Vec<_>>()
    };
}

#[function_component]
pub fn CreateAdPage() -> Html {
    let render = Callback::from(|profile: UserProfile| {
        if profile.can_publish_ads() {
            html! { <CreateAdForm /> }
        } else {
            html! {
                <div class="p-4 rounded-md bg-neutral-50 dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700">
                    <p class="text-sm text-neutral-700 dark:text-neutral-300">
                        {"Only landlord accounts can publish ads."}
                    </p>
                </div>
            }
        }
    });

    html! { <RequireAuth {render} /> }
}

type Pipeline = SubmissionPipeline<BrowserAdService>;

#[function_component]
fn CreateAdForm() -> Html {
    let (state, _) = use_store::<State>();
    let form = use_reducer(FormStore::default);
    let wizard = use_state(Wizard::default);
    let staging: Rc<RefCell<BrowserStaging>> =
        use_mut_ref(|| BrowserStaging::new(ObjectUrls));
    let force_update = use_force_update();
    let is_submitting = use_state(|| false);
    let toasts = use_toast();
    let push_route = use_push_route();

    let token: Option<BearerToken> = state.auth_state.token().cloned();
    let pipeline: Rc<Pipeline> = use_memo(token, |token| {
        let client = get_api_client().with_token(token.clone());
        SubmissionPipeline::new(BrowserAdService::new(client))
    });

    let on_select = {
        let wizard = wizard.clone();
        let form = form.clone();
        let toasts = toasts.clone();
        Callback::from(move |target: WizardSection| {
            let mut next = (*wizard).clone();
            match next.select(target, form.errors()) {
                Ok(_) => wizard.set(next),
                Err(blocked) => toasts.notify(Notification::new(
                    format!("Finish {} first", blocked.section.label()),
                    format!("{} field(s) still need attention.", blocked.errors.len()),
                    NotificationVariant::Destructive,
                )),
            }
        })
    };

    let on_previous = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.previous();
            wizard.set(next);
        })
    };

    let on_next = {
        let on_select = on_select.clone();
        let active = wizard.active();
        Callback::from(move |_: MouseEvent| {
            if let Some(target) = active.next() {
                on_select.emit(target);
            }
        })
    };

    let on_add_images = {
        let staging = staging.clone();
        let force_update = force_update.clone();
        let toasts = toasts.clone();
        Callback::from(move |files: Vec<File>| {
            let rejected = staging.borrow_mut().add(files);
            if let Some(rejected) = rejected {
                toasts.notify(rejected_notice(&rejected));
            }
            force_update.force_update();
        })
    };

    let on_remove_image = {
        let staging = staging.clone();
        let force_update = force_update.clone();
        Callback::from(move |index: usize| {
            staging.borrow_mut().remove(index);
            force_update.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let wizard = wizard.clone();
        let staging = staging.clone();
        let pipeline = pipeline.clone();
        let is_submitting = is_submitting.clone();
        let toasts = toasts.clone();
        let push_route = push_route.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if pipeline.is_busy() {
                return;
            }

            let candidate = form.value().clone();
            // Cloned so no borrow of the buffer lives across the awaits.
            let images: Vec<StagedImage<File>> = staging.borrow().entries().to_vec();
            let form = form.clone();
            let wizard = wizard.clone();
            let staging = staging.clone();
            let pipeline = pipeline.clone();
            let is_submitting = is_submitting.clone();
            let toasts = toasts.clone();
            let push_route = push_route.clone();

            yew::platform::spawn_local(async move {
                let result = pipeline
                    .submit_with_status(&candidate, &images, |busy| is_submitting.set(busy))
                    .await;

                if let Some(notification) = Notification::for_result(&result) {
                    toasts.notify(notification);
                }

                match result {
                    Ok(ad_id) => {
                        staging.borrow_mut().clear();
                        push_route.emit(Route::ad_detail(&ad_id));
                    }
                    Err(SubmitError::ValidationFailed(errors)) => {
                        form.dispatch(FormAction::MarkSubmitted);
                        let mut next = (*wizard).clone();
                        next.focus_first_invalid(&errors);
                        wizard.set(next);
                    }
                    Err(SubmitError::UploadFailed { .. })
                    | Err(SubmitError::RequestFailed(_))
                    | Err(SubmitError::InFlight) => {}
                }
            });
        })
    };

    let active = wizard.active();
    let flagged: Vec<WizardSection> = if form.was_submitted() {
        WizardSection::ALL
            .into_iter()
            .filter(|section| !section.errors(form.errors()).is_empty())
            .collect()
    } else {
        Vec::new()
    };
    let images: Vec<(String, String)> = staging
        .borrow()
        .entries()
        .iter()
        .map(|entry| (entry.file.name(), entry.preview_url.clone()))
        .collect();
    let busy = *is_submitting;

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Create an ad"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Describe your property, then add a few photos."}
                </p>
            </div>

            <WizardTabs {active} {flagged} on_select={on_select.clone()} />

            <form onsubmit={on_submit} class="space-y-6" novalidate={true}>
                {match active {
                    WizardSection::Basic => basic_section(&form),
                    WizardSection::Details => details_section(&form),
                    WizardSection::Amenities => amenities_section(&form),
                    WizardSection::Images => html! {
                        <ImageStagingGrid
                            {images}
                            on_add={on_add_images}
                            on_remove={on_remove_image}
                            disabled={busy}
                        />
                    },
                }}

                <div class="flex justify-between items-center pt-4 border-t border-neutral-200 dark:border-neutral-700">
                    <button
                        type="button"
                        onclick={on_previous}
                        disabled={active.previous().is_none()}
                        class="py-2 px-4 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 disabled:opacity-50"
                    >
                        {"Previous"}
                    </button>
                    <div class="flex gap-3">
                        if active.next().is_some() {
                            <button
                                type="button"
                                onclick={on_next}
                                class="py-2 px-4 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600"
                            >
                                {"Next"}
                            </button>
                        }
                        <button
                            type="submit"
                            disabled={busy}
                            class="py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            if busy { {"Creating..."} } else { {"Create ad"} }
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}

fn rejected_notice(rejected: &RejectedFiles) -> Notification {
    tracing::debug!("Skipped images: {}", rejected.names.join(", "));
    Notification::new(
        "Invalid files",
        RejectedFiles::DESCRIPTION,
        NotificationVariant::Destructive,
    )
}

fn basic_section(form: &FormHandle) -> Html {
    html! {
        <div class="space-y-4">
            <TextField form={form.clone()} path="title" label="Title" placeholder="Bright loft near the old town" />
            <TextAreaField
                form={form.clone()}
                path="description"
                label="Description"
                placeholder={format!("At least {} characters", schema::DESCRIPTION_MIN_LEN)}
            />
            <SelectField form={form.clone()} path="rentalType" label="Rental type" options={options!(RentalType)} />
        </div>
    }
}

fn details_section(form: &FormHandle) -> Html {
    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <SelectField form={form.clone()} path="property.type" label="Property type" options={options!(PropertyType)} />
            </div>

            <fieldset class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <NumberField form={form.clone()} path="property.price.amount" label="Price" />
                <TextField form={form.clone()} path="property.price.currency" label="Currency" placeholder={schema::DEFAULT_CURRENCY} />
                <SelectField form={form.clone()} path="property.price.unit" label="Per" options={options!(PriceUnit)} />
            </fieldset>

            <fieldset class="grid grid-cols-2 md:grid-cols-5 gap-4">
                <NumberField form={form.clone()} path="property.capacity.rooms" label="Rooms" />
                <NumberField form={form.clone()} path="property.capacity.beds" label="Beds" />
                <NumberField form={form.clone()} path="property.capacity.bathrooms" label="Bathrooms" />
                <NumberField form={form.clone()} path="property.capacity.guests.adults" label="Adults" />
                <NumberField form={form.clone()} path="property.capacity.guests.children" label="Children" />
            </fieldset>

            <fieldset class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField form={form.clone()} path="property.address.street" label="Street" />
                <TextField form={form.clone()} path="property.address.city" label="City" />
                <NumberField form={form.clone()} path="property.address.postal_code" label="Postal code" />
                <TextField form={form.clone()} path="property.address.region" label="Region" />
                <TextField form={form.clone()} path="property.address.country" label="Country" />
                <TextField form={form.clone()} path="property.address.additionalInfo" label="Additional info" />
            </fieldset>

            <fieldset class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <NumberField form={form.clone()} path="property.livingArea.value" label="Living area" />
                <SelectField form={form.clone()} path={schema::LIVING_AREA_UNIT} label="Unit" options={options!(MeasureUnit)} />
                <SelectField form={form.clone()} path={schema::LIVING_AREA_SYMBOL} label="Symbol" options={options!(MeasureSymbol)} />
            </fieldset>
        </div>
    }
}

fn amenities_section(form: &FormHandle) -> Html {
    html! {
        <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
            {for Amenities::FIELDS.iter().map(|(wire, label)| html! {
                <CheckboxField
                    form={form.clone()}
                    path={format!("property.amenities.{wire}")}
                    label={*label}
                />
            })}
        </div>
    }
}
