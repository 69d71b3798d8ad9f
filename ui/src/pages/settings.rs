use payloads::{
    requests::{ChangePassword, UpdateProfile},
    responses::UserProfile,
    schema::FieldErrors,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, components::RequireAuth, contexts::toast::use_toast, get_api_client};

#[function_component]
pub fn SettingsPage() -> Html {
    let render = Callback::from(|profile: UserProfile| {
        let key = profile.id.clone();
        html! { <SettingsForms {key} {profile} /> }
    });

    html! { <RequireAuth {render} /> }
}

#[derive(Properties, PartialEq)]
struct SettingsFormsProps {
    profile: UserProfile,
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
    rounded-md shadow-sm bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
    focus:outline-none focus:ring-2 focus:ring-neutral-500";

const BUTTON_CLASS: &str = "py-2 px-4 rounded-md text-sm font-medium text-white \
    bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 \
    dark:hover:bg-neutral-200 disabled:opacity-50 disabled:cursor-not-allowed";

/// Text input bound to one field of a `use_state` value.
fn bound_input<T: Clone + 'static>(
    state: &UseStateHandle<T>,
    write: fn(&mut T, String),
) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        write(&mut next, input.value());
        state.set(next);
    })
}

#[function_component]
fn SettingsForms(props: &SettingsFormsProps) -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let profile_form = use_state(|| UpdateProfile::from(&props.profile));
    let profile_errors = use_state(FieldErrors::default);
    let passwords = use_state(|| (String::new(), String::new()));
    let password_errors = use_state(FieldErrors::default);
    let is_saving = use_state(|| false);

    let token = state.auth_state.token().cloned();

    let on_profile_submit = {
        let profile_form = profile_form.clone();
        let profile_errors = profile_errors.clone();
        let is_saving = is_saving.clone();
        let toast = toast.clone();
        let token = token.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let update = match (*profile_form).clone().checked() {
                Ok(update) => update,
                Err(errors) => {
                    profile_errors.set(errors);
                    return;
                }
            };
            profile_errors.set(FieldErrors::default());

            let client = get_api_client().with_token(token.clone());
            let is_saving = is_saving.clone();
            let toast = toast.clone();
            let dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                is_saving.set(true);
                let result = match client.update_user_profile(&update).await {
                    Ok(()) => client.user_profile().await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(profile) => {
                        tracing::info!("Updated profile for {}", profile.email);
                        dispatch.reduce_mut(|state| state.update_profile(profile));
                        toast.success("Your profile was updated");
                    }
                    Err(e) => {
                        tracing::warn!("Profile update failed: {e}");
                        toast.error(e.to_string());
                    }
                }
                is_saving.set(false);
            });
        })
    };

    let on_password_submit = {
        let passwords = passwords.clone();
        let password_errors = password_errors.clone();
        let is_saving = is_saving.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (password, confirmation) = &*passwords;
            let change = match ChangePassword::new(password, confirmation) {
                Ok(change) => change,
                Err(errors) => {
                    password_errors.set(errors);
                    return;
                }
            };
            password_errors.set(FieldErrors::default());

            let client = get_api_client().with_token(token.clone());
            let passwords = passwords.clone();
            let is_saving = is_saving.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                is_saving.set(true);
                match client.change_password(&change).await {
                    Ok(()) => {
                        passwords.set((String::new(), String::new()));
                        toast.success("Your password was changed");
                    }
                    Err(e) => {
                        tracing::warn!("Password change failed: {e}");
                        toast.error(e.to_string());
                    }
                }
                is_saving.set(false);
            });
        })
    };

    let field = |id: &'static str,
                 label: &'static str,
                 kind: &'static str,
                 value: String,
                 oninput: Callback<InputEvent>,
                 error: Option<&str>| {
        html! {
            <div>
                <label for={id} class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                    {label}
                </label>
                <input id={id} type={kind} class={INPUT_CLASS} {value} {oninput} />
                if let Some(error) = error {
                    <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error.to_string()}</p>
                }
            </div>
        }
    };

    html! {
        <div class="max-w-2xl space-y-10">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">{"Settings"}</h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Manage your personal information and password."}
                </p>
            </div>

            <form onsubmit={on_profile_submit} class="space-y-4">
                <h2 class="text-lg font-medium">{"Personal information"}</h2>
                <div class="grid grid-cols-2 gap-4">
                    {field("firstName", "First name", "text", profile_form.first_name.clone(),
                        bound_input(&profile_form, |form, value| form.first_name = value),
                        profile_errors.get("firstName"))}
                    {field("lastName", "Last name", "text", profile_form.last_name.clone(),
                        bound_input(&profile_form, |form, value| form.last_name = value),
                        profile_errors.get("lastName"))}
                </div>
                {field("email", "Email", "email", profile_form.email.clone(),
                    bound_input(&profile_form, |form, value| form.email = value),
                    profile_errors.get("email"))}
                {field("phone", "Phone", "tel", profile_form.phone.clone().unwrap_or_default(),
                    bound_input(&profile_form, |form, value| form.phone = Some(value)),
                    None)}
                <button type="submit" class={BUTTON_CLASS} disabled={*is_saving}>
                    {"Save profile"}
                </button>
            </form>

            <form onsubmit={on_password_submit} class="space-y-4">
                <h2 class="text-lg font-medium">{"Change password"}</h2>
                {field("newPassword", "New password", "password", passwords.0.clone(),
                    bound_input(&passwords, |pair, value| pair.0 = value),
                    password_errors.get("newPassword"))}
                {field("confirmPassword", "Confirm password", "password", passwords.1.clone(),
                    bound_input(&passwords, |pair, value| pair.1 = value),
                    password_errors.get("confirmPassword"))}
                <button type="submit" class={BUTTON_CLASS} disabled={*is_saving}>
                    {"Change password"}
                </button>
            </form>
        </div>
    }
}
