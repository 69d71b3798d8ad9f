use payloads::{APIClient, ClientError, requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::{State, get_api_client};

/// Which of the two tabs the form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Create account",
        }
    }

    fn busy_label(self) -> &'static str {
        match self {
            Self::SignIn => "Signing in...",
            Self::SignUp => "Creating account...",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub on_success: Callback<responses::UserProfile>,
}

/// Signs in with the credentials and loads the profile that goes with them.
async fn sign_in(
    api_client: APIClient,
    credentials: &requests::LoginCredentials,
) -> Result<(payloads::BearerToken, responses::UserProfile), ClientError> {
    let token = api_client.login(credentials).await?;
    let profile = api_client
        .with_token(Some(token.clone()))
        .user_profile()
        .await?;
    Ok((token, profile))
}

#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let (_state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let mode = use_state(AuthMode::default);
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let mode = mode.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let on_success = props.on_success.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let credentials = requests::LoginCredentials {
                email: email_input.value().trim().to_string(),
                password: password_input.value(),
            };

            if credentials.email.is_empty() || credentials.password.is_empty() {
                error_message.set(Some(
                    "Please enter both email and password".to_string(),
                ));
                return;
            }

            let account = match *mode {
                AuthMode::SignIn => None,
                AuthMode::SignUp => {
                    let full_name = name_ref
                        .cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default();
                    if full_name.trim().is_empty() {
                        error_message.set(Some("Please enter your name".to_string()));
                        return;
                    }
                    Some(requests::CreateAccount::from_full_name(
                        &full_name,
                        credentials.email.clone(),
                        credentials.password.clone(),
                    ))
                }
            };

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                if let Some(account) = &account {
                    if let Err(e) = api_client.create_account(account).await {
                        tracing::warn!("Account creation failed: {e}");
                        error_message.set(Some(e.to_string()));
                        is_loading.set(false);
                        return;
                    }
                    tracing::info!("Created account for {}", account.email);
                }

                match sign_in(api_client, &credentials).await {
                    Ok((token, profile)) => {
                        tracing::info!("Signed in as {}", profile.email);
                        if account.is_some() {
                            toast.success(format!("Welcome, {}!", profile.first_name));
                        }
                        dispatch.reduce_mut(|state| state.login(token, profile.clone()));
                        on_success.emit(profile);
                    }
                    Err(e) => {
                        tracing::warn!("Sign in failed: {e}");
                        dispatch.reduce_mut(|state| state.logout());
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let select_mode = |target: AuthMode| {
        let mode = mode.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| {
            error_message.set(None);
            mode.set(target);
        })
    };

    let on_forgot_password = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            toast.info("Password reset is not available yet");
        })
    };

    let tab_class = |target: AuthMode| {
        if *mode == target {
            "flex-1 py-2 text-sm font-medium rounded-md bg-white dark:bg-neutral-700 shadow-sm"
        } else {
            "flex-1 py-2 text-sm font-medium rounded-md text-neutral-500 dark:text-neutral-400"
        }
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500";
    let label_class = "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2";

    html! {
        <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <div class="mb-6 text-center">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                    {&props.title}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {&props.description}
                </p>
            </div>

            <div class="flex p-1 mb-6 rounded-lg bg-neutral-100 dark:bg-neutral-900" role="tablist">
                <button type="button" role="tab" class={tab_class(AuthMode::SignIn)}
                    onclick={select_mode(AuthMode::SignIn)}>
                    {"Sign in"}
                </button>
                <button type="button" role="tab" class={tab_class(AuthMode::SignUp)}
                    onclick={select_mode(AuthMode::SignUp)}>
                    {"Sign up"}
                </button>
            </div>

            <form onsubmit={on_submit} class="space-y-6">
                if let Some(error) = &*error_message {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }

                if *mode == AuthMode::SignUp {
                    <div>
                        <label for="name" class={label_class}>{"Name"}</label>
                        <input
                            ref={name_ref}
                            type="text"
                            id="name"
                            name="name"
                            autocomplete="name"
                            required={true}
                            class={input_class}
                            placeholder="Your full name"
                        />
                    </div>
                }

                <div>
                    <label for="email" class={label_class}>{"Email"}</label>
                    <input
                        ref={email_ref}
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        required={true}
                        class={input_class}
                        placeholder="you@example.com"
                    />
                </div>

                <div>
                    <label for="password" class={label_class}>{"Password"}</label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        name="password"
                        autocomplete={if *mode == AuthMode::SignUp { "new-password" } else { "current-password" }}
                        required={true}
                        class={input_class}
                        placeholder={if *mode == AuthMode::SignUp { "Choose a password" } else { "Enter your password" }}
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full flex justify-center py-2 px-4 border border-transparent
                           rounded-md shadow-sm text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors duration-200"
                >
                    if *is_loading {
                        {mode.busy_label()}
                    } else {
                        {mode.submit_label()}
                    }
                </button>
            </form>

            if *mode == AuthMode::SignIn {
                <div class="mt-4 text-center">
                    <button type="button" onclick={on_forgot_password}
                        class="text-sm text-neutral-500 hover:text-neutral-700 dark:text-neutral-400 dark:hover:text-neutral-200 underline">
                        {"Forgot password?"}
                    </button>
                </div>
            }
        </div>
    }
}
