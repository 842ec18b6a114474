//! Auth page: sign-in with demo quick-fill, or create an account.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::directory::{DEMO_ADMIN_EMAIL, DEMO_COMMUNITY_EMAIL};
#[cfg(feature = "hydrate")]
use session::IdentityPatch;
use session::{Role, SessionStore};

#[cfg(feature = "hydrate")]
use crate::pages::dashboard::DASHBOARD_PATH;
use crate::state::auth::AuthState;

pub(crate) const CREDENTIALS_REQUIRED: &str = "Enter your email and password.";
pub(crate) const FIELDS_REQUIRED: &str = "Please fill in all fields.";
pub(crate) const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub(crate) const ROLE_REQUIRED: &str = "Please select your role.";
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) const LOGIN_FAILED: &str = "Login failed. Please check your credentials and try again.";

/// Filled in by the demo buttons; any password works for a directory email.
const DEMO_PASSWORD: &str = "demo123";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(CREDENTIALS_REQUIRED);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Raw register form values, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Wire value from the role select; empty until chosen.
    pub role: String,
    pub organization: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub organization: Option<String>,
}

/// Check required fields, then password confirmation, then role.
pub(crate) fn validate_register_input(input: &RegisterInput) -> Result<Registration, &'static str> {
    let name = input.name.trim();
    let email = input.email.trim();
    if name.is_empty() || email.is_empty() || input.password.is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    if input.password != input.confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    let role = input.role.parse::<Role>().map_err(|_| ROLE_REQUIRED)?;
    let organization = Some(input.organization.trim())
        .filter(|org| !org.is_empty())
        .map(str::to_owned);

    Ok(Registration {
        name: name.to_owned(),
        email: email.to_owned(),
        password: input.password.clone(),
        role,
        organization,
    })
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::default());
    let on_toggle = Callback::new(move |_| mode.update(|m| *m = m.toggled()));

    view! {
        <div class="auth-page">
            <section class="auth-page__hero">
                <p class="auth-page__eyebrow">"Blue Carbon Registry"</p>
                <h1>"Protecting Our Blue Planet"</h1>
                <p class="auth-page__lede">
                    "Track, verify, and account for mangrove restoration credits."
                </p>
            </section>
            <div class="auth-page__form">
                {move || match mode.get() {
                    AuthMode::Login => view! { <LoginForm on_toggle=on_toggle/> }.into_any(),
                    AuthMode::Register => view! { <RegisterForm on_toggle=on_toggle/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm(on_toggle: Callback<()>) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = move || auth.with(|state| state.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|state| state.loading) {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        let store = store.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match store.login(&email_value, &password_value).await {
                Ok(identity) => {
                    log::info!("signed in as {} ({})", identity.email, identity.role);
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("sign-in for {email_value} failed: {e}");
                    info.set(LOGIN_FAILED.to_owned());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (store, navigate, email_value, password_value);
    };

    let fill_demo = move |address: &str| {
        email.set(address.to_owned());
        password.set(DEMO_PASSWORD.to_owned());
    };

    view! {
        <div class="auth-card">
            <h2>"Welcome Back"</h2>
            <p class="auth-card__subtitle">"Sign in to Blue Carbon Registry"</p>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label" for="login-email">"Email"</label>
                <input
                    id="login-email"
                    class="auth-input"
                    type="email"
                    placeholder="your@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="auth-form__label" for="login-password">"Password"</label>
                <input
                    id="login-password"
                    class="auth-input"
                    type="password"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || if busy() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
            <p class="auth-card__subtitle">"Quick Demo Access:"</p>
            <div class="auth-card__demo">
                <button class="btn" type="button" disabled=busy on:click=move |_| fill_demo(DEMO_COMMUNITY_EMAIL)>
                    "Community User"
                </button>
                <button class="btn" type="button" disabled=busy on:click=move |_| fill_demo(DEMO_ADMIN_EMAIL)>
                    "Admin User"
                </button>
            </div>
            <button class="auth-card__toggle" type="button" on:click=move |_| on_toggle.run(())>
                "Don't have an account? Sign up"
            </button>
        </div>
    }
}

#[component]
fn RegisterForm(on_toggle: Callback<()>) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterInput::default());
    let info = RwSignal::new(String::new());
    let busy = move || auth.with(|state| state.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|state| state.loading) {
            return;
        }
        let registration = match form.with(validate_register_input) {
            Ok(registration) => registration,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        let store = store.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Registration { name, email, password, role, organization } = registration;
            let identity = store.register(&email, &password, &name, role).await;
            if organization.is_some() {
                store.update_user(IdentityPatch { organization: Some(organization), ..IdentityPatch::default() });
            }
            log::info!("registered {} as {}", identity.email, identity.role);
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (store, navigate, registration);
    };

    let role_options = Role::ALL
        .into_iter()
        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="auth-card">
            <h2>"Join the Movement"</h2>
            <p class="auth-card__subtitle">"Create your Blue Carbon Registry account"</p>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label" for="register-name">"Full Name"</label>
                {text_input(form, "register-name", "text", "Your name", |f| &mut f.name)}
                <label class="auth-form__label" for="register-role">"Role"</label>
                <select
                    id="register-role"
                    class="auth-input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.role = value);
                    }
                >
                    <option value="" selected=true disabled=true>"Select role"</option>
                    {role_options}
                </select>
                <label class="auth-form__label" for="register-email">"Email"</label>
                {text_input(form, "register-email", "email", "your@email.com", |f| &mut f.email)}
                <label class="auth-form__label" for="register-organization">"Organization (optional)"</label>
                {text_input(form, "register-organization", "text", "Village, NGO, or panchayat", |f| &mut f.organization)}
                <label class="auth-form__label" for="register-password">"Password"</label>
                {text_input(form, "register-password", "password", "Create a password", |f| &mut f.password)}
                <label class="auth-form__label" for="register-confirm">"Confirm Password"</label>
                {text_input(form, "register-confirm", "password", "Repeat the password", |f| &mut f.confirm_password)}
                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || if busy() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
            <button class="auth-card__toggle" type="button" on:click=move |_| on_toggle.run(())>
                "Already have an account? Sign in"
            </button>
        </div>
    }
}

/// Single-line input bound to one field of the register form.
fn text_input(
    form: RwSignal<RegisterInput>,
    id: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    field: fn(&mut RegisterInput) -> &mut String,
) -> impl IntoView {
    view! {
        <input
            id=id
            class="auth-input"
            type=kind
            placeholder=placeholder
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| *field(f) = value);
            }
        />
    }
}
