//! Login page: identifier, password and role selection.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gate::Role;
use leptos::prelude::*;

use crate::net::types::LoginForm;

/// Field-level problem caught before any request is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormProblem {
    MissingIdentifier,
    MissingPassword,
}

impl FormProblem {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingIdentifier => "Please enter your email or student number.",
            Self::MissingPassword => "Please enter your password.",
        }
    }
}

/// Check the raw form fields and build a [`LoginForm`].
///
/// # Errors
///
/// Returns the first [`FormProblem`] found.
pub fn validate_form(identifier: &str, password: &str, role: Role) -> Result<LoginForm, FormProblem> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(FormProblem::MissingIdentifier);
    }
    if password.is_empty() {
        return Err(FormProblem::MissingPassword);
    }
    Ok(LoginForm { identifier: identifier.to_owned(), password: password.to_owned(), role })
}

fn role_from_select(value: &str) -> Role {
    value.parse().unwrap_or(Role::Student)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let submit_ctx = (
        expect_context::<RwSignal<crate::state::auth::AuthState>>(),
        expect_context::<std::sync::Arc<crate::util::storage::BrowserSessionStore>>(),
        expect_context::<crate::state::auth::RolePolicy>(),
        leptos_router::hooks::use_navigate(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_form(&identifier.get(), &password.get(), role.get()) {
            Ok(form) => form,
            Err(problem) => {
                error.set(Some(problem.message()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let (auth, store, policy, navigate) = submit_ctx.clone();
            leptos::task::spawn_local(async move {
                let authenticator = crate::net::login::HttpAuthenticator;
                match crate::net::login::sign_in(&authenticator, &store, &form, policy).await {
                    Ok(session) => {
                        let home = crate::util::auth::home_path(session.role);
                        auth.set(crate::state::auth::AuthState::loaded(gate::SessionState::Active(session)));
                        navigate(home, crate::util::auth::replace_options());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(Some(e.user_message()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            busy.set(false);
        }
    };

    let identifier_label = move || role.get().profile().identifier_label;
    let role_options = Role::ALL
        .iter()
        .map(|r| view! { <option value=r.as_str()>{r.profile().label}</option> })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ClassTrack"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-role">"I am a"</label>
                    <select
                        id="login-role"
                        class="login-input"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| role.set(role_from_select(&event_target_value(&ev)))
                    >
                        {role_options}
                    </select>
                    <label class="login-label" for="login-identifier">{identifier_label}</label>
                    <input
                        id="login-identifier"
                        class="login-input"
                        type="text"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
