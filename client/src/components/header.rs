//! Dashboard header: role label, avatar, and sign-out.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use std::sync::Arc;

use gate::{Role, RoleProfile};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::replace_options;
use crate::util::storage::BrowserSessionStore;

fn avatar_class(profile: &RoleProfile) -> String {
    format!("header__avatar bg-gradient-to-br {}", profile.avatar_gradient)
}

#[component]
pub fn Header(role: Role, title: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<Arc<BrowserSessionStore>>();
    let navigate = use_navigate();
    let profile = role.profile();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let store = store.clone();
        let navigate = navigate.clone();
        let finish = move || {
            auth.set(AuthState::loaded(gate::SessionState::Empty));
            navigate(gate::Route::Login.path(), replace_options());
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::login::sign_out(&crate::net::login::HttpAuthenticator, &store).await {
                log::warn!("session clear failed: {e}");
            }
            finish();
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = store;
            finish();
        }
    };

    view! {
        <header class="header">
            <h1 class="header__title">{title}</h1>
            <div class="header__user">
                <span class=avatar_class(profile)>{profile.initial.to_string()}</span>
                <span class="header__role">{profile.label}</span>
                <button class="header__logout" on:click=on_logout disabled=move || busy.get()>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
