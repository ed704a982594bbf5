//! Route guard wrapper for protected views.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::{AuthState, refresh_from_store};
use crate::util::auth::install_guard_redirect;
use crate::util::storage::BrowserSessionStore;

/// Render `children` only while the guard allows `route`; otherwise navigate
/// to the guard's redirect target. Renders nothing until the session store
/// has been read.
///
/// The store is read again on every navigation, so a session cleared or
/// edited outside the app is seen before the next protected view renders.
#[component]
pub fn ProtectedRoute(route: gate::Route, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<Arc<BrowserSessionStore>>();
    let pathname = use_location().pathname;

    Effect::new(move || {
        pathname.track();
        if let Some(next) = auth.with_untracked(|current| refresh_from_store(&store, current)) {
            auth.set(next);
        }
    });
    install_guard_redirect(auth, route, use_navigate());

    let allowed = Memo::new(move |_| auth.with(|state| state.decision(route)) == Some(gate::Decision::Render));

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
