//! Root component, HTML shell and route table.
//!
//! ARCHITECTURE
//! ============
//! `App` provides three contexts: the reactive [`AuthState`], the browser
//! session store, and the [`RolePolicy`] used at login. Every protected page
//! is wrapped in [`ProtectedRoute`], which re-reads the session store on every
//! navigation and re-runs the guard whenever the auth context changes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::protected_route::ProtectedRoute;
use crate::pages::admin::{AdminClassesPage, AdminDashboardPage, AdminReportsPage, AdminUsersPage};
use crate::pages::dashboard::{DashboardPage, StudentDashboardPage, TeacherDashboardPage};
use crate::pages::login::LoginPage;
use crate::state::auth::{AuthState, RolePolicy, read_session};
use crate::util::storage::{BrowserSessionStore, LocalStorageBackend};

/// HTML document rendered by the server around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let store = Arc::new(BrowserSessionStore::new(LocalStorageBackend));
    provide_context(auth);
    provide_context(store.clone());
    provide_context(RolePolicy::default());

    // Effects only run in the browser: read the stored session once hydrated.
    Effect::new({
        let store = store.clone();
        move || auth.set(AuthState::loaded(read_session(&store)))
    });

    // Another tab signing out or editing the stored role.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |_| {
            let refreshed = auth.with_untracked(|current| crate::state::auth::refresh_from_store(&store, current));
            if let Some(next) = refreshed {
                log::debug!("session storage changed in another tab");
                auth.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/classtrack.css"/>
        <Title text="ClassTrack"/>
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LoginPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route
                        path=path!("/dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute route=gate::Route::Dashboard>
                                    <DashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute route=gate::Route::AdminDashboard>
                                    <AdminDashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/users")
                        view=|| {
                            view! {
                                <ProtectedRoute route=gate::Route::AdminUsers>
                                    <AdminUsersPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/classes")
                        view=|| {
                            view! {
                                <ProtectedRoute route=gate::Route::AdminClasses>
                                    <AdminClassesPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/reports")
                        view=|| {
                            view! {
                                <ProtectedRoute route=gate::Route::AdminReports>
                                    <AdminReportsPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=path!("/teacher/dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute route=gate::Route::TeacherDashboard>
                                    <TeacherDashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=path!("/student/dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute route=gate::Route::StudentDashboard>
                                    <StudentDashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href=gate::Route::Login.path()>"Back to sign in"</a>
        </div>
    }
}
