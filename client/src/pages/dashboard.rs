//! Dashboard pages: the generic landing view and the teacher and student shells.

use gate::{Role, Route};
use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::state::auth::AuthState;

/// `/dashboard`: any signed-in visitor. Points them at their own dashboard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let home = move || auth.with(AuthState::role).map(|role| (role.profile().label, role.home().path()));

    view! {
        <div class="dashboard dashboard--generic">
            <h1>"Dashboard"</h1>
            {move || {
                home()
                    .map(|(label, path)| {
                        view! {
                            <p>
                                "Signed in as " {label} ". " <a href=path>"Open your dashboard"</a>
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Teacher active=Route::TeacherDashboard title="Teacher Dashboard">
            <p class="dashboard__placeholder">"Your classes and assignments will appear here."</p>
        </DashboardShell>
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Student active=Route::StudentDashboard title="Student Dashboard">
            <p class="dashboard__placeholder">"Your schedule and assignments will appear here."</p>
        </DashboardShell>
    }
}
