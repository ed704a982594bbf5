//! Administrator section pages.

use gate::{Role, Route};
use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Admin active=Route::AdminDashboard title="Admin Dashboard">
            <p class="dashboard__placeholder">"School-wide overview."</p>
        </DashboardShell>
    }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Admin active=Route::AdminUsers title="User Management">
            <p class="dashboard__placeholder">"Create, edit and remove accounts."</p>
        </DashboardShell>
    }
}

#[component]
pub fn AdminClassesPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Admin active=Route::AdminClasses title="Class Management">
            <p class="dashboard__placeholder">"Manage classes and teacher assignments."</p>
        </DashboardShell>
    }
}

#[component]
pub fn AdminReportsPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Admin active=Route::AdminReports title="Reports">
            <p class="dashboard__placeholder">"Attendance and performance reports."</p>
        </DashboardShell>
    }
}
