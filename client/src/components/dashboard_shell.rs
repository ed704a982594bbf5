//! Shared layout for role dashboards.

use gate::Role;
use leptos::prelude::*;

use super::header::Header;
use super::sidebar::Sidebar;

/// Header and sidebar for `role`, with `children` as the main content.
#[component]
pub fn DashboardShell(role: Role, active: gate::Route, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard">
            <Header role title/>
            <div class="dashboard__body">
                <Sidebar role active/>
                <section class="dashboard__content">{children()}</section>
            </div>
        </div>
    }
}
