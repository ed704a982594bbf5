//! Role navigation sidebar built from the role profile table.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use gate::{NavItem, Role, Route};
use leptos::prelude::*;

fn nav_class(item: &NavItem, active: Route) -> &'static str {
    if item.route == active { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

#[component]
pub fn Sidebar(role: Role, active: Route) -> impl IntoView {
    let items = role
        .profile()
        .nav
        .iter()
        .map(|item| {
            view! {
                <li>
                    <a class=nav_class(item, active) href=item.route.path()>
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">{items}</ul>
        </nav>
    }
}
