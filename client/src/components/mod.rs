//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and the route guard wrapper while
//! reading shared auth state from Leptos context providers.

pub mod dashboard_shell;
pub mod header;
pub mod protected_route;
pub mod sidebar;
