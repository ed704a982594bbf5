//! View table: every navigable route with its path and access requirement.

use crate::role::Role;

/// Who may render a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, including unauthenticated visitors.
    Public,
    /// Any authenticated session, whatever its role.
    Authenticated,
    /// Only sessions holding this role.
    Role(Role),
}

impl Access {
    /// Required role passed to the guard; `None` for public and any-role routes.
    #[must_use]
    pub fn required_role(self) -> Option<Role> {
        match self {
            Self::Role(role) => Some(role),
            Self::Public | Self::Authenticated => None,
        }
    }
}

/// A navigable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    AdminDashboard,
    AdminUsers,
    AdminClasses,
    AdminReports,
    TeacherDashboard,
    StudentDashboard,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Login,
        Route::Dashboard,
        Route::AdminDashboard,
        Route::AdminUsers,
        Route::AdminClasses,
        Route::AdminReports,
        Route::TeacherDashboard,
        Route::StudentDashboard,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::AdminDashboard => "/admin/dashboard",
            Self::AdminUsers => "/admin/users",
            Self::AdminClasses => "/admin/classes",
            Self::AdminReports => "/admin/reports",
            Self::TeacherDashboard => "/teacher/dashboard",
            Self::StudentDashboard => "/student/dashboard",
        }
    }

    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::Login => Access::Public,
            Self::Dashboard => Access::Authenticated,
            Self::AdminDashboard | Self::AdminUsers | Self::AdminClasses | Self::AdminReports => {
                Access::Role(Role::Admin)
            }
            Self::TeacherDashboard => Access::Role(Role::Teacher),
            Self::StudentDashboard => Access::Role(Role::Student),
        }
    }

    /// Resolve a request path. The root path is the login view; a single
    /// trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(Self::Login);
        }
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
