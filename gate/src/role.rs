//! Closed role set and the per-role profile table.
//!
//! DESIGN
//! ======
//! Every role-dependent choice (home route, labels, theme, navigation) is read
//! from [`RoleProfile`]. Callers never match on role strings; the only place a
//! raw string becomes a [`Role`] is [`Role::from_str`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::route::Route;

/// Error returned when a string is not one of the three known roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: {0:?}")]
pub struct InvalidRoleError(pub String);

/// A visitor's role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Teacher, Role::Student];

    /// Wire and storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }

    /// Presentation and routing attributes for this role.
    #[must_use]
    pub fn profile(self) -> &'static RoleProfile {
        match self {
            Self::Admin => &PROFILES[0],
            Self::Teacher => &PROFILES[1],
            Self::Student => &PROFILES[2],
        }
    }

    /// Canonical home route for this role.
    #[must_use]
    pub fn home(self) -> Route {
        self.profile().home
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            other => Err(InvalidRoleError(other.to_owned())),
        }
    }
}

/// Sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

/// Role-specific home route, labels and theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleProfile {
    pub role: Role,
    /// Where a visitor with this role lands after login or a role mismatch.
    pub home: Route,
    /// Header label (e.g. `"Administrator"`).
    pub label: &'static str,
    /// Single-letter avatar initial.
    pub initial: char,
    /// Avatar gradient utility classes.
    pub avatar_gradient: &'static str,
    /// Label of the identifier field on the login form.
    pub identifier_label: &'static str,
    pub nav: &'static [NavItem],
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem { route: Route::AdminDashboard, label: "Dashboard" },
    NavItem { route: Route::AdminUsers, label: "Users" },
    NavItem { route: Route::AdminClasses, label: "Classes" },
    NavItem { route: Route::AdminReports, label: "Reports" },
];

const TEACHER_NAV: &[NavItem] = &[NavItem { route: Route::TeacherDashboard, label: "Dashboard" }];

const STUDENT_NAV: &[NavItem] = &[NavItem { route: Route::StudentDashboard, label: "Dashboard" }];

static PROFILES: [RoleProfile; 3] = [
    RoleProfile {
        role: Role::Admin,
        home: Route::AdminDashboard,
        label: "Administrator",
        initial: 'A',
        avatar_gradient: "from-blue-500 to-purple-600",
        identifier_label: "Email Address",
        nav: ADMIN_NAV,
    },
    RoleProfile {
        role: Role::Teacher,
        home: Route::TeacherDashboard,
        label: "Teacher",
        initial: 'T',
        avatar_gradient: "from-red-500 to-red-600",
        identifier_label: "Email Address",
        nav: TEACHER_NAV,
    },
    RoleProfile {
        role: Role::Student,
        home: Route::StudentDashboard,
        label: "Student",
        initial: 'S',
        avatar_gradient: "from-blue-500 to-blue-600",
        identifier_label: "Student Number",
        nav: STUDENT_NAV,
    },
];

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;
