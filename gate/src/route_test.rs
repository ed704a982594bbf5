use super::*;

#[test]
fn root_resolves_to_login() {
    assert_eq!(Route::from_path("/"), Some(Route::Login));
    assert_eq!(Route::from_path("/login"), Some(Route::Login));
}

#[test]
fn every_route_resolves_from_its_own_path() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn trailing_slash_is_tolerated() {
    assert_eq!(Route::from_path("/admin/users/"), Some(Route::AdminUsers));
}

#[test]
fn unknown_paths_do_not_resolve() {
    assert_eq!(Route::from_path("/admin"), None);
    assert_eq!(Route::from_path("/admin/dashboard/extra"), None);
    assert_eq!(Route::from_path(""), None);
}

#[test]
fn login_is_the_only_public_route() {
    let public: Vec<_> = Route::ALL.into_iter().filter(|r| r.access() == Access::Public).collect();
    assert_eq!(public, [Route::Login]);
}

#[test]
fn generic_dashboard_needs_any_authenticated_session() {
    assert_eq!(Route::Dashboard.access(), Access::Authenticated);
    assert_eq!(Route::Dashboard.access().required_role(), None);
}

#[test]
fn admin_sections_require_admin() {
    for route in [Route::AdminDashboard, Route::AdminUsers, Route::AdminClasses, Route::AdminReports] {
        assert_eq!(route.access().required_role(), Some(Role::Admin));
    }
}

#[test]
fn paths_are_unique() {
    let mut paths: Vec<_> = Route::ALL.into_iter().map(Route::path).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), Route::ALL.len());
}
