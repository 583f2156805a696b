use super::*;
use crate::server::middleware::gate::{classify, decide, is_matched, GateDecision, RouteClass};

#[test]
fn classifies_routes() {
    assert_eq!(classify("/admin"), RouteClass::Admin);
    assert_eq!(classify("/admin/releases"), RouteClass::Admin);
    assert_eq!(classify("/api/admin/users"), RouteClass::Admin);
    assert_eq!(classify("/profile"), RouteClass::Private);
    assert_eq!(classify("/profile/settings"), RouteClass::Private);
    assert_eq!(classify("/administrator"), RouteClass::Public);
    assert_eq!(classify("/api/releases"), RouteClass::Public);
}

#[test]
fn matches_only_gated_paths() {
    assert!(is_matched("/profile"));
    assert!(is_matched("/profile/edit"));
    assert!(is_matched("/admin"));
    assert!(is_matched("/admin/users"));
    assert!(is_matched("/api/admin/users"));
    assert!(!is_matched("/api/admin"));
    assert!(!is_matched("/api/releases"));
    assert!(!is_matched("/profiles"));
}

/// Expected: Redirect to sign-in carrying the encoded path
#[test]
fn redirects_anonymous_to_sign_in() {
    assert_eq!(
        decide("/admin/releases", None, None),
        GateDecision::Redirect("/auth/signin?callbackUrl=%2Fadmin%2Freleases".to_string())
    );
    assert_eq!(
        decide("/profile", None, None),
        GateDecision::Redirect("/auth/signin?callbackUrl=%2Fprofile".to_string())
    );
    assert_eq!(decide("/api/releases", None, None), GateDecision::Next);
}

/// Expected: 403 for non-admins on admin paths, no redirect
#[test]
fn forbids_non_admin_on_admin_routes() {
    let user = session_user(1, Role::User);

    assert_eq!(decide("/admin", None, Some(&user)), GateDecision::Forbidden);
    assert_eq!(
        decide("/api/admin/users", Some("callbackUrl=%2Fprofile"), Some(&user)),
        GateDecision::Forbidden
    );
    assert_eq!(decide("/profile", None, Some(&user)), GateDecision::Next);
}

#[test]
fn admin_passes_admin_routes() {
    let admin = session_user(1, Role::Admin);

    assert_eq!(decide("/admin/users", None, Some(&admin)), GateDecision::Next);
}

/// Expected: Safe callbacks distinct from the current path redirect, others pass
#[test]
fn follows_safe_callback_once_signed_in() {
    let user = session_user(1, Role::User);

    assert_eq!(
        decide("/profile", Some("callbackUrl=%2Fprofile%2Forders"), Some(&user)),
        GateDecision::Redirect("/profile/orders".to_string())
    );
    assert_eq!(
        decide("/profile", Some("callbackUrl=%2Fprofile"), Some(&user)),
        GateDecision::Next
    );
    assert_eq!(
        decide("/profile", Some("callbackUrl=https%3A%2F%2Fevil.example"), Some(&user)),
        GateDecision::Next
    );
    assert_eq!(
        decide("/profile", Some("callbackUrl=%2F%2Fevil.example"), Some(&user)),
        GateDecision::Next
    );
}

#[test]
fn public_routes_pass_for_signed_in_users() {
    let user = session_user(1, Role::User);

    assert_eq!(
        decide("/api/releases", Some("callbackUrl=%2Fprofile"), Some(&user)),
        GateDecision::Next
    );
}
