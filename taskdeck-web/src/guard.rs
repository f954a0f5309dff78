//! Session check run before a protected route is entered.

use crate::credentials::CredentialStore;
use crate::routes::Route;

/// Result of checking a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allowed,
    Redirected(Route),
}

/// Decides whether `route` may be entered.
///
/// Protected routes need a non-empty token in `credentials`; the token is not
/// validated, so an expired one still passes. Everything else is allowed.
/// The in-memory session state is not consulted.
pub fn check(route: Route, credentials: &dyn CredentialStore) -> GuardOutcome {
    if !route.is_protected() {
        return GuardOutcome::Allowed;
    }
    match credentials.token() {
        Some(token) if !token.is_empty() => GuardOutcome::Allowed,
        _ => {
            log::info!("no session token; redirecting {route:?} to {:?}", Route::Home);
            GuardOutcome::Redirected(Route::Home)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;

    #[test]
    fn dashboard_without_token_redirects_home() {
        let credentials = MemoryCredentialStore::new();
        assert_eq!(
            check(Route::Dashboard, &credentials),
            GuardOutcome::Redirected(Route::Home)
        );
    }

    #[test]
    fn dashboard_with_any_token_is_allowed() {
        let credentials = MemoryCredentialStore::with_token("expired-or-forged");
        assert_eq!(check(Route::Dashboard, &credentials), GuardOutcome::Allowed);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let credentials = MemoryCredentialStore::with_token("");
        assert_eq!(
            check(Route::Dashboard, &credentials),
            GuardOutcome::Redirected(Route::Home)
        );
    }

    #[test]
    fn public_routes_are_always_allowed() {
        let credentials = MemoryCredentialStore::new();
        assert_eq!(check(Route::Home, &credentials), GuardOutcome::Allowed);
        assert_eq!(check(Route::NotFound, &credentials), GuardOutcome::Allowed);
    }

    #[test]
    fn every_attempt_reads_the_store_again() {
        let credentials = MemoryCredentialStore::with_token("tok");
        assert_eq!(check(Route::Dashboard, &credentials), GuardOutcome::Allowed);

        credentials.clear_token();
        assert_eq!(
            check(Route::Dashboard, &credentials),
            GuardOutcome::Redirected(Route::Home)
        );
    }
}
