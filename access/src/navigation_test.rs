use std::cell::RefCell;

use super::*;

#[test]
fn home_redirect_is_locale_prefixed() {
    assert_eq!(Redirect::home(Locale::Fr).path(), "/fr");
    assert_eq!(Redirect::home(Locale::En).path(), "/en");
}

#[test]
fn nested_redirect_keeps_href() {
    let redirect = Redirect { href: "/agent/listings".to_owned(), locale: Locale::Fr };
    assert_eq!(redirect.path(), "/fr/agent/listings");
}

#[test]
fn fresh_ticket_is_current() {
    let epoch = NavigationEpoch::new();
    let ticket = epoch.enter("/en");
    assert!(ticket.is_current());
    assert!(epoch.ticket().is_current());
}

#[test]
fn later_navigation_supersedes_ticket() {
    let epoch = NavigationEpoch::new();
    let first = epoch.enter("/en/user/favorites");
    let second = epoch.clone().enter("/en/user/bookings");
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn redirect_with_issues_for_current_ticket() {
    let epoch = NavigationEpoch::new();
    let ticket = epoch.enter("/fr/admin");
    let seen = RefCell::new(Vec::new());
    let issued = ticket.redirect_with(&Redirect::home(Locale::Fr), |path| seen.borrow_mut().push(path.to_owned()));
    assert!(issued);
    assert_eq!(seen.into_inner(), vec!["/fr".to_owned()]);
}

#[test]
fn redirect_with_is_noop_for_stale_ticket() {
    let epoch = NavigationEpoch::new();
    let ticket = epoch.enter("/en/admin");
    let _next = epoch.enter("/en/account");
    let mut called = false;
    let issued = ticket.redirect_with(&Redirect::home(Locale::En), |_| called = true);
    assert!(!issued);
    assert!(!called);
}

#[test]
fn entering_same_path_keeps_ticket_current() {
    let epoch = NavigationEpoch::new();
    let outer = epoch.enter("/fr/user/agent/listings");
    let inner = epoch.enter("/fr/user/agent/listings");
    assert!(outer.is_current());
    assert!(inner.is_current());
}

#[test]
fn entering_new_path_supersedes_ticket() {
    let epoch = NavigationEpoch::new();
    let ticket = epoch.enter("/en/admin");
    let _ = epoch.enter("/en");
    assert!(!ticket.is_current());
    assert!(epoch.ticket().is_current());
}

#[test]
fn returning_to_earlier_path_is_a_new_navigation() {
    let epoch = NavigationEpoch::new();
    let first = epoch.enter("/en/user/favorites");
    let _ = epoch.enter("/en/user/bookings");
    let again = epoch.enter("/en/user/favorites");
    assert!(!first.is_current());
    assert!(again.is_current());
}
