use super::*;
use crate::net::types::{AuthToken, UserProfile};

fn session(approved: bool, first_name: &str) -> Session {
    Session::signed_in(
        AuthToken::new("tok"),
        UserProfile {
            id: 3,
            username: "lin".to_owned(),
            first_name: first_name.to_owned(),
            is_approved: approved,
            ..UserProfile::default()
        },
    )
}

#[test]
fn approved_user_sees_page_links() {
    let hrefs: Vec<&str> = nav_links(&session(true, "")).iter().map(|l| l.href).collect();
    assert_eq!(hrefs, ["/dashboard", "/tasks"]);
}

#[test]
fn unapproved_and_anonymous_see_no_page_links() {
    assert!(nav_links(&session(false, "")).is_empty());
    assert!(nav_links(&Session::anonymous()).is_empty());
}

#[test]
fn welcome_prefers_first_name() {
    assert_eq!(welcome_label(&session(false, "Lin")).as_deref(), Some("Welcome, Lin"));
    assert_eq!(welcome_label(&session(true, " ")).as_deref(), Some("Welcome, lin"));
    assert_eq!(welcome_label(&Session::anonymous()), None);
}
