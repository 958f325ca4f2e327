#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_token_is_none_without_browser() {
    assert_eq!(load_token(), None);
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save_token(&AuthToken::new("t-1"));
    clear_token();
    assert_eq!(load_token(), None);
}
