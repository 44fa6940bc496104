use crate::{avatar_hash, avatar_url};

use googletest::prelude::*;

#[test]
fn given_known_email_when_hashed_then_matches_gravatar_reference() {
    // Reference value from the Gravatar documentation
    let hash = avatar_hash("MyEmailAddress@example.com ");

    assert_that!(hash, eq("0bc83cb571cd1c50ba6f3e8a78ef1346"));
}

#[test]
fn given_differently_cased_emails_when_hashed_then_hashes_are_equal() {
    assert_that!(
        avatar_hash("Ada@Example.com"),
        eq(&avatar_hash("ada@example.com"))
    );
}

#[test]
fn given_email_when_building_url_then_contains_hash_and_size() {
    let url = avatar_url("ada@example.com", 64);

    assert_that!(url, starts_with("https://www.gravatar.com/avatar/"));
    assert_that!(url, contains_substring(avatar_hash("ada@example.com").as_str()));
    assert_that!(url, ends_with("?s=64&d=identicon"));
}
