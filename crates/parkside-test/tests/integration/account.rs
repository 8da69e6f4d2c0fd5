#![allow(clippy::unused_async)]
//! Account flow integration tests.
//!
//! Covers registration and authentication over HTTP against a live database:
//! a freshly registered account can authenticate, and a second registration
//! under the same username is rejected with a 400 and no token.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn registered_account_can_authenticate() {
    let Some(db) = TestDb::create("registered_account_can_authenticate")
        .await
        .expect("Failed to set up test database")
    else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let service = db.service();

    register_user(&service, "ranger", "trail-mix-4")
        .await
        .assert_status(StatusCode::OK);

    let response = TestRequest::post(&format!("{USERS_ROUTE_PREFIX}/authenticate"))
        .json(&serde_json::json!({ "username": "ranger", "password": "trail-mix-4" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let body = response.json();
    assert!(
        body["token"].as_str().is_some_and(|t| !t.is_empty()),
        "authentication should return a token"
    );
    assert_eq!(body["username"], "ranger");
    assert_eq!(body["role"], "user");
}

#[test_log::test(tokio::test)]
async fn duplicate_registration_is_rejected() {
    let Some(db) = TestDb::create("duplicate_registration_is_rejected")
        .await
        .expect("Failed to set up test database")
    else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let service = db.service();

    register_user(&service, "ranger", "trail-mix-4")
        .await
        .assert_status(StatusCode::OK);

    // Same username again, even with a different password
    register_user(&service, "ranger", "another-pass")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    // The original credentials still work
    let token = authenticate(&service, "ranger", "trail-mix-4").await;
    assert!(!token.is_empty());
}

#[test_log::test(tokio::test)]
async fn wrong_password_is_rejected_without_detail() {
    let Some(db) = TestDb::create("wrong_password_is_rejected_without_detail")
        .await
        .expect("Failed to set up test database")
    else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let service = db.service();

    register_user(&service, "ranger", "trail-mix-4")
        .await
        .assert_status(StatusCode::OK);

    let bad_password = TestRequest::post(&format!("{USERS_ROUTE_PREFIX}/authenticate"))
        .json(&serde_json::json!({ "username": "ranger", "password": "wrong" }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let unknown_user = TestRequest::post(&format!("{USERS_ROUTE_PREFIX}/authenticate"))
        .json(&serde_json::json!({ "username": "nobody", "password": "wrong" }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    // Both failure modes produce the same message, so responses do not leak
    // whether the username exists.
    assert_eq!(bad_password.json(), unknown_user.json());
}
