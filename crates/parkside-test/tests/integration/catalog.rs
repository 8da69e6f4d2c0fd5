#![allow(clippy::unused_async, clippy::too_many_lines)]
//! Park and trail catalog integration tests.
//!
//! Exercises the admin CRUD surface over HTTP against a live database:
//! delete semantics, normalized duplicate-name rejection, and the full
//! create/update/delete flow across parks and trails.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn deleting_missing_park_returns_not_found() {
    let Some(db) = TestDb::create("deleting_missing_park_returns_not_found")
        .await
        .expect("Failed to set up test database")
    else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let service = db.service();
    let token = admin_token(&db, &service).await;

    TestRequest::delete(&format!("{PARKS_ROUTE_PREFIX}/{}", uuid::Uuid::now_v7()))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn deleting_park_removes_it() {
    let Some(db) = TestDb::create("deleting_park_removes_it")
        .await
        .expect("Failed to set up test database")
    else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let service = db.service();
    let token = admin_token(&db, &service).await;

    let id = create_park(&service, &token, "Yosemite", "California", "1890-10-01").await;

    TestRequest::delete(&format!("{PARKS_ROUTE_PREFIX}/{id}"))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    TestRequest::get(&format!("{PARKS_ROUTE_PREFIX}/{id}"))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn normalized_duplicate_park_name_is_rejected_without_mutation() {
    let Some(db) = TestDb::create("normalized_duplicate_park_name_is_rejected_without_mutation")
        .await
        .expect("Failed to set up test database")
    else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let service = db.service();
    let token = admin_token(&db, &service).await;

    create_park(&service, &token, "Yellowstone", "Wyoming", "1872-03-01").await;

    // Same name modulo case and surrounding whitespace
    TestRequest::post(PARKS_ROUTE_PREFIX)
        .bearer(&token)
        .json(&serde_json::json!({
            "name": "  YELLOWSTONE  ",
            "state": "Montana",
            "established": "1900-01-01",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // The stored park is untouched and no second record appeared
    let parks = TestRequest::get(PARKS_ROUTE_PREFIX)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    let parks = parks.as_array().expect("park list should be an array");

    assert_eq!(parks.len(), 1);
    assert_eq!(parks[0]["name"], "Yellowstone");
    assert_eq!(parks[0]["state"], "Wyoming");
}

#[test_log::test(tokio::test)]
async fn admin_manages_parks_and_trails_end_to_end() {
    let Some(db) = TestDb::create("admin_manages_parks_and_trails_end_to_end")
        .await
        .expect("Failed to set up test database")
    else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let service = db.service();
    let token = admin_token(&db, &service).await;

    // Create a park and check the Location header points at it
    let created = TestRequest::post(PARKS_ROUTE_PREFIX)
        .bearer(&token)
        .json(&serde_json::json!({
            "name": "Glacier",
            "state": "Montana",
            "established": "1910-05-11",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    let park_id = created.json()["id"]
        .as_str()
        .and_then(|s| uuid::Uuid::parse_str(s).ok())
        .expect("park creation should return an id");
    assert_eq!(
        created.header("location"),
        Some(format!("{PARKS_ROUTE_PREFIX}/{park_id}").as_str())
    );

    // Add a trail to it
    let trail_id = TestRequest::post(TRAIL_ROUTE_PREFIX)
        .bearer(&token)
        .json(&serde_json::json!({
            "name": "Highline Trail",
            "distance_km": 19.0,
            "elevation_gain_m": 600.0,
            "difficulty": "moderate",
            "national_park_id": park_id,
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .json()["id"]
        .as_str()
        .and_then(|s| uuid::Uuid::parse_str(s).ok())
        .expect("trail creation should return an id");

    // Rename the park; the body id must match the path id
    TestRequest::patch(&format!("{PARKS_ROUTE_PREFIX}/{park_id}"))
        .bearer(&token)
        .json(&serde_json::json!({
            "id": park_id,
            "name": "Glacier National Park",
            "state": "Montana",
            "established": "1910-05-11",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let park = TestRequest::get(&format!("{PARKS_ROUTE_PREFIX}/{park_id}"))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(park["name"], "Glacier National Park");
    assert_eq!(park["established"], "1910-05-11");

    // The trail is listed under the park
    let trails = TestRequest::get(&format!(
        "{TRAIL_ROUTE_PREFIX}/GetTrailInNationalPark/{park_id}"
    ))
    .send(&service)
    .await
    .assert_status(StatusCode::OK)
    .json();
    let trails = trails.as_array().expect("trail list should be an array");
    assert_eq!(trails.len(), 1);
    assert_eq!(trails[0]["name"], "Highline Trail");

    // Tear both down again
    TestRequest::delete(&format!("{TRAIL_ROUTE_PREFIX}/{trail_id}"))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    TestRequest::delete(&format!("{PARKS_ROUTE_PREFIX}/{park_id}"))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    TestRequest::get(&format!("{PARKS_ROUTE_PREFIX}/{park_id}"))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
