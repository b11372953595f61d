mod common;

use actix_web::http::{StatusCode, header};
use actix_web::web::Data;
use actix_web::{App, test};
use approach_log::model::choices::{Choice, Club, DistRange};
use approach_log::model::entry::StoredEntry;
use approach_log::model::form::HoleForm;
use approach_log::{LogStore, SharedRound, routes};
use common::{round_date, round_model, setup_test_context};

macro_rules! app {
    ($ctx:expr) => {{
        let store: Data<dyn LogStore> = Data::from($ctx.shared_store());
        let session = Data::new(SharedRound::new(round_model()));
        test::init_service(
            App::new()
                .app_data(store)
                .app_data(session)
                .configure(routes),
        )
        .await
    }};
}

fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[tokio::test]
async fn test4_index_shows_first_hole() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let app = app!(ctx);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("1H"), "{body}");
    assert!(body.contains("Par 4"), "{body}");
    assert!(body.contains("Kakegawa GH"), "{body}");
    Ok(())
}

#[tokio::test]
async fn test4_submit_redirects_and_persists() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let app = app!(ctx);

    let form = HoleForm {
        hole_score: 5,
        ..HoleForm::defaults_for(1, 4)
    };
    let req = test::TestRequest::post().uri("/hole").set_form(form).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(location.starts_with("/?hole=1&"), "{location}");

    let req = test::TestRequest::get().uri(&location).to_request();
    let body = body_text(&test::call_and_read_body(&app, req).await);
    assert!(body.contains("2H"), "{body}");
    assert!(body.contains("1H saved"), "{body}");

    let uri = format!("/history.json?date={}", round_date());
    let req = test::TestRequest::get().uri(&uri).to_request();
    let rows: Vec<StoredEntry> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entry.hole_no, 1);
    assert_eq!(rows[0].entry.hole_score, 5);
    assert_eq!(rows[0].entry.putts, 2);
    Ok(())
}

#[tokio::test]
async fn test4_unknown_club_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let app = app!(ctx);

    let payload = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("hole_no", "1")
        .append_pair("dist_range", DistRange::From120.code())
        .append_pair("club", "3H")
        .append_pair("putts", "2")
        .append_pair("hole_score", "4")
        .append_pair("recovery_strokes", "0")
        .finish();
    let req = test::TestRequest::post()
        .uri("/hole")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(ctx.store().list(round_date()).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test4_history_json_rejects_bad_date() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let app = app!(ctx);

    let req = test::TestRequest::get()
        .uri("/history.json?date=05-01-2024")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/history.json").to_request();
    let rows: Vec<StoredEntry> = test::call_and_read_body_json(&app, req).await;
    assert!(rows.is_empty());
    Ok(())
}

#[tokio::test]
async fn test4_session_restores_from_query() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let app = app!(ctx);

    let req = test::TestRequest::get()
        .uri("/?hole=2&start=IN&course=Fuji%20CC")
        .to_request();
    let body = body_text(&test::call_and_read_body(&app, req).await);
    assert!(body.contains("12H"), "{body}");
    assert!(body.contains("Fuji CC"), "{body}");

    // Once the page has loaded, the query no longer moves the session.
    let req = test::TestRequest::get().uri("/?hole=5").to_request();
    let body = body_text(&test::call_and_read_body(&app, req).await);
    assert!(body.contains("12H"), "{body}");
    Ok(())
}

#[tokio::test]
async fn test4_navigation_and_delete_latest() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let app = app!(ctx);

    let req = test::TestRequest::post()
        .uri("/hole")
        .set_form(HoleForm::defaults_for(1, 4))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post().uri("/history/delete-latest").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(ctx.store().list(round_date()).await?.is_empty());

    let req = test::TestRequest::post().uri("/nav/next").to_request();
    let resp = test::call_service(&app, req).await;
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(location.starts_with("/?hole=1&"), "{location}");
    Ok(())
}

#[tokio::test]
async fn test4_green_toggle_keeps_picked_club() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let app = app!(ctx);

    let form = HoleForm {
        dist_range: DistRange::From160,
        club: Club::Iron9,
        ..HoleForm::defaults_for(1, 4)
    };
    let req = test::TestRequest::post()
        .uri("/green?green_on=false")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = body_text(&test::call_and_read_body(&app, req).await);
    assert!(body.contains(r#"<option value="160-180" selected>"#), "{body}");
    assert!(body.contains(r#"<option value="9I" selected>"#), "{body}");
    assert!(body.contains(r#"name="miss_dir""#), "{body}");
    assert!(ctx.store().list(round_date()).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test4_double_post_stores_one_row() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let app = app!(ctx);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/hole")
            .set_form(HoleForm::defaults_for(1, 4))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    let req = test::TestRequest::get().uri("/").to_request();
    let body = body_text(&test::call_and_read_body(&app, req).await);
    assert!(body.contains("3H"), "{body}");
    assert_eq!(ctx.store().list(round_date()).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test4_health() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let app = app!(ctx);
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}
