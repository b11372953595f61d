use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use super::request::parse_history_date;
use super::round::{SharedRound, apply_and_redirect};
use crate::mvu::round::Msg;
use crate::storage::LogStore;

pub async fn show(session: Data<SharedRound>, store: Data<dyn LogStore>) -> impl Responder {
    apply_and_redirect(&session, store.get_ref(), Msg::ShowHistory).await
}

pub async fn hide(session: Data<SharedRound>, store: Data<dyn LogStore>) -> impl Responder {
    apply_and_redirect(&session, store.get_ref(), Msg::HideHistory).await
}

pub async fn delete_latest(
    session: Data<SharedRound>,
    store: Data<dyn LogStore>,
) -> impl Responder {
    apply_and_redirect(&session, store.get_ref(), Msg::DeleteLatest).await
}

/// Rows for `?date=YYYY-MM-DD` (default: the session's round date), newest first.
pub async fn history_json(
    query: web::Query<HashMap<String, String>>,
    session: Data<SharedRound>,
    store: Data<dyn LogStore>,
) -> impl Responder {
    let round_date = match parse_history_date(&query) {
        Ok(Some(date)) => date,
        Ok(None) => session.lock().await.round_date(),
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match store.list(round_date).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            tracing::warn!(error = %e, %round_date, "history query failed");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
