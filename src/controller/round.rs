use actix_web::http::header;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::history;
use super::request::{ConfigForm, GreenForm, SessionParams};
use crate::model::form::HoleForm;
use crate::mvu::round::{Deps, Msg, RoundModel};
use crate::mvu::runtime::run_round;
use crate::storage::LogStore;
use crate::view::round::render_round_page;

/// The one player's session, shared by every handler.
pub type SharedRound = Mutex<RoundModel>;

/// Register every page and action route.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/config", web::post().to(configure))
        .route("/nav/prev", web::post().to(prev))
        .route("/nav/next", web::post().to(next))
        .route("/green", web::post().to(set_green))
        .route("/hole", web::post().to(submit_hole))
        .route("/round/new", web::post().to(new_round))
        .route("/history/show", web::post().to(history::show))
        .route("/history/hide", web::post().to(history::hide))
        .route("/history/delete-latest", web::post().to(history::delete_latest))
        .route("/history.json", web::get().to(history::history_json))
        .route("/health", web::get().to(HttpResponse::Ok));
}

/// Feed one message through the session loop. Storage failures have already
/// become a notice on the model by the time they are logged here.
pub(crate) async fn dispatch(model: &mut RoundModel, msg: Msg, store: &dyn LogStore) {
    if let Err(e) = run_round(model, msg, Deps { store }).await {
        tracing::warn!(error = %e, hole = model.navigator.current_hole(), "round update failed");
    }
}

/// `303 See Other` back to the page, carrying the session in the query string.
pub(crate) fn see_other(model: &RoundModel) -> HttpResponse {
    let query = SessionParams::from_navigator(&model.navigator).to_query_string();
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/?{query}")))
        .finish()
}

pub(crate) async fn apply_and_redirect(
    session: &SharedRound,
    store: &dyn LogStore,
    msg: Msg,
) -> HttpResponse {
    let mut model = session.lock().await;
    dispatch(&mut model, msg, store).await;
    see_other(&model)
}

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    session: Data<SharedRound>,
    store: Data<dyn LogStore>,
) -> impl Responder {
    let mut model = session.lock().await;
    let params = SessionParams::from_query(&query);
    if params != SessionParams::default() {
        dispatch(&mut model, Msg::Restore(params), store.get_ref()).await;
    }
    dispatch(&mut model, Msg::PageLoad, store.get_ref()).await;

    let notice = model.notice.take();
    let markup = render_round_page(&model, notice.as_ref());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn configure(
    form: web::Form<ConfigForm>,
    session: Data<SharedRound>,
    store: Data<dyn LogStore>,
) -> impl Responder {
    let mut model = session.lock().await;
    let config = form
        .into_inner()
        .into_config(&model.navigator.config().course_name);
    tracing::info!(
        round_date = %config.round_date,
        course = %config.course_name,
        start = ?config.start_side,
        green = ?config.green_type,
        "round configured"
    );
    dispatch(&mut model, Msg::Configure(config), store.get_ref()).await;
    see_other(&model)
}

pub async fn prev(session: Data<SharedRound>, store: Data<dyn LogStore>) -> impl Responder {
    apply_and_redirect(&session, store.get_ref(), Msg::Prev).await
}

pub async fn next(session: Data<SharedRound>, store: Data<dyn LogStore>) -> impl Responder {
    apply_and_redirect(&session, store.get_ref(), Msg::Next).await
}

/// The result toggle posts the whole hole form so current selections survive the reload.
pub async fn set_green(
    toggle: web::Query<GreenForm>,
    form: web::Form<HoleForm>,
    session: Data<SharedRound>,
    store: Data<dyn LogStore>,
) -> impl Responder {
    let msg = Msg::SetGreenOn {
        green_on: toggle.green_on,
        draft: Some(form.into_inner()),
    };
    apply_and_redirect(&session, store.get_ref(), msg).await
}

pub async fn submit_hole(
    form: web::Form<HoleForm>,
    session: Data<SharedRound>,
    store: Data<dyn LogStore>,
) -> impl Responder {
    apply_and_redirect(&session, store.get_ref(), Msg::Submit(form.into_inner())).await
}

pub async fn new_round(session: Data<SharedRound>, store: Data<dyn LogStore>) -> impl Responder {
    apply_and_redirect(&session, store.get_ref(), Msg::NewRound).await
}
