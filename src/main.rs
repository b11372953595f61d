use approach_log::args;
use approach_log::model::navigator::RoundConfig;
use approach_log::mvu::round::RoundModel;
use approach_log::{LogStore, SharedRound, routes, store_from_args};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = args::args_checks()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        db_type = ?args.db_type,
        db_name = %args.db_name,
        bind = %args.bind,
        "starting approach-log"
    );

    let store = store_from_args(&args);
    // The UI still comes up without a database; each action then reports the failure.
    if let Err(e) = store.init_schema().await {
        tracing::error!(error = %e, "could not create approach_logs");
    }

    let today = chrono::Local::now().date_naive();
    let session = Data::new(SharedRound::new(RoundModel::new(RoundConfig::new(
        today,
        args.default_course.clone(),
    ))));
    let store: Data<dyn LogStore> = Data::from(store);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(session.clone())
            .configure(routes)
            .service(Files::new("/static", "./static"))
    })
    .bind(args.bind.as_str())?
    .run()
    .await?;
    Ok(())
}
