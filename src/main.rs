use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use rusty_golf_handicap::args;
use rusty_golf_handicap::controller::AppState;
use rusty_golf_handicap::controller::leaderboard::configure;
use rusty_golf_handicap::logging::init_logger;
use rusty_golf_handicap::storage::SqliteStorage;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    init_logger(args.verbose);

    let storage = match SqliteStorage::open(&args.db_name) {
        Ok(storage) => storage,
        Err(e) => {
            error!("could not open database {}: {e}", args.db_name);
            std::process::exit(1);
        }
    };
    storage.create_tables().await?;

    if args.db_startup_script.is_some() {
        storage.execute_batch(&args.combined_sql_script).await?;
        info!("ran startup sql");
    }

    let state = AppState::new(Arc::new(storage), args.pickup_policy);
    info!(
        bind_address = %args.bind_address,
        pickup_strokes_over_par = args.pickup_policy.strokes_over_par,
        "starting leaderboard server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .configure(configure)
    })
    .bind(&args.bind_address)?
    .run()
    .await?;
    Ok(())
}
