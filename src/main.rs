use astra::Server;
use hostel_desk::config::Config;
use hostel_desk::db::{init_db, preferences, Database};
use hostel_desk::{logging, router};

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    logging::init(config.log_json);

    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    match db.with_conn(|conn| preferences::dark_mode(conn)) {
        Ok(dark_mode) => tracing::info!(dark_mode, "theme preference loaded"),
        Err(e) => tracing::warn!(error = %e, "could not read theme preference"),
    }

    tracing::info!(
        addr = %config.addr,
        db = %config.db_path,
        workers = config.max_workers,
        "starting server"
    );

    let server = Server::bind(&config.addr).max_workers(config.max_workers);
    let result = server.serve(move |req, _info| router::respond(req, &db));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}
