//! Background worker consuming row-change events and recording them in the
//! system log, so the back-office log screen reflects mutations made by any
//! server instance.

use std::env;

use config::Config;
use dotenvy::dotenv;
use serde_json::json;

use brandwerk_site::db::establish_connection_pool;
use brandwerk_site::domain::system_log::NewSystemLog;
use brandwerk_site::models::config::ServerConfig;
use brandwerk_site::models::zmq::ZmqChangeEvent;
use brandwerk_site::repository::{DieselRepository, SystemLogWriter};

fn process_change_event<R>(event: ZmqChangeEvent, repo: &R)
where
    R: SystemLogWriter,
{
    let message = format!("{} #{} {}", event.entity, event.entity_id, event.op);
    let log_entry = NewSystemLog::info(
        message,
        Some(json!({
            "entity": event.entity,
            "entity_id": event.entity_id,
            "op": event.op,
        })),
    );

    if let Err(e) = repo.create_system_log(&log_entry) {
        log::error!("Error recording change event: {e}");
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let context = zmq::Context::new();
    let events = context.socket(zmq::SUB).expect("Cannot create zmq socket");
    events
        .connect(&server_config.zmq_events_sub)
        .expect("Cannot connect to zmq port");
    events.set_subscribe(b"").expect("SUBSCRIBE failed");

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    log::info!("Starting change-event worker");

    loop {
        let msg = match events.recv_bytes(0) {
            Ok(msg) => msg,
            Err(e) => {
                log::error!("Error receiving change event: {e}");
                continue;
            }
        };

        match serde_json::from_slice::<ZmqChangeEvent>(&msg) {
            Ok(event) => process_change_event(event, &repo),
            Err(e) => log::error!("Error parsing change event: {e}"),
        }
    }
}
