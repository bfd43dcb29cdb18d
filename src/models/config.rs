//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub zmq_email_pub: String,
    pub zmq_events_pub: String,
    pub zmq_events_sub: String,
    pub templates_dir: String,
    pub upload_dir: String,
    pub backup_dir: String,
    pub secret: String,
}
