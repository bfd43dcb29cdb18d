//! Background ZeroMQ publisher.
//!
//! Request handlers never touch the socket directly: messages go through an
//! mpsc channel to a dedicated thread, so a slow or dead subscriber cannot
//! stall a response.

use std::sync::mpsc;
use std::thread;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZmqSendError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("sender thread is gone")]
    Disconnected,
}

#[derive(Debug, Clone)]
pub struct ZmqSenderOptions {
    pub endpoint: String,
}

impl ZmqSenderOptions {
    /// PUB socket bound to the given endpoint.
    #[must_use]
    pub fn pub_default(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }
}

pub struct ZmqSender {
    tx: mpsc::Sender<Vec<u8>>,
}

impl ZmqSender {
    /// Binds the PUB socket and starts the forwarding thread.
    pub fn start(options: ZmqSenderOptions) -> Result<Self, zmq::Error> {
        let context = zmq::Context::new();
        let socket = context.socket(zmq::PUB)?;
        socket.bind(&options.endpoint)?;

        let (tx, rx) = mpsc::channel::<Vec<u8>>();

        thread::spawn(move || {
            for message in rx {
                if let Err(e) = socket.send(message, 0) {
                    log::error!("Failed to publish ZMQ message: {e}");
                }
            }
        });

        Ok(Self { tx })
    }

    /// Serializes and enqueues a message for publication.
    pub fn send<T: Serialize>(&self, message: &T) -> Result<(), ZmqSendError> {
        let bytes = serde_json::to_vec(message)?;
        self.tx.send(bytes).map_err(|_| ZmqSendError::Disconnected)
    }
}

/// The two publishers the application holds: outbound email and row-change
/// events.
pub struct ZmqSenders {
    pub email: ZmqSender,
    pub events: ZmqSender,
}
