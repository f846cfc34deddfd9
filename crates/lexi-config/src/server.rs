use std::env;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5000))
}

fn default_cors() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    /// Allow cross-origin requests from any origin
    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            cors: default_cors(),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        // LEXI_LISTEN wins; a bare PORT (as set by most hosting platforms) only changes the port
        let listen = env::var("LEXI_LISTEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .or_else(|| {
                env::var("PORT")
                    .ok()
                    .and_then(|v| v.parse::<u16>().ok())
                    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
            })
            .unwrap_or_else(default_listen);

        let cors = env::var("LEXI_CORS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_cors);

        Self { listen, cors }
    }
}
