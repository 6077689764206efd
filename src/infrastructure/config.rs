//! Application configuration

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::infrastructure::queues::DEFAULT_QUEUE_CAPACITY;

/// Default size of the request-serving worker pool
pub const DEFAULT_WORKER_THREADS: usize = 12;

/// What happens when a termination signal arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShutdownMode {
    /// Exit the process at once; in-flight requests are dropped
    #[default]
    Immediate,
    /// Stop accepting connections and let in-flight requests finish
    Graceful,
}

impl FromStr for ShutdownMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "graceful" => Ok(Self::Graceful),
            other => bail!("Unknown shutdown mode: {other} (expected 'immediate' or 'graceful')"),
        }
    }
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind the HTTP listener to
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of queued user records
    pub queue_capacity: usize,
    /// Number of tokio worker threads serving requests
    pub worker_threads: usize,
    pub shutdown_mode: ShutdownMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: IpAddr::from([0, 0, 0, 0]),
            server_port: 8080,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            worker_threads: DEFAULT_WORKER_THREADS,
            shutdown_mode: ShutdownMode::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_host = match lookup("SERVER_HOST") {
            Some(host) => host
                .parse()
                .with_context(|| format!("SERVER_HOST must be an IP address, got '{host}'"))?,
            None => defaults.server_host,
        };

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            None => defaults.server_port,
        };

        let queue_capacity = match lookup("QUEUE_CAPACITY") {
            Some(capacity) => capacity
                .parse()
                .context("QUEUE_CAPACITY must be a positive integer")?,
            None => defaults.queue_capacity,
        };
        if queue_capacity == 0 {
            bail!("QUEUE_CAPACITY must be at least 1");
        }

        let worker_threads = match lookup("WORKER_THREADS") {
            Some(workers) => workers
                .parse()
                .context("WORKER_THREADS must be a positive integer")?,
            None => defaults.worker_threads,
        };
        if worker_threads == 0 {
            bail!("WORKER_THREADS must be at least 1");
        }

        let shutdown_mode = match lookup("SHUTDOWN_MODE") {
            Some(mode) => mode.parse().context("Invalid SHUTDOWN_MODE")?,
            None => defaults.shutdown_mode,
        };

        Ok(Self {
            server_host,
            server_port,
            queue_capacity,
            worker_threads,
            shutdown_mode,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}
