pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;

pub use api::{
    EndpointDispatcher, FailoverDispatcher, NodeClient, RoundRobinDispatcher, ZImageClient,
};
pub use config::{ApiConfig, Config, DispatchPolicy};
pub use error::{Result, ZImageError};
pub use models::*;
