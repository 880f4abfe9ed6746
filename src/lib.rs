pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod estimation;
pub mod external;
pub mod routing;
pub mod server;
