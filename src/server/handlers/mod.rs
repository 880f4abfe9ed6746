pub mod fares;
pub mod quotes;
pub mod routes;
