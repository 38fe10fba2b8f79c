pub mod controller;
pub mod endpoint;
pub mod routes;
pub mod schema;
