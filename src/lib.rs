pub mod client;
pub mod config;
pub mod employees;
pub mod error;
pub mod filters;
pub mod google;
pub mod master;
pub mod model;
pub mod photos;
pub mod routes;
