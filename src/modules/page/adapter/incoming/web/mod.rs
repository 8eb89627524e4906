pub mod presenter;
pub mod routes;
