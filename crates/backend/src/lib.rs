pub mod api;
pub mod routes;
pub mod shared;
pub mod usecases;
