pub mod api_docs;
pub mod routes;
pub mod routing;
pub mod types;
