pub mod handlers;
pub mod middleware;
pub mod quotes;
pub mod routes;

pub use routes::create_router;
