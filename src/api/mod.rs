//! API Module
//!
//! Protocol front-end: declares the callable operations, dispatches incoming
//! calls to the tool handlers, and maps error kinds to protocol error codes.
//!
//! # Endpoints
//! - `GET /tools` - List callable operations and their input schemas
//! - `POST /tools/:name` - Invoke an operation
//! - `GET /cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;
pub mod schema;

pub use handlers::AppState;
pub use routes::create_router;
