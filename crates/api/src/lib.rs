//! Catalog API server library.
//!
//! Exposes the building blocks (config, state, error handling, REST routes,
//! GraphQL schema, gRPC service) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod graphql;
pub mod grpc;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
