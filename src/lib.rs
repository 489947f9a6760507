//! Syntactic validation of email addresses and domain names.
//!
//! The [`validation`] module is the library proper: pure, boolean-valued
//! checks backed by a static TLD registry. The remaining modules expose it
//! as an HTTP service with REST and GraphQL interfaces.

pub mod config;
pub mod graphql;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod validation;
