//! GraphQL schema and resolvers for Quorum
//!
//! This module contains the async-graphql schema:
//! - Query resolvers: me, getDiscussion, search
//! - Mutation resolvers: register, login, createDiscussion, addComment
//! - Type definitions and the shared pagination contract

pub mod mutation;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, QuorumSchema};
