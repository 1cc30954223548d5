//! GraphQL type definitions for Quorum
//!
//! Object types wrap the database rows and add field-level resolvers:
//! relation traversal, the `number` alias and live comment counts.

mod comment;
mod connection;
mod discussion;
mod user;

pub use comment::Comment;
pub use connection::{Connection, PageInfo};
pub use discussion::Discussion;
pub use user::{AuthPayload, User};
