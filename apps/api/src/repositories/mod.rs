//! Database repository layer for Quorum
//!
//! This module provides the data access layer, centralizing all database
//! operations into reusable repositories. Each repository is a cheap
//! clone around the shared connection pool. Every operation is a single
//! SQL statement; consistency relies on PostgreSQL's per-statement
//! guarantees, and no multi-statement transactions are used.

pub mod comment;
pub mod discussion;
pub mod user;
pub mod utils;

pub use comment::CommentRepository;
pub use discussion::DiscussionRepository;
pub use user::UserRepository;
