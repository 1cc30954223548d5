//! GraphQL mutations for Quorum

mod auth;
mod discussion;

pub use auth::AuthMutation;
pub use discussion::DiscussionMutation;

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(AuthMutation, DiscussionMutation);
