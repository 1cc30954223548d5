//! GraphQL queries for Quorum

mod discussion;
mod user;

pub use discussion::DiscussionQuery;
pub use user::UserQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(UserQuery, DiscussionQuery);
