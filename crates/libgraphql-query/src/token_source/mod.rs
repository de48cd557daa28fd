//! Token source trait and the `&str` implementation.

mod graphql_token_source;
mod str_graphql_token_source;

pub use graphql_token_source::GraphQLTokenSource;
pub use str_graphql_token_source::StrGraphQLTokenSource;
