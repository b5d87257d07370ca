//! GraphQL endpoint and the GraphiQL explorer.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;
use tracing::{Span, instrument};

use crate::state::AppState;

/// Execute a GraphQL request.
///
/// Errors, including store failures, are reported in the response body's
/// `errors` array with HTTP 200.
#[instrument(skip_all, fields(operation_name = tracing::field::Empty))]
pub async fn graphql(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    let request = request.into_inner();
    if let Some(name) = request.operation_name.as_deref() {
        Span::current().record("operation_name", name);
    }
    state.schema().execute(request).await.into()
}

/// Serve the GraphiQL explorer pointed at `/graphql`.
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
