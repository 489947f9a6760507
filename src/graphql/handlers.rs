use actix_web::{HttpResponse, Responder, web};
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing::debug;

use crate::graphql::schema::AppSchema;

/// Executes a GraphQL request against the application schema.
pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    debug!(operation = ?request.operation_name, "executing graphql request");
    schema.execute(request).await.into()
}

/// Serves the GraphQL Playground, pointed at `/api/v1/graphql`.
///
/// Intended for development; the playground issues arbitrary queries.
pub async fn graphql_playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(
            "/api/v1/graphql",
        )))
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;
