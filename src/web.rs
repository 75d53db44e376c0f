use std::{convert::Infallible, net::SocketAddr, path::PathBuf};

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_warp::{GraphQLBadRequest, GraphQLResponse};
use tracing::info;
use warp::{http::StatusCode, Filter, Rejection, Reply};

use crate::api::Schema;

const GRAPHQL_PATH: &str = "graphql";

/// Certificate and key for serving over HTTPS.
pub struct Tls {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Serves the GraphQL API at `/graphql` and a playground at `/`.
pub async fn serve(schema: Schema, addr: SocketAddr, tls: Option<Tls>) {
    let graphql = warp::path(GRAPHQL_PATH)
        .and(warp::path::end())
        .and(async_graphql_warp::graphql(schema))
        .and_then(
            |(schema, request): (Schema, async_graphql::Request)| async move {
                Ok::<_, Infallible>(GraphQLResponse::from(schema.execute(request).await))
            },
        );

    let playground = warp::path::end().and(warp::get()).map(|| {
        warp::reply::html(playground_source(GraphQLPlaygroundConfig::new(&format!(
            "/{GRAPHQL_PATH}"
        ))))
    });

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["POST", "GET"]);

    let routes = playground
        .or(graphql)
        .recover(recover)
        .with(cors)
        .with(warp::trace::request());

    if let Some(tls) = tls {
        info!("Listening on https://{addr}");
        warp::serve(routes)
            .tls()
            .cert_path(tls.cert)
            .key_path(tls.key)
            .run(addr)
            .await;
    } else {
        info!("Listening on http://{addr}");
        warp::serve(routes).run(addr).await;
    }
}

async fn recover(err: Rejection) -> Result<impl Reply, Infallible> {
    if let Some(GraphQLBadRequest(err)) = err.find() {
        return Ok(warp::reply::with_status(
            err.to_string(),
            StatusCode::BAD_REQUEST,
        ));
    }
    Ok(warp::reply::with_status(
        "not found".to_string(),
        StatusCode::NOT_FOUND,
    ))
}
