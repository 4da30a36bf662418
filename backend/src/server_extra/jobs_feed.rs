use anyhow::Context;
use axum::{body::Body, http::StatusCode, response::{IntoResponse, Response}};
use tracing::info;

use crate::mock_data::load_catalogue;

async fn _jobs_feed() -> anyhow::Result<Response> {
    let catalogue = load_catalogue().await?;
    info!("Serving job feed with {} jobs", catalogue.jobs.len());
    let data = serde_json::to_vec_pretty(catalogue).context("Failed to serialize job catalogue")?;
    let headers = [
        ("Content-Type", "application/json; charset=utf-8"),
        (
            "Content-Disposition",
            "inline; filename=\"joburio_jobs.json\"",
        ),
    ];
    Ok((headers, Body::from(data)).into_response())
}

/// Serves the whole job catalogue as JSON.
pub async fn jobs_feed() -> Response {
    match _jobs_feed().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("jobs_feed: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::JobCatalogue;

    #[tokio::test]
    async fn feed_is_the_catalogue_as_json() {
        let response = jobs_feed().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json; charset=utf-8");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let feed = serde_json::from_slice::<JobCatalogue>(&bytes).unwrap();
        assert_eq!(&feed, load_catalogue().await.unwrap());
    }
}
