//! Tests for the healthcheck endpoint.

use salvo::http::StatusCode;

use super::helpers::{get, test_service};

#[test_log::test(tokio::test)]
async fn healthcheck_responds_ok() {
    let service = test_service();

    let response = get(&service, "/api/healthcheck")
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.body, "OK");
}
