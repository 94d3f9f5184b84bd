use axum_test::http::StatusCode;
use axum_test::TestResponse;

pub fn assert_status(response: &TestResponse, status: StatusCode) {
    assert_eq!(response.status_code(), status, "{:#?}", response);
}
