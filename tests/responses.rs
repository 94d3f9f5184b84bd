use axum_test::http::StatusCode;
use serde_json::{json, Value};

use crate::common::asserts::assert_status;
use crate::common::dummy_data::{
    analysis_submission_object, analysis_submission_string, USER_ALPHA, USER_BETA,
};
use crate::common::environment::with_test_environment;

mod common;

#[tokio::test]
async fn both_analysis_shapes_normalize_to_objects() {
    with_test_environment(|env| async move {
        let resp = env
            .server
            .post("/response/api/submit-response")
            .json(&analysis_submission_object(USER_ALPHA, "Object Form", "Rust"))
            .await;
        assert_status(&resp, StatusCode::OK);
        let record = resp.json::<Value>()["data"].clone();
        assert_eq!(record["title"], "Object Form");
        assert_eq!(record["tech_stack"], json!([{ "name": "Rust" }]));

        let resp = env
            .server
            .post("/response/api/submit-response")
            .json(&analysis_submission_string(USER_ALPHA, "String Form", "Go"))
            .await;
        assert_status(&resp, StatusCode::OK);

        // Both come back from the feed in the structured form
        let resp = env.server.get("/response/api/all-ideas").await;
        assert_status(&resp, StatusCode::OK);
        let records = resp.json::<Value>()["data"].clone();
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 2);
        for record in records {
            assert!(record["title"].is_string());
            assert!(record["tech_stack"].is_array());
            assert!(record["response"].is_null());
        }
    })
    .await;
}

#[tokio::test]
async fn tech_stack_filter_matches_exactly() {
    with_test_environment(|env| async move {
        for (title, tech) in [
            ("Idea One", "Rust"),
            ("Idea Two", "Node.js"),
            ("Idea Three", "Rust"),
        ] {
            let resp = env
                .server
                .post("/response/api/submit-response")
                .json(&analysis_submission_object(USER_ALPHA, title, tech))
                .await;
            assert_status(&resp, StatusCode::OK);
        }

        let resp = env
            .server
            .get("/response/api/all-ideas")
            .add_query_param("techStack", "Rust")
            .await;
        assert_status(&resp, StatusCode::OK);
        let records = resp.json::<Value>()["data"].clone();
        let records = records.as_array().unwrap().clone();
        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|record| record["tech_stack"] == json!([{ "name": "Rust" }])));

        // No exact match, no results
        let resp = env
            .server
            .get("/response/api/all-ideas")
            .add_query_param("techStack", "rust")
            .await;
        assert_eq!(resp.json::<Value>()["data"], json!([]));
    })
    .await;
}

#[tokio::test]
async fn user_listing_is_scoped_to_the_given_user() {
    with_test_environment(|env| async move {
        let resp = env
            .server
            .post("/response/api/submit-response")
            .json(&analysis_submission_object(USER_ALPHA, "Alpha Idea", "Rust"))
            .await;
        assert_status(&resp, StatusCode::OK);

        let resp = env
            .server
            .post("/response/api/submit-response")
            .json(&analysis_submission_object(USER_BETA, "Beta Idea", "Go"))
            .await;
        assert_status(&resp, StatusCode::OK);

        let resp = env
            .server
            .get("/response/api/ideas")
            .add_query_param("userId", USER_ALPHA)
            .await;
        assert_status(&resp, StatusCode::OK);
        let records = resp.json::<Value>()["data"].clone();
        assert_eq!(records.as_array().unwrap().len(), 1);
        assert_eq!(records[0]["title"], "Alpha Idea");

        // userId is required
        let resp = env.server.get("/response/api/ideas").await;
        assert_status(&resp, StatusCode::BAD_REQUEST);
    })
    .await;
}

#[tokio::test]
async fn invalid_analysis_documents_reject() {
    with_test_environment(|env| async move {
        // A string that is not serialized JSON
        let resp = env
            .server
            .post("/response/api/submit-response")
            .json(&json!({ "userId": USER_ALPHA, "response": "plain text" }))
            .await;
        assert_status(&resp, StatusCode::BAD_REQUEST);
        assert_eq!(resp.json::<Value>()["error"], "invalid_input");

        // An object missing its title
        let resp = env
            .server
            .post("/response/api/submit-response")
            .json(&json!({ "response": { "desc": "no title" } }))
            .await;
        assert_status(&resp, StatusCode::BAD_REQUEST);

        let resp = env.server.get("/response/api/all-ideas").await;
        assert_eq!(resp.json::<Value>()["data"], json!([]));
    })
    .await;
}
