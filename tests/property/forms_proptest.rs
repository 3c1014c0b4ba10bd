//! Property: a rejected form never reaches the database

use axum::http::StatusCode;
use proptest::prelude::*;

use crate::common::{post_form, user_form, TestApp};

const USER_REQUIRED: [&str; 4] = ["name", "email", "password", "password_confirm"];
const POST_REQUIRED: [&str; 4] = ["title", "content", "author", "slug"];

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn user_form_missing_required_field_is_not_persisted(
        missing in prop::sample::subsequence(USER_REQUIRED.to_vec(), 1..=4),
        blank in any::<bool>(),
    ) {
        let (status, count) = runtime().block_on(async {
            let app = TestApp::new().await;
            let form: Vec<(String, String)> = user_form("Alice", "a@x.com")
                .into_iter()
                .filter_map(|(key, value)| {
                    if !missing.contains(&key.as_str()) {
                        Some((key, value))
                    } else if blank {
                        Some((key, "  ".to_string()))
                    } else {
                        None
                    }
                })
                .collect();
            let response = app.server.post("/user/add").form(&form).await;
            (response.status_code(), app.user_count().await)
        });

        prop_assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        prop_assert_eq!(count, 0);
    }

    #[test]
    fn post_form_missing_required_field_is_not_persisted(
        missing in prop::sample::subsequence(POST_REQUIRED.to_vec(), 1..=4),
    ) {
        let (status, count) = runtime().block_on(async {
            let app = TestApp::new().await;
            let form: Vec<(String, String)> = post_form("Hello")
                .into_iter()
                .filter(|(key, _)| !missing.contains(&key.as_str()))
                .collect();
            let response = app.server.post("/add-post").form(&form).await;
            (response.status_code(), app.post_count().await)
        });

        prop_assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        prop_assert_eq!(count, 0);
    }
}
