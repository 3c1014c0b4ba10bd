//! Properties of user persistence through the HTTP surface

use axum::http::StatusCode;
use proptest::prelude::*;

use crate::common::TestApp;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn repeated_email_inserts_once(
        email in "[a-z]{1,10}@[a-z]{1,8}\\.com",
        names in prop::collection::vec("[A-Za-z]{1,20}", 1..4),
    ) {
        let (count, stored) = runtime().block_on(async {
            let app = TestApp::new().await;
            for name in &names {
                app.add_user(name, &email).await;
            }
            (app.user_count().await, app.user(&email).await.map(|u| u.name))
        });

        prop_assert_eq!(count, 1);
        prop_assert_eq!(stored, Some(names[0].clone()));
    }

    #[test]
    fn deleting_unknown_id_is_not_found(id in any::<i64>()) {
        let outcome = runtime().block_on(async {
            let app = TestApp::new().await;
            app.add_user("Alice", "a@x.com").await;
            let existing = app.user("a@x.com").await.map(|u| u.id);
            if existing == Some(id) {
                return None;
            }
            let status = app.server.get(&format!("/delete/{}", id)).await.status_code();
            Some((status, app.user_count().await))
        });
        prop_assume!(outcome.is_some());

        let (status, count) = outcome.unwrap();
        prop_assert_eq!(status, StatusCode::NOT_FOUND);
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn update_keeps_id_and_date_added(
        name in "[A-Za-z]{1,30}",
        color in prop::option::of("[a-z]{1,12}"),
    ) {
        let (before, after) = runtime().block_on(async {
            let app = TestApp::new().await;
            app.add_user("Alice", "a@x.com").await;
            let before = app.user("a@x.com").await.unwrap();

            let mut form = vec![("name", name.clone()), ("email", "a@x.com".to_string())];
            if let Some(color) = &color {
                form.push(("favorite_color", color.clone()));
            }
            app.server.post(&format!("/update/{}", before.id)).form(&form).await;

            (before, app.user("a@x.com").await.unwrap())
        });

        prop_assert_eq!(after.id, before.id);
        prop_assert_eq!(after.date_added, before.date_added);
        prop_assert_eq!(after.name, name);
        prop_assert_eq!(after.favorite_color, color);
    }
}
