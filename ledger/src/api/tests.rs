#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::api::app::create_app;
    use crate::domain::models::{NewTransaction, Summary, Transaction};
    use crate::domain::repository::MockTransactionRepository;
    use crate::domain::service::MockRateGuard;
    use actix_web::http::header::ContentType;
    use actix_web::{test, App};
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::Arc;

    const LIMIT_KEY: &str = "test-rate-limit";

    fn allow_all() -> MockRateGuard {
        let mut guard = MockRateGuard::new();
        guard.expect_allow().returning(|_| Ok(true));
        guard
    }

    fn coffee(id: i32) -> Transaction {
        Transaction {
            id,
            user_id: "u1".to_string(),
            title: "Coffee".to_string(),
            amount: dec!(-4.50),
            category: "Food & Drinks".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        }
    }

    macro_rules! init_app {
        ($repo:expr, $guard:expr) => {
            test::init_service(App::new().configure(create_app(
                Arc::new($repo),
                Arc::new($guard),
                LIMIT_KEY.to_string(),
            )))
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_bypasses_the_rate_guard() {
        // no expectation on the guard: asking it would fail the test
        let app = init_app!(MockTransactionRepository::new(), MockRateGuard::new());

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[actix_web::test]
    async fn test_get_transactions_returns_rows_for_user() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_list_by_user()
            .with(eq("u1"))
            .returning(|_| Ok(vec![coffee(2), coffee(1)]));

        let app = init_app!(repo, allow_all());

        let req = test::TestRequest::get()
            .uri("/api/transactions/u1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!([
                {
                    "id": 2,
                    "user_id": "u1",
                    "title": "Coffee",
                    "amount": "-4.50",
                    "category": "Food & Drinks",
                    "created_at": "2025-05-20"
                },
                {
                    "id": 1,
                    "user_id": "u1",
                    "title": "Coffee",
                    "amount": "-4.50",
                    "category": "Food & Drinks",
                    "created_at": "2025-05-20"
                }
            ])
        );
    }

    #[actix_web::test]
    async fn test_denied_request_gets_429_before_any_service_work() {
        let mut guard = MockRateGuard::new();
        guard
            .expect_allow()
            .with(eq(LIMIT_KEY))
            .returning(|_| Ok(false));

        // the repository has no expectations: it must never be reached
        let app = init_app!(MockTransactionRepository::new(), guard);

        let req = test::TestRequest::get()
            .uri("/api/transactions/u1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 429);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"message": "Too many requests. Please try again later."})
        );
    }

    #[actix_web::test]
    async fn test_guard_failure_is_not_a_silent_allow() {
        let mut guard = MockRateGuard::new();
        guard
            .expect_allow()
            .returning(|_| Err(anyhow::anyhow!("redis unreachable")));

        let app = init_app!(MockTransactionRepository::new(), guard);

        let req = test::TestRequest::get()
            .uri("/api/transactions/u1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Internal Server Error"}));
    }

    #[actix_web::test]
    async fn test_create_returns_created_row() {
        let mut repo = MockTransactionRepository::new();
        let expected = NewTransaction {
            user_id: "u1".to_string(),
            title: "Coffee".to_string(),
            amount: dec!(-4.50),
            category: "Food & Drinks".to_string(),
        };
        repo.expect_insert()
            .with(eq(expected))
            .returning(|_| Ok(coffee(7)));

        let app = init_app!(repo, allow_all());

        let req = test::TestRequest::post()
            .uri("/api/transactions")
            .insert_header(ContentType::json())
            .set_payload(
                r#"{"user_id": "u1", "title": "Coffee", "amount": "-4.50", "category": "Food & Drinks"}"#,
            )
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], json!(7));
        assert_eq!(body["amount"], json!("-4.50"));
    }

    #[actix_web::test]
    async fn test_create_with_missing_field_is_rejected() {
        // amount left out entirely; nothing may reach the repository
        let app = init_app!(MockTransactionRepository::new(), allow_all());

        let req = test::TestRequest::post()
            .uri("/api/transactions")
            .insert_header(ContentType::json())
            .set_payload(r#"{"user_id": "u1", "title": "Coffee", "category": "Food & Drinks"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "All fields are required"}));
    }

    #[actix_web::test]
    async fn test_delete_returns_the_removed_row() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_delete_by_id()
            .with(eq(7))
            .returning(|_| Ok(Some(coffee(7))));

        let app = init_app!(repo, allow_all());

        let req = test::TestRequest::delete()
            .uri("/api/transactions/7")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Transaction deleted successfully"));
        assert_eq!(body["transaction"]["id"], json!(7));
    }

    #[actix_web::test]
    async fn test_delete_with_non_numeric_id_is_rejected() {
        let app = init_app!(MockTransactionRepository::new(), allow_all());

        let req = test::TestRequest::delete()
            .uri("/api/transactions/abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Invalid transaction ID"}));
    }

    #[actix_web::test]
    async fn test_delete_missing_row_is_404() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_delete_by_id()
            .with(eq(999999))
            .returning(|_| Ok(None));

        let app = init_app!(repo, allow_all());

        let req = test::TestRequest::delete()
            .uri("/api/transactions/999999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Transaction not found"}));
    }

    #[actix_web::test]
    async fn test_summary_reports_the_three_aggregates() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_summarize().with(eq("u1")).returning(|_| {
            Ok(Summary {
                balance: dec!(2995.50),
                income: dec!(3000.00),
                expenses: dec!(-4.50),
            })
        });

        let app = init_app!(repo, allow_all());

        let req = test::TestRequest::get()
            .uri("/api/transactions/summary/u1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"balance": "2995.50", "income": "3000.00", "expenses": "-4.50"})
        );
    }

    #[actix_web::test]
    async fn test_store_failures_never_leak_details() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_list_by_user()
            .returning(|_| Err(anyhow::anyhow!("connection reset by peer")));

        let app = init_app!(repo, allow_all());

        let req = test::TestRequest::get()
            .uri("/api/transactions/u1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Internal Server Error"}));
    }
}
