//! Customer order endpoints.

mod get_order;
mod list_orders;
mod pickup_order;
mod place_order;

use crate::state::AppState;
use axum::Router;
use axum::routing::{get, put};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/customers/{customer_id}/orders",
            get(list_orders::list_orders).post(place_order::place_order),
        )
        .route(
            "/customers/{customer_id}/orders/{order_id}",
            get(get_order::get_order),
        )
        .route(
            "/customers/{customer_id}/orders/{order_id}/pickup",
            put(pickup_order::pickup_order),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use crate::api::testing::app_with_handlers;
    use axum::Router;
    use axum::body::Body;
    use axum::extract::State;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::post;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use taphouse_core::processors::WebhookDispatcher;
    use tower::util::ServiceExt;
    use uuid::Uuid;

    async fn request(
        router: Router,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn order_body(callback_url: Option<&str>) -> serde_json::Value {
        let mut body = json!({
            "customerRef": "tasting-room",
            "beerOrderLines": [
                { "beerId": Uuid::new_v4(), "orderQuantity": 6 }
            ]
        });
        if let Some(url) = callback_url {
            body["orderStatusCallbackUrl"] = json!(url);
        }
        body
    }

    #[tokio::test]
    async fn place_order_returns_created_with_status_new() {
        let app = app_with_handlers(Vec::new()).await;
        let customer_id = Uuid::new_v4();

        let (status, body) = request(
            app.router,
            "POST",
            &format!("/api/v1/customers/{customer_id}/orders"),
            Some(order_body(None)),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["orderStatus"], "NEW");
        assert_eq!(body["customerId"], customer_id.to_string());
        assert_eq!(body["customerRef"], "tasting-room");
        assert_eq!(body["beerOrderLines"].as_array().unwrap().len(), 1);
        assert_eq!(body["version"], 1);
    }

    #[tokio::test]
    async fn place_order_without_lines_is_rejected() {
        let app = app_with_handlers(Vec::new()).await;
        let customer_id = Uuid::new_v4();

        let (status, _) = request(
            app.router,
            "POST",
            &format!("/api/v1/customers/{customer_id}/orders"),
            Some(json!({ "beerOrderLines": [] })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_unknown_order_is_not_found() {
        let app = app_with_handlers(Vec::new()).await;

        let (status, _) = request(
            app.router,
            "GET",
            &format!(
                "/api/v1/customers/{}/orders/{}",
                Uuid::new_v4(),
                Uuid::new_v4()
            ),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_orders_pages_the_customers_orders() {
        let app = app_with_handlers(Vec::new()).await;
        let customer_id = Uuid::new_v4();

        for _ in 0..3 {
            let (status, _) = request(
                app.router.clone(),
                "POST",
                &format!("/api/v1/customers/{customer_id}/orders"),
                Some(order_body(None)),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = request(
            app.router.clone(),
            "GET",
            &format!("/api/v1/customers/{customer_id}/orders?pageNumber=0&pageSize=2"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"].as_array().unwrap().len(), 2);
        assert_eq!(body["totalElements"], 3);
        assert_eq!(body["pageable"]["pageNumber"], 0);
        assert_eq!(body["pageable"]["pageSize"], 2);

        // Defaults apply when no parameters are given.
        let (_, body) = request(
            app.router,
            "GET",
            &format!("/api/v1/customers/{customer_id}/orders"),
            None,
        )
        .await;
        assert_eq!(body["pageable"]["pageNumber"], 0);
        assert_eq!(body["pageable"]["pageSize"], 25);
        assert_eq!(body["content"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn pickup_transitions_the_order() {
        let app = app_with_handlers(Vec::new()).await;
        let customer_id = Uuid::new_v4();

        let (_, order) = request(
            app.router.clone(),
            "POST",
            &format!("/api/v1/customers/{customer_id}/orders"),
            Some(order_body(None)),
        )
        .await;
        let order_id = order["id"].as_str().unwrap().to_string();

        let (status, _) = request(
            app.router.clone(),
            "PUT",
            &format!("/api/v1/customers/{customer_id}/orders/{order_id}/pickup"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, fetched) = request(
            app.router,
            "GET",
            &format!("/api/v1/customers/{customer_id}/orders/{order_id}"),
            None,
        )
        .await;
        assert_eq!(fetched["orderStatus"], "PICKED_UP");
        assert_eq!(fetched["version"], 2);
    }

    #[tokio::test]
    async fn repeated_pickup_is_a_bad_request() {
        let app = app_with_handlers(Vec::new()).await;
        let customer_id = Uuid::new_v4();

        let (_, order) = request(
            app.router.clone(),
            "POST",
            &format!("/api/v1/customers/{customer_id}/orders"),
            Some(order_body(None)),
        )
        .await;
        let order_id = order["id"].as_str().unwrap().to_string();
        let pickup_uri = format!("/api/v1/customers/{customer_id}/orders/{order_id}/pickup");

        let (status, _) = request(app.router.clone(), "PUT", &pickup_uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = request(app.router.clone(), "PUT", &pickup_uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("picked up"));

        // The rejected attempt must not bump the version.
        let (_, fetched) = request(
            app.router,
            "GET",
            &format!("/api/v1/customers/{customer_id}/orders/{order_id}"),
            None,
        )
        .await;
        assert_eq!(fetched["version"], 2);
    }

    /// End-to-end: pickup of an order with a callback URL results in exactly
    /// one POST to the registered webhook endpoint.
    #[tokio::test]
    async fn pickup_notifies_the_callback_url_once() {
        let received: Arc<std::sync::Mutex<Vec<serde_json::Value>>> =
            Arc::new(std::sync::Mutex::new(Vec::new()));

        let stub = Router::new()
            .route(
                "/update",
                post(
                    |State(received): State<Arc<std::sync::Mutex<Vec<serde_json::Value>>>>,
                     axum::Json(body): axum::Json<serde_json::Value>| async move {
                        received.lock().unwrap().push(body);
                        StatusCode::OK
                    },
                ),
            )
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });

        let app = app_with_handlers(vec![Arc::new(WebhookDispatcher::new())]).await;
        let customer_id = Uuid::new_v4();

        let (_, order) = request(
            app.router.clone(),
            "POST",
            &format!("/api/v1/customers/{customer_id}/orders"),
            Some(order_body(Some(&format!("http://{addr}/update")))),
        )
        .await;
        let order_id = order["id"].as_str().unwrap().to_string();

        let (status, _) = request(
            app.router,
            "PUT",
            &format!("/api/v1/customers/{customer_id}/orders/{order_id}/pickup"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        for _ in 0..200 {
            if !received.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        // Give any (incorrect) retry a moment to show up.
        tokio::time::sleep(Duration::from_millis(50)).await;

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["orderId"], order_id);
        assert_eq!(received[0]["previousStatus"], "NEW");
        assert_eq!(received[0]["newStatus"], "PICKED_UP");
    }
}
