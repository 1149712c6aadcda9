//! Beer catalog endpoints.

mod get_beer;
mod list_beers;

use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/beer", get(list_beers::list_beers))
        .route("/beer/{beer_id}", get(get_beer::get_beer))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::api::testing::app_with_handlers;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    async fn get_json(
        router: axum::Router,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
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

    #[tokio::test]
    async fn lists_the_seeded_catalog_sorted_by_name() {
        let app = app_with_handlers(Vec::new()).await;
        let (status, body) = get_json(app.router, "/api/v1/beer").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalElements"], 3);
        assert_eq!(body["pageable"]["pageNumber"], 0);
        assert_eq!(body["pageable"]["pageSize"], 25);

        let names: Vec<&str> = body["content"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["beerName"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Galaxy Cat", "Mango Bobs", "Pinball Porter"]);
    }

    #[tokio::test]
    async fn inventory_is_hidden_unless_requested() {
        let app = app_with_handlers(Vec::new()).await;

        let (_, hidden) = get_json(app.router.clone(), "/api/v1/beer").await;
        assert!(hidden["content"][0].get("quantityOnHand").is_none());

        let (_, shown) =
            get_json(app.router, "/api/v1/beer?showInventoryOnHand=true").await;
        assert!(shown["content"][0]["quantityOnHand"].is_number());
    }

    #[tokio::test]
    async fn filters_by_name_and_style() {
        let app = app_with_handlers(Vec::new()).await;

        let (_, by_name) =
            get_json(app.router.clone(), "/api/v1/beer?beerName=Mango%20Bobs").await;
        assert_eq!(by_name["totalElements"], 1);
        assert_eq!(by_name["content"][0]["beerName"], "Mango Bobs");

        let (_, by_style) =
            get_json(app.router, "/api/v1/beer?beerStyle=PORTER").await;
        assert_eq!(by_style["totalElements"], 1);
        assert_eq!(by_style["content"][0]["beerStyle"], "PORTER");
    }

    #[tokio::test]
    async fn get_beer_returns_the_beer_or_404() {
        let app = app_with_handlers(Vec::new()).await;

        let (_, listed) = get_json(app.router.clone(), "/api/v1/beer").await;
        let beer_id = listed["content"][0]["id"].as_str().unwrap().to_string();

        let (status, beer) =
            get_json(app.router.clone(), &format!("/api/v1/beer/{beer_id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(beer["id"], beer_id.as_str());

        let (status, _) = get_json(
            app.router,
            &format!("/api/v1/beer/{}", uuid::Uuid::new_v4()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
