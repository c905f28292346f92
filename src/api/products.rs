//! Product listing endpoint.

use crate::api::error::ApiResult;
use crate::models::{Error, Product, ProductList};
use actix_web::{get, web};
use serde_json::json;

/// List all products.
#[utoipa::path(
    get,
    path = "/product",
    responses(
        (status = 200, description = "A list of products.", body = ProductList),
        (
            status = 401,
            description = "Unauthorized",
            body = Error,
            example = json!({
                "type": "authentication",
                "code": "unauthorized",
                "message": "Authentication required",
            })
        )
    ),
    tags = ["product"],
    operation_id = "listProducts"
)]
#[get("/product")]
pub async fn list_products() -> ApiResult<web::Json<ProductList>> {
    let data = vec![Product {
        id: "prd_123456".into(),
        name: "Super Cool Product".into(),
    }];
    Ok(web::Json(ProductList { data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn list_products_returns_the_fixture_envelope() {
        let app = actix_test::init_service(App::new().service(list_products)).await;
        let request = actix_test::TestRequest::get().uri("/product").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value,
            json!({ "data": [{ "id": "prd_123456", "name": "Super Cool Product" }] })
        );
    }
}
