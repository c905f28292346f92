//! User listing endpoint.

use crate::api::error::ApiResult;
use crate::models::{Error, User, UserList};
use actix_web::{get, web};
use serde_json::json;

/// List all users.
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "A list of users.", body = UserList),
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
    tags = ["user"],
    operation_id = "listUsers"
)]
#[get("/user")]
pub async fn list_users() -> ApiResult<web::Json<UserList>> {
    let data = vec![User {
        id: "usr_123456".into(),
        name: "Jane".into(),
    }];
    Ok(web::Json(UserList { data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn list_users_returns_the_fixture_envelope() {
        let app = actix_test::init_service(App::new().service(list_users)).await;
        let request = actix_test::TestRequest::get().uri("/user").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value, json!({ "data": [{ "id": "usr_123456", "name": "Jane" }] }));
    }
}
