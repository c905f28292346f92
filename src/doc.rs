//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers the user, product, and health paths, the resource schemas, and
//! the shared error schema every endpoint's failure responses reference. The
//! generated document backs Swagger UI and can be exported with
//! `cargo run --bin openapi-dump` for external tooling.

use crate::models::{Error, ErrorKind, Product, ProductList, User, UserList};
use utoipa::OpenApi;

/// OpenAPI document for the example API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Example API",
        description = "Example API exposing documented user and product listings."
    ),
    servers(
        (url = "http://localhost:3000", description = "Local server")
    ),
    paths(
        crate::api::users::list_users,
        crate::api::products::list_products,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(User, UserList, Product, ProductList, Error, ErrorKind)),
    tags(
        (name = "user", description = "Operations related to users"),
        (name = "product", description = "Operations related to products"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the document registers the declared paths and schemas.

    use super::*;
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn document_lists_the_resource_and_health_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/user", "/product", "/health/ready", "/health/live"] {
            assert!(
                doc.paths.paths.contains_key(path),
                "document should list {path}"
            );
        }
    }

    #[test]
    fn error_schema_exposes_the_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "type");
        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "param");
        assert_object_schema_has_field(error_schema, "details");
    }

    #[test]
    fn resource_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        let user = schemas.get("User").expect("User schema");
        assert_object_schema_has_field(user, "id");
        assert_object_schema_has_field(user, "name");

        let product = schemas.get("Product").expect("Product schema");
        assert_object_schema_has_field(product, "id");
        assert_object_schema_has_field(product, "name");

        assert!(schemas.contains_key("UserList"));
        assert!(schemas.contains_key("ProductList"));
        assert!(schemas.contains_key("ErrorKind"));
    }
}
