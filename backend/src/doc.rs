//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the item endpoints, the health probes and the schemas
//! they exchange. The generated document is served by Swagger UI in debug
//! builds and exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Item, ItemFields};
use crate::inbound::http::health::ProbeStatus;
use crate::inbound::http::items::{ItemRequest, SuccessResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Listings backend API",
        description = "CRUD interface for classifieds item listings and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::remove_item,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Item,
        ItemFields,
        ItemRequest,
        SuccessResponse,
        Error,
        ErrorCode,
        ProbeStatus
    )),
    tags(
        (name = "items", description = "Item listing operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

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

    #[rstest]
    #[case("error")]
    #[case("code")]
    #[case("traceId")]
    fn error_schema_uses_envelope_keys(#[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");
        assert_object_schema_has_field(error_schema, field);
    }

    #[test]
    fn item_fields_schema_is_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let fields = schemas.get("ItemFields").expect("ItemFields schema");
        assert_object_schema_has_field(fields, "phoneNumber");
        assert_object_schema_has_field(fields, "userId");
    }

    #[rstest]
    #[case("/api/items")]
    #[case("/api/items/update/{id}")]
    #[case("/api/items/remove/{id}")]
    #[case("/health/ready")]
    fn item_and_health_paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}
