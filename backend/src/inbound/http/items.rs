//! Item listing handlers.
//!
//! ```text
//! GET    /api/items
//! PUT    /api/items                {"id":"...","title":"Lamp",...}
//! PUT    /api/items/update/{id}    {"title":"Lamp",...}
//! DELETE /api/items/remove/{id}
//! ```

use actix_web::{HttpRequest, delete, error::JsonPayloadError, get, put, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Error, Item, ItemDraft, ItemId, ItemValidationError, NewItem};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Item payload accepted by the create and update endpoints.
///
/// Fields are raw JSON so that missing values are reported as one
/// validation error instead of a deserialisation failure, and so that
/// scalars such as a numeric phone number are stored as text. `id` is only
/// read on create.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    #[schema(value_type = Option<String>, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Option<Value>,
    #[schema(value_type = Option<String>, example = "Lamp")]
    pub title: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    #[schema(value_type = Option<String>, example = "Main St")]
    pub location: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub city: Option<Value>,
    #[schema(value_type = Option<String>, example = "555-0100")]
    pub phone_number: Option<Value>,
    #[schema(value_type = Option<String>, example = "Bob")]
    pub user_name: Option<Value>,
    #[schema(value_type = Option<String>, example = "u1")]
    pub user_id: Option<Value>,
}

/// Text of a mandatory value. Falsy scalars and structured values count as
/// absent.
fn required_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text),
        Value::Bool(true) => Some(true.to_string()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n.abs() > 0.0) => {
            Some(number.to_string())
        }
        _ => None,
    }
}

/// Text of an optional value. Any scalar is kept; `null` and structured
/// values count as absent.
fn optional_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl ItemRequest {
    fn into_parts(self) -> (Option<String>, ItemDraft) {
        let Self {
            id,
            title,
            description,
            location,
            city,
            phone_number,
            user_name,
            user_id,
        } = self;
        let draft = ItemDraft {
            title: required_text(title),
            description: optional_text(description),
            location: required_text(location),
            city: optional_text(city),
            phone_number: required_text(phone_number),
            user_name: required_text(user_name),
            user_id: required_text(user_id),
        };
        (required_text(id), draft)
    }
}

/// Body returned by successful mutations.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    fn ok() -> web::Json<Self> {
        web::Json(Self { success: true })
    }
}

fn map_validation_error(err: ItemValidationError) -> Error {
    let fields = match err {
        ItemValidationError::EmptyId => vec!["id"],
        ItemValidationError::MissingFields { fields } => fields,
    };
    Error::mandatory_fields_missing().with_details(json!({ "fields": fields }))
}

fn map_payload_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = req.path(), error = %err, "rejected unreadable item payload");
    Error::mandatory_fields_missing()
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}

/// JSON extractor configuration reporting unreadable bodies as missing
/// mandatory fields.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(map_payload_error)
}

/// Register the item routes and their JSON configuration on a scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use listings_backend::inbound::http::items;
///
/// let app = App::new().service(web::scope("/api").configure(items::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(list_items)
        .service(create_item)
        .service(update_item)
        .service(remove_item);
}

/// List every stored item.
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All stored items", body = [Item]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Item>>> {
    let items = state.items_query.list().await?;
    Ok(web::Json(items))
}

/// Create an item under a client-generated id.
#[utoipa::path(
    put,
    path = "/api/items",
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item created", body = SuccessResponse),
        (status = 400, description = "Mandatory fields are missing", body = Error),
        (status = 406, description = "An item with this id already exists", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[put("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<ItemRequest>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let (id, draft) = payload.into_inner().into_parts();
    let item = NewItem::try_from_parts(id, draft).map_err(map_validation_error)?;
    state.items.create(item).await?;
    Ok(SuccessResponse::ok())
}

/// Overwrite the fields of an existing item.
///
/// The stored id and date are kept; an `id` in the body is ignored.
/// `description` and `city` keep their stored values when omitted.
#[utoipa::path(
    put,
    path = "/api/items/update/{id}",
    params(("id" = String, Path, description = "Item identifier")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item updated", body = SuccessResponse),
        (status = 400, description = "Mandatory fields are missing", body = Error),
        (status = 404, description = "Item not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/update/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ItemRequest>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let (_, draft) = payload.into_inner().into_parts();
    let changes = draft.validate().map_err(map_validation_error)?;
    // An empty id can never match a stored item.
    let id = ItemId::new(path.into_inner()).map_err(|_| Error::item_not_found())?;
    state.items.update(id, changes).await?;
    Ok(SuccessResponse::ok())
}

/// Delete an item.
#[utoipa::path(
    delete,
    path = "/api/items/remove/{id}",
    params(("id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item removed", body = SuccessResponse),
        (status = 404, description = "Item not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "removeItem"
)]
#[delete("/items/remove/{id}")]
pub async fn remove_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let id = ItemId::new(path.into_inner()).map_err(|_| Error::item_not_found())?;
    state.items.delete(id).await?;
    Ok(SuccessResponse::ok())
}
