//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! Handlers for the fixed endpoints are registered with `#[utoipa::path]`.
//! The resource collections share generic handlers, so their paths are
//! added by [`ResourcePaths`] from each entity's schema and create
//! parameters.

use axum::Json;
use serde::Serialize;
use models::{
    article, help_request, menu_item_review, recommendation_request, ucsb_dining_commons_menu_item,
    ucsb_organization, Resource,
};
use utoipa::openapi::path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathItemType};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ArrayBuilder, KnownFormat, ObjectBuilder, SchemaFormat, SchemaType};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::{ContentBuilder, Ref, RefOr, Required, ResponseBuilder, Schema};
use utoipa::{IntoParams, Modify, OpenApi, ToSchema};

use crate::auth::CurrentUser;
use crate::resources::base_path;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    #[schema(example = "EntityNotFoundException")]
    pub kind: String,
    pub message: String,
}

/// Schema of the `?id=` selector for a given identifier type.
trait IdSchema {
    fn id_schema() -> RefOr<Schema>;
}

impl IdSchema for i64 {
    fn id_schema() -> RefOr<Schema> {
        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(SchemaType::Integer)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64)))
                .build(),
        ))
    }
}

impl IdSchema for String {
    fn id_schema() -> RefOr<Schema> {
        RefOr::T(Schema::Object(ObjectBuilder::new().schema_type(SchemaType::String).build()))
    }
}

fn json_response(description: &str, schema: RefOr<Schema>) -> utoipa::openapi::Response {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", ContentBuilder::new().schema(schema).build())
        .build()
}

fn error_response(description: &str) -> utoipa::openapi::Response {
    json_response(description, Ref::from_schema_name("ErrorResponse").into())
}

fn id_param<R: Resource>() -> utoipa::openapi::path::Parameter
where
    R::Id: IdSchema,
{
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Query)
        .required(Required::True)
        .description(Some(format!("{} identifier", R::NAME)))
        .schema(Some(R::Id::id_schema()))
        .build()
}

fn add_resource<R>(openapi: &mut utoipa::openapi::OpenApi)
where
    R: Resource + ToSchema<'static>,
    R::Id: IdSchema,
    R::Params: IntoParams,
{
    let (name, schema) = R::schema();
    openapi
        .components
        .get_or_insert_with(Default::default)
        .schemas
        .insert(name.to_string(), schema);

    let tag = R::NAME.to_string();
    let record: RefOr<Schema> = Ref::from_schema_name(name).into();
    let base = base_path::<R>();

    let list = OperationBuilder::new()
        .tags(Some(vec![tag.clone()]))
        .summary(Some(format!("List all {}", R::NAME)))
        .operation_id(Some(format!("list{}", R::NAME)))
        .response("200", json_response("Every record", RefOr::T(Schema::Array(ArrayBuilder::new().items(record.clone()).build()))))
        .response("403", error_response("Not signed in"))
        .build();

    let get = OperationBuilder::new()
        .tags(Some(vec![tag.clone()]))
        .summary(Some(format!("Get a single {}", R::NAME)))
        .operation_id(Some(format!("get{}", R::NAME)))
        .parameters(Some(vec![id_param::<R>()]))
        .response("200", json_response("The record", record.clone()))
        .response("403", error_response("Not signed in"))
        .response("404", error_response("No record with that id"))
        .build();

    let create = OperationBuilder::new()
        .tags(Some(vec![tag.clone()]))
        .summary(Some(format!("Create a new {}", R::NAME)))
        .operation_id(Some(format!("create{}", R::NAME)))
        .parameters(Some(R::Params::into_params(|| Some(ParameterIn::Query))))
        .response("200", json_response("The stored record", record.clone()))
        .response("400", error_response("Missing or malformed parameter"))
        .response("403", error_response("Administrator only"))
        .response("409", error_response("Identifier already in use"))
        .build();

    let update = OperationBuilder::new()
        .tags(Some(vec![tag.clone()]))
        .summary(Some(format!("Update a single {}", R::NAME)))
        .operation_id(Some(format!("update{}", R::NAME)))
        .parameters(Some(vec![id_param::<R>()]))
        .request_body(Some(
            RequestBodyBuilder::new()
                .content("application/json", ContentBuilder::new().schema(record.clone()).build())
                .required(Some(Required::True))
                .build(),
        ))
        .response("200", json_response("The replaced record", record))
        .response("400", error_response("Malformed body"))
        .response("403", error_response("Administrator only"))
        .response("404", error_response("No record with that id"))
        .build();

    let delete = OperationBuilder::new()
        .tags(Some(vec![tag]))
        .summary(Some(format!("Delete a {}", R::NAME)))
        .operation_id(Some(format!("delete{}", R::NAME)))
        .parameters(Some(vec![id_param::<R>()]))
        .response("200", json_response("Deletion acknowledged", Ref::from_schema_name("MessageResponse").into()))
        .response("403", error_response("Administrator only"))
        .response("404", error_response("No record with that id"))
        .build();

    let mut item = PathItem::new(PathItemType::Get, get);
    item.operations.insert(PathItemType::Put, update);
    item.operations.insert(PathItemType::Delete, delete);

    let paths = &mut openapi.paths.paths;
    paths.insert(format!("{base}/all"), PathItem::new(PathItemType::Get, list));
    paths.insert(format!("{base}/post"), PathItem::new(PathItemType::Post, create));
    paths.insert(base, item);
}

/// Adds every resource collection and the auth schemes.
pub struct ResourcePaths;

impl Modify for ResourcePaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        add_resource::<help_request::Model>(openapi);
        add_resource::<menu_item_review::Model>(openapi);
        add_resource::<recommendation_request::Model>(openapi);
        add_resource::<ucsb_organization::Model>(openapi);
        add_resource::<ucsb_dining_commons_menu_item::Model>(openapi);
        add_resource::<article::Model>(openapi);

        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
        );
        components.add_security_scheme(
            "cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(crate::auth::AUTH_COOKIE))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&ResourcePaths),
    info(title = "Campus resources API", description = "Role-gated CRUD endpoints for campus records."),
    paths(crate::routes::health, crate::auth::current_user),
    components(schemas(HealthResponse, MessageResponse, ErrorResponse, CurrentUser)),
    tags(
        (name = "health"),
        (name = "current user", description = "The authenticated caller")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
