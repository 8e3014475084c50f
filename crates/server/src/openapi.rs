use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(example = json!({"name": "신분당선", "color": "bg-red-600"}))]
pub struct LineRequestDoc { pub name: String, pub color: String }

#[derive(ToSchema)]
#[schema(example = json!({"id": 1, "name": "신분당선", "color": "bg-red-600"}))]
pub struct LineResponseDoc { pub id: i64, pub name: String, pub color: String }

#[derive(ToSchema)]
pub struct ErrorResponseDoc { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::lines::list,
        crate::routes::lines::create,
        crate::routes::lines::get,
        crate::routes::lines::update,
        crate::routes::lines::delete,
    ),
    components(
        schemas(
            HealthResponse,
            LineRequestDoc,
            LineResponseDoc,
            ErrorResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "lines")
    )
)]
pub struct ApiDoc;
