/// OpenAPI documentation for Recipe Service
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Service API",
        version = "1.0.0",
        description = "Read-only recipe API backed by MongoDB. Supports paginated recipe listing, lookup by id, distinct ingredient names and types, filtering by total cook time, and filtering by ingredient membership. The collection is seeded from a bundled JSON fixture at startup.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "recipes", description = "Recipe listing, lookup, and filtering"),
        (name = "ingredients", description = "Distinct ingredient names and types"),
    ),
    paths(
        crate::handlers::recipes::list_recipes,
        crate::handlers::recipes::recipes_by_cook_time,
        crate::handlers::recipes::recipes_by_products,
        crate::handlers::recipes::get_recipe,
        crate::handlers::ingredients::unique_ingredient_names,
        crate::handlers::ingredients::unique_ingredient_types,
    ),
    components(schemas(crate::models::Recipe, crate::models::Ingredient)),
)]
pub struct ApiDoc;
