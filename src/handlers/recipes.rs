/// Recipe handlers - HTTP endpoints for recipe queries
use crate::db::RecipeRepo;
use crate::error::{AppError, Result};
use crate::handlers::params::{self, CookTimeQuery, PaginationQuery, ProductsQuery};
use actix_web::{web, HttpResponse};

/// List recipes with pagination, ordered by identifier ascending
#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated recipes in ascending id order", body = [crate::models::Recipe]),
        (status = 400, description = "Invalid pagination parameters"),
    )
)]
pub async fn list_recipes(
    repo: web::Data<RecipeRepo>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse> {
    let (skip, limit) = params::validate_pagination(&query)?;
    let recipes = repo.list_recipes(skip, limit).await?;
    Ok(HttpResponse::Ok().json(recipes))
}

/// Recipes whose total cook time (sum of timers) is below `maxTime`
#[utoipa::path(
    get,
    path = "/recipes/query",
    tag = "recipes",
    params(CookTimeQuery),
    responses(
        (status = 200, description = "Recipes with timer sum strictly below maxTime", body = [crate::models::Recipe]),
        (status = 400, description = "Missing or non-positive maxTime"),
    )
)]
pub async fn recipes_by_cook_time(
    repo: web::Data<RecipeRepo>,
    query: web::Query<CookTimeQuery>,
) -> Result<HttpResponse> {
    let max_time = params::validate_max_time(&query)?;
    let recipes = repo.recipes_with_cook_time_below(max_time).await?;
    Ok(HttpResponse::Ok().json(recipes))
}

/// Recipes that use all of the provided products
#[utoipa::path(
    get,
    path = "/recipes/products",
    tag = "recipes",
    params(ProductsQuery),
    responses(
        (status = 200, description = "Recipes containing an exact-name match for every product", body = [crate::models::Recipe]),
        (status = 400, description = "Missing or empty contains parameter"),
    )
)]
pub async fn recipes_by_products(
    repo: web::Data<RecipeRepo>,
    query: web::Query<ProductsQuery>,
) -> Result<HttpResponse> {
    let products = params::parse_products(&query)?;
    let recipes = repo.recipes_using_products(&products).await?;
    Ok(HttpResponse::Ok().json(recipes))
}

/// Fetch a single recipe by its identifier
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe identifier (24-character hex)")),
    responses(
        (status = 200, description = "The recipe", body = crate::models::Recipe),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No recipe with this identifier"),
    )
)]
pub async fn get_recipe(
    repo: web::Data<RecipeRepo>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let object_id = params::parse_recipe_id(&id)?;

    match repo.find_recipe_by_id(object_id).await? {
        Some(recipe) => Ok(HttpResponse::Ok().json(recipe)),
        None => Err(AppError::NotFound(format!("recipe {id} does not exist"))),
    }
}
