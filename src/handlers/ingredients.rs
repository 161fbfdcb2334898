/// Ingredient handlers - distinct values across all seeded recipes
use crate::db::RecipeRepo;
use crate::error::Result;
use actix_web::{web, HttpResponse};

/// All unique ingredient names, sorted ascending
#[utoipa::path(
    get,
    path = "/ingredients/unique",
    tag = "ingredients",
    responses(
        (status = 200, description = "Distinct ingredient names in ascending order", body = [String]),
    )
)]
pub async fn unique_ingredient_names(repo: web::Data<RecipeRepo>) -> Result<HttpResponse> {
    let names = repo.unique_ingredient_names().await?;
    Ok(HttpResponse::Ok().json(names))
}

/// All unique ingredient types, sorted ascending
#[utoipa::path(
    get,
    path = "/ingredients/types",
    tag = "ingredients",
    responses(
        (status = 200, description = "Distinct ingredient type strings in ascending order", body = [String]),
    )
)]
pub async fn unique_ingredient_types(repo: web::Data<RecipeRepo>) -> Result<HttpResponse> {
    let types = repo.unique_ingredient_types().await?;
    Ok(HttpResponse::Ok().json(types))
}
