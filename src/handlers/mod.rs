/// HTTP request handlers
pub mod ingredients;
pub mod params;
pub mod recipes;

use actix_web::web;

/// Register all API routes. Actix matches in registration order, so the
/// bare `/{id}` route goes last to keep it from shadowing the named routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recipes", web::get().to(recipes::list_recipes))
        .route("/recipes/query", web::get().to(recipes::recipes_by_cook_time))
        .route(
            "/recipes/products",
            web::get().to(recipes::recipes_by_products),
        )
        .route(
            "/ingredients/unique",
            web::get().to(ingredients::unique_ingredient_names),
        )
        .route(
            "/ingredients/types",
            web::get().to(ingredients::unique_ingredient_types),
        )
        .route("/{id}", web::get().to(recipes::get_recipe));
}
