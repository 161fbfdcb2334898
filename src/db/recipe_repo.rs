/// Read-side repository for the `recipes` collection
///
/// Every operation is a single query or aggregation round trip. Filters and
/// pipelines are built by standalone functions so their exact stages can be
/// asserted without a database.
use crate::db::RECIPES_COLLECTION;
use crate::error::Result;
use crate::models::Recipe;
use futures::TryStreamExt;
use mongodb::bson::{doc, from_document, oid::ObjectId, Document};
use mongodb::{Collection, Database};

#[derive(Clone)]
pub struct RecipeRepo {
    collection: Collection<Recipe>,
}

impl RecipeRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Recipe>(RECIPES_COLLECTION),
        }
    }

    /// List recipes ordered by identifier ascending, skipping `skip` and
    /// returning at most `limit`.
    pub async fn list_recipes(&self, skip: u64, limit: i64) -> Result<Vec<Recipe>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// Fetch a single recipe by identifier. `None` means no such recipe.
    pub async fn find_recipe_by_id(&self, id: ObjectId) -> Result<Option<Recipe>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Distinct ingredient names across all recipes, ascending. Name
    /// variants ("Onion" vs "onion") stay distinct.
    pub async fn unique_ingredient_names(&self) -> Result<Vec<String>> {
        self.unique_values("ingredients.name").await
    }

    /// Distinct ingredient type strings across all recipes, ascending.
    pub async fn unique_ingredient_types(&self) -> Result<Vec<String>> {
        self.unique_values("ingredients.type").await
    }

    async fn unique_values(&self, field: &str) -> Result<Vec<String>> {
        let mut cursor = self.collection.aggregate(unique_values_pipeline(field)).await?;

        let mut values = Vec::new();
        while let Some(group) = cursor.try_next().await? {
            // ingredients missing the field group under a null key; only
            // string keys are distinct values
            if let Ok(value) = group.get_str("_id") {
                values.push(value.to_string());
            }
        }
        Ok(values)
    }

    /// Recipes whose summed timers come in strictly under `max_time`
    pub async fn recipes_with_cook_time_below(&self, max_time: i64) -> Result<Vec<Recipe>> {
        let mut cursor = self
            .collection
            .aggregate(cook_time_pipeline(max_time))
            .await?;

        let mut recipes = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            recipes.push(from_document(document)?);
        }
        Ok(recipes)
    }

    /// Recipes containing an ingredient exactly matching every requested
    /// product name. Conjunctive: a recipe missing any one of the names is
    /// excluded. An empty product list matches nothing.
    pub async fn recipes_using_products(&self, products: &[String]) -> Result<Vec<Recipe>> {
        if products.is_empty() {
            // the server rejects an empty $and clause
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(products_filter(products))
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }
}

/// Unwind the ingredient array, group on `field`, sort the groups ascending.
/// The group key comes back as `_id`.
fn unique_values_pipeline(field: &str) -> Vec<Document> {
    let path = format!("${field}");
    vec![
        doc! { "$unwind": "$ingredients" },
        doc! { "$group": { "_id": path } },
        doc! { "$sort": { "_id": 1 } },
    ]
}

/// Derive the timer sum, keep recipes strictly below `max_time`, then drop
/// the derived field so the output shape matches the stored documents.
fn cook_time_pipeline(max_time: i64) -> Vec<Document> {
    vec![
        doc! { "$addFields": { "totalTime": { "$sum": "$timers" } } },
        doc! { "$match": { "totalTime": { "$lt": max_time } } },
        doc! { "$project": { "totalTime": 0 } },
    ]
}

/// One membership clause per product, all of which must hold
fn products_filter(products: &[String]) -> Document {
    let clauses: Vec<Document> = products
        .iter()
        .map(|product| doc! { "ingredients.name": product.as_str() })
        .collect();
    doc! { "$and": clauses }
}
