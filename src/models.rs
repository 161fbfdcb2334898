/// Data structures for recipes and their embedded ingredients
///
/// Field names follow the fixture/collection layout (`imageURL`,
/// `originalURL`, ingredient `type`), so the same types serve as seed
/// records, stored documents, and response bodies.
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An ingredient embedded in a recipe document. Ingredients carry no
/// identifier of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    /// Free-text amount, e.g. "2 cups"
    pub quantity: String,
    /// Free-text category, e.g. "baking"
    #[serde(rename = "type")]
    pub kind: String,
}

/// A recipe document in the `recipes` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    /// Store-assigned identifier; absent on fixture records before insert
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    /// Minutes per step or cooking phase; not required to line up with
    /// `steps`. Total cook time is the sum of these values.
    pub timers: Vec<i64>,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "originalURL", skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
}

impl Ingredient {
    /// Trim leading/trailing whitespace on every field
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.quantity);
        trim_in_place(&mut self.kind);
    }
}

impl Recipe {
    /// Trim the name, every ingredient field, and every step. Applied to
    /// fixture records before they are persisted.
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.name);
        for ingredient in &mut self.ingredients {
            ingredient.normalize();
        }
        for step in &mut self.steps {
            trim_in_place(step);
        }
    }

    /// Sum of all timer values
    pub fn total_cook_time(&self) -> i64 {
        self.timers.iter().sum()
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}
