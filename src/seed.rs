/// One-shot fixture import
///
/// Runs during startup, before the HTTP server binds. The fixture contents
/// are known, so no shape validation happens beyond deserialization; a
/// missing or malformed fixture aborts startup, since no endpoint can serve
/// anything without seed data.
use crate::db::RECIPES_COLLECTION;
use crate::models::Recipe;
use anyhow::Context;
use mongodb::bson::doc;
use mongodb::Database;
use std::fs;
use std::path::Path;

/// Replace the entire recipe collection with the normalized fixture
/// contents: delete-all, then bulk insert with store-assigned ids. Returns
/// the number of inserted recipes.
pub async fn run(db: &Database, fixture_path: &Path) -> anyhow::Result<usize> {
    let raw = fs::read_to_string(fixture_path)
        .with_context(|| format!("reading seed fixture {}", fixture_path.display()))?;
    let recipes = parse_fixture(&raw)
        .with_context(|| format!("parsing seed fixture {}", fixture_path.display()))?;

    let collection = db.collection::<Recipe>(RECIPES_COLLECTION);
    collection
        .delete_many(doc! {})
        .await
        .context("clearing recipe collection")?;

    if recipes.is_empty() {
        return Ok(0);
    }

    let result = collection
        .insert_many(&recipes)
        .await
        .context("inserting seed recipes")?;

    Ok(result.inserted_ids.len())
}

/// Parse the fixture's top-level array and trim every string field
fn parse_fixture(raw: &str) -> serde_json::Result<Vec<Recipe>> {
    let mut recipes: Vec<Recipe> = serde_json::from_str(raw)?;
    for recipe in &mut recipes {
        recipe.normalize();
    }
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fixture_normalizes_every_record() {
        let raw = r#"[
            {
                "name": "  Pancakes ",
                "ingredients": [
                    {"name": " flour ", "quantity": " 2 cups ", "type": " baking "}
                ],
                "steps": [" Mix. ", "Fry."],
                "timers": [5, 10],
                "imageURL": "http://img.example/pancakes.jpg",
                "originalURL": "http://example.com/pancakes"
            }
        ]"#;

        let recipes = parse_fixture(raw).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Pancakes");
        assert_eq!(recipes[0].ingredients[0].name, "flour");
        assert_eq!(recipes[0].ingredients[0].quantity, "2 cups");
        assert_eq!(recipes[0].ingredients[0].kind, "baking");
        assert_eq!(recipes[0].steps, vec!["Mix.", "Fry."]);
        assert_eq!(recipes[0].timers, vec![5, 10]);
    }

    #[test]
    fn parse_fixture_is_deterministic() {
        let raw = r#"[
            {"name": " A ", "ingredients": [], "steps": [], "timers": [1],
             "imageURL": "http://img.example/a.jpg"}
        ]"#;

        assert_eq!(parse_fixture(raw).unwrap(), parse_fixture(raw).unwrap());
    }

    #[test]
    fn parse_fixture_rejects_malformed_records() {
        // name missing entirely
        let raw = r#"[{"ingredients": [], "steps": [], "timers": []}]"#;
        assert!(parse_fixture(raw).is_err());
    }

    #[test]
    fn fixture_cook_times_partition_strictly_below_a_ceiling() {
        let recipes = parse_fixture(include_str!("../mock-data.json")).unwrap();

        let below: Vec<&str> = recipes
            .iter()
            .filter(|recipe| recipe.total_cook_time() < 16)
            .map(|recipe| recipe.name.as_str())
            .collect();

        assert_eq!(
            below,
            vec![
                "Crostini with tomato and basil",
                "Iced mint lemonade",
                "Caprese salad",
            ]
        );

        // Classic pancakes totals exactly 16 and must fall on the excluded
        // side of the strict bound
        let pancakes = recipes
            .iter()
            .find(|recipe| recipe.name == "Classic pancakes")
            .unwrap();
        assert_eq!(pancakes.total_cook_time(), 16);
    }

    #[test]
    fn bundled_fixture_parses() {
        let raw = include_str!("../mock-data.json");
        let recipes = parse_fixture(raw).unwrap();
        assert!(!recipes.is_empty());
        for recipe in &recipes {
            assert_eq!(recipe.name, recipe.name.trim());
            assert!(recipe.id.is_none());
        }
    }
}
