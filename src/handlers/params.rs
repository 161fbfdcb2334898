/// Explicit query-parameter validation
///
/// Raw query structs deserialize permissively (signed, optional) so that
/// out-of-range values reach these functions and come back as structured
/// validation errors instead of opaque deserializer failures.
use crate::error::{AppError, Result};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use utoipa::IntoParams;

/// Recipes skipped when the client sends no `skip`
pub const DEFAULT_SKIP: u64 = 0;
/// Page size when the client sends no `limit`
pub const DEFAULT_LIMIT: i64 = 5;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Number of recipes to skip
    pub skip: Option<i64>,
    /// Maximum number of recipes returned
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CookTimeQuery {
    /// Upper bound (exclusive) on the sum of a recipe's timers
    #[serde(rename = "maxTime")]
    pub max_time: Option<i64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductsQuery {
    /// Comma-separated product names, all of which must appear among a
    /// recipe's ingredient names
    pub contains: Option<String>,
}

/// `skip` defaults to 0 and must be >= 0; `limit` defaults to 5 and must
/// be >= 1.
pub fn validate_pagination(query: &PaginationQuery) -> Result<(u64, i64)> {
    let skip = match query.skip {
        None => DEFAULT_SKIP,
        Some(skip) if skip >= 0 => skip as u64,
        Some(skip) => {
            return Err(AppError::Validation(format!(
                "skip must be >= 0, got {skip}"
            )))
        }
    };

    let limit = match query.limit {
        None => DEFAULT_LIMIT,
        Some(limit) if limit >= 1 => limit,
        Some(limit) => {
            return Err(AppError::Validation(format!(
                "limit must be >= 1, got {limit}"
            )))
        }
    };

    Ok((skip, limit))
}

/// `maxTime` is required and must be a positive integer
pub fn validate_max_time(query: &CookTimeQuery) -> Result<i64> {
    match query.max_time {
        Some(max_time) if max_time >= 1 => Ok(max_time),
        Some(max_time) => Err(AppError::Validation(format!(
            "maxTime must be a positive integer, got {max_time}"
        ))),
        None => Err(AppError::Validation(
            "maxTime query parameter is required".to_string(),
        )),
    }
}

/// `contains` is required and must name at least one product. Names are
/// matched verbatim against stored ingredient names (no trimming or case
/// folding), but entries that are empty or whitespace-only are dropped;
/// they can never match a normalized ingredient name.
pub fn parse_products(query: &ProductsQuery) -> Result<Vec<String>> {
    let raw = query.contains.as_deref().ok_or_else(|| {
        AppError::Validation("contains query parameter is required".to_string())
    })?;

    let products: Vec<String> = raw
        .split(',')
        .filter(|product| !product.trim().is_empty())
        .map(str::to_string)
        .collect();

    if products.is_empty() {
        return Err(AppError::Validation(
            "contains must name at least one product".to_string(),
        ));
    }

    Ok(products)
}

/// Parse a path segment as a store identifier
pub fn parse_recipe_id(raw: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::Validation(format!("'{raw}' is not a valid recipe id")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_when_absent() {
        let query = PaginationQuery::default();
        assert_eq!(validate_pagination(&query).unwrap(), (0, 5));
    }

    #[test]
    fn pagination_accepts_explicit_values() {
        let query = PaginationQuery {
            skip: Some(10),
            limit: Some(3),
        };
        assert_eq!(validate_pagination(&query).unwrap(), (10, 3));
    }

    #[test]
    fn pagination_rejects_negative_skip() {
        let query = PaginationQuery {
            skip: Some(-1),
            limit: None,
        };
        assert!(matches!(
            validate_pagination(&query),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn pagination_rejects_zero_limit() {
        let query = PaginationQuery {
            skip: None,
            limit: Some(0),
        };
        assert!(matches!(
            validate_pagination(&query),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn max_time_requires_a_value() {
        assert!(matches!(
            validate_max_time(&CookTimeQuery::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn max_time_rejects_zero_and_negatives() {
        for bad in [0, -5] {
            let query = CookTimeQuery {
                max_time: Some(bad),
            };
            assert!(matches!(
                validate_max_time(&query),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn max_time_accepts_positive_values() {
        let query = CookTimeQuery { max_time: Some(45) };
        assert_eq!(validate_max_time(&query).unwrap(), 45);
    }

    #[test]
    fn products_split_on_commas_verbatim() {
        let query = ProductsQuery {
            contains: Some("salt,Brown Sugar, cream".to_string()),
        };
        assert_eq!(
            parse_products(&query).unwrap(),
            vec!["salt", "Brown Sugar", " cream"]
        );
    }

    #[test]
    fn products_drop_empty_and_whitespace_only_entries() {
        let query = ProductsQuery {
            contains: Some("salt,,sugar".to_string()),
        };
        assert_eq!(parse_products(&query).unwrap(), vec!["salt", "sugar"]);

        let query = ProductsQuery {
            contains: Some("  ,salt, ".to_string()),
        };
        assert_eq!(parse_products(&query).unwrap(), vec!["salt"]);
    }

    #[test]
    fn products_reject_missing_or_effectively_empty_lists() {
        assert!(matches!(
            parse_products(&ProductsQuery::default()),
            Err(AppError::Validation(_))
        ));

        for blank in [",,", " , ", "   "] {
            let query = ProductsQuery {
                contains: Some(blank.to_string()),
            };
            assert!(matches!(
                parse_products(&query),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn recipe_id_must_be_a_valid_object_id() {
        assert!(parse_recipe_id("507f1f77bcf86cd799439011").is_ok());
        assert!(matches!(
            parse_recipe_id("not-an-id"),
            Err(AppError::Validation(_))
        ));
    }
}
