//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::term;
use crate::contract::Category;
use anyhow::{Context, Result};

/// Stored ids are never negative; a corrupt row reads as 0
fn to_u64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

pub fn to_i64(value: u64) -> Result<i64> {
    i64::try_from(value).with_context(|| format!("id {} is out of range", value))
}

// ===== Term Conversions =====

impl From<term::Model> for Category {
    fn from(entity: term::Model) -> Self {
        Self {
            id: to_u64(entity.term_id),
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            parent: to_u64(entity.parent),
            count: to_u64(entity.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_row_maps_to_category() {
        let category = Category::from(term::Model {
            term_id: 12,
            taxonomy: "product_cat".to_string(),
            name: "Tea".to_string(),
            slug: "tea".to_string(),
            description: String::new(),
            parent: 3,
            count: -1,
        });
        assert_eq!(category.id, 12);
        assert_eq!(category.parent, 3);
        assert_eq!(category.count, 0);
    }

    #[test]
    fn test_oversized_id_is_rejected() {
        assert!(to_i64(u64::MAX).is_err());
        assert_eq!(to_i64(7).unwrap(), 7);
    }
}
