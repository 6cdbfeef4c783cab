use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub category_type: String,
}

/// Category id to display type, ordered by id.
pub type CategoryMap = BTreeMap<CategoryId, String>;

#[must_use]
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}
