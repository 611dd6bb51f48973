//! Row mapping for the `demands` table.

use demandboard_core::demand::Demand;
use demandboard_core::types::Timestamp;
use sqlx::FromRow;

use crate::store::StoreError;

/// A row from the `demands` table. Enumerations are stored as text and
/// decoded into domain types by [`TryFrom`].
#[derive(Debug, Clone, FromRow)]
pub struct DemandRow {
    pub id: String,
    pub description: String,
    pub priority: String,
    pub responsible: String,
    pub subgroup: String,
    pub category: String,
    pub observation: String,
    pub delivery_date: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<DemandRow> for Demand {
    type Error = StoreError;

    fn try_from(row: DemandRow) -> Result<Self, Self::Error> {
        let priority = row
            .priority
            .parse()
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", row.id)))?;
        let category = row
            .category
            .parse()
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", row.id)))?;

        Ok(Demand {
            id: row.id,
            description: row.description,
            priority,
            responsible: row.responsible,
            subgroup: row.subgroup,
            category,
            observation: row.observation,
            delivery_date: row.delivery_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Decode a batch of rows, failing on the first corrupt one.
pub fn into_demands(rows: Vec<DemandRow>) -> Result<Vec<Demand>, StoreError> {
    rows.into_iter().map(Demand::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;
    use demandboard_core::demand::{Category, Priority};

    fn row(priority: &str, category: &str) -> DemandRow {
        let now = Utc::now();
        DemandRow {
            id: "DMD-0001".into(),
            description: "Fix login bug".into(),
            priority: priority.into(),
            responsible: "Ana, Bob".into(),
            subgroup: "Help Desk".into(),
            category: category.into(),
            observation: String::new(),
            delivery_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn decodes_valid_row() {
        let demand = Demand::try_from(row("media", "stalled")).unwrap();
        assert_eq!(demand.priority, Priority::Medium);
        assert_eq!(demand.category, Category::Stalled);
        assert_eq!(demand.responsible, "Ana, Bob");
    }

    #[test]
    fn unknown_priority_is_corrupt() {
        assert_matches!(
            Demand::try_from(row("urgent", "this_week")),
            Err(StoreError::Corrupt(_))
        );
    }

    #[test]
    fn unknown_category_is_corrupt() {
        assert_matches!(
            into_demands(vec![row("alta", "this_week"), row("alta", "someday")]),
            Err(StoreError::Corrupt(_))
        );
    }
}
