//! The demand record, its enumerations, and the create/update payloads.
//!
//! [`CreateDemand::into_demand`] is the record normalizer: it flattens list
//! inputs and stamps the identifier and timestamps. [`UpdateDemand`] resolves
//! into a sparse [`DemandChanges`], which [`Demand::apply_changes`] merges
//! field by field while always refreshing `updated_at`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::input::StringOrList;
use crate::types::Timestamp;

/// Entity name used in not-found errors.
pub const DEMAND_ENTITY: &str = "Demand";

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Urgency of a demand. Stored and serialized with the board's labels
/// (`alta`, `media`, `baixa`); English names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "alta", alias = "high")]
    High,
    #[serde(rename = "media", alias = "medium")]
    Medium,
    #[serde(rename = "baixa", alias = "low")]
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "alta",
            Priority::Medium => "media",
            Priority::Low => "baixa",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alta" | "high" => Ok(Priority::High),
            "media" | "medium" => Ok(Priority::Medium),
            "baixa" | "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority '{other}'")),
        }
    }
}

/// Weekly bucket a demand currently sits in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LastWeek,
    #[default]
    ThisWeek,
    Stalled,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::LastWeek => "last_week",
            Category::ThisWeek => "this_week",
            Category::Stalled => "stalled",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last_week" => Ok(Category::LastWeek),
            "this_week" => Ok(Category::ThisWeek),
            "stalled" => Ok(Category::Stalled),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical record
// ---------------------------------------------------------------------------

/// A stored demand. `responsible` and `subgroup` are always plain strings here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    pub id: String,
    pub description: String,
    pub priority: Priority,
    pub responsible: String,
    pub subgroup: String,
    pub category: Category,
    pub observation: String,
    #[serde(rename = "deliveryDate")]
    pub delivery_date: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Demand {
    /// Merge a resolved partial update into this record.
    ///
    /// Only fields present in `changes` are written. `id` and `created_at`
    /// are never touched; `updated_at` is set to `now` even when nothing else
    /// changes. An empty string is a value like any other.
    pub fn apply_changes(&mut self, changes: &DemandChanges, now: Timestamp) {
        if let Some(description) = &changes.description {
            self.description.clone_from(description);
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(responsible) = &changes.responsible {
            self.responsible.clone_from(responsible);
        }
        if let Some(subgroup) = &changes.subgroup {
            self.subgroup.clone_from(subgroup);
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(observation) = &changes.observation {
            self.observation.clone_from(observation);
        }
        if let Some(delivery_date) = &changes.delivery_date {
            self.delivery_date = Some(delivery_date.clone());
        }
        self.updated_at = now;
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Creation payload as received from clients.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDemand {
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub priority: Priority,
    pub responsible: StringOrList,
    pub subgroup: StringOrList,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub observation: Option<String>,
    #[serde(default, rename = "deliveryDate", alias = "delivery_date")]
    pub delivery_date: Option<String>,
}

impl CreateDemand {
    /// Normalize into the canonical record under the given identifier.
    pub fn into_demand(self, id: String, now: Timestamp) -> Demand {
        Demand {
            id,
            description: self.description,
            priority: self.priority,
            responsible: self.responsible.into_canonical(),
            subgroup: self.subgroup.into_canonical(),
            category: self.category,
            observation: self.observation.unwrap_or_default(),
            delivery_date: self.delivery_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update payload. Absent and `null` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDemand {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub responsible: Option<StringOrList>,
    #[serde(default)]
    pub subgroup: Option<StringOrList>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub observation: Option<String>,
    #[serde(default, rename = "deliveryDate", alias = "delivery_date")]
    pub delivery_date: Option<String>,
}

impl UpdateDemand {
    /// Flatten list inputs so every present field holds its stored form.
    pub fn into_changes(self) -> DemandChanges {
        DemandChanges {
            description: self.description,
            priority: self.priority,
            responsible: self.responsible.map(StringOrList::into_canonical),
            subgroup: self.subgroup.map(StringOrList::into_canonical),
            category: self.category,
            observation: self.observation,
            delivery_date: self.delivery_date,
        }
    }
}

/// The fields one update writes, already in stored form. `None` means the
/// column is left as the store currently holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandChanges {
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub responsible: Option<String>,
    pub subgroup: Option<String>,
    pub category: Option<Category>,
    pub observation: Option<String>,
    pub delivery_date: Option<String>,
}

impl DemandChanges {
    /// JSON names of the fields this update will write.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("description", self.description.is_some()),
            ("priority", self.priority.is_some()),
            ("responsible", self.responsible.is_some()),
            ("subgroup", self.subgroup.is_some()),
            ("category", self.category.is_some()),
            ("observation", self.observation.is_some()),
            ("deliveryDate", self.delivery_date.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Equality filter for listing. Every provided field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DemandFilter {
    pub priority: Option<Priority>,
    pub subgroup: Option<String>,
    pub category: Option<Category>,
}

impl DemandFilter {
    pub fn matches(&self, demand: &Demand) -> bool {
        self.priority.map_or(true, |p| demand.priority == p)
            && self
                .subgroup
                .as_deref()
                .map_or(true, |s| demand.subgroup == s)
            && self.category.map_or(true, |c| demand.category == c)
    }
}
