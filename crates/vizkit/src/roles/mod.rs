//! Semantic role mapping from raw columns to pipeline inputs.

mod guess;

pub use guess::guess_roles;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VizkitError};
use crate::input::DataTable;

/// A user's assignment of raw columns to semantic roles.
///
/// Every field is optional at the type level; `validate` enforces that the
/// metric role is present before the pipeline runs. The same source column may
/// back more than one role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roles {
    /// Column holding dates, timestamps, or plain years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Column holding the numeric quantity under analysis. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    /// Column holding a grouping/category value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Column holding a row identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Roles {
    /// Build a roles record with only the metric mapped.
    pub fn metric_only(metric: impl Into<String>) -> Self {
        Self {
            metric: Some(metric.into()),
            ..Self::default()
        }
    }

    /// Check the mapping against a loaded table.
    ///
    /// Fails if the metric role is absent or if any mapped role names a column
    /// the table does not have.
    pub fn validate(&self, table: &DataTable) -> Result<()> {
        if self.metric.is_none() {
            return Err(VizkitError::MissingMetricRole);
        }

        for (role, column) in [
            ("Time", &self.time),
            ("Metric", &self.metric),
            ("Category", &self.category),
            ("Id", &self.id),
        ] {
            if let Some(name) = column {
                if table.column_index(name).is_none() {
                    return Err(VizkitError::ColumnNotFound {
                        role,
                        column: name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
