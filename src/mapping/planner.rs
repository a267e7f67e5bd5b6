//! Index planning
//!
//! Computes the final logical index name and shard/replica counts for a
//! table from the global defaults and its resolved rule, if any.

use super::config::{IndexDefaults, Rule};
use super::types::IndexPlan;

/// Plan the index for a table.
///
/// - The logical name is the rule's index override when present and
///   non-empty, otherwise the table name.
/// - A rule's shard count applies when it is non-zero and differs from the
///   default. The explicit comparison against the default is kept even
///   though an equal value would produce the same outcome.
/// - A rule may only raise the replica count, never lower it.
pub fn plan_index(defaults: &IndexDefaults, rule: Option<&Rule>, table: &str) -> IndexPlan {
    let mut plan = IndexPlan {
        name: table.to_string(),
        shards: defaults.shards,
        replicas: defaults.replicas,
    };

    if let Some(rule) = rule {
        if let Some(index) = rule.index.as_deref() {
            if !index.is_empty() {
                plan.name = index.to_string();
            }
        }

        if let Some(shards) = rule.shards {
            if shards != 0 && shards != defaults.shards {
                plan.shards = shards;
            }
        }

        if let Some(replicas) = rule.replicas {
            if replicas > defaults.replicas {
                plan.replicas = replicas;
            }
        }
    }

    plan
}
