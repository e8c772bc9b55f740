//! Type filter/dedup: allow-set, reserved names, first-wins dedup, case-insensitive sort.
use std::collections::HashSet;

use crate::config::KindSet;
use crate::schema::TypeDescriptor;

/// Introspection built-ins (`__Type`, `__Schema`, ...).
const RESERVED_PREFIX: &str = "__";
/// GraphQL root query type.
const ROOT_QUERY: &str = "query";
/// Server-side fixture types.
const FIXTURE_MARKER: &str = "demo";

pub fn is_excluded_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    name.starts_with(RESERVED_PREFIX) || lower == ROOT_QUERY || lower.contains(FIXTURE_MARKER)
}

/// Filter, dedup and sort collected types.
///
/// Dedup is by exact name, first occurrence wins. The sort key is the lowercase
/// name and the sort is stable, so names that only differ in case keep their
/// collector order.
pub fn filter_types(types: Vec<TypeDescriptor>, kinds: KindSet) -> Vec<TypeDescriptor> {
    let mut seen = HashSet::<String>::new();
    let mut out = types
        .into_iter()
        .filter(|t| kinds.allows(t.kind))
        .filter(|t| !is_excluded_name(&t.name))
        .filter(|t| {
            let fresh = seen.insert(t.name.clone());
            if !fresh {
                tracing::debug!(name = %t.name, "dropping duplicate type declaration");
            }
            fresh
        })
        .collect::<Vec<_>>();
    out.sort_by_cached_key(|t| t.name.to_lowercase());
    out
}
