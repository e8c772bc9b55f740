//! Pipeline: collect → filter/dedup → emit every retained type in parallel.
use indexmap::IndexMap;
use rayon::prelude::*;

use crate::codegen::emit_type;
use crate::config::GeneratorConfig;
use crate::error::{EmitError, SchemaError};
use crate::filter::filter_types;
use crate::ir::GeneratedClass;
use crate::schema::{SourceDocument, collect_types};

/// Result of a run. Failed types do not prevent their siblings from emitting.
#[derive(Debug, Default)]
pub struct Generated {
    /// Type name → generated class, in filtered (case-insensitive) order.
    pub classes: IndexMap<String, GeneratedClass>,
    pub failures: Vec<EmitError>,
}

impl Generated {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the whole pipeline over already-parsed documents.
///
/// A malformed document aborts the run; malformed fields only fail their type.
pub fn generate(documents: &[SourceDocument], config: &GeneratorConfig) -> Result<Generated, SchemaError> {
    let collected = collect_types(documents)?;
    let collected_len = collected.len();
    let types = filter_types(collected, config.kinds);
    tracing::info!(collected = collected_len, retained = types.len(), "filtered schema types");

    let results = types
        .par_iter()
        .map(|ty| emit_type(ty, config.date))
        .collect::<Vec<_>>();

    let mut out = Generated::default();
    for result in results {
        match result {
            Ok(class) => {
                out.classes.insert(class.type_name.clone(), class);
            }
            Err(error) => {
                tracing::warn!(type_name = %error.type_name(), field = %error.field(), "{error}");
                out.failures.push(error);
            }
        }
    }
    Ok(out)
}
