use chrono::NaiveDate;

use crate::schema::TypeKind;

/// Which declaration kinds survive filtering and get emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum KindSet {
    /// `OBJECT` only
    Objects,
    /// `OBJECT` and `ENUM`
    #[default]
    ObjectsAndEnums,
}

impl KindSet {
    pub fn allows(&self, kind: TypeKind) -> bool {
        match self {
            Self::Objects => kind == TypeKind::Object,
            Self::ObjectsAndEnums => matches!(kind, TypeKind::Object | TypeKind::Enum),
        }
    }
}

/// Everything the core pipeline needs besides the documents themselves.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub kinds: KindSet,
    /// Stamped into every header; the core never reads the clock.
    pub date: NaiveDate,
}

impl GeneratorConfig {
    pub fn new(kinds: KindSet, date: NaiveDate) -> Self {
        Self { kinds, date }
    }
}
