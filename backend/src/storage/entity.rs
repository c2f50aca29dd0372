//! # Entity Descriptors
//!
//! Every persisted type describes itself with an ordered table of
//! [`FieldDescriptor`]s: column name, getter, optional setter and role. The
//! generic [`Store`](super::Store) builds all of its SQL and hydrates all of its
//! rows from that table, so adding an entity means declaring its fields once.
//!
//! The first descriptor is the identity column. It is excluded from INSERT and
//! UPDATE column lists, used as the UPDATE key, and receives the generated key
//! after an INSERT.

use std::fmt;

/// Table names that must be quoted when emitted into SQL
const RESERVED_TABLE_NAMES: &[&str] = &["order", "group", "select", "table", "user"];

/// A single column value moving between a record and a statement
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "NULL",
            FieldValue::Integer(_) => "INTEGER",
            FieldValue::Real(_) => "REAL",
            FieldValue::Text(_) => "TEXT",
        }
    }

    pub fn into_i64(self, field: &'static str) -> Result<i64, FieldError> {
        match self {
            FieldValue::Integer(v) => Ok(v),
            other => Err(FieldError::mismatch(field, "INTEGER", other)),
        }
    }

    pub fn into_i32(self, field: &'static str) -> Result<i32, FieldError> {
        let value = self.into_i64(field)?;
        i32::try_from(value).map_err(|_| FieldError::OutOfRange { field, value })
    }

    /// Integers are narrowed into floating-point fields, mirroring how
    /// numeric columns come back from the driver.
    pub fn into_f64(self, field: &'static str) -> Result<f64, FieldError> {
        match self {
            FieldValue::Real(v) => Ok(v),
            FieldValue::Integer(v) => Ok(v as f64),
            other => Err(FieldError::mismatch(field, "REAL", other)),
        }
    }

    pub fn into_string(self, field: &'static str) -> Result<String, FieldError> {
        match self {
            FieldValue::Text(v) => Ok(v),
            other => Err(FieldError::mismatch(field, "TEXT", other)),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str(""),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Real(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Raised by a setter that cannot accept the value it was handed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("field '{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("field '{field}' cannot hold {value}")]
    OutOfRange { field: &'static str, value: i64 },
}

impl FieldError {
    fn mismatch(field: &'static str, expected: &'static str, actual: FieldValue) -> Self {
        FieldError::TypeMismatch {
            field,
            expected,
            actual: actual.kind(),
        }
    }
}

/// Whether a column is the primary key or an ordinary data column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Identity,
    Data,
}

pub type Getter<T> = fn(&T) -> FieldValue;
pub type Setter<T> = fn(&mut T, FieldValue) -> Result<(), FieldError>;

/// One entry of an entity's field table
pub struct FieldDescriptor<T> {
    pub column: &'static str,
    pub role: FieldRole,
    pub get: Getter<T>,
    /// `None` marks a column that hydration leaves untouched
    pub set: Option<Setter<T>>,
}

impl<T> FieldDescriptor<T> {
    pub const fn identity(column: &'static str, get: Getter<T>, set: Setter<T>) -> Self {
        Self {
            column,
            role: FieldRole::Identity,
            get,
            set: Some(set),
        }
    }

    pub const fn data(column: &'static str, get: Getter<T>, set: Setter<T>) -> Self {
        Self {
            column,
            role: FieldRole::Data,
            get,
            set: Some(set),
        }
    }

    pub const fn read_only(column: &'static str, get: Getter<T>) -> Self {
        Self {
            column,
            role: FieldRole::Data,
            get,
            set: None,
        }
    }
}

/// A record type the generic store can persist.
///
/// `Default` stands in for the zero-argument constructor that hydration
/// starts from, so an entity that cannot be hydrated does not compile.
pub trait Entity: Default + Send + Sync + Unpin + 'static {
    /// Type name the table name is derived from
    const TYPE_NAME: &'static str;

    /// Declared fields, identity first
    const FIELDS: &'static [FieldDescriptor<Self>];

    fn table_name() -> String {
        table_name_for(Self::TYPE_NAME)
    }
}

/// Lowercases a type name into a table name, quoting reserved words
pub fn table_name_for(type_name: &str) -> String {
    let name = type_name.to_lowercase();
    if RESERVED_TABLE_NAMES.contains(&name.as_str()) {
        format!("\"{}\"", name)
    } else {
        name
    }
}
