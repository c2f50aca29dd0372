//! # Generic Store
//!
//! `Store<T>` provides find-by-id, find-all, insert, update and delete-by-id for
//! any [`Entity`] without per-type SQL. Statements are generated from the
//! entity's field table and rows are hydrated back through its setters.
//!
//! Each operation comes in three forms:
//!
//! - `find_by_id`, `insert`, ... acquire a connection, run one statement and
//!   swallow storage failures: the failure is logged and the caller sees an
//!   absent/empty result or a no-op.
//! - `try_find_by_id`, `try_insert`, ... do the same but return the
//!   [`StorageError`] instead of collapsing it.
//! - `find_by_id_with`, `insert_with`, ... run on a connection or transaction
//!   owned by the caller.

use log::{debug, warn};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteConnection, SqliteRow};
use sqlx::{Row, Sqlite, TypeInfo, ValueRef};
use std::marker::PhantomData;

use super::connection::DbConnection;
use super::entity::{Entity, FieldDescriptor, FieldRole, FieldValue};
use super::error::StorageError;

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

pub struct Store<T: Entity> {
    db: DbConnection,
    table: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            table: self.table.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> Store<T> {
    pub fn new(db: DbConnection) -> Self {
        debug_assert!(
            T::FIELDS.first().map(|f| f.role) == Some(FieldRole::Identity),
            "{} must declare its identity field first",
            T::TYPE_NAME
        );
        Self {
            db,
            table: T::table_name(),
            _marker: PhantomData,
        }
    }

    fn identity_field() -> &'static FieldDescriptor<T> {
        &T::FIELDS[0]
    }

    fn data_fields() -> &'static [FieldDescriptor<T>] {
        &T::FIELDS[1..]
    }

    // SQL generation

    pub(crate) fn select_by_id_sql(&self) -> String {
        format!(
            "SELECT * FROM {} WHERE {} = ?",
            self.table,
            Self::identity_field().column
        )
    }

    pub(crate) fn select_all_sql(&self) -> String {
        format!("SELECT * FROM {}", self.table)
    }

    pub(crate) fn insert_sql(&self) -> String {
        let columns: Vec<&str> = Self::data_fields().iter().map(|f| f.column).collect();
        let placeholders = vec!["?"; columns.len()];
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            placeholders.join(", ")
        )
    }

    pub(crate) fn update_sql(&self) -> String {
        let assignments: Vec<String> = Self::data_fields()
            .iter()
            .map(|f| format!("{}=?", f.column))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {}=?",
            self.table,
            assignments.join(", "),
            Self::identity_field().column
        )
    }

    pub(crate) fn delete_sql(&self) -> String {
        format!(
            "DELETE FROM {} WHERE {} = ?",
            self.table,
            Self::identity_field().column
        )
    }

    // Statements on a caller-owned connection

    pub async fn find_by_id_with(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<T>, StorageError> {
        let sql = self.select_by_id_sql();
        let rows = sqlx::query(&sql).bind(id).fetch_all(&mut *conn).await?;
        Ok(rows.iter().map(Self::hydrate).next())
    }

    pub async fn find_all_with(&self, conn: &mut SqliteConnection) -> Result<Vec<T>, StorageError> {
        let sql = self.select_all_sql();
        let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
        Ok(rows.iter().map(Self::hydrate).collect())
    }

    /// Inserts every data field and writes the generated key back into `entity`.
    /// If the identity setter rejects the key the row is still inserted and
    /// `entity` keeps its previous id.
    pub async fn insert_with(
        &self,
        conn: &mut SqliteConnection,
        entity: &mut T,
    ) -> Result<(), StorageError> {
        let sql = self.insert_sql();
        let mut query = sqlx::query(&sql);
        for field in Self::data_fields() {
            query = bind_value(query, (field.get)(entity));
        }

        let result = query.execute(&mut *conn).await?;
        let generated = result.last_insert_rowid();

        let identity = Self::identity_field();
        match identity.set {
            Some(set) => {
                if let Err(e) = set(entity, FieldValue::Integer(generated)) {
                    warn!("Could not set auto-generated id for {}: {}", T::TYPE_NAME, e);
                }
            }
            None => warn!("Could not set auto-generated id for {}: no setter", T::TYPE_NAME),
        }
        Ok(())
    }

    /// Returns the number of rows matched
    pub async fn update_with(
        &self,
        conn: &mut SqliteConnection,
        entity: &T,
    ) -> Result<u64, StorageError> {
        let sql = self.update_sql();
        let mut query = sqlx::query(&sql);
        for field in Self::data_fields() {
            query = bind_value(query, (field.get)(entity));
        }
        query = bind_value(query, (Self::identity_field().get)(entity));

        let result = query.execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    /// Returns the number of rows removed
    pub async fn delete_by_id_with(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<u64, StorageError> {
        let sql = self.delete_sql();
        let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    // One statement on a freshly acquired connection

    pub async fn try_find_by_id(&self, id: i64) -> Result<Option<T>, StorageError> {
        let mut conn = self.db.acquire().await?;
        self.find_by_id_with(&mut conn, id).await
    }

    pub async fn try_find_all(&self) -> Result<Vec<T>, StorageError> {
        let mut conn = self.db.acquire().await?;
        self.find_all_with(&mut conn).await
    }

    pub async fn try_insert(&self, entity: &mut T) -> Result<(), StorageError> {
        let mut conn = self.db.acquire().await?;
        self.insert_with(&mut conn, entity).await
    }

    pub async fn try_update(&self, entity: &T) -> Result<u64, StorageError> {
        let mut conn = self.db.acquire().await?;
        self.update_with(&mut conn, entity).await
    }

    pub async fn try_delete_by_id(&self, id: i64) -> Result<u64, StorageError> {
        let mut conn = self.db.acquire().await?;
        self.delete_by_id_with(&mut conn, id).await
    }

    // Collapsed forms: storage failures are logged, never returned

    /// `None` covers both a missing row and a failed query
    pub async fn find_by_id(&self, id: i64) -> Option<T> {
        match self.try_find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                warn!("{}Store:find_by_id {}", T::TYPE_NAME, e);
                None
            }
        }
    }

    /// Empty on failure
    pub async fn find_all(&self) -> Vec<T> {
        match self.try_find_all().await {
            Ok(all) => all,
            Err(e) => {
                warn!("{}Store:find_all {}", T::TYPE_NAME, e);
                Vec::new()
            }
        }
    }

    pub async fn insert(&self, mut entity: T) -> T {
        if let Err(e) = self.try_insert(&mut entity).await {
            warn!("Insert failed for {}: {}", T::TYPE_NAME, e);
        }
        entity
    }

    /// Returns `entity` unchanged whether or not a row matched
    pub async fn update(&self, entity: T) -> T {
        if let Err(e) = self.try_update(&entity).await {
            warn!("Update failed for {}: {}", T::TYPE_NAME, e);
        }
        entity
    }

    pub async fn delete_by_id(&self, id: i64) {
        if let Err(e) = self.try_delete_by_id(id).await {
            warn!("Delete failed for {}: {}", T::TYPE_NAME, e);
        }
    }

    // Hydration

    /// Builds a default instance and fills every field whose column is present
    /// and whose setter accepts the value. Missing columns, fields without a
    /// setter and rejected values are skipped.
    fn hydrate(row: &SqliteRow) -> T {
        let mut instance = T::default();
        for field in T::FIELDS {
            let Some(set) = field.set else {
                continue;
            };
            let Some(value) = read_column(row, field.column) else {
                debug!("{}: column '{}' not in result set", T::TYPE_NAME, field.column);
                continue;
            };
            if let Err(e) = set(&mut instance, value) {
                warn!("Could not set field {} for {}: {}", field.column, T::TYPE_NAME, e);
            }
        }
        instance
    }
}

fn bind_value(query: SqliteQuery<'_>, value: FieldValue) -> SqliteQuery<'_> {
    match value {
        FieldValue::Null => query.bind(None::<i64>),
        FieldValue::Integer(v) => query.bind(v),
        FieldValue::Real(v) => query.bind(v),
        FieldValue::Text(v) => query.bind(v),
    }
}

/// Reads a column by name using the storage class of the stored value.
/// `None` when the column is absent or holds a blob.
fn read_column(row: &SqliteRow, column: &str) -> Option<FieldValue> {
    let raw = row.try_get_raw(column).ok()?;
    if raw.is_null() {
        return Some(FieldValue::Null);
    }

    let value = match raw.type_info().name() {
        "INTEGER" | "BOOLEAN" => FieldValue::Integer(row.try_get_unchecked::<i64, _>(column).ok()?),
        "REAL" | "NUMERIC" => FieldValue::Real(row.try_get_unchecked::<f64, _>(column).ok()?),
        "TEXT" | "DATE" | "TIME" | "DATETIME" => {
            FieldValue::Text(row.try_get_unchecked::<String, _>(column).ok()?)
        }
        _ => return None,
    };
    Some(value)
}
