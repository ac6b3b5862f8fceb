//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide find-all/find-by-id/save/delete over the `products` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` is create-or-replace keyed by `id`; the first-save position of a
//!   row is preserved across replacements.
//! - `delete_by_id` on a missing id is a successful no-op.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::product::{Product, ProductValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PRODUCT_SELECT_SQL: &str = "SELECT id, name, quantity FROM products";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for product persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ProductValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted product data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ProductValidationError> for RepoError {
    fn from(value: ProductValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence boundary for products.
pub trait ProductRepository {
    /// Returns every stored product in first-save order.
    fn find_all(&self) -> RepoResult<Vec<Product>>;
    fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>>;
    /// Creates or fully replaces the record keyed by `product.id`.
    fn save(&self, product: &Product) -> RepoResult<Product>;
    fn delete_by_id(&self, id: &str) -> RepoResult<()>;
}

impl<T: ProductRepository + ?Sized> ProductRepository for &T {
    fn find_all(&self) -> RepoResult<Vec<Product>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        (**self).find_by_id(id)
    }

    fn save(&self, product: &Product) -> RepoResult<Product> {
        (**self).save(product)
    }

    fn delete_by_id(&self, id: &str) -> RepoResult<()> {
        (**self).delete_by_id(id)
    }
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    /// Wraps a connection returned by `db::open_db*` (migrations applied).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Returns the number of stored products.
    pub fn count(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM products;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative product count `{count}`")))
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut products = Vec::new();

        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, product: &Product) -> RepoResult<Product> {
        product.validate()?;

        // ON CONFLICT ... DO UPDATE keeps the rowid, so ordering stays first-save.
        self.conn.execute(
            "INSERT INTO products (id, name, quantity)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                quantity = excluded.quantity,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![product.id.as_str(), product.name.as_str(), product.quantity],
        )?;

        self.find_by_id(&product.id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("product `{}` missing after save", product.id))
        })
    }

    fn delete_by_id(&self, id: &str) -> RepoResult<()> {
        self.conn.execute("DELETE FROM products WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    let quantity: i64 = row.get("quantity")?;
    let quantity = i32::try_from(quantity).map_err(|_| {
        RepoError::InvalidData(format!(
            "quantity `{quantity}` out of range in products.quantity"
        ))
    })?;

    let product = Product {
        id: row.get("id")?,
        name: row.get("name")?,
        quantity,
    };
    product
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("{err} in products.id")))?;
    Ok(product)
}
