//! In-memory product repository.
//!
//! Keeps products in first-save order, matching the SQLite adapter.
//! Single-threaded; intended for tests, fixtures and embedding without a
//! database file.

use crate::model::product::Product;
use crate::repo::product_repo::{ProductRepository, RepoResult};
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RefCell<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with already persisted products.
    ///
    /// Later entries replace earlier ones with the same id.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> RepoResult<Self> {
        let repo = Self::new();
        for product in products {
            repo.save(&product)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.products.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.borrow().is_empty()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_all(&self) -> RepoResult<Vec<Product>> {
        Ok(self.products.borrow().clone())
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        Ok(self
            .products
            .borrow()
            .iter()
            .find(|product| product.id == id)
            .cloned())
    }

    fn save(&self, product: &Product) -> RepoResult<Product> {
        product.validate()?;

        let mut products = self.products.borrow_mut();
        match products.iter_mut().find(|stored| stored.id == product.id) {
            Some(stored) => *stored = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(product.clone())
    }

    fn delete_by_id(&self, id: &str) -> RepoResult<()> {
        self.products.borrow_mut().retain(|product| product.id != id);
        Ok(())
    }
}
