//! Product use-case service.
//!
//! # Responsibility
//! - Provide the product CRUD entry points for core callers.
//! - Assign ids on create; delegate persistence to the repository.
//!
//! # Invariants
//! - `add_product` requests exactly one id and performs exactly one save.
//! - `update_product` never generates an id and does not check existence
//!   (upsert).
//! - `delete_product` succeeds whether or not the id exists.
//! - Repository failures are returned unchanged inside `ProductServiceError::Repo`.

use crate::model::product::{NewProduct, Product, ProductId};
use crate::repo::product_repo::{ProductRepository, RepoError};
use crate::service::id_service::IdService;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ProductServiceError>;

/// Service error for product use-cases.
#[derive(Debug)]
pub enum ProductServiceError {
    /// No product is stored under the requested id.
    ProductNotFound(ProductId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ProductServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProductNotFound(id) => write!(f, "product not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProductServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::ProductNotFound(_) => None,
        }
    }
}

impl From<RepoError> for ProductServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Product service facade over repository and id-generation collaborators.
pub struct ProductService<R: ProductRepository, I: IdService> {
    repo: R,
    ids: I,
}

impl<R: ProductRepository, I: IdService> ProductService<R, I> {
    /// Creates a service using the provided collaborators.
    pub fn new(repo: R, ids: I) -> Self {
        Self { repo, ids }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn id_service(&self) -> &I {
        &self.ids
    }

    /// Lists every stored product in repository order.
    pub fn find_all_products(&self) -> ServiceResult<Vec<Product>> {
        let products = self.repo.find_all()?;
        debug!(
            "event=product_list module=service status=ok count={}",
            products.len()
        );
        Ok(products)
    }

    /// Creates a product under a freshly generated id.
    pub fn add_product(&self, new_product: &NewProduct) -> ServiceResult<Product> {
        let product = Product::from_new(self.ids.random_id(), new_product);
        let saved = self.repo.save(&product)?;
        debug!(
            "event=product_add module=service status=ok product_id={}",
            saved.id
        );
        Ok(saved)
    }

    /// Gets one product by id.
    ///
    /// # Errors
    /// - `ProductServiceError::ProductNotFound` when nothing is stored under `id`.
    pub fn find_by_id(&self, id: &str) -> ServiceResult<Product> {
        match self.repo.find_by_id(id)? {
            Some(product) => {
                debug!("event=product_get module=service status=ok product_id={id}");
                Ok(product)
            }
            None => {
                warn!("event=product_get module=service status=not_found product_id={id}");
                Err(ProductServiceError::ProductNotFound(id.to_string()))
            }
        }
    }

    /// Replaces the product stored under `id`, creating it when absent.
    pub fn update_product(&self, id: &str, new_product: &NewProduct) -> ServiceResult<Product> {
        let product = Product::from_new(id, new_product);
        let saved = self.repo.save(&product)?;
        debug!("event=product_update module=service status=ok product_id={id}");
        Ok(saved)
    }

    /// Deletes the product stored under `id`, if any.
    pub fn delete_product(&self, id: &str) -> ServiceResult<()> {
        self.repo.delete_by_id(id)?;
        debug!("event=product_delete module=service status=ok product_id={id}");
        Ok(())
    }
}
