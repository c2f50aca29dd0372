use log::{info, warn};

use super::error::ServiceError;
use super::models::Product;
use crate::storage::{DbConnection, ProductStore};

/// Delegates straight to the product store. Unlike clients, products are
/// written without any validation.
#[derive(Clone)]
pub struct ProductService {
    store: ProductStore,
}

impl ProductService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            store: ProductStore::new(db),
        }
    }

    pub async fn find_product_by_id(&self, id: i64) -> Result<Product, ServiceError> {
        info!("Getting product: {}", id);

        self.store.find_by_id(id).await.ok_or_else(|| {
            warn!("Product not found: {}", id);
            ServiceError::NotFound(format!("The product with id = {} was not found!", id))
        })
    }

    pub async fn find_all_products(&self) -> Vec<Product> {
        let products = self.store.find_all().await;
        info!("Found {} products", products.len());
        products
    }

    pub async fn insert_product(&self, product: Product) -> Product {
        info!("Creating product: {}", product.name);
        self.store.insert(product).await
    }

    pub async fn update_product(&self, product: Product) -> Product {
        info!("Updating product: {}", product.id);
        self.store.update(product).await
    }

    pub async fn delete_product(&self, id: i64) {
        info!("Deleting product: {}", id);
        self.store.delete_by_id(id).await;
    }
}
