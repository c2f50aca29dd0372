//! Order placement.
//!
//! Placing an order runs a fixed sequence: look up the product, check stock,
//! decrement and save the stock, insert the order, then insert a bill for
//! `quantity * price` at the price seen in the lookup.
//!
//! In [`OrderMode::PerStatement`] every step runs on its own connection and
//! store failures are swallowed, so a failure after the stock update leaves
//! stock decremented with no matching order or bill. [`OrderMode::Atomic`]
//! runs the whole sequence in one transaction and rolls back on the first
//! storage failure.

use log::{info, warn};

use super::error::ServiceError;
use super::models::{Bill, Order, Product};
use crate::storage::{BillStore, DbConnection, OrderStore, ProductStore, StorageError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderMode {
    #[default]
    PerStatement,
    Atomic,
}

#[derive(Clone)]
pub struct OrderService {
    db: DbConnection,
    order_store: OrderStore,
    product_store: ProductStore,
    bill_store: BillStore,
    mode: OrderMode,
}

impl OrderService {
    pub fn new(db: DbConnection) -> Self {
        Self::with_mode(db, OrderMode::default())
    }

    pub fn with_mode(db: DbConnection, mode: OrderMode) -> Self {
        Self {
            order_store: OrderStore::new(db.clone()),
            product_store: ProductStore::new(db.clone()),
            bill_store: BillStore::new(db.clone()),
            db,
            mode,
        }
    }

    /// Places `order` and logs its bill. Returns the order with its generated id.
    ///
    /// Fails with `NotFound` when the product doesn't exist and with
    /// `InvalidArgument` when the quantity isn't positive or stock is short;
    /// nothing is written in either case.
    pub async fn insert_order(&self, order: Order) -> Result<Order, ServiceError> {
        info!(
            "Placing order: client={}, product={}, quantity={}",
            order.client_id, order.product_id, order.quantity
        );

        match self.mode {
            OrderMode::PerStatement => self.insert_order_per_statement(order).await,
            OrderMode::Atomic => self.insert_order_atomic(order).await,
        }
    }

    async fn insert_order_per_statement(&self, order: Order) -> Result<Order, ServiceError> {
        let mut product = self
            .product_store
            .find_by_id(order.product_id)
            .await
            .ok_or_else(|| product_not_found(order.product_id))?;
        let remaining = remaining_stock(&product, &order)?;

        let price = product.price;
        product.stock = remaining;
        self.product_store.update(product).await;

        let order = self.order_store.insert(order).await;

        let bill = self
            .bill_store
            .insert(Bill::new(order.id, bill_total(&order, price)))
            .await;
        info!(
            "Placed order {} with bill {} totalling {:.2}",
            order.id,
            bill.id(),
            bill.total_amount()
        );

        Ok(order)
    }

    async fn insert_order_atomic(&self, mut order: Order) -> Result<Order, ServiceError> {
        let mut tx = self.db.begin().await?;

        let mut product = self
            .product_store
            .find_by_id_with(&mut tx, order.product_id)
            .await?
            .ok_or_else(|| product_not_found(order.product_id))?;
        let remaining = remaining_stock(&product, &order)?;

        let price = product.price;
        product.stock = remaining;
        self.product_store.update_with(&mut tx, &product).await?;
        self.order_store.insert_with(&mut tx, &mut order).await?;

        let mut bill = Bill::new(order.id, bill_total(&order, price));
        self.bill_store.insert_with(&mut tx, &mut bill).await?;

        tx.commit().await.map_err(StorageError::from)?;
        info!(
            "Placed order {} with bill {} totalling {:.2}",
            order.id,
            bill.id(),
            bill.total_amount()
        );

        Ok(order)
    }

    pub async fn find_order_by_id(&self, id: i64) -> Result<Order, ServiceError> {
        info!("Getting order: {}", id);

        self.order_store.find_by_id(id).await.ok_or_else(|| {
            warn!("Order not found: {}", id);
            ServiceError::NotFound(format!("The order with id = {} was not found!", id))
        })
    }

    pub async fn find_all_orders(&self) -> Vec<Order> {
        let orders = self.order_store.find_all().await;
        info!("Found {} orders", orders.len());
        orders
    }
}

fn product_not_found(product_id: i64) -> ServiceError {
    warn!("Order rejected, product {} does not exist", product_id);
    ServiceError::NotFound(format!("Product with ID {} not found.", product_id))
}

/// Stock left after `order`. Rejects non-positive quantities and short stock.
fn remaining_stock(product: &Product, order: &Order) -> Result<i32, ServiceError> {
    if order.quantity <= 0 {
        warn!("Order rejected, quantity {} is not positive", order.quantity);
        return Err(ServiceError::InvalidArgument(
            "Quantity must be greater than 0.".to_string(),
        ));
    }

    match product.stock.checked_sub(order.quantity) {
        Some(remaining) if remaining >= 0 => Ok(remaining),
        _ => {
            warn!(
                "Order rejected, product {} has {} in stock, {} requested",
                product.id, product.stock, order.quantity
            );
            Err(ServiceError::InvalidArgument(format!(
                "Not enough stock available for product: {}. Available: {}, Requested: {}",
                product.name, product.stock, order.quantity
            )))
        }
    }
}

fn bill_total(order: &Order, price: f64) -> f64 {
    f64::from(order.quantity) * price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductService;
    use crate::storage::Store;
    use sqlx::Executor;

    struct TestEnvironment {
        db: DbConnection,
        products: ProductService,
        bills: BillStore,
    }

    impl TestEnvironment {
        async fn new() -> Self {
            let db = DbConnection::init_test().await.expect("Failed to init test DB");
            Self {
                products: ProductService::new(db.clone()),
                bills: Store::new(db.clone()),
                db,
            }
        }

        fn service(&self, mode: OrderMode) -> OrderService {
            OrderService::with_mode(self.db.clone(), mode)
        }

        async fn product(&self, stock: i32, price: f64) -> Product {
            self.products
                .insert_product(Product::new("Notebook", "A5 dotted", price, stock))
                .await
        }

        async fn stock_of(&self, id: i64) -> i32 {
            self.products.find_product_by_id(id).await.unwrap().stock
        }

        async fn drop_bill_table(&self) {
            let mut conn = self.db.acquire().await.unwrap();
            conn.execute("DROP TABLE bill").await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_order_decrements_stock_and_bills_once() {
        let env = TestEnvironment::new().await;
        for _ in 0..4 {
            env.product(1, 1.0).await;
        }
        let product = env.product(10, 50.0).await;
        assert_eq!(product.id, 5);

        let order = env
            .service(OrderMode::PerStatement)
            .insert_order(Order::new(1, 5, 2))
            .await
            .unwrap();

        assert!(order.id > 0);
        assert_eq!(env.stock_of(5).await, 8);

        let bills = env.bills.find_all().await;
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].order_id(), order.id);
        assert_eq!(bills[0].total_amount(), 100.0);
    }

    #[tokio::test]
    async fn test_order_for_entire_stock_is_accepted() {
        let env = TestEnvironment::new().await;

        for mode in [OrderMode::PerStatement, OrderMode::Atomic] {
            let product = env.product(3, 1.5).await;
            env.service(mode)
                .insert_order(Order::new(1, product.id, 3))
                .await
                .unwrap();
            assert_eq!(env.stock_of(product.id).await, 0);
        }
    }

    #[tokio::test]
    async fn test_insufficient_stock_changes_nothing() {
        let env = TestEnvironment::new().await;
        let product = env.product(2, 9.99).await;

        for mode in [OrderMode::PerStatement, OrderMode::Atomic] {
            let service = env.service(mode);
            let err = service
                .insert_order(Order::new(1, product.id, 3))
                .await
                .unwrap_err();

            assert!(matches!(err, ServiceError::InvalidArgument(_)));
            assert_eq!(
                err.to_string(),
                "Not enough stock available for product: Notebook. Available: 2, Requested: 3"
            );
            assert_eq!(env.stock_of(product.id).await, 2);
            assert!(service.find_all_orders().await.is_empty());
            assert!(env.bills.find_all().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_non_positive_quantity_never_touches_stock() {
        let env = TestEnvironment::new().await;
        let empty = env.product(0, 3.0).await;
        let stocked = env.product(5, 3.0).await;

        for mode in [OrderMode::PerStatement, OrderMode::Atomic] {
            let service = env.service(mode);
            for (product, quantity) in [(&empty, i32::MIN), (&stocked, -2), (&stocked, 0)] {
                let err = service
                    .insert_order(Order::new(1, product.id, quantity))
                    .await
                    .unwrap_err();

                assert!(matches!(err, ServiceError::InvalidArgument(_)));
                assert_eq!(err.to_string(), "Quantity must be greater than 0.");
            }

            assert_eq!(env.stock_of(empty.id).await, 0);
            assert_eq!(env.stock_of(stocked.id).await, 5);
            assert!(service.find_all_orders().await.is_empty());
            assert!(env.bills.find_all().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let env = TestEnvironment::new().await;
        let product = env.product(5, 1.0).await;

        for mode in [OrderMode::PerStatement, OrderMode::Atomic] {
            let service = env.service(mode);
            let err = service.insert_order(Order::new(1, 77, 1)).await.unwrap_err();

            assert!(matches!(err, ServiceError::NotFound(_)));
            assert_eq!(err.to_string(), "Product with ID 77 not found.");
            assert_eq!(env.stock_of(product.id).await, 5);
            assert!(service.find_all_orders().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_client_reference_is_not_checked() {
        let env = TestEnvironment::new().await;
        let product = env.product(5, 2.0).await;

        let order = env
            .service(OrderMode::PerStatement)
            .insert_order(Order::new(999, product.id, 1))
            .await
            .unwrap();
        assert_eq!(order.client_id, 999);
    }

    #[tokio::test]
    async fn test_atomic_order_matches_per_statement_result() {
        let env = TestEnvironment::new().await;
        let product = env.product(10, 50.0).await;
        let service = env.service(OrderMode::Atomic);

        let order = service.insert_order(Order::new(1, product.id, 2)).await.unwrap();

        assert_eq!(order.id, 1);
        assert_eq!(env.stock_of(product.id).await, 8);
        assert_eq!(service.find_order_by_id(order.id).await.unwrap(), order);

        let bills = env.bills.find_all().await;
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].order_id(), 1);
        assert_eq!(bills[0].total_amount(), 100.0);
    }

    #[tokio::test]
    async fn test_per_statement_failure_leaves_stock_decremented() {
        let env = TestEnvironment::new().await;
        let product = env.product(10, 4.0).await;
        env.drop_bill_table().await;

        let service = env.service(OrderMode::PerStatement);
        let order = service.insert_order(Order::new(1, product.id, 4)).await.unwrap();

        // The bill insert failed silently after stock and order were written
        assert_eq!(order.id, 1);
        assert_eq!(env.stock_of(product.id).await, 6);
        assert_eq!(service.find_all_orders().await.len(), 1);
    }

    #[tokio::test]
    async fn test_atomic_failure_rolls_back_every_step() {
        let env = TestEnvironment::new().await;
        let product = env.product(10, 4.0).await;
        env.drop_bill_table().await;

        let service = env.service(OrderMode::Atomic);
        let err = service
            .insert_order(Order::new(1, product.id, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::StorageFailure(_)));
        assert_eq!(env.stock_of(product.id).await, 10);
        assert!(service.find_all_orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_find_missing_order() {
        let env = TestEnvironment::new().await;
        let err = env
            .service(OrderMode::PerStatement)
            .find_order_by_id(3)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The order with id = 3 was not found!");
    }
}
