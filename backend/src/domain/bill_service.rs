use log::{info, warn};

use super::error::ServiceError;
use super::models::Bill;
use crate::storage::{BillStore, DbConnection};

/// Read access to logged bills. Bills are only created by order placement.
#[derive(Clone)]
pub struct BillService {
    store: BillStore,
}

impl BillService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            store: BillStore::new(db),
        }
    }

    pub async fn find_bill_by_id(&self, id: i64) -> Result<Bill, ServiceError> {
        info!("Getting bill: {}", id);

        self.store.find_by_id(id).await.ok_or_else(|| {
            warn!("Bill not found: {}", id);
            ServiceError::NotFound(format!("The bill with id = {} was not found!", id))
        })
    }

    pub async fn find_all_bills(&self) -> Vec<Bill> {
        let bills = self.store.find_all().await;
        info!("Found {} bills", bills.len());
        bills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Order, Product};
    use crate::domain::{OrderService, ProductService};

    #[tokio::test]
    async fn test_bills_follow_orders() {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        let products = ProductService::new(db.clone());
        let orders = OrderService::new(db.clone());
        let bills = BillService::new(db);

        let product = products
            .insert_product(Product::new("Stapler", "Metal", 12.5, 4))
            .await;
        let first = orders.insert_order(Order::new(1, product.id, 1)).await.unwrap();
        let second = orders.insert_order(Order::new(2, product.id, 3)).await.unwrap();

        let all = bills.find_all_bills().await;
        assert_eq!(all.len(), 2);

        let bill = bills.find_bill_by_id(2).await.unwrap();
        assert_eq!(bill.order_id(), second.id);
        assert_eq!(bill.total_amount(), 37.5);
        assert_ne!(first.id, second.id);

        assert!(matches!(
            bills.find_bill_by_id(9).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
