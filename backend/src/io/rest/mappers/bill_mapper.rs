use crate::domain::models::Bill as DomainBill;
use shared::{Bill as SharedBill, BillListResponse};

/// Bills only travel outward; there is no request type that builds one.
pub struct BillMapper;

impl BillMapper {
    pub fn to_dto(domain: &DomainBill) -> SharedBill {
        SharedBill {
            id: domain.id(),
            order_id: domain.order_id(),
            total_amount: domain.total_amount(),
        }
    }

    pub fn to_bill_list_dto(domain_bills: &[DomainBill]) -> BillListResponse {
        BillListResponse {
            bills: domain_bills.iter().map(Self::to_dto).collect(),
        }
    }
}
