use crate::domain::models::Order as DomainOrder;
use shared::{Order as SharedOrder, OrderListResponse, PlaceOrderRequest};

pub struct OrderMapper;

impl OrderMapper {
    pub fn from_place_request(request: PlaceOrderRequest) -> DomainOrder {
        DomainOrder::new(request.client_id, request.product_id, request.quantity)
    }

    pub fn to_dto(domain: DomainOrder) -> SharedOrder {
        SharedOrder {
            id: domain.id,
            client_id: domain.client_id,
            product_id: domain.product_id,
            quantity: domain.quantity,
        }
    }

    pub fn to_order_list_dto(domain_orders: Vec<DomainOrder>) -> OrderListResponse {
        OrderListResponse {
            orders: domain_orders.into_iter().map(Self::to_dto).collect(),
        }
    }
}
