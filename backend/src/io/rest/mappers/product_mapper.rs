use crate::domain::models::Product as DomainProduct;
use shared::{
    CreateProductRequest, Product as SharedProduct, ProductListResponse, UpdateProductRequest,
};

/// Mapper to convert between shared product DTOs and the domain Product model.
pub struct ProductMapper;

impl ProductMapper {
    pub fn from_create_request(request: CreateProductRequest) -> DomainProduct {
        DomainProduct {
            id: 0,
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
        }
    }

    pub fn from_update_request(id: i64, request: UpdateProductRequest) -> DomainProduct {
        DomainProduct {
            id,
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
        }
    }

    pub fn to_dto(domain: DomainProduct) -> SharedProduct {
        SharedProduct {
            id: domain.id,
            name: domain.name,
            description: domain.description,
            price: domain.price,
            stock: domain.stock,
        }
    }

    pub fn to_product_list_dto(domain_products: Vec<DomainProduct>) -> ProductListResponse {
        ProductListResponse {
            products: domain_products.into_iter().map(Self::to_dto).collect(),
        }
    }
}
