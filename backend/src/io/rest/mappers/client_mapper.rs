use crate::domain::models::Client as DomainClient;
use shared::{Client as SharedClient, ClientListResponse, CreateClientRequest, UpdateClientRequest};

/// Mapper to convert between shared client DTOs and the domain Client model.
pub struct ClientMapper;

impl ClientMapper {
    /// New client without an id; the store assigns one on insert.
    pub fn from_create_request(request: CreateClientRequest) -> DomainClient {
        DomainClient {
            id: 0,
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            age: request.age,
        }
    }

    pub fn from_update_request(id: i64, request: UpdateClientRequest) -> DomainClient {
        DomainClient {
            id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            age: request.age,
        }
    }

    pub fn to_dto(domain: DomainClient) -> SharedClient {
        SharedClient {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
            address: domain.address,
            age: domain.age,
        }
    }

    pub fn to_client_list_dto(domain_clients: Vec<DomainClient>) -> ClientListResponse {
        ClientListResponse {
            clients: domain_clients.into_iter().map(Self::to_dto).collect(),
        }
    }
}
