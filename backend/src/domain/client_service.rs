use log::{info, warn};
use std::sync::Arc;

use super::error::ServiceError;
use super::models::Client;
use super::validators::{client_validators, validate_all, Validator, MAX_AGE, MIN_AGE};
use crate::storage::{ClientStore, DbConnection};

/// Validates clients before delegating writes to the client store
#[derive(Clone)]
pub struct ClientService {
    store: ClientStore,
    validators: Arc<Vec<Box<dyn Validator<Client>>>>,
}

impl ClientService {
    /// Service with the email check and the default age range
    pub fn new(db: DbConnection) -> Self {
        Self::with_validators(db, client_validators(MIN_AGE, MAX_AGE))
    }

    pub fn with_validators(db: DbConnection, validators: Vec<Box<dyn Validator<Client>>>) -> Self {
        Self {
            store: ClientStore::new(db),
            validators: Arc::new(validators),
        }
    }

    pub async fn find_client_by_id(&self, id: i64) -> Result<Client, ServiceError> {
        info!("Getting client: {}", id);

        match self.store.find_by_id(id).await {
            Some(client) => Ok(client),
            None => {
                warn!("Client not found: {}", id);
                Err(ServiceError::NotFound(format!(
                    "The client with id = {} was not found!",
                    id
                )))
            }
        }
    }

    pub async fn find_all_clients(&self) -> Vec<Client> {
        let clients = self.store.find_all().await;
        info!("Found {} clients", clients.len());
        clients
    }

    pub async fn insert_client(&self, client: Client) -> Result<Client, ServiceError> {
        info!("Creating client: name={}, age={}", client.name, client.age);
        self.validate(&client)?;

        let client = self.store.insert(client).await;
        info!("Created client: {} with ID: {}", client.name, client.id);
        Ok(client)
    }

    pub async fn update_client(&self, client: Client) -> Result<Client, ServiceError> {
        info!("Updating client: {}", client.id);
        self.validate(&client)?;

        Ok(self.store.update(client).await)
    }

    pub async fn delete_client(&self, id: i64) {
        info!("Deleting client: {}", id);
        self.store.delete_by_id(id).await;
    }

    fn validate(&self, client: &Client) -> Result<(), ServiceError> {
        validate_all(self.validators.as_slice(), client).map_err(|e| {
            warn!("Client rejected: {}", e);
            ServiceError::from(e)
        })
    }
}
