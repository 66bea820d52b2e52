//! Clients service
//!
//! Client lifecycle, search, and the client/project join used by the
//! clients screen.

use super::{optional, required};
use crate::analytics::{self, ClientOverview};
use crate::database::{
    Client, ClientStore, CreateClientRequest, ProjectStore, UpdateClientRequest,
};
use crate::error::Result;

/// Service for managing clients
#[derive(Clone)]
pub struct ClientsService<S> {
    store: S,
}

impl<S> ClientsService<S>
where
    S: ClientStore + ProjectStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a new client
    pub async fn create_client(&self, req: CreateClientRequest) -> Result<Client> {
        let req = CreateClientRequest {
            name: required("Client name", &req.name)?,
            company: optional(req.company),
            email: optional(req.email),
            phone: optional(req.phone),
            city: optional(req.city),
            country: optional(req.country),
            address: optional(req.address),
        };

        tracing::info!("Creating client: {}", req.name);
        let client = self.store.create_client(req).await?;
        tracing::info!("Client created successfully: {}", client.id);

        Ok(client)
    }

    pub async fn get_client(&self, id: &str) -> Result<Client> {
        self.store.get_client(id).await
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        self.store.list_clients().await
    }

    /// Update a client; blank optional fields are left unchanged
    pub async fn update_client(&self, req: UpdateClientRequest) -> Result<Client> {
        let name = match req.name {
            Some(name) => Some(required("Client name", &name)?),
            None => None,
        };

        let req = UpdateClientRequest {
            id: req.id,
            name,
            company: optional(req.company),
            email: optional(req.email),
            phone: optional(req.phone),
            city: optional(req.city),
            country: optional(req.country),
            address: optional(req.address),
        };

        tracing::debug!("Updating client: {}", req.id);
        self.store.update_client(req).await
    }

    /// Delete a client together with its projects
    pub async fn delete_client(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting client: {}", id);
        self.store.delete_client(id).await?;
        tracing::info!("Client deleted successfully: {}", id);
        Ok(())
    }

    /// Search clients by name, company or email
    pub async fn search_clients(&self, query: &str) -> Result<Vec<Client>> {
        let clients = self.store.list_clients().await?;

        Ok(analytics::search_clients(&clients, query)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Every client joined with its projects
    pub async fn client_overviews(&self) -> Result<Vec<ClientOverview>> {
        let clients = self.store.list_clients().await?;
        let projects = self.store.list_projects().await?;

        Ok(analytics::client_overviews(&clients, &projects))
    }
}
