//! Godown business logic - listing, opening and creating storage locations.

use crate::{
    client::InventoryApi,
    entities::{Godown, NewGodown},
    errors::{Error, Result},
};
use tracing::info;

/// Retrieves all godowns.
pub async fn list_godowns(api: &dyn InventoryApi) -> Result<Vec<Godown>> {
    api.list_godowns().await
}

/// Retrieves one godown with its products.
///
/// # Errors
/// Returns [`Error::GodownNotFound`] for a blank id or an unknown godown, or a service error.
pub async fn get_godown(api: &dyn InventoryApi, id: &str) -> Result<Godown> {
    if id.trim().is_empty() {
        return Err(Error::GodownNotFound { id: id.to_string() });
    }
    api.get_godown(id.trim()).await
}

/// Creates a godown. The name is required; a blank address is dropped.
///
/// # Errors
/// Returns an error if the name is blank or the backend rejects the request.
pub async fn create_godown(
    api: &dyn InventoryApi,
    name: &str,
    address: Option<&str>,
) -> Result<NewGodown> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation("Godown name is required!"));
    }

    let godown = NewGodown {
        name: name.to_string(),
        address: address
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(ToString::to_string),
    };

    api.create_godown(godown.clone()).await?;
    info!("Created godown '{}'", godown.name);
    Ok(godown)
}
