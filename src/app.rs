use crate::error::AppError;
use crate::navigator::Navigator;
use api_client::RestDataProvider;
use configuration::Config;
use std::sync::Arc;
use views::Notifier;

/// The composition root.
///
/// Builds the REST data provider from `api.base_url`, the two views with the
/// configured page size, and the navigator that switches between them. Every
/// collaborator is passed in or constructed here; nothing is global.
pub fn assemble(
    config: &Config,
    notifier: Arc<dyn Notifier>,
) -> Result<Navigator<RestDataProvider>, AppError> {
    let provider = RestDataProvider::new(&config.api)?;
    let pagination = config.pagination.first_page()?;
    tracing::debug!(base_url = %provider.base_url(), page_size = pagination.page_size, "Assembled admin.");

    Ok(Navigator::new(provider, notifier, pagination))
}
