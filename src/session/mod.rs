pub mod state;
pub mod ticket;

pub use state::CatalogSession;
pub use ticket::{FetchKind, FetchOutcome, FetchTicket};

use crate::client::{CatalogFetcher, FetchError, PageRequest};
use crate::config::ClientConfig;
use crate::document::DocumentRecord;

/// Run the request a ticket describes: the first catalog page, or the first
/// page of a server-side search. Pair with
/// [`CatalogSession::begin_fetch`] / [`CatalogSession::complete_fetch`].
pub async fn run_fetch<F>(
    fetcher: &F,
    config: &ClientConfig,
    kind: &FetchKind,
) -> Result<Vec<DocumentRecord>, FetchError>
where
    F: CatalogFetcher + ?Sized,
{
    let page = match kind {
        FetchKind::Catalog => {
            fetcher
                .list_documents(PageRequest::first(config.page_size))
                .await?
        }
        FetchKind::Search { query } => {
            fetcher
                .search(query, PageRequest::first(config.search_page_size))
                .await?
        }
    };
    Ok(page.items)
}
