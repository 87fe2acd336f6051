use tokio::sync::OnceCell;
use welds::connections::any::AnyClient;

use crate::domain::StoreError;

/// Connection handle that connects on first use. The process can start while
/// the store is still unreachable; each caller then fails on its own.
pub struct Database {
    url: String,
    client: OnceCell<AnyClient>,
}

impl Database {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: OnceCell::new(),
        }
    }

    pub async fn client(&self) -> Result<&AnyClient, StoreError> {
        self.client
            .get_or_try_init(|| async {
                log::debug!("connecting to the database");
                welds::connections::connect(&self.url)
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))
            })
            .await
    }
}
