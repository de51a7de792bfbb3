use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::{AppError, Result};

/// Client-side counterpart of a resource handler.
///
/// `create` maps to `POST /api/{entities}` and `update` to
/// `PUT /api/{entities}`; the split on identifier presence is made by the
/// caller, mirroring the server's own validation.
#[async_trait]
pub trait EntityService<T>: Send + Sync {
    async fn create(&self, entity: &T) -> Result<T>;

    async fn update(&self, entity: &T) -> Result<T>;
}

/// reqwest-backed service talking to one resource collection.
pub struct HttpEntityService {
    base_url: String,
    resource_path: &'static str,
    http: reqwest::Client,
}

impl HttpEntityService {
    pub fn new(base_url: impl Into<String>, resource_path: &'static str) -> Self {
        Self {
            base_url: base_url.into(),
            resource_path,
            http: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/api/{}",
            self.base_url.trim_end_matches('/'),
            self.resource_path
        )
    }

    async fn send<T>(&self, request: reqwest::RequestBuilder, entity: &T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        let response = request.json(entity).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::not_found(self.collection_url()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::validation(format!(
                "Server rejected the request ({}): {}",
                status, body
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl<T> EntityService<T> for HttpEntityService
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn create(&self, entity: &T) -> Result<T> {
        self.send(self.http.post(self.collection_url()), entity)
            .await
    }

    async fn update(&self, entity: &T) -> Result<T> {
        self.send(self.http.put(self.collection_url()), entity)
            .await
    }
}
