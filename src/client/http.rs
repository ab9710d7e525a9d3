//! reqwest-backed implementation of [`InventoryApi`].

use super::InventoryApi;
use crate::{
    config::{ApiConfig, DeleteStyle},
    entities::{
        Godown, ItemResponse, ListResponse, NewGodown, NewProduct, Product, ProductDetails,
        StockAdjustment,
    },
    errors::{Error, Result},
};
use async_trait::async_trait;
use reqwest::{Client, Method, Request, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// HTTP client for the inventory backend.
#[derive(Clone, Debug)]
pub struct HttpInventoryClient {
    client: Client,
    base_url: Url,
    delete_style: DeleteStyle,
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    id: &'a str,
}

impl HttpInventoryClient {
    /// Builds a client from the `[api]` settings.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse or cannot carry a path, or if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(config.trimmed_base_url()).map_err(|e| Error::Config {
            message: format!("Invalid API base URL '{}': {e}", config.base_url),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config {
                message: format!("API base URL '{}' cannot carry a path", config.base_url),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            delete_style: config.delete_style,
        })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.client.request(method, self.url(segments))
    }

    pub(crate) fn delete_request(&self, id: &str) -> Result<Request> {
        let builder = match self.delete_style {
            DeleteStyle::Path => self.request(Method::DELETE, &["product", id]),
            DeleteStyle::Body => self
                .request(Method::DELETE, &["product"])
                .json(&DeleteBody { id }),
        };
        builder.build().map_err(Into::into)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<String> {
        self.execute(builder.build()?).await
    }

    /// Executes the request and turns non-success statuses into [`Error::Api`].
    async fn execute(&self, request: Request) -> Result<String> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            debug!("Inventory API answered {} ({} bytes)", status, body.len());
            return Ok(body);
        }

        let message = extract_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
        error!("Inventory API returned {}: {}", status, message);
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Replaces a 404 answer with the given not-found error.
fn not_found_as(result: Result<String>, not_found: impl FnOnce() -> Error) -> Result<String> {
    match result {
        Err(Error::Api { status: 404, .. }) => Err(not_found()),
        other => other,
    }
}

/// Pulls a human-readable message out of an error body, if it has one.
fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error", "msg"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(ToString::to_string)
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>> {
        let body = self.send(self.request(Method::GET, &["product"])).await?;
        let products = serde_json::from_str::<ListResponse<Product>>(&body)?.into_items();
        debug!("Fetched {} products", products.len());
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn list_godowns(&self) -> Result<Vec<Godown>> {
        let body = self.send(self.request(Method::GET, &["godown"])).await?;
        let godowns = serde_json::from_str::<ListResponse<Godown>>(&body)?.into_items();
        debug!("Fetched {} godowns", godowns.len());
        Ok(godowns)
    }

    #[instrument(skip(self))]
    async fn get_godown(&self, id: &str) -> Result<Godown> {
        let result = self.send(self.request(Method::GET, &["godown", id])).await;
        let body = not_found_as(result, || Error::GodownNotFound { id: id.to_string() })?;
        Ok(serde_json::from_str::<ItemResponse<Godown>>(&body)?.into_item())
    }

    #[instrument(skip(self), fields(name = %godown.name))]
    async fn create_godown(&self, godown: NewGodown) -> Result<()> {
        self.send(self.request(Method::POST, &["godown"]).json(&godown))
            .await
            .map(drop)
    }

    #[instrument(skip(self), fields(name = %product.name, godown = %product.godown_id))]
    async fn add_product(&self, product: NewProduct) -> Result<()> {
        let builder = self
            .request(Method::POST, &["godown", product.godown_id.as_str(), "add-product"])
            .json(&product);
        self.send(builder).await.map(drop)
    }

    #[instrument(skip(self), fields(id = %details.id))]
    async fn update_product(&self, details: ProductDetails) -> Result<()> {
        self.send(self.request(Method::PATCH, &["product", "update"]).json(&details))
            .await
            .map(drop)
    }

    #[instrument(skip(self))]
    async fn update_quantity(&self, adjustment: StockAdjustment) -> Result<()> {
        self.send(
            self.request(Method::POST, &["product", "update-quantity"])
                .json(&adjustment),
        )
        .await
        .map(drop)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: &str) -> Result<()> {
        let result = self.execute(self.delete_request(id)?).await;
        not_found_as(result, || Error::ProductNotFound { id: id.to_string() }).map(drop)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn client(delete_style: DeleteStyle) -> HttpInventoryClient {
        HttpInventoryClient::new(&ApiConfig {
            base_url: "https://inventory.example.com/api/".to_string(),
            delete_style,
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_urls_are_joined_under_base_path() {
        let client = client(DeleteStyle::Path);
        assert_eq!(
            client.url(&["godown", "g1", "add-product"]).as_str(),
            "https://inventory.example.com/api/godown/g1/add-product"
        );
        assert_eq!(
            client.url(&["product", "update-quantity"]).as_str(),
            "https://inventory.example.com/api/product/update-quantity"
        );
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        let client = client(DeleteStyle::Path);
        assert_eq!(
            client.url(&["godown", "a/b c"]).as_str(),
            "https://inventory.example.com/api/godown/a%2Fb%20c"
        );
    }

    #[test]
    fn test_delete_by_path() {
        let request = client(DeleteStyle::Path).delete_request("p42").unwrap();
        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(
            request.url().as_str(),
            "https://inventory.example.com/api/product/p42"
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn test_delete_by_body() {
        let request = client(DeleteStyle::Body).delete_request("p42").unwrap();
        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(
            request.url().as_str(),
            "https://inventory.example.com/api/product"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let json: Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json, serde_json::json!({"id": "p42"}));
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let result = HttpInventoryClient::new(&ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        });
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(r#"{"message": "Product not found"}"#).as_deref(),
            Some("Product not found")
        );
        assert_eq!(
            extract_message(r#"{"error": "bad id"}"#).as_deref(),
            Some("bad id")
        );
        assert_eq!(extract_message("<html>oops</html>"), None);
    }

    #[test]
    fn test_not_found_as_only_replaces_404() {
        let missing = not_found_as(
            Err(Error::Api {
                status: 404,
                message: "Not Found".to_string(),
            }),
            || Error::ProductNotFound {
                id: "p42".to_string(),
            },
        );
        assert!(matches!(missing, Err(Error::ProductNotFound { id }) if id == "p42"));

        let failed = not_found_as(
            Err(Error::Api {
                status: 500,
                message: "boom".to_string(),
            }),
            || Error::ProductNotFound {
                id: "p42".to_string(),
            },
        );
        assert!(matches!(failed, Err(Error::Api { status: 500, .. })));

        let ok = not_found_as(Ok("{}".to_string()), || Error::GodownNotFound {
            id: "g1".to_string(),
        });
        assert_eq!(ok.unwrap(), "{}");
    }
}
