//! Typed reqwest client for the API service. Every method takes the caller's
//! bearer token (if any) and relays it; authorization decisions stay on the
//! API side.

use std::sync::Arc;

use reqwest::RequestBuilder;
use salvo::async_trait;

use crate::error::{WebError, WebResult};
use crate::model::{AuthToken, Credentials, NationalPark, ParkPayload, Trail, TrailPayload};
use parkside_core::constants::{PARKS_ROUTE_PREFIX, TRAIL_ROUTE_PREFIX, USERS_ROUTE_PREFIX};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// ## Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(t) if !t.is_empty() => builder.bearer_auth(t),
            _ => builder,
        }
    }

    async fn expect_success(resp: reqwest::Response) -> WebResult<reqwest::Response> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(WebError::ApiStatus(resp.status()))
        }
    }

    /// ## Errors
    /// Returns `ApiStatus` for any credential mismatch; the API never says
    /// which part was wrong.
    pub async fn authenticate(&self, credentials: &Credentials) -> WebResult<AuthToken> {
        let url = format!("{}{USERS_ROUTE_PREFIX}/authenticate", self.base_url);
        let resp = self.http.post(url).json(credentials).send().await?;
        Ok(Self::expect_success(resp).await?.json().await?)
    }

    /// ## Errors
    /// Returns `ApiStatus` if the username is taken or a field is empty.
    pub async fn register(&self, credentials: &Credentials) -> WebResult<()> {
        let url = format!("{}{USERS_ROUTE_PREFIX}/register", self.base_url);
        let resp = self.http.post(url).json(credentials).send().await?;
        Self::expect_success(resp).await?;
        Ok(())
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn list_parks(&self, token: Option<&str>) -> WebResult<Vec<NationalPark>> {
        let url = format!("{}{PARKS_ROUTE_PREFIX}", self.base_url);
        let resp = Self::bearer(self.http.get(url), token).send().await?;
        Ok(Self::expect_success(resp).await?.json().await?)
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn get_park(&self, token: Option<&str>, id: uuid::Uuid) -> WebResult<NationalPark> {
        let url = format!("{}{PARKS_ROUTE_PREFIX}/{id}", self.base_url);
        let resp = Self::bearer(self.http.get(url), token).send().await?;
        Ok(Self::expect_success(resp).await?.json().await?)
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn create_park(&self, token: Option<&str>, payload: &ParkPayload) -> WebResult<()> {
        let url = format!("{}{PARKS_ROUTE_PREFIX}", self.base_url);
        let resp = Self::bearer(self.http.post(url), token)
            .json(payload)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        Ok(())
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn update_park(
        &self,
        token: Option<&str>,
        id: uuid::Uuid,
        payload: &ParkPayload,
    ) -> WebResult<()> {
        let url = format!("{}{PARKS_ROUTE_PREFIX}/{id}", self.base_url);
        let resp = Self::bearer(self.http.patch(url), token)
            .json(payload)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        Ok(())
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete_park(&self, token: Option<&str>, id: uuid::Uuid) -> WebResult<()> {
        let url = format!("{}{PARKS_ROUTE_PREFIX}/{id}", self.base_url);
        let resp = Self::bearer(self.http.delete(url), token).send().await?;
        Self::expect_success(resp).await?;
        Ok(())
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn list_trails(&self, token: Option<&str>) -> WebResult<Vec<Trail>> {
        let url = format!("{}{TRAIL_ROUTE_PREFIX}", self.base_url);
        let resp = Self::bearer(self.http.get(url), token).send().await?;
        Ok(Self::expect_success(resp).await?.json().await?)
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn get_trail(&self, token: Option<&str>, id: uuid::Uuid) -> WebResult<Trail> {
        let url = format!("{}{TRAIL_ROUTE_PREFIX}/{id}", self.base_url);
        let resp = Self::bearer(self.http.get(url), token).send().await?;
        Ok(Self::expect_success(resp).await?.json().await?)
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn create_trail(&self, token: Option<&str>, payload: &TrailPayload) -> WebResult<()> {
        let url = format!("{}{TRAIL_ROUTE_PREFIX}", self.base_url);
        let resp = Self::bearer(self.http.post(url), token)
            .json(payload)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        Ok(())
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn update_trail(
        &self,
        token: Option<&str>,
        id: uuid::Uuid,
        payload: &TrailPayload,
    ) -> WebResult<()> {
        let url = format!("{}{TRAIL_ROUTE_PREFIX}/{id}", self.base_url);
        let resp = Self::bearer(self.http.patch(url), token)
            .json(payload)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        Ok(())
    }

    /// ## Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete_trail(&self, token: Option<&str>, id: uuid::Uuid) -> WebResult<()> {
        let url = format!("{}{TRAIL_ROUTE_PREFIX}/{id}", self.base_url);
        let resp = Self::bearer(self.http.delete(url), token).send().await?;
        Self::expect_success(resp).await?;
        Ok(())
    }
}

pub struct ApiClientHandler {
    pub client: ApiClient,
}

#[async_trait]
impl salvo::Handler for ApiClientHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let client: Arc<ApiClient> = Arc::new(self.client.clone());
        depot.inject(client);
    }
}

/// ## Summary
/// Retrieves the API client from the depot.
///
/// ## Errors
/// Returns an error if the client is not found in the depot.
pub fn get_client_from_depot(depot: &salvo::Depot) -> WebResult<Arc<ApiClient>> {
    depot.obtain::<Arc<ApiClient>>().cloned().map_err(|_err| {
        WebError::CoreError(parkside_core::error::CoreError::InvariantViolation(
            "API client not found in depot",
        ))
    })
}
