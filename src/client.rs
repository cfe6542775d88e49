//! HTTP client facade for the OpenSea v1 API.

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    decode::decode_body,
    query::AssetQuery,
    transport::Transport,
    types::{Address, Asset, AssetsPage, TokenId},
    Error,
};

/// Marketplace environment, selecting one of the two fixed API endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    /// Production API at `https://api.opensea.io`.
    Mainnet,
    /// Rinkeby testnet API at `https://rinkeby-api.opensea.io`.
    Rinkeby,
}

impl Network {
    /// Base URL of this environment's API.
    pub const fn base_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.opensea.io",
            Network::Rinkeby => "https://rinkeby-api.opensea.io",
        }
    }
}

/// Client for the OpenSea v1 HTTP API.
///
/// The endpoint and credential are fixed at construction; only the HTTP
/// client can be swapped afterwards. All methods take `&self` and each
/// call owns its own request state, so one client can serve concurrent
/// tasks.
pub struct Client {
    base_url: String,
    transport: Transport,
}

impl Client {
    /// Creates a client for the production API.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::for_network(Network::Mainnet, api_key)
    }

    /// Creates a client for the Rinkeby testnet API.
    pub fn rinkeby(api_key: String) -> Result<Self, Error> {
        Self::for_network(Network::Rinkeby, api_key)
    }

    /// Creates a client for the given environment.
    pub fn for_network(network: Network, api_key: String) -> Result<Self, Error> {
        Self::with_base_url(network.base_url(), api_key)
    }

    /// Creates a client with a custom base URL. Used for testing with
    /// wiremock. A trailing slash on `base_url` is ignored.
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            transport: Transport::new(api_key)?,
        })
    }

    /// Replaces the HTTP client used for requests. Endpoint and credential
    /// stay as constructed.
    pub fn set_http_client(&mut self, http: reqwest::Client) {
        self.transport.set_http_client(http);
    }

    /// Fetches one page of assets matching `query`.
    pub async fn get_assets(&self, query: &AssetQuery) -> Result<AssetsPage, Error> {
        self.get_assets_with_cancel(&CancellationToken::new(), query)
            .await
    }

    /// Fetches one page of assets matching `query`; cancelling `cancel`
    /// aborts the round trip with [`Error::Cancelled`].
    pub async fn get_assets_with_cancel(
        &self,
        cancel: &CancellationToken,
        query: &AssetQuery,
    ) -> Result<AssetsPage, Error> {
        let url = query.add_to_url(&self.endpoint("/api/v1/assets")?);
        self.fetch_json(cancel, url).await
    }

    /// Fetches a single asset by contract address and token id.
    pub async fn get_asset(
        &self,
        contract_address: &Address,
        token_id: &TokenId,
    ) -> Result<Asset, Error> {
        self.get_asset_with_cancel(&CancellationToken::new(), contract_address, token_id)
            .await
    }

    /// Fetches a single asset; cancelling `cancel` aborts the round trip
    /// with [`Error::Cancelled`].
    pub async fn get_asset_with_cancel(
        &self,
        cancel: &CancellationToken,
        contract_address: &Address,
        token_id: &TokenId,
    ) -> Result<Asset, Error> {
        let url = self.endpoint(&format!(
            "/api/v1/asset/{}/{}",
            contract_address, token_id
        ))?;
        self.fetch_json(cancel, url).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    async fn fetch_json<T>(&self, cancel: &CancellationToken, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let raw = self.transport.fetch(cancel, url).await?;
        decode_body(raw.status, &raw.body)
    }
}
