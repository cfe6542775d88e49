//! Query builder for the asset-listing endpoint.

use std::str::FromStr;

use url::Url;

use crate::types::{Address, TokenId};

/// Sort order for listing results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderDirection {
    /// Ascending order (oldest/smallest first).
    Asc,
    /// Descending order (newest/largest first).
    Desc,
}

impl std::fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OrderDirection::Asc => "asc",
                OrderDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for OrderDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(OrderDirection::Asc),
            "desc" => Ok(OrderDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Filters for the asset-listing endpoint. Every field is optional; unset
/// and empty fields are left out of the query string entirely, so a default
/// query adds nothing to the URL.
#[derive(Default)]
pub struct AssetQuery {
    pub owner: Option<Address>,
    pub token_ids: Vec<TokenId>,
    pub collection: Option<String>,
    pub collection_slug: Option<String>,
    pub collection_editor: Option<String>,
    pub order_direction: Option<OrderDirection>,
    pub asset_contract_address: Option<Address>,
    pub asset_contract_addresses: Vec<Address>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub include_orders: bool,
}

impl AssetQuery {
    /// Appends this query's parameters to the given URL, returning the
    /// modified URL. Repeated keys keep their insertion order.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(owner) = &self.owner {
            if !owner.is_empty() {
                url.query_pairs_mut().append_pair("owner", owner.as_str());
            }
        }
        for token_id in self.token_ids.iter() {
            url.query_pairs_mut()
                .append_pair("token_id", &token_id.to_string());
        }
        if let Some(collection) = &self.collection {
            if !collection.is_empty() {
                url.query_pairs_mut()
                    .append_pair("collection", collection.as_str());
            }
        }
        if let Some(collection_slug) = &self.collection_slug {
            if !collection_slug.is_empty() {
                url.query_pairs_mut()
                    .append_pair("collection_slug", collection_slug.as_str());
            }
        }
        if let Some(collection_editor) = &self.collection_editor {
            if !collection_editor.is_empty() {
                url.query_pairs_mut()
                    .append_pair("collection_editor", collection_editor.as_str());
            }
        }
        if let Some(order_direction) = self.order_direction {
            url.query_pairs_mut()
                .append_pair("order_direction", order_direction.to_string().as_str());
        }
        if let Some(asset_contract_address) = &self.asset_contract_address {
            if !asset_contract_address.is_empty() {
                url.query_pairs_mut()
                    .append_pair("asset_contract_address", asset_contract_address.as_str());
            }
        }
        for address in self.asset_contract_addresses.iter() {
            url.query_pairs_mut()
                .append_pair("asset_contract_addresses", address.as_str());
        }
        if let Some(limit) = self.limit {
            if limit != 0 {
                url.query_pairs_mut()
                    .append_pair("limit", &limit.to_string());
            }
        }
        if let Some(cursor) = &self.cursor {
            if !cursor.is_empty() {
                url.query_pairs_mut().append_pair("cursor", cursor.as_str());
            }
        }
        if self.include_orders {
            url.query_pairs_mut().append_pair("include_orders", "true");
        }
        url
    }

    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_token_id(mut self, token_id: TokenId) -> Self {
        self.token_ids.push(token_id);
        self
    }
    pub fn with_token_ids(mut self, token_ids: &[TokenId]) -> Self {
        self.token_ids.extend_from_slice(token_ids);
        self
    }

    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection = Some(collection.to_string());
        self
    }

    pub fn with_collection_slug(mut self, collection_slug: &str) -> Self {
        self.collection_slug = Some(collection_slug.to_string());
        self
    }

    pub fn with_collection_editor(mut self, collection_editor: &str) -> Self {
        self.collection_editor = Some(collection_editor.to_string());
        self
    }

    pub fn with_order_direction(mut self, order_direction: OrderDirection) -> Self {
        self.order_direction = Some(order_direction);
        self
    }

    pub fn with_asset_contract_address(mut self, address: Address) -> Self {
        self.asset_contract_address = Some(address);
        self
    }
    pub fn with_asset_contract_addresses(mut self, addresses: &[Address]) -> Self {
        self.asset_contract_addresses.extend_from_slice(addresses);
        self
    }

    /// Caps the number of results per page. A zero limit counts as unset
    /// and is omitted, matching the upstream zero-value handling.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.cursor = Some(cursor.to_string());
        self
    }

    /// Asks the API to embed active orders. The parameter is only emitted
    /// when enabled; `include_orders=false` is never sent.
    pub fn with_include_orders(mut self, include_orders: bool) -> Self {
        self.include_orders = include_orders;
        self
    }
}
