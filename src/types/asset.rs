//! Asset records as returned by the v1 listing and single-asset endpoints.
//!
//! The marketplace omits or nulls most fields freely, so nearly everything
//! here is optional. Decoded values are passed through unvalidated.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Address, TokenId};

/// One page of listing results, with opaque cursors for the neighbouring
/// pages.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssetsPage {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,

    pub token_id: TokenId,

    pub num_sales: Option<i64>,

    pub background_color: Option<String>,

    pub image_url: Option<String>,

    pub image_preview_url: Option<String>,

    pub image_thumbnail_url: Option<String>,

    pub image_original_url: Option<String>,

    pub animation_url: Option<String>,

    pub animation_original_url: Option<String>,

    pub name: Option<String>,

    pub description: Option<String>,

    pub external_link: Option<String>,

    pub asset_contract: Option<AssetContract>,

    pub permalink: Option<String>,

    pub collection: Option<Collection>,

    pub decimals: Option<i64>,

    pub token_metadata: Option<String>,

    pub owner: Option<Account>,

    pub creator: Option<Account>,

    #[serde(default)]
    pub traits: Vec<Trait>,

    pub last_sale: Option<serde_json::Value>,

    pub top_bid: Option<serde_json::Value>,

    pub listing_date: Option<String>,

    /// Present when the listing was requested with `include_orders=true`.
    /// Order payloads are kept opaque.
    pub seller_orders: Option<serde_json::Value>,
}

/// The on-chain contract an asset belongs to.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssetContract {
    pub address: Address,
    pub asset_contract_type: Option<String>,
    pub created_date: Option<NaiveDateTime>,
    pub name: Option<String>,
    pub nft_version: Option<String>,
    pub owner: Option<i64>,
    pub schema_name: Option<String>,
    pub symbol: Option<String>,
    pub total_supply: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub image_url: Option<String>,
    pub payout_address: Option<Address>,
}

/// Collection metadata embedded in asset responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct Collection {
    pub banner_image_url: Option<String>,
    pub created_date: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub external_url: Option<String>,
    pub featured: Option<bool>,
    pub hidden: Option<bool>,
    pub safelist_request_status: Option<String>,
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub payout_address: Option<Address>,
}

/// An account reference, as used for owners and creators.
#[derive(Debug, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    pub profile_img_url: Option<String>,
    pub user: Option<User>,
    pub config: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    pub username: Option<String>,
}

/// A single trait attached to an asset. Values are strings or numbers
/// depending on `display_type`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Trait {
    pub trait_type: String,
    pub value: serde_json::Value,
    pub display_type: Option<String>,
    pub max_value: Option<serde_json::Value>,
    pub trait_count: Option<i64>,
    pub order: Option<serde_json::Value>,
}
