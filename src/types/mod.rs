mod address;
pub use self::address::Address;

mod token;
pub use self::token::TokenId;

mod asset;
pub use self::asset::{Account, Asset, AssetContract, AssetsPage, Collection, Trait, User};
