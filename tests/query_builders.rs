use opensea_api::types::{Address, TokenId};
use opensea_api::{AssetQuery, OrderDirection};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn default_query_is_empty() {
    let url = AssetQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
    assert_eq!(url.to_string(), "https://example.com/");
}

#[test]
fn query_with_owner() {
    let url = AssetQuery::default()
        .with_owner(Address::new("0x05fab57319739c7850716b90ed9034d564c9cab8"))
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("owner=0x05fab57319739c7850716b90ed9034d564c9cab8"));
}

#[test]
fn query_with_token_ids_keeps_order_and_duplicates() {
    let url = AssetQuery::default()
        .with_token_id(TokenId::from(3u64))
        .with_token_id(TokenId::from(1u64))
        .with_token_id(TokenId::from(3u64))
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("token_id=3&token_id=1&token_id=3"));
}

#[test]
fn query_with_uint256_token_id() {
    let big: TokenId = "57896044618658097711785492504343953926634992332820282019728792003956564819968"
        .parse()
        .unwrap();
    let url = AssetQuery::default().with_token_id(big).add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("token_id=57896044618658097711785492504343953926634992332820282019728792003956564819968")
    );
}

#[test]
fn query_with_collection_filters() {
    let url = AssetQuery::default()
        .with_collection("cryptokitties")
        .with_collection_slug("cryptokitties")
        .with_collection_editor("0xba52c75764d6f594735dc735be7f1830cdf58ddf")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("collection=cryptokitties"));
    assert!(query.contains("collection_slug=cryptokitties"));
    assert!(query.contains("collection_editor=0xba52c75764d6f594735dc735be7f1830cdf58ddf"));
}

#[test]
fn query_with_order_direction() {
    let url = AssetQuery::default()
        .with_order_direction(OrderDirection::Asc)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("order_direction=asc"));

    let url = AssetQuery::default()
        .with_order_direction(OrderDirection::Desc)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("order_direction=desc"));
}

#[test]
fn query_with_contract_addresses() {
    let url = AssetQuery::default()
        .with_asset_contract_address(Address::new("0x06012c8cf97bead5deae237070f9587f8e7a266d"))
        .with_asset_contract_addresses(&[
            Address::new("0x8a90cab2b38dba80c64b7734e58ee1db38b8992e"),
            Address::new("0xb47e3cd837ddf8e4c57f05d70ab865de6e193bbb"),
        ])
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("asset_contract_address=0x06012c8cf97bead5deae237070f9587f8e7a266d"));
    assert!(query.contains("asset_contract_addresses=0x8a90cab2b38dba80c64b7734e58ee1db38b8992e"));
    assert!(query.contains("asset_contract_addresses=0xb47e3cd837ddf8e4c57f05d70ab865de6e193bbb"));
}

#[test]
fn query_with_limit_and_cursor() {
    let url = AssetQuery::default()
        .with_limit(50)
        .with_cursor("LXBrPTEyMzQ1Njc4")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("limit=50"));
    assert!(query.contains("cursor=LXBrPTEyMzQ1Njc4"));
}

#[test]
fn zero_limit_is_omitted() {
    let url = AssetQuery::default().with_limit(0).add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn include_orders_only_emitted_when_set() {
    let url = AssetQuery::default()
        .with_include_orders(true)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("include_orders=true"));

    let url = AssetQuery::default()
        .with_include_orders(false)
        .add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn empty_strings_are_omitted() {
    let url = AssetQuery::default()
        .with_owner(Address::new(""))
        .with_collection("")
        .with_collection_slug("")
        .with_collection_editor("")
        .with_asset_contract_address(Address::new(""))
        .with_cursor("")
        .add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn values_are_form_encoded() {
    let url = AssetQuery::default()
        .with_collection("cool cats")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("collection=cool+cats") || query.contains("collection=cool%20cats"));
}

#[test]
fn combined_query_keeps_field_order() {
    let url = AssetQuery::default()
        .with_owner(Address::new("0x05fab57319739c7850716b90ed9034d564c9cab8"))
        .with_token_id(TokenId::from(1u64))
        .with_collection("cryptokitties")
        .with_order_direction(OrderDirection::Asc)
        .with_limit(20)
        .with_cursor("cur1")
        .with_include_orders(true)
        .add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some(
            "owner=0x05fab57319739c7850716b90ed9034d564c9cab8&token_id=1&collection=cryptokitties\
             &order_direction=asc&limit=20&cursor=cur1&include_orders=true"
        )
    );
}

#[test]
fn existing_query_parameters_are_preserved() {
    let url = Url::parse("https://example.com/api/v1/assets?format=json").unwrap();
    let url = AssetQuery::default().with_limit(5).add_to_url(&url);
    assert_eq!(url.query(), Some("format=json&limit=5"));
}
