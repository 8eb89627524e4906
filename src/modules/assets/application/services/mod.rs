mod fetch_asset_service;

pub use fetch_asset_service::FetchAssetService;
