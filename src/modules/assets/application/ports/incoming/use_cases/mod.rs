mod fetch_asset;

pub use fetch_asset::{FetchAssetError, FetchAssetUseCase};
