pub mod fs_asset_loader;
pub use fs_asset_loader::FsAssetLoader;
