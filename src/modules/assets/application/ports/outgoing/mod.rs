pub mod asset_loader;
pub use asset_loader::{AssetError, AssetLoader};
