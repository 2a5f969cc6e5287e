use super::assets_model::AssetSnapshot;
use super::assets_errors::Result;

/// Trait defining the contract for Asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_asset(&self, ticker: &str) -> Result<AssetSnapshot>;
    fn list_assets(&self) -> Vec<AssetSnapshot>;
    async fn resolve_asset(&self, raw_ticker: &str) -> Result<AssetSnapshot>;
    async fn resolve_assets(&self, raw_tickers: &[String]) -> Result<Vec<AssetSnapshot>>;
}
