use std::sync::Arc;

use log::{debug, warn};

use carteira_market_data::{is_valid_symbol, normalize_symbol, MarketDataProvider};

use super::assets_errors::{AssetError, Result};
use super::assets_model::{AssetSnapshot, NewAssetSnapshot};
use super::assets_registry::AssetRegistry;
use super::assets_traits::AssetServiceTrait;

/// Resolves tickers through the market data collaborator and keeps the
/// registry populated. This is the only async path in the system; the
/// projection engine downstream is strictly synchronous.
pub struct AssetService {
    registry: Arc<AssetRegistry>,
    provider: Arc<dyn MarketDataProvider>,
}

impl AssetService {
    pub fn new(registry: Arc<AssetRegistry>, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { registry, provider }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    fn get_asset(&self, ticker: &str) -> Result<AssetSnapshot> {
        self.registry
            .get(ticker)
            .ok_or_else(|| AssetError::NotFound(ticker.to_string()))
    }

    fn list_assets(&self) -> Vec<AssetSnapshot> {
        self.registry.list()
    }

    async fn resolve_asset(&self, raw_ticker: &str) -> Result<AssetSnapshot> {
        let ticker = normalize_symbol(raw_ticker);
        if !is_valid_symbol(&ticker) {
            return Err(AssetError::InvalidTickerFormat(ticker));
        }

        debug!("Resolving asset {}", ticker);
        let profile = self.provider.lookup(&ticker).await?;
        self.registry.register(NewAssetSnapshot::from(profile))
    }

    async fn resolve_assets(&self, raw_tickers: &[String]) -> Result<Vec<AssetSnapshot>> {
        let mut tickers = Vec::with_capacity(raw_tickers.len());
        for raw in raw_tickers {
            let ticker = normalize_symbol(raw);
            if !is_valid_symbol(&ticker) {
                return Err(AssetError::InvalidTickerFormat(ticker));
            }
            tickers.push(ticker);
        }

        let (profiles, failures) = self.provider.lookup_many(&tickers).await?;
        for (symbol, reason) in &failures {
            warn!("Failed to resolve {}: {}", symbol, reason);
        }

        let mut snapshots = Vec::with_capacity(profiles.len());
        for profile in profiles {
            snapshots.push(self.registry.register(NewAssetSnapshot::from(profile))?);
        }
        Ok(snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carteira_market_data::{ApiStatus, MarketDataError, QuoteProfile};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    struct MockProvider {
        profiles: HashMap<String, QuoteProfile>,
    }

    impl MockProvider {
        fn with(profiles: Vec<QuoteProfile>) -> Self {
            Self {
                profiles: profiles.into_iter().map(|p| (p.symbol.clone(), p)).collect(),
            }
        }
    }

    #[async_trait::async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn lookup(&self, symbol: &str) -> std::result::Result<QuoteProfile, MarketDataError> {
            self.profiles
                .get(symbol)
                .cloned()
                .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
        }

        async fn api_status(&self) -> ApiStatus {
            ApiStatus::ok(None, None)
        }
    }

    fn profile(symbol: &str, price: Decimal) -> QuoteProfile {
        QuoteProfile {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            price,
            annual_dividend_yield: dec!(0.06),
            currency: "BRL".to_string(),
            market_cap: None,
            logo_url: None,
        }
    }

    fn service_with(profiles: Vec<QuoteProfile>) -> (AssetService, Arc<AssetRegistry>) {
        let registry = Arc::new(AssetRegistry::new());
        let provider = Arc::new(MockProvider::with(profiles));
        (AssetService::new(registry.clone(), provider), registry)
    }

    #[tokio::test]
    async fn test_resolve_registers_snapshot() {
        let (service, registry) = service_with(vec![profile("PETR4", dec!(38.52))]);

        let snapshot = service.resolve_asset(" petr4 ").await.unwrap();
        assert_eq!(snapshot.ticker, "PETR4");
        assert!(registry.contains("PETR4"));
    }

    #[tokio::test]
    async fn test_malformed_ticker_rejected_before_lookup() {
        let (service, registry) = service_with(vec![]);

        let err = service.resolve_asset("PETR-4").await.unwrap_err();
        assert!(matches!(err, AssetError::InvalidTickerFormat(_)));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_symbol_maps_to_not_found() {
        let (service, _) = service_with(vec![]);

        let err = service.resolve_asset("XXXX3").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_resolve_many_registers_all() {
        let (service, registry) = service_with(vec![
            profile("PETR4", dec!(38.52)),
            profile("ITUB4", dec!(27.10)),
        ]);

        let snapshots = service
            .resolve_assets(&["petr4".to_string(), "ITUB4".to_string()])
            .await
            .unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(registry.len(), 2);
    }
}
