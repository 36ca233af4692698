use crate::core::catalog::Catalog;
use crate::core::engine::QuoteLimits;
use crate::core::formatter::CurrencyFormat;
use crate::utils::error::Result;

/// Source of everything the engine needs besides the request itself.
pub trait ConfigProvider {
    fn catalog(&self) -> Result<Catalog>;
    fn limits(&self) -> QuoteLimits;
    fn currency_format(&self) -> CurrencyFormat;
}
