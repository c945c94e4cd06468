use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Asset class a [`Ticker`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Stock,
    Forex,
    Crypto,
}

/// Asset identifier tagged with its asset class.
///
/// The wrapped string is forwarded verbatim; no normalization or validation
/// happens locally, so `"C:EURUSD"` and `"X:BTCUSD"` style identifiers pass
/// through untouched. All three variants render identically on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "asset_class", content = "ticker", rename_all = "snake_case")]
pub enum Ticker {
    Stock(String),
    Forex(String),
    Crypto(String),
}

impl Ticker {
    pub fn stock(value: impl Into<String>) -> Self {
        Self::Stock(value.into())
    }

    pub fn forex(value: impl Into<String>) -> Self {
        Self::Forex(value.into())
    }

    pub fn crypto(value: impl Into<String>) -> Self {
        Self::Crypto(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Stock(value) | Self::Forex(value) | Self::Crypto(value) => value,
        }
    }

    pub const fn asset_class(&self) -> AssetClass {
        match self {
            Self::Stock(_) => AssetClass::Stock,
            Self::Forex(_) => AssetClass::Forex,
            Self::Crypto(_) => AssetClass::Crypto,
        }
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
