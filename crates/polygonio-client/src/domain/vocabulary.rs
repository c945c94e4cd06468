use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Declares a closed, string-backed vocabulary enum whose serde, `Display`
/// and `FromStr` forms are all the wire literal.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ValidationError::$error {
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Market filter for ticker listings.
    Market, InvalidMarket {
        Stocks => "STOCKS",
        Forex => "FOREX",
        Crypto => "CRYPTO",
        /// No market filter; renders as an empty value.
        Any => "",
    }
}

wire_enum! {
    /// Result ordering for aggregate bars.
    Sort, InvalidSort {
        Asc => "asc",
        Desc => "desc",
    }
}

wire_enum! {
    /// Size of the time window of an aggregate bar.
    Timespan, InvalidTimespan {
        Minute => "minute",
        Hour => "hour",
        Day => "day",
        Week => "week",
        Month => "month",
        Quarter => "quarter",
        Year => "year",
    }
}

wire_enum! {
    /// Snapshot direction for top movers.
    Direction, InvalidDirection {
        Gainers => "gainers",
        Losers => "losers",
    }
}

wire_enum! {
    /// Reporting period of a financial statement.
    FinancialsPeriodType, InvalidFinancialsPeriod {
        /// Year.
        Year => "Y",
        /// Year annualized.
        YearAnnualized => "YA",
        /// Quarter.
        Quarter => "Q",
        /// Quarter annualized.
        QuarterAnnualized => "QA",
        /// Trailing twelve months.
        Trailing => "T",
        /// Trailing twelve months annualized.
        TrailingAnnualized => "TA",
    }
}

wire_enum! {
    /// Financial statement ordering. Descending orders carry a `-` prefix.
    FinancialsSort, InvalidFinancialsSort {
        AscReportPeriod => "reportPeriod",
        DescReportPeriod => "-reportPeriod",
        AscCalendarDate => "calendarDate",
        DescCalendarDate => "-calendarDate",
    }
}

wire_enum! {
    /// Record kind used to select a condition-code mapping.
    TickerRecordType, InvalidTickerRecordType {
        Trades => "trades",
        Quotes => "quotes",
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::Stocks
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::Asc
    }
}

impl Default for FinancialsPeriodType {
    fn default() -> Self {
        Self::Year
    }
}

impl Default for FinancialsSort {
    fn default() -> Self {
        Self::AscReportPeriod
    }
}
