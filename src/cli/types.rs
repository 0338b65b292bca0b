//! Value enums for CLI arguments.

use std::fmt;

use crate::form::FormTrend;

/// Which ranking the `advise` command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AdviceKind {
    /// Best captain picks from the squad
    Captain,
    /// Best supersub picks from the squad
    Supersub,
    /// Best points per star in the pool
    Value,
    /// Weakest squad members by points per star
    TransferOut,
    /// Swaps that improve points per star
    Transfers,
    /// Low-ownership picks
    Differentials,
}

impl AdviceKind {
    pub fn needs_squad(self) -> bool {
        matches!(
            self,
            AdviceKind::Captain
                | AdviceKind::Supersub
                | AdviceKind::TransferOut
                | AdviceKind::Transfers
        )
    }
}

impl fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdviceKind::Captain => "captain",
            AdviceKind::Supersub => "supersub",
            AdviceKind::Value => "value",
            AdviceKind::TransferOut => "transfer-out",
            AdviceKind::Transfers => "transfers",
            AdviceKind::Differentials => "differentials",
        };
        write!(f, "{}", s)
    }
}

/// Trend filter for the `form` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TrendFilter {
    Improving,
    Declining,
}

impl From<TrendFilter> for FormTrend {
    fn from(filter: TrendFilter) -> Self {
        match filter {
            TrendFilter::Improving => FormTrend::Improving,
            TrendFilter::Declining => FormTrend::Declining,
        }
    }
}
