//! Fee-allocation channels and the per-channel sets keyed by them.
//!
//! A distribution splits a fee pool across exactly four named channels.
//! Instructions and breakdowns are always produced in the canonical
//! [`Channel::ALL`] order so output is reproducible for identical inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::to_native;

/// One of the four fee-allocation destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Market-making wallet.
    MarketMaking,
    /// Token buyback wallet.
    Buyback,
    /// Liquidity provisioning wallet.
    Liquidity,
    /// Creator revenue wallet.
    Revenue,
}

impl Channel {
    /// All channels in canonical instruction order.
    pub const ALL: [Channel; 4] = [
        Channel::MarketMaking,
        Channel::Buyback,
        Channel::Liquidity,
        Channel::Revenue,
    ];

    /// Get a human-readable name for this channel.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::MarketMaking => "market_making",
            Channel::Buyback => "buyback",
            Channel::Liquidity => "liquidity",
            Channel::Revenue => "revenue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Percentage weights for the four channels.
///
/// Weights are plain percentages (50.0 = half the pool). They are not
/// normalized: a set summing below 100 leaves the remainder unallocated,
/// and each weight independently determines its channel's slice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationSet {
    /// Market-making weight in percent.
    pub market_making: f64,
    /// Buyback weight in percent.
    pub buyback: f64,
    /// Liquidity weight in percent.
    pub liquidity: f64,
    /// Revenue weight in percent.
    pub revenue: f64,
}

impl AllocationSet {
    /// Get the weight for a channel.
    pub fn weight(&self, channel: Channel) -> f64 {
        match channel {
            Channel::MarketMaking => self.market_making,
            Channel::Buyback => self.buyback,
            Channel::Liquidity => self.liquidity,
            Channel::Revenue => self.revenue,
        }
    }
}

/// Destination wallet strings for the four channels.
///
/// Destinations are stored unparsed. A channel only needs a valid address
/// when it actually produces a transfer, so a zero-weight channel may
/// carry any placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationSet {
    /// Market-making destination.
    pub market_making: String,
    /// Buyback destination.
    pub buyback: String,
    /// Liquidity destination.
    pub liquidity: String,
    /// Revenue destination.
    pub revenue: String,
}

impl DestinationSet {
    /// Get the destination string for a channel.
    pub fn destination(&self, channel: Channel) -> &str {
        match channel {
            Channel::MarketMaking => &self.market_making,
            Channel::Buyback => &self.buyback,
            Channel::Liquidity => &self.liquidity,
            Channel::Revenue => &self.revenue,
        }
    }
}

/// Native-unit amounts per channel, derived from floored base units.
///
/// These are the amounts that will actually move, always less than or
/// equal to the naive percentage share.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionBreakdown {
    /// Market-making amount in native units.
    pub market_making: f64,
    /// Buyback amount in native units.
    pub buyback: f64,
    /// Liquidity amount in native units.
    pub liquidity: f64,
    /// Revenue amount in native units.
    pub revenue: f64,
}

impl DistributionBreakdown {
    /// Build a breakdown from per-channel base-unit shares in
    /// [`Channel::ALL`] order.
    pub fn from_base_units(shares: [u64; 4]) -> Self {
        DistributionBreakdown {
            market_making: to_native(shares[0]),
            buyback: to_native(shares[1]),
            liquidity: to_native(shares[2]),
            revenue: to_native(shares[3]),
        }
    }

    /// Get the amount for a channel.
    pub fn amount(&self, channel: Channel) -> f64 {
        match channel {
            Channel::MarketMaking => self.market_making,
            Channel::Buyback => self.buyback,
            Channel::Liquidity => self.liquidity,
            Channel::Revenue => self.revenue,
        }
    }

    /// Sum of all channel amounts in native units.
    pub fn total(&self) -> f64 {
        self.market_making + self.buyback + self.liquidity + self.revenue
    }
}
