//! The distribution planner.
//!
//! Splits a native-currency amount across the four channels:
//! 1. Reject negative amounts and weights.
//! 2. Per channel, floor(base_units * weight / 100) in canonical order.
//! 3. Channels with a zero floored share are omitted entirely; their
//!    destinations are never parsed.
//! 4. A positive channel with an unparsable destination is an error.
//!
//! The returned breakdown reports the floored amounts converted back to
//! native units, i.e. what will actually move.

use crate::channel::{AllocationSet, Channel, DestinationSet, DistributionBreakdown};
use crate::error::DistributionError;
use crate::transaction::TransferInstruction;
use crate::units::{floor_share, to_base_units};

/// Per-channel floored base-unit shares in [`Channel::ALL`] order.
///
/// Fails with [`DistributionError::InvalidInput`] on a negative or
/// non-finite amount or weight. A zero amount yields all-zero shares.
pub fn compute_shares(
    total_amount: f64,
    allocations: &AllocationSet,
) -> Result<[u64; 4], DistributionError> {
    if !total_amount.is_finite() || total_amount < 0.0 {
        return Err(DistributionError::InvalidInput(format!(
            "total amount must be a non-negative number, got {}",
            total_amount
        )));
    }

    let base_units = to_base_units(total_amount);
    let mut shares = [0u64; 4];
    for (slot, channel) in Channel::ALL.iter().enumerate() {
        let weight = allocations.weight(*channel);
        if !weight.is_finite() || weight < 0.0 {
            return Err(DistributionError::InvalidInput(format!(
                "weight for {} channel must be a non-negative number, got {}",
                channel, weight
            )));
        }
        shares[slot] = floor_share(base_units, weight);
    }
    Ok(shares)
}

/// Plan the transfers for a distribution.
///
/// Returns the breakdown and the instruction list in canonical channel
/// order. Only channels with a strictly positive floored share appear in
/// the list, and only their destinations are validated.
pub fn plan_transfers(
    total_amount: f64,
    allocations: &AllocationSet,
    destinations: &DestinationSet,
) -> Result<(DistributionBreakdown, Vec<TransferInstruction>), DistributionError> {
    let shares = compute_shares(total_amount, allocations)?;

    let mut instructions = Vec::new();
    for (slot, channel) in Channel::ALL.iter().enumerate() {
        if shares[slot] == 0 {
            continue;
        }
        let destination = destinations.destination(*channel);
        let to = destination
            .parse()
            .map_err(|_| DistributionError::InvalidDestination {
                channel: *channel,
                destination: destination.to_string(),
            })?;
        instructions.push(TransferInstruction {
            to,
            base_units: shares[slot],
        });
    }

    Ok((DistributionBreakdown::from_base_units(shares), instructions))
}
