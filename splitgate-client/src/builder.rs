//! Distribution builder.
//!
//! Turns an amount plus percentage allocations into a breakdown and an
//! encoded unsigned transaction. Input validation and the split itself
//! are pure (splitgate-core); the only network dependency is the recent
//! block reference that anchors the transaction's validity window.

use splitgate_core::{
    plan_transfers, Address, AllocationSet, DestinationSet, DistributionBreakdown,
    UnsignedTransaction,
};

use crate::error::ClientResult;
use crate::sources::BlockRefSource;

/// A planned distribution ready for signing.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionOutcome {
    /// Native-unit amounts that will actually move, per channel.
    pub breakdown: DistributionBreakdown,
    /// Deterministically encoded unsigned transaction.
    pub unsigned_tx: Vec<u8>,
}

/// Assembles unsigned fee-split transactions against a ledger.
pub struct DistributionBuilder<L> {
    ledger: L,
}

impl<L: BlockRefSource> DistributionBuilder<L> {
    /// Create a builder over a block-reference source.
    pub fn new(ledger: L) -> Self {
        DistributionBuilder { ledger }
    }

    /// Compute the breakdown for an amount without touching the ledger.
    pub fn preview(
        &self,
        total_amount: f64,
        allocations: &AllocationSet,
    ) -> ClientResult<DistributionBreakdown> {
        let shares = splitgate_core::distribution::compute_shares(total_amount, allocations)?;
        Ok(DistributionBreakdown::from_base_units(shares))
    }

    /// Build a distribution: validate, split, anchor, and encode.
    ///
    /// Inputs are validated and the transfers planned before any network
    /// call; a zero amount succeeds with an empty instruction list. The
    /// output bytes are identical for identical inputs including the
    /// block reference.
    pub async fn build(
        &self,
        from_wallet: &str,
        allocations: &AllocationSet,
        total_amount: f64,
        destinations: &DestinationSet,
    ) -> ClientResult<DistributionOutcome> {
        let fee_payer: Address = from_wallet.parse()?;
        let (breakdown, instructions) = plan_transfers(total_amount, allocations, destinations)?;

        let recent_block = self.ledger.recent_block_ref().await?;

        let tx = UnsignedTransaction::new(fee_payer, recent_block, instructions);
        let unsigned_tx = tx.encode()?;

        tracing::info!(
            fee_payer = %fee_payer.short(),
            instructions = tx.instructions.len(),
            total_base_units = tx.total_base_units(),
            "distribution built"
        );

        Ok(DistributionOutcome {
            breakdown,
            unsigned_tx,
        })
    }
}
