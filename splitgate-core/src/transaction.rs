//! Unsigned transfer transactions.
//!
//! An unsigned transaction is a transient, serializable artifact: an
//! ordered list of transfer instructions, a fee payer, and a recent block
//! reference anchoring its validity window. It carries no signatures and
//! moves no funds until the caller's wallet signs and broadcasts it.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::SerializationError;
use crate::serialization;

/// A single native-currency transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInstruction {
    /// Destination account.
    pub to: Address,
    /// Amount in base units. Always strictly positive: zero-value
    /// transfers are omitted at planning time, never emitted.
    pub base_units: u64,
}

/// An assembled, unsigned multi-transfer transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    /// The source wallet, which pays the network fee.
    pub fee_payer: Address,
    /// Recent block reference anchoring the validity window.
    pub recent_block: [u8; 32],
    /// Transfer instructions in canonical channel order.
    pub instructions: Vec<TransferInstruction>,
}

impl UnsignedTransaction {
    /// Assemble a transaction from its parts.
    pub fn new(
        fee_payer: Address,
        recent_block: [u8; 32],
        instructions: Vec<TransferInstruction>,
    ) -> Self {
        UnsignedTransaction {
            fee_payer,
            recent_block,
            instructions,
        }
    }

    /// Total base units moved by all instructions.
    pub fn total_base_units(&self) -> u64 {
        self.instructions.iter().map(|ix| ix.base_units).sum()
    }

    /// Encode to deterministic bytes for hand-off to the signing wallet.
    pub fn encode(&self) -> Result<Vec<u8>, SerializationError> {
        serialization::serialize(self)
    }

    /// Decode a previously encoded transaction.
    pub fn decode(bytes: &[u8]) -> Result<Self, SerializationError> {
        serialization::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx() -> UnsignedTransaction {
        UnsignedTransaction::new(
            Address::new([1u8; 32]),
            [9u8; 32],
            vec![
                TransferInstruction {
                    to: Address::new([2u8; 32]),
                    base_units: 5_000_000_000,
                },
                TransferInstruction {
                    to: Address::new([3u8; 32]),
                    base_units: 1_000_000_000,
                },
            ],
        )
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let tx = sample_tx();
        let bytes = tx.encode().unwrap();
        let recovered = UnsignedTransaction::decode(&bytes).unwrap();
        assert_eq!(tx, recovered);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let tx = sample_tx();
        assert_eq!(tx.encode().unwrap(), tx.encode().unwrap());
    }

    #[test]
    fn test_total_base_units() {
        assert_eq!(sample_tx().total_base_units(), 6_000_000_000);
    }

    #[test]
    fn test_empty_instruction_list() {
        let tx = UnsignedTransaction::new(Address::new([1u8; 32]), [0u8; 32], Vec::new());
        let recovered = UnsignedTransaction::decode(&tx.encode().unwrap()).unwrap();
        assert!(recovered.instructions.is_empty());
        assert_eq!(recovered.total_base_units(), 0);
    }
}
