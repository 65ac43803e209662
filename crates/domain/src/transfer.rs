// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ratio::TransferRatio;
use crate::types::{CardProgramId, PartnershipId, ProgramId};
use serde::{Deserialize, Serialize};

/// A transferable credit card points currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardProgram {
    pub id: CardProgramId,
    pub name: String,
    /// Short code such as `AMEX_MR` or `CHASE_UR`.
    pub code: String,
}

/// Transfer terms from one card currency into one airline program.
///
/// At most one partnership exists per card and airline program pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPartnership {
    pub id: PartnershipId,
    pub card_program_id: CardProgramId,
    pub program_id: ProgramId,
    pub transfer_ratio: TransferRatio,
    /// Hours until transferred miles post. `0` means instant.
    pub transfer_time_hours: u32,
    pub is_bonus_active: bool,
    pub bonus_ratio: Option<TransferRatio>,
    /// When the bonus ends, as stored by the data source.
    pub bonus_expires_at: Option<String>,
}

impl TransferPartnership {
    /// The ratio used to price a transfer.
    ///
    /// An active bonus replaces the base ratio only when a bonus ratio is
    /// present.
    #[must_use]
    pub fn effective_ratio(&self) -> TransferRatio {
        match self.bonus_ratio {
            Some(bonus) if self.is_bonus_active => bonus,
            _ => self.transfer_ratio,
        }
    }

    /// Card points needed to obtain `miles` program miles.
    #[must_use]
    pub fn points_needed(&self, miles: u32) -> u64 {
        self.effective_ratio().points_for(miles)
    }
}

/// Formats a transfer posting time for display.
///
/// `0` is `"Instant"`, anything under a day is shown in hours, and
/// longer waits are shown in whole days.
#[must_use]
pub fn format_transfer_time(hours: u32) -> String {
    match hours {
        0 => String::from("Instant"),
        1..=23 => format!("{hours}h"),
        _ => format!("{}d", hours / 24),
    }
}
