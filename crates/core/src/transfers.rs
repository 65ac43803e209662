// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use award_finder_domain::{
    CardProgramId, CreditCardProgram, ProgramId, TransferPartnership, TransferRatio,
};
use std::collections::HashSet;

/// A way to fund an award by transferring credit card points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOption {
    pub card_program: CreditCardProgram,
    /// Base ratio, regardless of any bonus.
    pub transfer_ratio: TransferRatio,
    pub transfer_time_hours: u32,
    /// Points needed at the effective ratio, rounded up.
    pub points_needed: u64,
    pub is_bonus_active: bool,
    pub bonus_ratio: Option<TransferRatio>,
    pub bonus_expires_at: Option<String>,
}

impl TransferOption {
    fn new(
        card_program: &CreditCardProgram,
        partnership: &TransferPartnership,
        miles: u32,
    ) -> Self {
        Self {
            card_program: card_program.clone(),
            transfer_ratio: partnership.transfer_ratio,
            transfer_time_hours: partnership.transfer_time_hours,
            points_needed: partnership.points_needed(miles),
            is_bonus_active: partnership.is_bonus_active,
            bonus_ratio: partnership.bonus_ratio,
            bonus_expires_at: partnership.bonus_expires_at.clone(),
        }
    }
}

impl Catalog {
    /// Prices `miles` through each enabled card program that transfers to
    /// `program_id`.
    ///
    /// Card codes must match exactly once surrounding whitespace is
    /// removed. Unknown codes are ignored. Options follow partnership
    /// enumeration order.
    #[must_use]
    pub fn transfer_options<S: AsRef<str>>(
        &self,
        program_id: ProgramId,
        miles: u32,
        enabled_card_codes: &[S],
    ) -> Vec<TransferOption> {
        if enabled_card_codes.is_empty() {
            return Vec::new();
        }

        let enabled: HashSet<CardProgramId> = enabled_card_codes
            .iter()
            .filter_map(|code| self.card_code_index.get(code.as_ref().trim()))
            .copied()
            .collect();
        if enabled.is_empty() {
            return Vec::new();
        }

        let Some(partnerships) = self.partnerships.get(&program_id) else {
            return Vec::new();
        };

        partnerships
            .iter()
            .filter(|p| enabled.contains(&p.card_program_id))
            .filter_map(|p| {
                self.card_programs
                    .get(&p.card_program_id)
                    .map(|card| TransferOption::new(card, p, miles))
            })
            .collect()
    }

    /// Partnerships into a program in enumeration order.
    #[must_use]
    pub fn program_partnerships(&self, program_id: ProgramId) -> &[TransferPartnership] {
        self.partnerships.get(&program_id).map_or(&[], Vec::as_slice)
    }
}
