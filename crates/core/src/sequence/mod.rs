use std::{collections::BTreeMap, sync::Arc};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{VariationCatalog, VariationId, CYCLE_LENGTH},
    ChoreoError, EnergyTier, Result,
};

/// How the next variation is chosen when a cycle starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Start on the first template of the tier and walk the alphabet.
    #[default]
    RoundRobin,
    /// Pseudo-random choice from a PCG stream seeded with the given value.
    Seeded(u64),
}

/// When a change of energy tier interrupts the running cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierSwitch {
    /// Any tier change starts a fresh cycle in the new tier.
    Immediate,
    /// Only a jump across a tier (low to high or back) restarts the cycle.
    /// Neighbouring tiers finish the running cycle and take effect at the
    /// next wrap.
    #[default]
    Distant,
}

impl TierSwitch {
    pub fn restarts(self, from: EnergyTier, to: EnergyTier) -> bool {
        let distance = tier_slot(from).abs_diff(tier_slot(to));
        match self {
            TierSwitch::Immediate => distance > 0,
            TierSwitch::Distant => distance > 1,
        }
    }
}

/// Progress through the current cycle. `tier` is the tier of the beat just
/// consumed; `active.tier` is the tier the running cycle was selected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceState {
    pub tier: EnergyTier,
    pub active: VariationId,
    /// Position inside the cycle, `0..8`.
    pub position: usize,
    pub repetition_count: u32,
    pub previous: Option<VariationId>,
}

impl SequenceState {
    pub fn starts_cycle(&self) -> bool {
        self.position == 0
    }
}

/// Per-run state machine. One beat in, one [`SequenceState`] out.
#[derive(Debug, Clone)]
pub struct SequenceMachine {
    catalog: Arc<VariationCatalog>,
    tier_switch: TierSwitch,
    rng: Option<Pcg32>,
    cursors: [usize; 3],
    state: Option<SequenceState>,
    usage: BTreeMap<VariationId, u32>,
}

impl SequenceMachine {
    pub fn new(catalog: Arc<VariationCatalog>, policy: SelectionPolicy) -> Self {
        let rng = match policy {
            SelectionPolicy::RoundRobin => None,
            SelectionPolicy::Seeded(seed) => Some(Pcg32::seed_from_u64(seed)),
        };
        Self {
            catalog,
            tier_switch: TierSwitch::default(),
            rng,
            cursors: [0; 3],
            state: None,
            usage: BTreeMap::new(),
        }
    }

    pub fn with_tier_switch(mut self, tier_switch: TierSwitch) -> Self {
        self.tier_switch = tier_switch;
        self
    }

    pub fn state(&self) -> Option<&SequenceState> {
        self.state.as_ref()
    }

    /// Number of cycles started per variation so far.
    pub fn usage(&self) -> &BTreeMap<VariationId, u32> {
        &self.usage
    }

    /// Consumes one beat of the given tier.
    ///
    /// A tier switch that the [`TierSwitch`] rule treats as a restart starts a
    /// fresh cycle in the new tier. Otherwise the position advances and a wrap
    /// to `0` reselects, in the current tier, a variation that differs from the
    /// one that just completed.
    pub fn advance(&mut self, tier: EnergyTier) -> Result<SequenceState> {
        let next = match self.state {
            None => SequenceState {
                tier,
                active: self.select(tier, None)?,
                position: 0,
                repetition_count: 0,
                previous: None,
            },
            Some(current) if self.tier_switch.restarts(current.active.tier, tier) => SequenceState {
                tier,
                active: self.select(tier, Some(current.active))?,
                position: 0,
                repetition_count: 0,
                previous: Some(current.active),
            },
            Some(current) => {
                let position = (current.position + 1) % CYCLE_LENGTH;
                if position != 0 {
                    SequenceState {
                        tier,
                        position,
                        ..current
                    }
                } else {
                    let active = self.select(tier, Some(current.active))?;
                    let repetition_count = if active == current.active {
                        current.repetition_count + 1
                    } else {
                        0
                    };
                    SequenceState {
                        tier,
                        active,
                        position,
                        repetition_count,
                        previous: Some(current.active),
                    }
                }
            }
        };

        if next.starts_cycle() {
            *self.usage.entry(next.active).or_insert(0) += 1;
            tracing::debug!(
                variation = %next.active,
                previous = ?next.previous.map(|id| id.to_string()),
                repetition = next.repetition_count,
                "starting cycle"
            );
        }

        self.state = Some(next);
        Ok(next)
    }

    fn select(&mut self, tier: EnergyTier, exclude: Option<VariationId>) -> Result<VariationId> {
        let count = self.catalog.len(tier);
        if count == 0 {
            return Err(ChoreoError::EmptyCatalogTier { tier, count });
        }

        let slot = tier_slot(tier);
        let index = match self.rng.as_mut() {
            None => {
                let mut index = self.cursors[slot] % count;
                if self.catalog.id_at(tier, index) == exclude {
                    index = (index + 1) % count;
                }
                self.cursors[slot] = index + 1;
                index
            }
            Some(rng) => {
                let candidates: Vec<usize> = (0..count)
                    .filter(|&index| self.catalog.id_at(tier, index) != exclude)
                    .collect();
                if candidates.is_empty() {
                    0
                } else {
                    candidates[rng.gen_range(0..candidates.len())]
                }
            }
        };

        self.catalog
            .id_at(tier, index)
            .ok_or_else(|| ChoreoError::msg(format!("variation index {index} missing for {tier}")))
    }
}

fn tier_slot(tier: EnergyTier) -> usize {
    match tier {
        EnergyTier::Low => 0,
        EnergyTier::Medium => 1,
        EnergyTier::High => 2,
    }
}
