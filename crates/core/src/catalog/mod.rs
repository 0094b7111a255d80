//! Variation catalog: tier-indexed, fully enumerated 8-beat movement templates.

mod builtin;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BeatKind, ChoreoError, EnergyTier, Result};

use builtin::{RawTemplate, HIGH_TEMPLATES, LOW_TEMPLATES, MEDIUM_TEMPLATES};

/// Number of positions in one cycle.
pub const CYCLE_LENGTH: usize = 8;

/// Version tag written into JSON exports.
pub const CATALOG_VERSION: &str = "2";

/// Displacement relative to the neutral rest pose. Translations in centimetres,
/// rotations in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseDelta {
    pub dx: f32,
    pub dy: f32,
    pub dz: f32,
    pub droll: f32,
    pub dpitch: f32,
    pub dyaw: f32,
    pub dbody_yaw: f32,
}

impl PoseDelta {
    pub fn from_coords(coords: [f32; 6]) -> Self {
        let [dx, dy, dz, droll, dpitch, dyaw] = coords;
        Self {
            dx,
            dy,
            dz,
            droll,
            dpitch,
            dyaw,
            dbody_yaw: 0.0,
        }
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            dx: self.dx * factor,
            dy: self.dy * factor,
            dz: self.dz * factor,
            droll: self.droll * factor,
            dpitch: self.dpitch * factor,
            dyaw: self.dyaw * factor,
            dbody_yaw: self.dbody_yaw * factor,
        }
    }

    fn is_finite(&self) -> bool {
        [
            self.dx,
            self.dy,
            self.dz,
            self.droll,
            self.dpitch,
            self.dyaw,
            self.dbody_yaw,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// One cycle position of a template, tagged with the beat kind it is meant for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSlot {
    pub name: String,
    pub kind: BeatKind,
    pub delta: PoseDelta,
}

/// Identity of a template inside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariationId {
    pub tier: EnergyTier,
    pub letter: char,
}

impl VariationId {
    pub fn new(tier: EnergyTier, letter: char) -> Self {
        Self { tier, letter }
    }
}

impl fmt::Display for VariationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tier, self.letter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationTemplate {
    pub id: VariationId,
    pub label: String,
    pub slots: [TemplateSlot; CYCLE_LENGTH],
}

impl VariationTemplate {
    pub fn slot(&self, position: usize) -> &TemplateSlot {
        &self.slots[position % CYCLE_LENGTH]
    }

    /// `"A-LeftRight"` style label used in movement names.
    pub fn display_label(&self) -> String {
        format!("{}-{}", self.id.letter, self.label)
    }

    /// Nearest main-beat slot strictly before `position`, wrapping around.
    pub fn preceding_main(&self, position: usize) -> Option<usize> {
        (1..=CYCLE_LENGTH)
            .map(|step| (position + CYCLE_LENGTH - step) % CYCLE_LENGTH)
            .find(|&index| self.slots[index].kind == BeatKind::Main)
    }

    /// Nearest half-beat slot strictly after `position`, wrapping around.
    pub fn following_half(&self, position: usize) -> Option<usize> {
        (1..=CYCLE_LENGTH)
            .map(|step| (position + step) % CYCLE_LENGTH)
            .find(|&index| self.slots[index].kind == BeatKind::Half)
    }
}

/// Serializable description of a custom catalog. Letters are assigned by
/// position inside each tier list, starting at `A`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogTables {
    pub version: String,
    pub low: Vec<TemplateTable>,
    pub medium: Vec<TemplateTable>,
    pub high: Vec<TemplateTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateTable {
    pub label: String,
    pub slots: [TemplateSlot; CYCLE_LENGTH],
}

/// Immutable tier → templates table. Lookups by `(tier, letter)` are direct
/// indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct VariationCatalog {
    version: String,
    tiers: [Vec<VariationTemplate>; 3],
}

impl VariationCatalog {
    /// The shipped choreography: HIGH A-K, MEDIUM A-K, LOW A-J. Even positions
    /// are main-beat slots, odd positions half-beat slots.
    pub fn builtin() -> Self {
        Self {
            version: CATALOG_VERSION.to_string(),
            tiers: [
                from_raw(EnergyTier::Low, &LOW_TEMPLATES),
                from_raw(EnergyTier::Medium, &MEDIUM_TEMPLATES),
                from_raw(EnergyTier::High, &HIGH_TEMPLATES),
            ],
        }
    }

    pub fn from_tables(tables: CatalogTables) -> Result<Self> {
        let assign = |tier: EnergyTier, tables: Vec<TemplateTable>| -> Vec<VariationTemplate> {
            tables
                .into_iter()
                .enumerate()
                .map(|(index, table)| VariationTemplate {
                    id: VariationId::new(tier, letter_for(index)),
                    label: table.label,
                    slots: table.slots,
                })
                .collect()
        };

        let catalog = Self {
            version: tables.version,
            tiers: [
                assign(EnergyTier::Low, tables.low),
                assign(EnergyTier::Medium, tables.medium),
                assign(EnergyTier::High, tables.high),
            ],
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the load-time invariants: every tier has at least two templates
    /// (so a new cycle can always differ from the previous one), at most 26,
    /// and every template has a main-beat slot and finite deltas.
    pub fn validate(&self) -> Result<()> {
        for tier in EnergyTier::ALL {
            let templates = self.variations(tier);
            if templates.len() < 2 {
                return Err(ChoreoError::EmptyCatalogTier {
                    tier,
                    count: templates.len(),
                });
            }
            if templates.len() > 26 {
                return Err(ChoreoError::InvalidTemplate {
                    tier,
                    letter: 'Z',
                    reason: format!("{} templates exceed the A-Z alphabet", templates.len()),
                });
            }

            for template in templates {
                let invalid = |reason: &str| ChoreoError::InvalidTemplate {
                    tier,
                    letter: template.id.letter,
                    reason: reason.to_string(),
                };
                if !template.slots.iter().any(|slot| slot.kind == BeatKind::Main) {
                    return Err(invalid("template has no main-beat slot"));
                }
                if !template.slots.iter().all(|slot| slot.delta.is_finite()) {
                    return Err(invalid("template contains a non-finite delta"));
                }
            }
        }
        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn variations(&self, tier: EnergyTier) -> &[VariationTemplate] {
        &self.tiers[tier_index(tier)]
    }

    pub fn len(&self, tier: EnergyTier) -> usize {
        self.variations(tier).len()
    }

    pub fn get(&self, id: VariationId) -> Option<&VariationTemplate> {
        let index = letter_index(id.letter)?;
        self.variations(id.tier).get(index)
    }

    pub fn template(&self, id: VariationId) -> Result<&VariationTemplate> {
        self.get(id)
            .ok_or_else(|| ChoreoError::msg(format!("unknown variation `{id}` requested from catalog")))
    }

    /// Identifier of the `index`-th template of a tier, if it exists.
    pub fn id_at(&self, tier: EnergyTier, index: usize) -> Option<VariationId> {
        self.variations(tier).get(index).map(|template| template.id)
    }
}

impl Default for VariationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn tier_index(tier: EnergyTier) -> usize {
    match tier {
        EnergyTier::Low => 0,
        EnergyTier::Medium => 1,
        EnergyTier::High => 2,
    }
}

fn letter_for(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}

fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| letter as usize - 'A' as usize)
}

fn from_raw(tier: EnergyTier, raw: &[RawTemplate]) -> Vec<VariationTemplate> {
    raw.iter()
        .enumerate()
        .map(|(index, template)| VariationTemplate {
            id: VariationId::new(tier, letter_for(index)),
            label: template.label.to_string(),
            slots: std::array::from_fn(|position| {
                let (name, coords) = template.slots[position];
                TemplateSlot {
                    name: name.to_string(),
                    kind: if position % 2 == 0 {
                        BeatKind::Main
                    } else {
                        BeatKind::Half
                    },
                    delta: PoseDelta::from_coords(coords),
                }
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(label: &str, kind: BeatKind) -> TemplateTable {
        TemplateTable {
            label: label.to_string(),
            slots: std::array::from_fn(|position| TemplateSlot {
                name: format!("{label} {position}"),
                kind,
                delta: PoseDelta {
                    dpitch: position as f32,
                    ..Default::default()
                },
            }),
        }
    }

    fn tables(low: usize) -> CatalogTables {
        CatalogTables {
            version: "test".to_string(),
            low: (0..low).map(|i| table(&format!("L{i}"), BeatKind::Main)).collect(),
            medium: vec![table("M0", BeatKind::Main), table("M1", BeatKind::Main)],
            high: vec![table("H0", BeatKind::Main), table("H1", BeatKind::Main)],
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = VariationCatalog::builtin();
        catalog.validate().unwrap();
        assert_eq!(catalog.version(), CATALOG_VERSION);
        assert_eq!(catalog.len(EnergyTier::High), 11);
        assert_eq!(catalog.len(EnergyTier::Medium), 11);
        assert_eq!(catalog.len(EnergyTier::Low), 10);
    }

    #[test]
    fn looks_up_by_tier_and_letter() {
        let catalog = VariationCatalog::builtin();
        let template = catalog.get(VariationId::new(EnergyTier::Low, 'H')).unwrap();
        assert_eq!(template.display_label(), "H-Breathing");
        assert_eq!(template.slot(0).name, "Inhale up");
        assert_eq!(template.slot(0).delta.dpitch, 10.0);

        let template = catalog.get(VariationId::new(EnergyTier::High, 'K')).unwrap();
        assert_eq!(template.slot(0).delta.dx, 2.4);

        assert!(catalog.get(VariationId::new(EnergyTier::Low, 'K')).is_none());
        assert!(catalog.get(VariationId::new(EnergyTier::Low, 'a')).is_none());
        assert!(catalog.template(VariationId::new(EnergyTier::Low, 'Z')).is_err());
    }

    #[test]
    fn builtin_slots_alternate_main_and_half() {
        let catalog = VariationCatalog::builtin();
        let template = &catalog.variations(EnergyTier::Medium)[0];
        let kinds: Vec<BeatKind> = template.slots.iter().map(|slot| slot.kind).collect();
        assert_eq!(kinds[0], BeatKind::Main);
        assert_eq!(kinds[1], BeatKind::Half);
        assert_eq!(kinds[7], BeatKind::Half);
    }

    #[test]
    fn finds_neighbouring_slots() {
        let catalog = VariationCatalog::builtin();
        let template = &catalog.variations(EnergyTier::High)[3];
        assert_eq!(template.preceding_main(3), Some(2));
        assert_eq!(template.preceding_main(1), Some(0));
        assert_eq!(template.following_half(0), Some(1));
        assert_eq!(template.following_half(6), Some(7));
        assert_eq!(template.preceding_main(0), Some(6));
    }

    #[test]
    fn all_main_template_has_no_half_slot() {
        let catalog = VariationCatalog::from_tables(tables(2)).unwrap();
        let template = &catalog.variations(EnergyTier::Low)[0];
        assert_eq!(template.following_half(2), None);
        assert_eq!(template.preceding_main(2), Some(1));
    }

    #[test]
    fn assigns_letters_by_position() {
        let catalog = VariationCatalog::from_tables(tables(3)).unwrap();
        let ids: Vec<char> = catalog
            .variations(EnergyTier::Low)
            .iter()
            .map(|t| t.id.letter)
            .collect();
        assert_eq!(ids, vec!['A', 'B', 'C']);
        assert_eq!(catalog.id_at(EnergyTier::Low, 2), Some(VariationId::new(EnergyTier::Low, 'C')));
    }

    #[test]
    fn rejects_single_variation_tier() {
        match VariationCatalog::from_tables(tables(1)) {
            Err(ChoreoError::EmptyCatalogTier { tier, count }) => {
                assert_eq!(tier, EnergyTier::Low);
                assert_eq!(count, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_template_without_main_slot() {
        let mut tables = tables(2);
        tables.high[1] = table("H1", BeatKind::Half);
        match VariationCatalog::from_tables(tables) {
            Err(ChoreoError::InvalidTemplate { tier, letter, .. }) => {
                assert_eq!(tier, EnergyTier::High);
                assert_eq!(letter, 'B');
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn catalog_tables_round_trip_through_json() {
        let json = serde_json::to_string(&tables(2)).unwrap();
        let parsed: CatalogTables = serde_json::from_str(&json).unwrap();
        let catalog = VariationCatalog::from_tables(parsed).unwrap();
        assert_eq!(catalog.version(), "test");
    }
}
