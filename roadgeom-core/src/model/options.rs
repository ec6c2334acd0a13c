//! Routing-option tags and the classifier lookup that assigns them.

use hashbrown::HashMap;

use crate::SemanticType;

/// Coarse road tag affecting route admissibility or cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoutingOption {
    Ferry = 1,
    Toll = 1 << 1,
    Dirt = 1 << 2,
    Motorway = 1 << 3,
}

/// Set of routing options attached to one road.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutingOptions(u8);

impl RoutingOptions {
    pub fn add(&mut self, option: RoutingOption) {
        self.0 |= option as u8;
    }

    pub fn has(&self, option: RoutingOption) -> bool {
        self.0 & option as u8 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Read-only lookup from classifier semantic types to routing options.
///
/// Built once by the application from its classifier and passed explicitly
/// into whichever loader needs type-to-option mapping.
#[derive(Debug, Clone, Default)]
pub struct RoutingOptionClassifier {
    table: HashMap<SemanticType, RoutingOption>,
}

impl RoutingOptionClassifier {
    pub fn new(entries: impl IntoIterator<Item = (SemanticType, RoutingOption)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, semantic_type: SemanticType) -> Option<RoutingOption> {
        self.table.get(&semantic_type).copied()
    }
}
