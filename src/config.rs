use serde::{Deserialize, Serialize};

use crate::graph::Weight;


/// Number of single-letter labels available
pub const LABEL_ALPHABET_LEN: usize = 26;


/// Editor limits and defaults
/// Missing fields fall back to the defaults when deserialized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub max_nodes: usize,
    pub node_radius: f64, // hit radius around a node center
    pub min_weight: Weight,
    pub max_weight: Weight,
}

impl EditorConfig {

    /// Node cap, never more than the label alphabet
    pub fn node_limit(&self) -> usize {
        self.max_nodes.min(LABEL_ALPHABET_LEN)
    }

    /// Inclusive weight bounds, swapped if given the wrong way round
    pub fn weight_bounds(&self) -> (Weight, Weight) {
        if self.min_weight <= self.max_weight {
            (self.min_weight, self.max_weight)
        } else {
            (self.max_weight, self.min_weight)
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_nodes: LABEL_ALPHABET_LEN,
            node_radius: 20.0,
            min_weight: 1,
            max_weight: 10,
        }
    }
}
