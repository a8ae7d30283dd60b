//! Chart file format: the JSON input describing a belt.
//!
//! ```json
//! {
//!     "asteroids": [
//!         { "t_per_asteroid_cycle": 2, "offset": 0 }
//!     ],
//!     "t_per_blast_move": 2
//! }
//! ```
//!
//! Missing keys and negative values fail at deserialization; a zero cycle or
//! zero blast interval fails belt construction. Both are fatal for a run.

use serde::{Deserialize, Serialize};

use crate::belt::{AsteroidSlot, Belt, BeltError};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Chart {
    pub asteroids: Vec<AsteroidEntry>,
    pub t_per_blast_move: u64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AsteroidEntry {
    pub t_per_asteroid_cycle: u64,
    pub offset: u64,
}

impl Chart {
    pub fn from_json_str(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    pub fn into_belt(self) -> Result<Belt, BeltError> {
        let slots = self
            .asteroids
            .iter()
            .map(|entry| AsteroidSlot { cycle: entry.t_per_asteroid_cycle, offset: entry.offset })
            .collect();
        Belt::new(slots, self.t_per_blast_move)
    }
}
