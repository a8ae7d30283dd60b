pub mod belt;
pub mod chart;
pub mod search;

pub use belt::{AsteroidSlot, Belt, BeltError};
pub use chart::{AsteroidEntry, Chart};
pub use search::{EscapePlan, EscapeSearch, SearchError, ShipState, plan_escape};
