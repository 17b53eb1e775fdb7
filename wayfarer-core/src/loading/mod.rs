//! Loading of the ingestion hand-off: a network snapshot with nodes,
//! edges and way metadata is turned into the frozen road model the
//! server routes on.

mod builder;
mod config;
mod snapshot;

pub use builder::{build_model, create_road_model, RoadModel};
pub use config::ModelConfig;
pub use snapshot::{NetworkSnapshot, SnapshotEdge, SnapshotNode, SnapshotWay};
