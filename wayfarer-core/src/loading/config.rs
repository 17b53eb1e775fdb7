use std::path::PathBuf;

/// Configuration of road model creation.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Path to the network snapshot produced by ingestion
    pub network_path: PathBuf,
    /// Whether to prune the graph to its largest strongly connected
    /// component. Routing on an unpruned graph answers "no route" for
    /// pairs that straddle components.
    pub prune_to_largest_component: bool,
}

impl ModelConfig {
    pub fn new(network_path: PathBuf) -> Self {
        Self {
            network_path,
            prune_to_largest_component: true,
        }
    }
}
