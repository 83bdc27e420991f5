// Adapters layer: concrete implementations of the domain ports that stand in for external systems.

pub mod data_sources;
