/// Where to stop instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single, explicitly named zone.
    Zone(String),
    /// Every zone of the region.
    Region(String),
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Zone(zone) => write!(f, "zone {}", zone),
            Target::Region(region) => write!(f, "region {}", region),
        }
    }
}

/// Number of instances stopped in one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSummary {
    pub zone: String,
    pub stopped: usize,
}
