use std::fmt;

/// Lifecycle of a well.
///
/// ```text
/// Unsized ─set_size→ Sized ─initialize_flow→ FlowInitialized ─solve→ Solved
///                                               ↑                      │
///                                               └──initialize_flow─────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WellStatus {
    #[default]
    Unsized,
    Sized,
    FlowInitialized,
    Solved,
}

impl fmt::Display for WellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unsized => "unsized",
            Self::Sized => "sized",
            Self::FlowInitialized => "flow-initialized",
            Self::Solved => "solved",
        };
        f.write_str(name)
    }
}
