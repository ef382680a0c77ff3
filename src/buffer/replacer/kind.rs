//! The closed set of eviction policies.

use std::fmt;
use std::str::FromStr;

use crate::buffer::replacer::{
    ClockReplacer, EvictionPolicy, FifoReplacer, LfuReplacer, LruReplacer, MfuReplacer,
    OptimalReplacer,
};
use crate::common::{Error, Result, SimConfig};

/// Names one of the six eviction policies.
///
/// # Example
/// ```
/// use pagesim::PolicyKind;
///
/// let kind: PolicyKind = "second chance".parse().unwrap();
/// assert_eq!(kind, PolicyKind::SecondChance);
/// assert_eq!(kind.name(), "Second Chance");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
    SecondChance,
    Lfu,
    Mfu,
}

impl PolicyKind {
    /// Every policy, in canonical comparison order.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Optimal,
        PolicyKind::SecondChance,
        PolicyKind::Lfu,
        PolicyKind::Mfu,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
            PolicyKind::SecondChance => "Second Chance",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Mfu => "MFU",
        }
    }

    /// Create a fresh policy instance with empty frames and bookkeeping.
    pub fn build(&self, config: SimConfig) -> Box<dyn EvictionPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new(config)),
            PolicyKind::Lru => Box::new(LruReplacer::new(config)),
            PolicyKind::Optimal => Box::new(OptimalReplacer::new(config)),
            PolicyKind::SecondChance => Box::new(ClockReplacer::new(config)),
            PolicyKind::Lfu => Box::new(LfuReplacer::new(config)),
            PolicyKind::Mfu => Box::new(MfuReplacer::new(config)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Case-insensitive; accepts display names and a few common aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" | "belady" => Ok(PolicyKind::Optimal),
            "second chance" | "second-chance" | "second_chance" | "clock" => {
                Ok(PolicyKind::SecondChance)
            }
            "lfu" => Ok(PolicyKind::Lfu),
            "mfu" => Ok(PolicyKind::Mfu),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
