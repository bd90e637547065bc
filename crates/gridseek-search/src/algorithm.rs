use std::fmt;
use std::str::FromStr;

use gridseek_core::SearchConfig;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    DepthLimited { limit: u32 },
    IterativeDeepening { max_depth: u32 },
    Bidirectional,
}

impl Algorithm {
    /// All six strategies, in menu order.
    pub fn all(limit: u32, max_depth: u32) -> [Algorithm; 6] {
        [
            Self::BreadthFirst,
            Self::DepthFirst,
            Self::UniformCost,
            Self::DepthLimited { limit },
            Self::IterativeDeepening { max_depth },
            Self::Bidirectional,
        ]
    }

    /// All six strategies, parameterised from `cfg`.
    pub fn from_config(cfg: &SearchConfig) -> [Algorithm; 6] {
        Self::all(cfg.depth_limit, cfg.max_depth)
    }

    /// Short lowercase identifier, accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::UniformCost => "ucs",
            Self::DepthLimited { .. } => "dls",
            Self::IterativeDeepening { .. } => "iddfs",
            Self::Bidirectional => "bidirectional",
        }
    }

    /// Human-readable name without parameters.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-First Search (BFS)",
            Self::DepthFirst => "Depth-First Search (DFS)",
            Self::UniformCost => "Uniform-Cost Search (UCS)",
            Self::DepthLimited { .. } => "Depth-Limited Search",
            Self::IterativeDeepening { .. } => "Iterative Deepening DFS (IDDFS)",
            Self::Bidirectional => "Bidirectional Search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthLimited { limit } => write!(f, "{} (limit={limit})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// An algorithm key that [`Algorithm::from_str`] does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs, ucs, dls, iddfs or bidirectional)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parse a key, with the default [`SearchConfig`] parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cfg = SearchConfig::default();
        Self::from_config(&cfg)
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Algorithm::BreadthFirst.to_string(), "Breadth-First Search (BFS)");
        assert_eq!(
            Algorithm::DepthLimited { limit: 15 }.to_string(),
            "Depth-Limited Search (limit=15)"
        );
        assert_eq!(
            Algorithm::IterativeDeepening { max_depth: 3 }.to_string(),
            "Iterative Deepening DFS (IDDFS)"
        );
    }

    #[test]
    fn parse_keys() {
        assert_eq!("bfs".parse(), Ok(Algorithm::BreadthFirst));
        assert_eq!(" UCS ".parse(), Ok(Algorithm::UniformCost));
        assert_eq!("dls".parse(), Ok(Algorithm::DepthLimited { limit: 15 }));
        assert_eq!(
            "iddfs".parse(),
            Ok(Algorithm::IterativeDeepening { max_depth: 25 })
        );
        assert_eq!(
            "astar".parse::<Algorithm>(),
            Err(UnknownAlgorithm("astar".to_string()))
        );
    }

    #[test]
    fn all_keys_round_trip() {
        for a in Algorithm::all(15, 25) {
            assert_eq!(a.key().parse(), Ok(a));
        }
    }
}
