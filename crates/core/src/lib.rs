//! Single-source best-path solving over directed graphs whose edge weights
//! live in a natural domain (probabilities, costs) and are mapped into an
//! additive, non-negative distance by a caller-supplied transform.
//!
//! ```
//! use common::transform::{neg_ln, recover_probability};
//! use common::types::WeightDomain;
//! use safest_path_core::{DijkstraSolver, GraphModel, PathSolver};
//!
//! let mut graph = GraphModel::new(WeightDomain::Probability);
//! graph.add_edge("KTM", "JA", 0.9).unwrap();
//! graph.add_edge("JA", "PH", 0.95).unwrap();
//!
//! let solution = DijkstraSolver.solve(&graph, &"KTM", neg_ln).unwrap();
//! let distance = solution.distance(&"PH").unwrap();
//!
//! assert_eq!(solution.reconstruct_path(&"PH").unwrap(), vec!["KTM", "JA", "PH"]);
//! assert!((recover_probability(distance) - 0.855).abs() < 1e-9);
//! ```

pub mod graph;
pub mod path;
pub mod solution;
pub mod solver;
pub mod traits;

pub use graph::{EdgeView, GraphModel};
pub use path::reconstruct_path;
pub use solution::Solution;
pub use solver::DijkstraSolver;
pub use traits::PathSolver;
