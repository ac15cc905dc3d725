mod builder;
mod error;
pub mod node;
mod route_tree;
mod sort;

pub use error::{TreeError, TreeResult};
pub use node::{Affix, NodeId, TreeNode};
pub use route_tree::{RouteTree, build_tree};
