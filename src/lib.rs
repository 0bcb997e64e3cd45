pub mod avl;
pub mod collector;
pub mod invariants;
pub mod key;
pub mod preorder;
pub mod tree;

pub use avl::Tree;
pub use key::Key;
pub use tree::TreeOps;
