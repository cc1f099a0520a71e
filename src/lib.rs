mod avl;
mod depth;
mod error;

pub use crate::avl::{Avl, Iter, Node, PreOrder, Range, Reverse, Stats};
pub use crate::depth::Depth;
pub use crate::error::AvlError;
