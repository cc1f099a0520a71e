/// AvlError enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq)]
pub enum AvlError<K>
where
    K: Clone + Ord,
{
    /// Returned by insert() API when key is already present.
    DuplicateKey,
    /// Returned by delete() API when key is not present.
    KeyNotFound,
    /// Returned by min() / max() APIs when the tree holds no keys.
    EmptyTree,
    /// Fatal case, index entries are not in sort-order.
    SortError(K, K),
    /// Fatal case, a node's balance factor is outside {-1, 0, 1}. The
    /// String component of this variant can be used for debugging.
    UnbalancedNode(String),
    /// Fatal case, a node's cached height disagrees with the height
    /// recomputed from its children.
    BadHeight(String),
    /// Fatal case, the maintained key count disagrees with the number
    /// of reachable nodes.
    BadEntryCount(String),
}
