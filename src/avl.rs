use std::{
    borrow::Borrow,
    cmp::{self, Ord, Ordering},
    mem,
    ops::{Bound, Deref, RangeBounds},
};

use rand::Rng;

use crate::depth::Depth;
use crate::error::AvlError;

// TODO: Should we make this configurable ???
const ITER_LIMIT: usize = 100;

/// Avl manage a single instance of in-memory ordered index using
/// [avl] tree.
///
/// [avl]: https://en.wikipedia.org/wiki/AVL_tree
#[derive(Clone)]
pub struct Avl<K>
where
    K: Clone + Ord,
{
    name: String,
    root: Option<Box<Node<K>>>,
    n_count: usize, // number of keys in the tree.
}

/// Different ways to construct a new Avl instance.
impl<K> Avl<K>
where
    K: Clone + Ord,
{
    /// Create an empty instance of Avl, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> Avl<K>
    where
        S: AsRef<str>,
    {
        Avl {
            name: name.as_ref().to_string(),
            root: Default::default(),
            n_count: Default::default(),
        }
    }

    /// Create a new instance of Avl tree and load it with keys from
    /// `iter`. Note that keys must be ``unique``, a duplicate key from
    /// the iterator aborts the load with [`AvlError::DuplicateKey`].
    pub fn load_from<S, I>(name: S, iter: I) -> Result<Avl<K>, AvlError<K>>
    where
        S: AsRef<str>,
        I: Iterator<Item = K>,
    {
        let mut avl = Avl::new(name);
        for key in iter {
            avl.insert(key)?;
        }
        Ok(avl)
    }
}

/// Maintenance API.
impl<K> Avl<K>
where
    K: Clone + Ord,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating Avl instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of keys in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return the height of the tree, 0 for an empty tree. This is the
    /// cached height at the root, not a recomputation.
    #[inline]
    pub fn height(&self) -> usize {
        height(self.root.as_ref().map(Deref::deref))
    }

    /// Return quickly with basic statisics, only entries() and node_size()
    /// methods are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<K>>())
    }
}

type Insert<K> = (Box<Node<K>>, Option<AvlError<K>>);

type Delete<K> = (Option<Box<Node<K>>>, Option<AvlError<K>>);

/// Write operations on Avl instance.
impl<K> Avl<K>
where
    K: Clone + Ord,
{
    /// Insert key into the index. If key is already present return
    /// [`AvlError::DuplicateKey`], leaving the tree unchanged.
    pub fn insert(&mut self, key: K) -> Result<(), AvlError<K>> {
        let (root, error) = Avl::do_insert(self.root.take(), &key);
        self.root = Some(root);
        match error {
            Some(err) => Err(err),
            None => {
                self.n_count += 1;
                Ok(())
            }
        }
    }

    /// Delete key from this instance. If key is not present return
    /// [`AvlError::KeyNotFound`], leaving the tree unchanged.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<(), AvlError<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, error) = Avl::do_delete(self.root.take(), key);
        self.root = root;
        match error {
            Some(err) => Err(err),
            None => {
                self.n_count -= 1;
                Ok(())
            }
        }
    }

    /// Validate AVL tree with following rules:
    ///
    /// * Every node's balance factor must be in {-1, 0, 1}.
    /// * Every node's cached height must match its recomputed height.
    /// * Make sure keys are in sorted order.
    /// * Number of reachable nodes must match the maintained count.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, AvlError<K>> {
        let root = self.root.as_ref().map(Deref::deref);
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K>>());
        stats.set_depths(Depth::new());
        let (h, n) = Avl::validate_tree(root, 0, &mut stats)?;
        if n != self.n_count {
            let err = format!("counted: {} maintained: {}", n, self.n_count);
            return Err(AvlError::BadEntryCount(err));
        }
        stats.set_height(h);
        Ok(stats)
    }
}

/// Read operations on Avl instance.
impl<K> Avl<K>
where
    K: Clone + Ord,
{
    /// Check whether key is present in the index.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_ref().map(Deref::deref);
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Return the minimum key in the index, [`AvlError::EmptyTree`] if
    /// there are no keys.
    pub fn min(&self) -> Result<K, AvlError<K>> {
        let mut nref = match self.root.as_ref().map(Deref::deref) {
            None => return Err(AvlError::EmptyTree),
            Some(nref) => nref,
        };
        while let Some(left) = nref.left_deref() {
            nref = left;
        }
        Ok(nref.key.clone())
    }

    /// Return the maximum key in the index, [`AvlError::EmptyTree`] if
    /// there are no keys.
    pub fn max(&self) -> Result<K, AvlError<K>> {
        let mut nref = match self.root.as_ref().map(Deref::deref) {
            None => return Err(AvlError::EmptyTree),
            Some(nref) => nref,
        };
        while let Some(right) = nref.right_deref() {
            nref = right;
        }
        Ok(nref.key.clone())
    }

    /// Return a random key from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<K> {
        let mut nref = self.root.as_ref().map(Deref::deref)?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => nref.left_deref(),
                1 => nref.right_deref(),
                _ => unreachable!(),
            };
            if at_depth == 0 || next.is_none() {
                break Some(nref.key.clone());
            }
            at_depth -= 1;
            nref = next.unwrap();
        }
    }

    /// Return an iterator over all keys in this instance, in ascending
    /// order.
    pub fn iter(&self) -> Iter<K> {
        Iter {
            root: self.root.as_ref().map(Deref::deref),
            node_iter: vec![].into_iter(),
            after_key: Some(Bound::Unbounded),
            limit: ITER_LIMIT,
        }
    }

    /// Return an iterator over all keys in this instance, in pre-order
    /// (self, left, right). Useful to inspect the shape of the tree.
    pub fn pre_order(&self) -> PreOrder<K> {
        PreOrder {
            stack: self.root.as_ref().map(Deref::deref).into_iter().collect(),
        }
    }

    /// Range over all keys from low to high.
    pub fn range<Q, R>(&self, range: R) -> Range<K>
    where
        K: Borrow<Q>,
        R: RangeBounds<Q>,
        Q: Ord + ToOwned<Owned = K> + ?Sized,
    {
        let low: Bound<K> = match range.start_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };
        let high: Bound<K> = match range.end_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };

        Range {
            root: self.root.as_ref().map(Deref::deref),
            node_iter: vec![].into_iter(),
            low: Some(low),
            high,
            limit: ITER_LIMIT,
        }
    }
}

impl<K> Avl<K>
where
    K: Clone + Ord,
{
    fn do_insert(node: Option<Box<Node<K>>>, key: &K) -> Insert<K> {
        let mut node = match node {
            None => return (Node::new(key.clone()), None),
            Some(node) => node,
        };

        match node.key.cmp(key) {
            Ordering::Greater => {
                let (left, e) = Avl::do_insert(node.left.take(), key);
                node.left = Some(left);
                (Avl::rebalance_grown(node, key), e)
            }
            Ordering::Less => {
                let (right, e) = Avl::do_insert(node.right.take(), key);
                node.right = Some(right);
                (Avl::rebalance_grown(node, key), e)
            }
            Ordering::Equal => (node, Some(AvlError::DuplicateKey)),
        }
    }

    fn do_delete<Q>(node: Option<Box<Node<K>>>, key: &Q) -> Delete<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = match node {
            None => return (None, Some(AvlError::KeyNotFound)),
            Some(node) => node,
        };

        match node.key.borrow().cmp(key) {
            Ordering::Greater => {
                let (left, e) = Avl::do_delete(node.left.take(), key);
                node.left = left;
                (Some(Avl::rebalance_shrunk(node)), e)
            }
            Ordering::Less => {
                let (right, e) = Avl::do_delete(node.right.take(), key);
                node.right = right;
                (Some(Avl::rebalance_shrunk(node)), e)
            }
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                // two children, copy the in-order successor's key into
                // this node and delete the successor from the right
                // subtree.
                let skey = {
                    let mut nref = node.right.as_ref().unwrap().deref();
                    while let Some(left) = nref.left_deref() {
                        nref = left;
                    }
                    nref.key.clone()
                };
                let (right, e) = Avl::do_delete(node.right.take(), skey.borrow());
                if e.is_some() {
                    panic!("do_delete(): lost successor ? call the programmer");
                }
                node.right = right;
                node.key = skey;
                (Some(Avl::rebalance_shrunk(node)), None)
            }
            Ordering::Equal => match node.left.take().or_else(|| node.right.take()) {
                // zero or one child, splice the child in.
                None => (None, None),
                Some(child) => (Some(Avl::rebalance_shrunk(child)), None),
            },
        }
    }

    // recursive walk for validate(), returns (height, count) of the
    // subtree.
    fn validate_tree(
        node: Option<&Node<K>>,
        depth: usize,
        stats: &mut Stats,
    ) -> Result<(usize, usize), AvlError<K>> {
        let node = match node {
            None => {
                stats.depths.as_mut().unwrap().sample(depth);
                return Ok((0, 0));
            }
            Some(node) => node,
        };

        let (lh, ln) = Avl::validate_tree(node.left_deref(), depth + 1, stats)?;
        let (rh, rn) = Avl::validate_tree(node.right_deref(), depth + 1, stats)?;
        let h = 1 + cmp::max(lh, rh);
        if node.height != h {
            let err = format!("cached: {} computed: {}", node.height, h);
            return Err(AvlError::BadHeight(err));
        }
        let bf = (lh as isize) - (rh as isize);
        if bf < -1 || bf > 1 {
            return Err(AvlError::UnbalancedNode(format!("balance: {}", bf)));
        }
        if node.left.is_some() {
            let left = node.left.as_ref().unwrap();
            if left.key.ge(&node.key) {
                let (lkey, parent) = (left.key.clone(), node.key.clone());
                return Err(AvlError::SortError(lkey, parent));
            }
        }
        if node.right.is_some() {
            let right = node.right.as_ref().unwrap();
            if right.key.le(&node.key) {
                let (rkey, parent) = (right.key.clone(), node.key.clone());
                return Err(AvlError::SortError(rkey, parent));
            }
        }
        Ok((h, ln + rn + 1))
    }

    //--------- rotation routines for the AVL discipline ----------------

    // after an insert along the path to `key`, restore the balance
    // factor of `node` to {-1, 0, 1}. The unbalanced side is derived by
    // comparing `key` against the child's key, since the unwinding path
    // is already known.
    fn rebalance_grown(mut node: Box<Node<K>>, key: &K) -> Box<Node<K>> {
        node.update_height();
        let balance = balance_factor(Some(node.deref()));
        if balance > 1 {
            if key.lt(&node.left.as_ref().unwrap().key) {
                // left-left
                Avl::rotate_right(node)
            } else {
                // left-right
                node.left = Some(Avl::rotate_left(node.left.take().unwrap()));
                Avl::rotate_right(node)
            }
        } else if balance < -1 {
            if key.gt(&node.right.as_ref().unwrap().key) {
                // right-right
                Avl::rotate_left(node)
            } else {
                // right-left
                node.right = Some(Avl::rotate_right(node.right.take().unwrap()));
                Avl::rotate_left(node)
            }
        } else {
            node
        }
    }

    // after a delete below `node`, restore the balance factor of `node`
    // to {-1, 0, 1}. There is no inserted key to compare against, so
    // the rotation case is selected from the children's balance
    // factors.
    fn rebalance_shrunk(mut node: Box<Node<K>>) -> Box<Node<K>> {
        node.update_height();
        let balance = balance_factor(Some(node.deref()));
        if balance > 1 {
            if balance_factor(node.left_deref()) >= 0 {
                // left-left
                Avl::rotate_right(node)
            } else {
                // left-right
                node.left = Some(Avl::rotate_left(node.left.take().unwrap()));
                Avl::rotate_right(node)
            }
        } else if balance < -1 {
            if balance_factor(node.right_deref()) <= 0 {
                // right-right
                Avl::rotate_left(node)
            } else {
                // right-left
                node.right = Some(Avl::rotate_right(node.right.take().unwrap()));
                Avl::rotate_left(node)
            }
        } else {
            node
        }
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    \                    /   \
    //          left     x                node    xr
    //                  / \               /  \
    //                xl   xr          left   xl
    //
    fn rotate_left(mut node: Box<Node<K>>) -> Box<Node<K>> {
        let mut x = match node.right.take() {
            Some(x) => x,
            None => panic!("rotate_left(): rotating without a pivot ? call the programmer"),
        };
        node.right = x.left.take();
        node.update_height();
        x.left = Some(node);
        x.update_height();
        x
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    \                    /   \
    //            x      right             xl     node
    //           / \                              /  \
    //         xl   xr                          xr    right
    //
    fn rotate_right(mut node: Box<Node<K>>) -> Box<Node<K>> {
        let mut x = match node.left.take() {
            Some(x) => x,
            None => panic!("rotate_right(): rotating without a pivot ? call the programmer"),
        };
        node.left = x.right.take();
        node.update_height();
        x.right = Some(node);
        x.update_height();
        x
    }
}

#[inline]
fn height<K>(node: Option<&Node<K>>) -> usize
where
    K: Clone + Ord,
{
    node.map_or(0, |node| node.height)
}

fn balance_factor<K>(node: Option<&Node<K>>) -> isize
where
    K: Clone + Ord,
{
    match node {
        None => 0,
        Some(node) => {
            let (lh, rh) = (height(node.left_deref()), height(node.right_deref()));
            (lh as isize) - (rh as isize)
        }
    }
}

pub struct Iter<'a, K>
where
    K: Clone + Ord,
{
    root: Option<&'a Node<K>>,
    node_iter: std::vec::IntoIter<K>,
    after_key: Option<Bound<K>>,
    limit: usize,
}

impl<'a, K> Iter<'a, K>
where
    K: Clone + Ord,
{
    fn scan_iter(
        &self,
        node: Option<&Node<K>>,
        acc: &mut Vec<K>, // accumulator for batch of keys
    ) -> bool {
        if node.is_none() {
            return true;
        }
        let node = node.unwrap();

        let (left, right) = (node.left_deref(), node.right_deref());
        match &self.after_key {
            None => return false,
            Some(Bound::Included(akey)) | Some(Bound::Excluded(akey)) => {
                if node.key.le(akey) {
                    return self.scan_iter(right, acc);
                }
            }
            Some(Bound::Unbounded) => (),
        }

        if !self.scan_iter(left, acc) {
            return false;
        }

        acc.push(node.key.clone());
        if acc.len() >= self.limit {
            return false;
        }

        self.scan_iter(right, acc)
    }
}

impl<'a, K> Iterator for Iter<'a, K>
where
    K: Clone + Ord,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        match self.node_iter.next() {
            None => {
                let mut acc: Vec<K> = Vec::with_capacity(self.limit);
                self.scan_iter(self.root, &mut acc);
                self.after_key = acc.last().map(|k| Bound::Excluded(k.clone()));
                self.node_iter = acc.into_iter();
                self.node_iter.next()
            }
            item @ Some(_) => item,
        }
    }
}

pub struct PreOrder<'a, K>
where
    K: Clone + Ord,
{
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iterator for PreOrder<'a, K>
where
    K: Clone + Ord,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right below left, so that left pops first.
        if let Some(right) = node.right_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left_deref() {
            self.stack.push(left);
        }
        Some(node.key.clone())
    }
}

pub struct Range<'a, K>
where
    K: Clone + Ord,
{
    root: Option<&'a Node<K>>,
    node_iter: std::vec::IntoIter<K>,
    low: Option<Bound<K>>,
    high: Bound<K>,
    limit: usize,
}

impl<'a, K> Range<'a, K>
where
    K: Clone + Ord,
{
    pub fn rev(self) -> Reverse<'a, K> {
        Reverse {
            root: self.root,
            node_iter: vec![].into_iter(),
            low: self.low.unwrap(),
            high: Some(self.high),
            limit: self.limit,
        }
    }

    fn range_iter(
        &self,
        node: Option<&Node<K>>,
        acc: &mut Vec<K>, // accumulator for batch of keys
    ) -> bool {
        if node.is_none() {
            return true;
        }
        let node = node.unwrap();

        let (left, right) = (node.left_deref(), node.right_deref());
        match &self.low {
            Some(Bound::Included(qow)) if node.key.lt(qow) => {
                return self.range_iter(right, acc);
            }
            Some(Bound::Excluded(qow)) if node.key.le(qow) => {
                return self.range_iter(right, acc);
            }
            _ => (),
        }

        if !self.range_iter(left, acc) {
            return false;
        }

        acc.push(node.key.clone());
        if acc.len() >= self.limit {
            return false;
        }

        self.range_iter(right, acc)
    }
}

impl<'a, K> Iterator for Range<'a, K>
where
    K: Clone + Ord,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.node_iter.next() {
            None if self.low.is_some() => {
                let mut acc: Vec<K> = Vec::with_capacity(self.limit);
                self.range_iter(self.root, &mut acc);
                self.low = acc.last().map(|k| Bound::Excluded(k.clone()));
                self.node_iter = acc.into_iter();
                self.node_iter.next()
            }
            None => None,
            item @ Some(_) => item,
        };
        // check for upper bound
        match item {
            None => None,
            Some(item) => match &self.high {
                Bound::Unbounded => Some(item),
                Bound::Included(qigh) if item.le(qigh) => Some(item),
                Bound::Excluded(qigh) if item.lt(qigh) => Some(item),
                _ => {
                    self.low = None;
                    None
                }
            },
        }
    }
}

pub struct Reverse<'a, K>
where
    K: Clone + Ord,
{
    root: Option<&'a Node<K>>,
    node_iter: std::vec::IntoIter<K>,
    high: Option<Bound<K>>,
    low: Bound<K>,
    limit: usize,
}

impl<'a, K> Reverse<'a, K>
where
    K: Clone + Ord,
{
    fn reverse_iter(
        &self,
        node: Option<&Node<K>>,
        acc: &mut Vec<K>, // accumulator for batch of keys
    ) -> bool {
        if node.is_none() {
            return true;
        }
        let node = node.unwrap();

        let (left, right) = (node.left_deref(), node.right_deref());
        match &self.high {
            Some(Bound::Included(qigh)) if node.key.gt(qigh) => {
                return self.reverse_iter(left, acc);
            }
            Some(Bound::Excluded(qigh)) if node.key.ge(qigh) => {
                return self.reverse_iter(left, acc);
            }
            _ => (),
        }

        if !self.reverse_iter(right, acc) {
            return false;
        }

        acc.push(node.key.clone());
        if acc.len() >= self.limit {
            return false;
        }

        self.reverse_iter(left, acc)
    }
}

impl<'a, K> Iterator for Reverse<'a, K>
where
    K: Clone + Ord,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.node_iter.next() {
            None if self.high.is_some() => {
                let mut acc: Vec<K> = Vec::with_capacity(self.limit);
                self.reverse_iter(self.root, &mut acc);
                self.high = acc.last().map(|k| Bound::Excluded(k.clone()));
                self.node_iter = acc.into_iter();
                self.node_iter.next()
            }
            None => None,
            item @ Some(_) => item,
        };
        // check for lower bound
        match item {
            None => None,
            Some(item) => match &self.low {
                Bound::Unbounded => Some(item),
                Bound::Included(qow) if item.ge(qow) => Some(item),
                Bound::Excluded(qow) if item.gt(qow) => Some(item),
                _ => {
                    self.high = None;
                    None
                }
            },
        }
    }
}

/// Node corresponds to a single key in Avl instance.
#[derive(Clone)]
pub struct Node<K>
where
    K: Clone + Ord,
{
    key: K,
    height: usize,                 // cached height of this subtree
    left: Option<Box<Node<K>>>,    // store: left child
    right: Option<Box<Node<K>>>,   // store: right child
}

// Primary operations on a single node.
impl<K> Node<K>
where
    K: Clone + Ord,
{
    // CREATE operation, a fresh leaf.
    fn new(key: K) -> Box<Node<K>> {
        Box::new(Node {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn left_deref(&self) -> Option<&Node<K>> {
        self.left.as_ref().map(Deref::deref)
    }

    #[inline]
    fn right_deref(&self) -> Option<&Node<K>> {
        self.right.as_ref().map(Deref::deref)
    }

    // must be called after any change to either child, before this
    // node takes part in further balance decisions.
    #[inline]
    fn update_height(&mut self) {
        let (lh, rh) = (height(self.left_deref()), height(self.right_deref()));
        self.height = 1 + cmp::max(lh, rh);
    }
}

/// Statistics on [`Avl`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Avl::stats`] method.
/// * To get full statisics via [`Avl::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of keys in the tree.
    node_size: usize,
    height: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            height: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_height(&mut self, height: usize) {
        self.height = Some(height)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number keys in [`Avl`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Avl<K>`. Although
    /// the node overhead is constant, the node size varies based on
    /// the key type. EG:
    ///
    /// ```
    /// use avl_index::Avl;
    /// let avl: Avl<u64> = Avl::new("myinstance");
    ///
    /// // size of key: 8 bytes
    /// // overhead is 24 bytes
    /// assert_eq!(avl.stats().node_size(), 32);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return the height of the tree as recomputed by [`Avl::validate`].
    #[inline]
    pub fn height(&self) -> Option<usize> {
        self.height
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        if self.depths.as_ref().unwrap().samples() == 0 {
            None
        } else {
            self.depths.clone()
        }
    }
}
