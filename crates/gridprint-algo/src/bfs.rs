#![forbid(unsafe_code)]

//! Breadth-first search over caller-defined graphs.
//!
//! Two flavors share one algorithm:
//!
//! - [`Bfs`] identifies nodes by their own `Eq + Hash` identity.
//! - [`KeyedBfs`] identifies nodes by a derived string key, for node types
//!   that are cheap to re-create but awkward to hash (coordinates,
//!   composite states, parsed values).
//!
//! Neighbors are produced by a visit closure via [`Neighbors`]; each edge
//! may carry an optional step payload that can later be replayed along the
//! path with `steps`.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::ops::ControlFlow;

/// Neighbor sink handed to the visit closure.
///
/// Pushed nodes are only enqueued after the visit returns, and only if
/// they pass the configured node filter and were not already visited.
#[derive(Debug)]
pub struct Neighbors<N, S> {
    added: Vec<(N, Option<S>)>,
}

impl<N, S> Neighbors<N, S> {
    fn new() -> Self {
        Self { added: Vec::new() }
    }

    /// Propose a neighbor with no step payload.
    pub fn push(&mut self, node: N) {
        self.added.push((node, None));
    }

    /// Propose a neighbor reached via `step`.
    pub fn push_with_step(&mut self, node: N, step: S) {
        self.added.push((node, Some(step)));
    }
}

/// Result of a [`Bfs`] run: visit bookkeeping plus path reconstruction.
#[derive(Debug)]
pub struct BfsResult<N, S> {
    visited: HashSet<N>,
    previous: HashMap<N, N>,
    previous_step: HashMap<N, Option<S>>,
    visit_index: HashMap<N, usize>,
    visit_level: HashMap<N, usize>,
}

impl<N: Clone + Eq + Hash, S: Clone> BfsResult<N, S> {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            previous: HashMap::new(),
            previous_step: HashMap::new(),
            visit_index: HashMap::new(),
            visit_level: HashMap::new(),
        }
    }

    /// Whether the node was reached.
    pub fn visited(&self, node: &N) -> bool {
        self.visited.contains(node)
    }

    /// Dequeue order of the node, if it was dequeued before the run ended.
    pub fn visit_index(&self, node: &N) -> Option<usize> {
        self.visit_index.get(node).copied()
    }

    /// Distance in edges from the nearest start node.
    pub fn visit_level(&self, node: &N) -> Option<usize> {
        self.visit_level.get(node).copied()
    }

    /// The node this node was first reached from.
    pub fn previous(&self, node: &N) -> Option<&N> {
        self.previous.get(node)
    }

    /// Path from a start node to `node`, inclusive. Empty if unreached.
    pub fn chain(&self, node: &N) -> Vec<N> {
        if !self.visited(node) {
            return Vec::new();
        }

        let mut nodes = vec![node.clone()];
        let mut current = node;
        while let Some(prev) = self.previous.get(current) {
            nodes.push(prev.clone());
            current = prev;
        }
        nodes.reverse();
        nodes
    }

    /// Step payloads along [`BfsResult::chain`], one per edge.
    pub fn steps(&self, node: &N) -> Vec<Option<S>> {
        if !self.visited(node) {
            return Vec::new();
        }

        let mut steps = Vec::new();
        let mut current = node;
        while let Some(prev) = self.previous.get(current) {
            steps.push(self.previous_step.get(current).cloned().flatten());
            current = prev;
        }
        steps.reverse();
        steps
    }
}

/// Breadth-first search over nodes identified by their own identity.
///
/// # Example
/// ```
/// use std::ops::ControlFlow;
/// use gridprint_algo::Bfs;
///
/// // Shortest hop counts on a line graph 0 - 1 - 2 - 3.
/// let result = Bfs::<u32>::new([0]).run(|&n, out| {
///     if n + 1 <= 3 {
///         out.push(n + 1);
///     }
///     ControlFlow::Continue(())
/// });
/// assert_eq!(result.visit_level(&3), Some(3));
/// assert_eq!(result.chain(&2), vec![0, 1, 2]);
/// ```
pub struct Bfs<N, S = ()> {
    initial_nodes: Vec<N>,
    max_level: Option<usize>,
    valid_node: Option<Box<dyn Fn(&N) -> bool>>,
    _step: std::marker::PhantomData<S>,
}

impl<N: Clone + Eq + Hash, S: Clone> Bfs<N, S> {
    #[must_use]
    pub fn new(initial_nodes: impl IntoIterator<Item = N>) -> Self {
        Self {
            initial_nodes: initial_nodes.into_iter().collect(),
            max_level: None,
            valid_node: None,
            _step: std::marker::PhantomData,
        }
    }

    /// Stop expanding nodes at this distance from the starts.
    /// Nodes at `max_level` are still visited, their neighbors are not.
    #[must_use]
    pub fn max_level(mut self, max_level: usize) -> Self {
        self.max_level = Some(max_level);
        self
    }

    /// Filter applied to proposed neighbors before they are enqueued.
    #[must_use]
    pub fn valid_node(mut self, valid: impl Fn(&N) -> bool + 'static) -> Self {
        self.valid_node = Some(Box::new(valid));
        self
    }

    /// Run the search. The visit closure sees each dequeued node and
    /// proposes neighbors; returning `ControlFlow::Break` stops the run.
    pub fn run(
        self,
        mut visit: impl FnMut(&N, &mut Neighbors<N, S>) -> ControlFlow<()>,
    ) -> BfsResult<N, S> {
        let mut result = BfsResult::new();
        let mut queue: VecDeque<N> = VecDeque::new();

        for node in self.initial_nodes {
            if result.visited.contains(&node) {
                continue;
            }
            result.visited.insert(node.clone());
            result.visit_level.insert(node.clone(), 0);
            queue.push_back(node);
        }

        let mut index = 0;
        while let Some(current) = queue.pop_front() {
            result.visit_index.insert(current.clone(), index);
            index += 1;

            let mut neighbors = Neighbors::new();
            if visit(&current, &mut neighbors).is_break() {
                break;
            }

            let level = result.visit_level.get(&current).copied().unwrap_or(0);
            if self.max_level.is_some_and(|max| level >= max) {
                continue;
            }

            for (node, step) in neighbors.added {
                if self.valid_node.as_ref().is_some_and(|valid| !valid(&node)) {
                    continue;
                }
                if result.visited.contains(&node) {
                    continue;
                }
                result.visited.insert(node.clone());
                result.visit_level.insert(node.clone(), level + 1);
                result.previous.insert(node.clone(), current.clone());
                result.previous_step.insert(node.clone(), step);
                queue.push_back(node);
            }
        }

        result
    }
}

/// Result of a [`KeyedBfs`] run. Queries take a node and resolve it
/// through the same key function the search used.
pub struct KeyedBfsResult<N, S> {
    key_of: Box<dyn Fn(&N) -> String>,
    visited: HashSet<String>,
    previous: HashMap<String, N>,
    previous_step: HashMap<String, Option<S>>,
    visit_index: HashMap<String, usize>,
    visit_level: HashMap<String, usize>,
}

impl<N: Clone, S: Clone> KeyedBfsResult<N, S> {
    /// Whether the node was reached.
    pub fn visited(&self, node: &N) -> bool {
        self.visited.contains(&(self.key_of)(node))
    }

    /// Dequeue order of the node, if it was dequeued before the run ended.
    pub fn visit_index(&self, node: &N) -> Option<usize> {
        self.visit_index.get(&(self.key_of)(node)).copied()
    }

    /// Distance in edges from the nearest start node.
    pub fn visit_level(&self, node: &N) -> Option<usize> {
        self.visit_level.get(&(self.key_of)(node)).copied()
    }

    /// The node this node was first reached from.
    pub fn previous(&self, node: &N) -> Option<&N> {
        self.previous.get(&(self.key_of)(node))
    }

    /// Path from a start node to `node`, inclusive. Empty if unreached.
    pub fn chain(&self, node: &N) -> Vec<N> {
        if !self.visited(node) {
            return Vec::new();
        }

        let mut nodes = vec![node.clone()];
        let mut key = (self.key_of)(node);
        while let Some(prev) = self.previous.get(&key) {
            nodes.push(prev.clone());
            key = (self.key_of)(prev);
        }
        nodes.reverse();
        nodes
    }

    /// Step payloads along [`KeyedBfsResult::chain`], one per edge.
    pub fn steps(&self, node: &N) -> Vec<Option<S>> {
        if !self.visited(node) {
            return Vec::new();
        }

        let mut steps = Vec::new();
        let mut key = (self.key_of)(node);
        while let Some(prev) = self.previous.get(&key) {
            steps.push(self.previous_step.get(&key).cloned().flatten());
            key = (self.key_of)(prev);
        }
        steps.reverse();
        steps
    }
}

/// Breadth-first search over nodes identified by a derived string key.
///
/// # Example
/// ```
/// use std::ops::ControlFlow;
/// use gridprint_algo::KeyedBfs;
///
/// // Grid walk where the node type itself is not hashable-friendly.
/// let result = KeyedBfs::<_, ()>::new([(0i32, 0i32)], |&(r, c)| format!("{r}:{c}"))
///     .valid_node(|&(r, c)| (0..3).contains(&r) && (0..3).contains(&c))
///     .run(|&(r, c), out| {
///         for (dr, dc) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
///             out.push((r + dr, c + dc));
///         }
///         ControlFlow::Continue(())
///     });
/// assert_eq!(result.visit_level(&(2, 2)), Some(4));
/// ```
pub struct KeyedBfs<N, S = ()> {
    initial_nodes: Vec<N>,
    key_of: Box<dyn Fn(&N) -> String>,
    max_level: Option<usize>,
    valid_node: Option<Box<dyn Fn(&N) -> bool>>,
    _step: std::marker::PhantomData<S>,
}

impl<N: Clone, S: Clone> KeyedBfs<N, S> {
    #[must_use]
    pub fn new(
        initial_nodes: impl IntoIterator<Item = N>,
        key_of: impl Fn(&N) -> String + 'static,
    ) -> Self {
        Self {
            initial_nodes: initial_nodes.into_iter().collect(),
            key_of: Box::new(key_of),
            max_level: None,
            valid_node: None,
            _step: std::marker::PhantomData,
        }
    }

    /// Stop expanding nodes at this distance from the starts.
    #[must_use]
    pub fn max_level(mut self, max_level: usize) -> Self {
        self.max_level = Some(max_level);
        self
    }

    /// Filter applied to proposed neighbors before they are enqueued.
    #[must_use]
    pub fn valid_node(mut self, valid: impl Fn(&N) -> bool + 'static) -> Self {
        self.valid_node = Some(Box::new(valid));
        self
    }

    /// Run the search. See [`Bfs::run`].
    pub fn run(
        self,
        mut visit: impl FnMut(&N, &mut Neighbors<N, S>) -> ControlFlow<()>,
    ) -> KeyedBfsResult<N, S> {
        let mut result = KeyedBfsResult {
            key_of: self.key_of,
            visited: HashSet::new(),
            previous: HashMap::new(),
            previous_step: HashMap::new(),
            visit_index: HashMap::new(),
            visit_level: HashMap::new(),
        };
        let mut queue: VecDeque<N> = VecDeque::new();

        for node in self.initial_nodes {
            let key = (result.key_of)(&node);
            if result.visited.contains(&key) {
                continue;
            }
            result.visited.insert(key.clone());
            result.visit_level.insert(key, 0);
            queue.push_back(node);
        }

        let mut index = 0;
        while let Some(current) = queue.pop_front() {
            let current_key = (result.key_of)(&current);
            result.visit_index.insert(current_key.clone(), index);
            index += 1;

            let mut neighbors = Neighbors::new();
            if visit(&current, &mut neighbors).is_break() {
                break;
            }

            let level = result.visit_level.get(&current_key).copied().unwrap_or(0);
            if self.max_level.is_some_and(|max| level >= max) {
                continue;
            }

            for (node, step) in neighbors.added {
                if self.valid_node.as_ref().is_some_and(|valid| !valid(&node)) {
                    continue;
                }
                let key = (result.key_of)(&node);
                if result.visited.contains(&key) {
                    continue;
                }
                result.visited.insert(key.clone());
                result.visit_level.insert(key.clone(), level + 1);
                result.previous.insert(key.clone(), current.clone());
                result.previous_step.insert(key, step);
                queue.push_back(node);
            }
        }

        result
    }
}
