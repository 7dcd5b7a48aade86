use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::ValueData;

/// Identity of a graph node, derived from the address of its shared storage.
///
/// Only meaningful while some handle keeps the node alive; traversals hold
/// clones of every node they visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn of(data: &Rc<RefCell<ValueData>>) -> Self {
        NodeId(Rc::as_ptr(data) as usize)
    }
}

/// What to do when a backward sweep starts on nodes that still hold
/// gradient from an earlier sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleGradientPolicy {
    /// Accumulate on top of whatever is there.
    #[default]
    Ignore,
    /// Log a warning and accumulate.
    Warn,
    /// Refuse to run the sweep.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackwardOptions {
    pub stale_gradients: StaleGradientPolicy,
}

impl BackwardOptions {
    /// Options that reject a sweep over non-zeroed gradients.
    pub fn checked() -> Self {
        BackwardOptions {
            stale_gradients: StaleGradientPolicy::Error,
        }
    }
}

/// Orders every node reachable from `root` so that each operand comes
/// strictly before the nodes that consume it. `root` is always last.
///
/// Post-order depth-first traversal over an explicit stack; operands are
/// visited left to right, so the order is deterministic. Nodes reached
/// through several paths appear once.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        log::trace!("topological_sort: visiting {:?} ({})", node.node_id(), node.op_tag());
        let operands = node.operands();
        stack.push((node, true));
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }
    sorted
}

/// Nodes and `(operand, consumer)` edges of the graph under `root`, in the
/// form an external renderer consumes.
#[derive(Debug, Clone)]
pub struct GraphTrace {
    /// Every reachable node once, in topological order.
    pub nodes: Vec<Value>,
    /// Every operand-to-consumer edge once. A node used twice by the same
    /// consumer (`a + a`) yields a single edge.
    pub edges: Vec<(NodeId, NodeId)>,
}

pub fn trace(root: &Value) -> GraphTrace {
    let nodes = topological_sort(root);
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for node in &nodes {
        let consumer = node.node_id();
        for operand in node.operands() {
            let edge = (operand.node_id(), consumer);
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    GraphTrace { nodes, edges }
}

/// Runs a backward sweep from `root`.
///
/// The root is seeded with `1.0`. Nodes are processed in reverse
/// topological order, so when a node's rule runs every consumer has already
/// contributed to its gradient. Contributions for the current sweep are
/// summed in a side table and then added into each node's stored gradient;
/// stored gradients are never overwritten.
///
/// # Errors
/// `ScalarGradError::StaleGradient` if `options` asks for it and a reachable
/// node has a non-zero gradient before the sweep.
pub fn backward(root: &Value, options: &BackwardOptions) -> Result<(), ScalarGradError> {
    let sorted = topological_sort(root);

    if options.stale_gradients != StaleGradientPolicy::Ignore {
        let count = sorted.iter().filter(|node| node.grad() != 0.0).count();
        if count > 0 {
            match options.stale_gradients {
                StaleGradientPolicy::Error => return Err(ScalarGradError::StaleGradient { count }),
                _ => log::warn!(
                    "{} node(s) carry a non-zero gradient before the backward sweep; gradients will accumulate",
                    count
                ),
            }
        }
    }

    sweep(root, &sorted);
    Ok(())
}

pub(crate) fn backward_unchecked(root: &Value) {
    let sorted = topological_sort(root);
    sweep(root, &sorted);
}

fn sweep(root: &Value, sorted: &[Value]) {
    log::debug!("backward sweep over {} node(s)", sorted.len());

    let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted.len());
    grad_map.insert(root.node_id(), 1.0);

    for node in sorted.iter().rev() {
        // Every node in `sorted` is reachable from the root, so all of its
        // consumers have already run and inserted into the map.
        let upstream = grad_map.remove(&node.node_id()).unwrap_or(0.0);
        node.acc_grad(upstream);

        let guard = node.read_data();
        if let Some(op) = guard.grad_fn.as_ref() {
            let contributions = op.backward(upstream, guard.data);
            for (input, grad) in op.inputs().into_iter().zip(contributions) {
                *grad_map.entry(input.node_id()).or_insert(0.0) += grad;
            }
            log::trace!("sweep: {} pushed {} to its operand(s)", op, upstream);
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
