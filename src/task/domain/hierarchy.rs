//! Builds the task forest from a flat, display-ordered row list.
//!
//! The input is one project's tasks, already sorted the way the sibling
//! groups should render (ascending order index, creation-time tie-break).
//! Parent references are resolved against the input set only: a task whose
//! parent is missing from the set is silently promoted to root rather than
//! rejected, and no referential check beyond membership is performed.
//!
//! Nothing forbids cyclic parent references in the underlying schema, so the
//! builder must terminate on them without rejecting the load. Members of a
//! cycle are nested under their parents in input order until the edge that
//! would close the loop; the task left unsatisfiable becomes a root. The
//! resulting shape for cyclic input is order-dependent but stable, and every
//! input task appears in the forest exactly once.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Task, TaskId};

/// One task with its recursively nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    task: Task,
    children: Vec<TaskNode>,
}

impl TaskNode {
    /// Returns the task at this node.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the node's children, in display order.
    #[must_use]
    pub fn children(&self) -> &[TaskNode] {
        &self.children
    }

    /// Returns the number of tasks in this subtree, including this one.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + forest_len(&self.children)
    }
}

/// Returns the number of tasks reachable in the forest.
#[must_use]
pub fn forest_len(forest: &[TaskNode]) -> usize {
    forest.iter().map(TaskNode::subtree_len).sum()
}

/// Transforms a flat, display-ordered task list into a forest.
///
/// Two passes over the input: the first indexes every task and partitions
/// each into "root" (no parent, or parent absent from the set) or "child of
/// a known parent", preserving input order throughout; the second assembles
/// owned nodes downward from the roots. Sibling order inherits the input
/// order, so children render in the same relative order as the flat list.
#[must_use]
pub fn build_forest(tasks: Vec<Task>) -> Vec<TaskNode> {
    let partition = partition_tasks(tasks);
    assemble_forest(partition)
}

struct Partitioned {
    /// Input order, for deterministic cycle promotion.
    order: Vec<TaskId>,
    /// Tasks not yet placed into the forest.
    by_id: HashMap<TaskId, Task>,
    /// Child ids per resolvable parent, in input order.
    children_of: HashMap<TaskId, Vec<TaskId>>,
    /// Tasks with no resolvable parent, in input order.
    roots: Vec<TaskId>,
}

fn partition_tasks(tasks: Vec<Task>) -> Partitioned {
    let known: HashSet<TaskId> = tasks.iter().map(Task::id).collect();
    let mut order = Vec::with_capacity(tasks.len());
    let mut by_id = HashMap::with_capacity(tasks.len());
    let mut children_of: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
    let mut roots = Vec::new();

    for task in tasks {
        let id = task.id();
        order.push(id);
        match task.parent_id().filter(|parent| known.contains(parent)) {
            Some(parent) => children_of.entry(parent).or_default().push(id),
            None => roots.push(id),
        }
        by_id.insert(id, task);
    }

    Partitioned {
        order,
        by_id,
        children_of,
        roots,
    }
}

fn assemble_forest(mut partition: Partitioned) -> Vec<TaskNode> {
    let mut forest = Vec::with_capacity(partition.roots.len());
    let root_ids: Vec<TaskId> = partition.roots.drain(..).collect();
    for root in root_ids {
        if let Some(node) = assemble(root, &mut partition.by_id, &partition.children_of) {
            forest.push(node);
        }
    }

    // Anything left unplaced sits on a parent cycle or hangs beneath one.
    // Walking the input backwards promotes, per cycle, the member whose own
    // parent edge would have closed the loop; everything hanging off that
    // cycle nests beneath it during assembly.
    let promotion_order: Vec<TaskId> = partition.order.iter().rev().copied().collect();
    for id in promotion_order {
        if partition.by_id.contains_key(&id)
            && lies_on_cycle(id, &partition.by_id)
            && let Some(node) = assemble(id, &mut partition.by_id, &partition.children_of)
        {
            forest.push(node);
        }
    }

    forest
}

/// Returns whether following parent links from `start` through the unplaced
/// set leads back to `start`.
fn lies_on_cycle(start: TaskId, by_id: &HashMap<TaskId, Task>) -> bool {
    let mut seen = HashSet::new();
    let mut current = start;
    loop {
        let Some(parent) = by_id.get(&current).and_then(Task::parent_id) else {
            return false;
        };
        if parent == start {
            return true;
        }
        if !seen.insert(parent) {
            return false;
        }
        current = parent;
    }
}

/// Removes `id` from the unplaced set and assembles its subtree.
///
/// A child already placed elsewhere (possible only on a cycle) is skipped,
/// which is what terminates recursion around a loop.
fn assemble(
    id: TaskId,
    by_id: &mut HashMap<TaskId, Task>,
    children_of: &HashMap<TaskId, Vec<TaskId>>,
) -> Option<TaskNode> {
    let task = by_id.remove(&id)?;
    let mut children = Vec::new();
    if let Some(child_ids) = children_of.get(&id) {
        for child in child_ids {
            if let Some(node) = assemble(*child, by_id, children_of) {
                children.push(node);
            }
        }
    }
    Some(TaskNode { task, children })
}
