//! Tree algebra over an equipment forest.
//!
//! Stateless, read-side query functions over `&[Equipment]`. Every function
//! is pure, traverses depth-first in pre-order (self before children,
//! children in array order), and is safe on empty input.

use serde::{Deserialize, Serialize};

use crate::common::round2;
use crate::entities::Equipment;

/// Depth-first pre-order flattening of every node in the forest.
pub fn flatten(forest: &[Equipment]) -> Vec<&Equipment> {
    let mut result = Vec::new();
    for item in forest {
        result.push(item);
        result.extend(flatten(item.children()));
    }
    result
}

/// Maximum nesting depth of the forest: 0 for an empty forest, 1 for a
/// single childless node.
pub fn depth(forest: &[Equipment]) -> usize {
    forest
        .iter()
        .map(|item| 1 + depth(item.children()))
        .max()
        .unwrap_or(0)
}

/// Depth-first search by id; first match wins.
pub fn find_by_id<'a>(forest: &'a [Equipment], id: &str) -> Option<&'a Equipment> {
    for item in forest {
        if item.id() == id {
            return Some(item);
        }
        if let Some(found) = find_by_id(item.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Collects every node at every depth satisfying the predicate.
///
/// This is node filtering, not subtree pruning: a rejected parent does not
/// exclude its matching descendants.
pub fn filter<'a, F>(forest: &'a [Equipment], predicate: F) -> Vec<&'a Equipment>
where
    F: Fn(&Equipment) -> bool,
{
    flatten(forest)
        .into_iter()
        .filter(|item| predicate(item))
        .collect()
}

/// Runs a callback for every node, depth-first.
pub fn for_each<F>(forest: &[Equipment], mut callback: F)
where
    F: FnMut(&Equipment),
{
    fn walk<F: FnMut(&Equipment)>(forest: &[Equipment], callback: &mut F) {
        for item in forest {
            callback(item);
            walk(item.children(), callback);
        }
    }
    walk(forest, &mut callback);
}

/// Maps every node to a new value, producing a flat depth-first sequence
/// (not a re-nested tree).
pub fn map<T, F>(forest: &[Equipment], mut mapper: F) -> Vec<T>
where
    F: FnMut(&Equipment) -> T,
{
    fn walk<T, F: FnMut(&Equipment) -> T>(forest: &[Equipment], mapper: &mut F, out: &mut Vec<T>) {
        for item in forest {
            out.push(mapper(item));
            walk(item.children(), mapper, out);
        }
    }
    let mut result = Vec::new();
    walk(forest, &mut mapper, &mut result);
    result
}

/// Aggregate shape statistics for a forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStatistics {
    pub total_items: usize,
    pub containers: usize,
    pub leaf_nodes: usize,
    pub max_depth: usize,
    /// Mean subtree depth per node, rounded to 2 decimals
    pub average_depth: f64,
}

/// Counts nodes, containers, and leaves, and measures depth distribution.
///
/// `average_depth` is the mean of each flattened node's own subtree depth.
pub fn statistics(forest: &[Equipment]) -> TreeStatistics {
    let all = flatten(forest);
    let containers = all.iter().filter(|item| item.is_container()).count();
    let depths: Vec<usize> = all
        .iter()
        .map(|item| std::slice::from_ref(*item))
        .map(depth)
        .collect();
    let max_depth = depths.iter().copied().max().unwrap_or(0);
    let average_depth = if depths.is_empty() {
        0.0
    } else {
        round2(depths.iter().sum::<usize>() as f64 / depths.len() as f64)
    };

    TreeStatistics {
        total_items: all.len(),
        containers,
        leaf_nodes: all.len() - containers,
        max_depth,
        average_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EquipmentInput;

    fn node(id: &str, children: Vec<Equipment>) -> Equipment {
        Equipment::new(EquipmentInput {
            id: id.to_string(),
            name: id.to_string(),
            children,
            ..Default::default()
        })
        .expect("valid node")
    }

    /// backpack -> {sword, quiver -> {arrow}, pouch -> {potion -> {gold}}}
    fn sample_forest() -> Vec<Equipment> {
        vec![node(
            "backpack",
            vec![
                node("sword", vec![]),
                node("quiver", vec![node("arrow", vec![])]),
                node("pouch", vec![node("potion", vec![node("gold", vec![])])]),
            ],
        )]
    }

    #[test]
    fn test_flatten_is_pre_order() {
        let forest = sample_forest();
        let ids: Vec<&str> = flatten(&forest).iter().map(|e| e.id()).collect();
        assert_eq!(
            ids,
            vec!["backpack", "sword", "quiver", "arrow", "pouch", "potion", "gold"]
        );
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth(&[]), 0);
        assert_eq!(depth(&[node("solo", vec![])]), 1);
        assert_eq!(depth(&sample_forest()), 4);
    }

    #[test]
    fn test_find_by_id_depth_first() {
        let forest = sample_forest();
        assert_eq!(find_by_id(&forest, "gold").map(Equipment::id), Some("gold"));
        assert_eq!(find_by_id(&forest, "anvil"), None);
    }

    #[test]
    fn test_filter_does_not_prune_subtrees() {
        let forest = sample_forest();
        // "backpack" is rejected but its matching descendants still appear.
        let found = filter(&forest, |e| e.id().contains('o') && e.id() != "backpack");
        let ids: Vec<&str> = found.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["sword", "pouch", "potion", "gold"]);
    }

    #[test]
    fn test_for_each_visits_all() {
        let forest = sample_forest();
        let mut count = 0;
        for_each(&forest, |_| count += 1);
        assert_eq!(count, 7);
    }

    #[test]
    fn test_map_produces_flat_sequence() {
        let forest = sample_forest();
        let names = map(&forest, |e| e.name().to_uppercase());
        assert_eq!(names.len(), 7);
        assert_eq!(names[0], "BACKPACK");
        assert_eq!(names[6], "GOLD");
    }

    #[test]
    fn test_statistics() {
        let stats = statistics(&sample_forest());
        assert_eq!(stats.total_items, 7);
        assert_eq!(stats.containers, 4);
        assert_eq!(stats.leaf_nodes, 3);
        assert_eq!(stats.max_depth, 4);
        // Subtree depths: backpack 4, sword 1, quiver 2, arrow 1, pouch 3,
        // potion 2, gold 1 => mean 14/7 = 2.0
        assert_eq!(stats.average_depth, 2.0);
    }

    #[test]
    fn test_everything_safe_on_empty_forest() {
        let empty: Vec<Equipment> = Vec::new();
        assert!(flatten(&empty).is_empty());
        assert_eq!(depth(&empty), 0);
        assert!(find_by_id(&empty, "x").is_none());
        assert!(filter(&empty, |_| true).is_empty());
        assert!(map(&empty, |e| e.id().to_string()).is_empty());
        let stats = statistics(&empty);
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.average_depth, 0.0);
    }
}
