use super::{Outline, PlanOptions};
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

#[derive(Debug, Clone)]
struct PlanNode {
    outline_index: usize,
    depth: usize,
    children: Vec<usize>,
}

/// Containment forest of outlines, every outline attached under the innermost outline that
/// contains its bounding box.
///
/// Nodes are stored in an arena and referred to by index, node `k` is the `k`th outline attached
/// (outlines are attached from the largest ordering area to the smallest).
#[derive(Debug, Clone, Default)]
pub struct NestingForest {
    nodes: Vec<PlanNode>,
    roots: Vec<usize>,
}

impl NestingForest {
    /// Build the forest with default [PlanOptions].
    pub fn build<O>(outlines: &[O]) -> Self
    where
        O: Outline,
    {
        Self::build_opt(outlines, &PlanOptions::new())
    }

    /// Build the forest.
    ///
    /// Outlines are attached in descending [Outline::sort_area] order (stable for equal areas).
    /// Each one goes to the first root, in forest order, whose geometry contains its bounding box,
    /// then descends into the first accepting child until no child accepts, and is appended as the
    /// last child there. If no root accepts it becomes a new root.
    pub fn build_opt<O>(outlines: &[O], options: &PlanOptions<O::Num>) -> Self
    where
        O: Outline,
    {
        let bounds: Vec<AABB<O::Num>> = outlines.iter().map(|o| o.bounds()).collect();
        let areas: Vec<O::Num> = outlines.iter().map(|o| o.sort_area()).collect();

        let mut order: Vec<usize> = (0..outlines.len()).collect();
        order.sort_by(|&a, &b| {
            areas[b]
                .partial_cmp(&areas[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut forest = NestingForest {
            nodes: Vec::with_capacity(outlines.len()),
            roots: Vec::new(),
        };

        let accepts = |forest: &NestingForest, node: usize, candidate: usize| {
            let container = forest.nodes[node].outline_index;
            outlines[container].contains_bounds(&bounds[candidate], options.contain_eps)
        };

        for idx in order {
            let new_node = forest.nodes.len();
            let root = forest
                .roots
                .iter()
                .copied()
                .find(|&r| accepts(&forest, r, idx));

            let Some(root) = root else {
                log::trace!("outline {} is a new root", idx);
                forest.nodes.push(PlanNode {
                    outline_index: idx,
                    depth: 0,
                    children: Vec::new(),
                });
                forest.roots.push(new_node);
                continue;
            };

            let mut parent = root;
            while let Some(child) = forest.nodes[parent]
                .children
                .iter()
                .copied()
                .find(|&c| accepts(&forest, c, idx))
            {
                parent = child;
            }

            let depth = forest.nodes[parent].depth + 1;
            log::trace!(
                "outline {} nested under outline {} at depth {}",
                idx,
                forest.nodes[parent].outline_index,
                depth
            );
            forest.nodes.push(PlanNode {
                outline_index: idx,
                depth,
                children: Vec::new(),
            });
            forest.nodes[parent].children.push(new_node);
        }

        log::debug!(
            "nesting forest of {} outlines: {} roots, max depth {}",
            forest.node_count(),
            forest.roots.len(),
            forest.max_depth()
        );

        forest
    }

    /// Root nodes in forest order.
    #[inline]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Child nodes of `node` in attach order.
    #[inline]
    pub fn children(&self, node: usize) -> &[usize] {
        &self.nodes[node].children
    }

    /// Index into the planned outline slice for `node`.
    #[inline]
    pub fn outline_index(&self, node: usize) -> usize {
        self.nodes[node].outline_index
    }

    /// Nesting depth of `node`, 0 for roots.
    #[inline]
    pub fn depth(&self, node: usize) -> usize {
        self.nodes[node].depth
    }

    /// Deepest nesting depth in the forest, 0 when empty or flat.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Outline indexes in cut order: each root's tree post order (children before their parent),
    /// roots concatenated in forest order.
    pub fn post_order(&self) -> Vec<usize> {
        let mut result = Vec::with_capacity(self.nodes.len());
        // (node, next child position)
        let mut stack: Vec<(usize, usize)> = Vec::new();
        for &root in self.roots.iter() {
            stack.push((root, 0));
            while let Some((node, child_pos)) = stack.pop() {
                match self.nodes[node].children.get(child_pos) {
                    Some(&child) => {
                        stack.push((node, child_pos + 1));
                        stack.push((child, 0));
                    }
                    None => result.push(self.nodes[node].outline_index),
                }
            }
        }

        result
    }
}

/// Area of `bounds` (width times height).
#[inline]
pub fn bounds_area<T>(bounds: &AABB<T>) -> T
where
    T: Real,
{
    (bounds.max_x - bounds.min_x) * (bounds.max_y - bounds.min_y)
}
