//! Level-order ASCII rendering of a tree.
//!
//! Each level is drawn as a row of branch arms followed by a row of node labels, with
//! underscores leading to the children of a node. Labels carry the decoration described on
//! `Node`'s `Display` implementation.

use crate::node::{self, Node, Tree};
use std::cmp;
use std::fmt;

/// Layout parameters for `render`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrettyOptions {
    /// Horizontal spread of the tree. A level of `1` leaves the minimum space between nodes.
    pub level: i64,
    /// Number of columns added to the left margin.
    pub indent: i64,
}

impl Default for PrettyOptions {
    fn default() -> Self {
        PrettyOptions {
            level: 1,
            indent: 0,
        }
    }
}

/// Deepest number of levels drawn. Nodes below are left out and a `...` row marks the cut.
pub const MAX_LEVELS: i64 = 10;

// Mirrors the running column widths of the layout as it moves down one level.
struct Layout {
    branch_len: i64,
    node_space_len: i64,
    start_len: i64,
}

fn pad(out: &mut String, fill: char, width: i64, text: &str) {
    let len = text.chars().count() as i64;
    for _ in len..width {
        out.push(fill);
    }
    out.push_str(text);
}

fn branches<T>(out: &mut String, layout: &Layout, queue: &[Option<&Node<T>>]) {
    for (i, pair) in queue.chunks_exact(2).enumerate() {
        let width = if i == 0 {
            layout.start_len - 1
        } else {
            layout.node_space_len - 2
        };
        pad(out, ' ', width, "");
        out.push(if pair[0].is_some() { '/' } else { ' ' });
        pad(out, ' ', 2 * layout.branch_len + 2, "");
        out.push(if pair[1].is_some() { '\\' } else { ' ' });
    }
    out.push('\n');
}

fn nodes<T>(out: &mut String, layout: &Layout, queue: &[Option<&Node<T>>])
where
    T: fmt::Display,
{
    for (i, node) in queue.iter().enumerate() {
        let has_left = node.map_or(false, |node| node.left.is_some());
        let has_right = node.map_or(false, |node| node.right.is_some());
        let width = if i == 0 {
            layout.start_len
        } else {
            layout.node_space_len
        };
        pad(out, ' ', width, "");
        pad(out, if has_left { '_' } else { ' ' }, layout.branch_len + 2, &node::label(*node));
        pad(out, if has_right { '_' } else { ' ' }, layout.branch_len, "");
    }
    out.push('\n');
}

fn leaves<T>(out: &mut String, options: &PrettyOptions, queue: &[Option<&Node<T>>])
where
    T: fmt::Display,
{
    for (i, node) in queue.iter().enumerate() {
        let width = if i == 0 {
            options.indent + 2
        } else {
            2 * options.level + 2
        };
        pad(out, ' ', width, &node::label(*node));
    }
    out.push('\n');
}

/// Renders `tree` into a multi-line string.
///
/// The width of each row doubles with every level, so only the top `MAX_LEVELS` levels are drawn.
///
/// # Examples
///
/// ```
/// use balanced_trees::bs_tree::BsTree;
/// use balanced_trees::pretty::{self, PrettyOptions};
///
/// let mut tree = BsTree::new();
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
///
/// assert_eq!(
///     pretty::render(tree.root(), &PrettyOptions::default()),
///     "\n  _2\n /  \\\n 1   3\n",
/// );
/// ```
pub fn render<T>(tree: &Tree<T>, options: &PrettyOptions) -> String
where
    T: fmt::Display,
{
    let depth = i64::from(node::height(tree)) + 1;
    let levels = cmp::min(depth, MAX_LEVELS);
    let span = 1i64 << levels;
    let half_span = if levels > 0 { span / 2 } else { 0 };

    let branch_len = 2 * (span - 1) - (3 - options.level) * half_span;
    let mut layout = Layout {
        branch_len,
        node_space_len: 2 + (options.level + 1) * span,
        start_len: branch_len + (3 - options.level) + options.indent,
    };

    let mut out = String::new();
    let mut queue: Vec<Option<&Node<T>>> = vec![tree.as_deref()];
    for _ in 1..levels {
        branches(&mut out, &layout, &queue);

        layout.branch_len = layout.branch_len / 2 - 1;
        layout.node_space_len = layout.node_space_len / 2 + 1;
        layout.start_len = layout.branch_len + (3 - options.level) + options.indent;
        nodes(&mut out, &layout, &queue);

        queue = queue
            .iter()
            .flat_map(|node| match node {
                Some(node) => vec![node.left.as_deref(), node.right.as_deref()],
                None => vec![None, None],
            })
            .collect();
    }
    branches(&mut out, &layout, &queue);
    leaves(&mut out, options, &queue);
    if depth > levels {
        out.push_str("...\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{render, PrettyOptions, MAX_LEVELS};
    use crate::bs_tree::tree;
    use crate::node::Tree;

    fn build(values: &[u32]) -> Tree<u32> {
        let mut root = None;
        for value in values {
            tree::insert(&mut root, *value);
        }
        root
    }

    #[test]
    fn test_render_empty() {
        let root: Tree<u32> = None;
        assert_eq!(render(&root, &PrettyOptions::default()), "\n  \n");
    }

    #[test]
    fn test_render_single() {
        let root = build(&[7, 7]);
        assert_eq!(render(&root, &PrettyOptions::default()), "\n7*\n");
    }

    #[test]
    fn test_render_three() {
        let root = build(&[2, 1, 3]);
        assert_eq!(
            render(&root, &PrettyOptions::default()),
            "\n  _2\n /  \\\n 1   3\n",
        );
    }

    #[test]
    fn test_render_indent() {
        let root = build(&[2, 1, 3]);
        let options = PrettyOptions {
            indent: 2,
            ..PrettyOptions::default()
        };
        assert_eq!(render(&root, &options), "\n    _2\n   /  \\\n   1   3\n");
    }

    #[test]
    fn test_render_lists_every_value() {
        let root = build(&[4, 2, 6, 1, 3, 5, 7]);
        let rendered = render(&root, &PrettyOptions::default());
        for value in 1..8 {
            assert!(rendered.contains(&value.to_string()));
        }
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn test_render_deep_chain_is_cut() {
        let root = build(&(0..70).collect::<Vec<u32>>());
        let rendered = render(&root, &PrettyOptions::default());
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 2 * MAX_LEVELS as usize + 1);
        assert_eq!(lines.last(), Some(&"..."));
        assert_eq!(lines[lines.len() - 2].trim(), (MAX_LEVELS - 1).to_string());
        assert!(!rendered.contains(&MAX_LEVELS.to_string()));
    }

    #[test]
    fn test_render_full_depth_is_not_cut() {
        let root = build(&(0..MAX_LEVELS as u32).collect::<Vec<u32>>());
        let rendered = render(&root, &PrettyOptions::default());
        assert_eq!(rendered.lines().count(), 2 * MAX_LEVELS as usize);
        assert!(!rendered.ends_with("...\n"));
    }
}
