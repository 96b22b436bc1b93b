//! Text renderings of a tree.

use std::fmt::Display;

use crate::arena::NodeArena;
use crate::avl::AvlNodeLike;

/// Sideways rendering: right subtree above, left subtree below, four spaces
/// of indent per level, each node as `key(h=height)` on its own line.
pub fn render_structure<N>(arena: &NodeArena<N>, root: Option<u32>) -> String
where
    N: AvlNodeLike,
    N::Key: Display,
{
    fn render<N>(arena: &NodeArena<N>, node: Option<u32>, prefix: &str, out: &mut String)
    where
        N: AvlNodeLike,
        N::Key: Display,
    {
        let Some(i) = node else {
            return;
        };
        let n = &arena[i];
        let child_prefix = format!("{prefix}    ");
        render(arena, n.r(), &child_prefix, out);
        out.push_str(&format!("{prefix}{}(h={})\n", n.key(), n.height()));
        render(arena, n.l(), &child_prefix, out);
    }

    if root.is_none() {
        return "Tree is empty\n".to_string();
    }
    let mut out = String::new();
    render(arena, root, "", &mut out);
    out
}

/// Indented dump below `node`: `side key [h=height]` per line, children
/// marked `←` (left) and `→` (right).
pub fn print_tree<N>(arena: &NodeArena<N>, node: u32, tab: &str, side: &str) -> String
where
    N: AvlNodeLike,
    N::Key: Display,
{
    let n = &arena[node];
    let mut s = format!("\n{tab}{side} {} [h={}]", n.key(), n.height());
    if let Some(l) = n.l() {
        s.push_str(&print_tree(arena, l, &format!("{tab}  "), "←"));
    }
    if let Some(r) = n.r() {
        s.push_str(&print_tree(arena, r, &format!("{tab}  "), "→"));
    }
    s
}
