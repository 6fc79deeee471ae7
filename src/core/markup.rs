// src/core/markup.rs
//
// Minimal read-only element tree. The badge heuristic is written against
// the `Tree` trait so it can run on parsed SVG or on hand-built fixtures.

use std::collections::VecDeque;

/// Navigable element tree. Node handles are cheap `Copy` ids.
pub trait Tree {
    type Node: Copy + Eq;

    fn root(&self) -> Self::Node;
    fn parent(&self, n: Self::Node) -> Option<Self::Node>;
    fn children(&self, n: Self::Node) -> Vec<Self::Node>;
    /// Local element name (`g`, `text`, `svg`). Text nodes have none.
    fn tag(&self, n: Self::Node) -> Option<&str>;
    fn attr(&self, n: Self::Node, name: &str) -> Option<&str>;
    /// Text carried by a text node itself (not its descendants).
    fn own_text(&self, n: Self::Node) -> Option<&str>;

    fn is_element(&self, n: Self::Node, tag: &str) -> bool {
        self.tag(n).is_some_and(|t| t.eq_ignore_ascii_case(tag))
    }

    fn has_class(&self, n: Self::Node, class: &str) -> bool {
        self.attr(n, "class")
            .is_some_and(|c| c.split_whitespace().any(|part| part == class))
    }

    /// Concatenated text of the node and all its descendants, document order.
    fn text_content(&self, n: Self::Node) -> String {
        let mut out = s!();
        let mut stack = vec![n];
        while let Some(cur) = stack.pop() {
            if let Some(t) = self.own_text(cur) {
                out.push_str(t);
            }
            let mut kids = self.children(cur);
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// All descendants of `n` (not `n` itself) in document order.
    fn descendants(&self, n: Self::Node) -> Vec<Self::Node> {
        let mut out = Vec::new();
        let mut stack: Vec<Self::Node> = self.children(n).into_iter().rev().collect();
        while let Some(cur) = stack.pop() {
            out.push(cur);
            stack.extend(self.children(cur).into_iter().rev());
        }
        out
    }

    /// Breadth-first search strictly below `n`.
    fn find_bfs<F>(&self, n: Self::Node, mut pred: F) -> Option<Self::Node>
    where
        F: FnMut(Self::Node) -> bool,
    {
        let mut queue: VecDeque<Self::Node> = self.children(n).into();
        while let Some(cur) = queue.pop_front() {
            if pred(cur) {
                return Some(cur);
            }
            queue.extend(self.children(cur));
        }
        None
    }

    /// Elements with the given tag anywhere in the tree, document order.
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Node> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&n| self.is_element(n, tag))
            .collect()
    }
}

#[derive(Clone, Debug)]
enum NodeKind {
    Document,
    Element { tag: String, attrs: Vec<(String, String)> },
    Text(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Arena-backed tree. Node `0` is the synthetic document root.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData { kind: NodeKind::Document, parent: None, children: Vec::new() }],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn push(&mut self, parent: usize, kind: NodeKind) -> usize {
        let id = self.nodes.len();
        self.nodes.push(NodeData { kind, parent: Some(parent), children: Vec::new() });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn append_element(&mut self, parent: usize, tag: &str, attrs: &[(&str, &str)]) -> usize {
        let attrs = attrs.iter().map(|(k, v)| (s!(*k), s!(*v))).collect();
        self.push(parent, NodeKind::Element { tag: s!(tag), attrs })
    }

    pub(crate) fn append_element_owned(
        &mut self,
        parent: usize,
        tag: String,
        attrs: Vec<(String, String)>,
    ) -> usize {
        self.push(parent, NodeKind::Element { tag, attrs })
    }

    pub fn append_text(&mut self, parent: usize, text: &str) -> usize {
        self.push(parent, NodeKind::Text(s!(text)))
    }
}

impl Tree for Document {
    type Node = usize;

    fn root(&self) -> usize {
        0
    }

    fn parent(&self, n: usize) -> Option<usize> {
        self.nodes.get(n)?.parent
    }

    fn children(&self, n: usize) -> Vec<usize> {
        self.nodes.get(n).map(|d| d.children.clone()).unwrap_or_default()
    }

    fn tag(&self, n: usize) -> Option<&str> {
        match &self.nodes.get(n)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    fn attr(&self, n: usize, name: &str) -> Option<&str> {
        match &self.nodes.get(n)?.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    fn own_text(&self, n: usize) -> Option<&str> {
        match &self.nodes.get(n)?.kind {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }
}
