use std::fmt;

/// Identifies a node inside an [`ExprTree`] arena.
///
/// Node ids are stable indices into the arena's backing storage and are only
/// meaningful for the tree that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// Represents one of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the single-character spelling of the operator.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The content stored in a tree node.
///
/// Leaves hold a single-character literal; internal nodes hold one of the
/// four operators. Brackets are consumed during parsing and leave no trace in
/// the tree, so an internal node with a non-operator content cannot be
/// expressed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A single-character literal, expected to be a decimal digit.
    Literal(char),
    /// One of the four arithmetic operators.
    Operator(BinaryOperator),
}

impl NodeKind {
    /// Returns the character used to label this node in a rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Literal(lexeme) => lexeme,
            Self::Operator(op) => op.glyph(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single node of an expression tree.
///
/// A node owns its children through arena indices. The parent index is a
/// non-owning back-link used only for positional queries and height
/// propagation; it takes no part in ownership or deallocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    kind:   NodeKind,
    left:   Option<NodeId>,
    right:  Option<NodeId>,
    parent: Option<NodeId>,
    height: usize,
}

impl TreeNode {
    /// Returns the content of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the left child, if any.
    #[must_use]
    pub const fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Returns the right child, if any.
    #[must_use]
    pub const fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Returns the parent back-link, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the cached height of the subtree rooted here.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }
}

/// An arena-backed binary expression tree with cached, self-maintaining
/// heights.
///
/// Nodes are created bottom-up during parsing with [`leaf`](Self::leaf) and
/// [`branch`](Self::branch). Attaching a child sets the child's parent
/// back-link and recomputes the cached height of every ancestor up to the
/// root, so `height(node) == 1 + max(height(left), height(right))` holds at
/// all times (a missing child counts as height 0, a leaf has height 1).
///
/// ## Example
/// ```
/// use treecalc::tree::{BinaryOperator, ExprTree};
///
/// let mut tree = ExprTree::new();
/// let two = tree.leaf('2');
/// let three = tree.leaf('3');
/// let sum = tree.branch(BinaryOperator::Add, two, three);
/// tree.set_root(sum);
///
/// assert_eq!(tree.height(sum), 2);
/// assert!(tree.is_left_child(two));
/// assert!(tree.is_right_child(three));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprTree {
    nodes: Vec<TreeNode>,
    root:  NodeId,
}

#[allow(clippy::new_without_default)]
impl ExprTree {
    /// Creates an empty tree. Nodes are added with [`leaf`](Self::leaf) and
    /// [`branch`](Self::branch); the root must be set before the tree is
    /// evaluated or rendered.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new(),
               root:  NodeId(0), }
    }

    /// Creates a new leaf node holding a literal lexeme and returns its id.
    /// A fresh leaf has height 1 and no parent until it is attached.
    pub fn leaf(&mut self, lexeme: char) -> NodeId {
        self.push(NodeKind::Literal(lexeme))
    }

    /// Creates a new operator node over two existing subtrees and returns its
    /// id. Both children are attached, which fixes up their parent links and
    /// propagates heights.
    pub fn branch(&mut self, op: BinaryOperator, left: NodeId, right: NodeId) -> NodeId {
        let id = self.push(NodeKind::Operator(op));
        self.attach_left(id, left);
        self.attach_right(id, right);
        id
    }

    /// Attaches `child` as the left child of `parent`, setting the child's
    /// parent back-link and recomputing the height of every ancestor of
    /// `parent` up to the root.
    pub fn attach_left(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].left = Some(child);
        self.update_heights(parent);
    }

    /// Attaches `child` as the right child of `parent`; see
    /// [`attach_left`](Self::attach_left).
    pub fn attach_right(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].right = Some(child);
        self.update_heights(parent);
    }

    /// Declares `id` to be the root of the tree.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = id;
    }

    /// Returns the root id declared with [`set_root`](Self::set_root).
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Returns the cached height of the subtree rooted at `id`.
    #[must_use]
    pub fn height(&self, id: NodeId) -> usize {
        self.nodes[id.0].height
    }

    /// Returns `true` when `id` has no children. Leaves always hold a
    /// literal.
    #[must_use]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        let node = &self.nodes[id.0];
        node.left.is_none() && node.right.is_none()
    }

    /// Returns `true` when `id` has no parent.
    #[must_use]
    pub fn is_root(&self, id: NodeId) -> bool {
        self.nodes[id.0].parent.is_none()
    }

    /// Returns `true` when `id` is the left child of its parent.
    #[must_use]
    pub fn is_left_child(&self, id: NodeId) -> bool {
        self.nodes[id.0].parent
                        .map_or(false, |parent| self.nodes[parent.0].left == Some(id))
    }

    /// Returns `true` when `id` is the right child of its parent.
    #[must_use]
    pub fn is_right_child(&self, id: NodeId) -> bool {
        self.nodes[id.0].parent
                        .map_or(false, |parent| self.nodes[parent.0].right == Some(id))
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node id in the tree, in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(TreeNode { kind,
                                   left: None,
                                   right: None,
                                   parent: None,
                                   height: 1, });
        NodeId(self.nodes.len() - 1)
    }

    /// Recomputes cached heights from `from` up along the parent chain,
    /// using the children's already-correct caches at each step.
    fn update_heights(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            let left = node.left.map_or(0, |child| self.nodes[child.0].height);
            let right = node.right.map_or(0, |child| self.nodes[child.0].height);
            self.nodes[id.0].height = 1 + left.max(right);
            current = self.nodes[id.0].parent;
        }
    }
}
