use treecalc::{
    error::RenderError,
    parse,
    render::{
        basic,
        grid::{self, GridCell},
        render, DisplayMode,
    },
};

#[test]
fn basic_single_leaf_is_one_line() {
    let tree = parse("5").unwrap();
    assert_eq!(basic::render(&tree), "5");
}

#[test]
fn basic_prints_the_right_subtree_block_before_the_left() {
    let tree = parse("2+3").unwrap();
    assert_eq!(basic::render(&tree), "+\n│└── 3\n└── 2");
}

#[test]
fn basic_nested_expression() {
    let tree = parse("2+3*4").unwrap();
    let expected = "*\n│└── 4\n└── +\n    │└── 3\n    └── 2";
    assert_eq!(basic::render(&tree), expected);
}

#[test]
fn basic_bracketed_expression_leaves_no_bracket_nodes() {
    let tree = parse("{1+2}*3").unwrap();
    let expected = "*\n│└── 3\n└── +\n    │└── 2\n    └── 1";
    assert_eq!(basic::render(&tree), expected);
}

#[test]
fn grid_dimensions_follow_the_height_formula() {
    for source in ["2+3", "2+3*4", "{1+2}*{3+4}"] {
        let tree = parse(source).unwrap();
        let height = tree.height(tree.root());
        let drawn = grid::render(&tree).unwrap();

        let pow = 1_usize << height;
        assert_eq!(drawn.width(), pow - 1, "width for {source:?}");
        assert_eq!(drawn.row_count(), 2 * (pow / 4), "rows for {source:?}");

        let root_glyph = tree.node(tree.root()).kind().glyph();
        assert_eq!(drawn.cell(0, drawn.width() / 2), Some(GridCell::Label(root_glyph)),
                   "root placement for {source:?}");
    }
}

#[test]
fn grid_exact_small_tree() {
    let tree = parse("2+3").unwrap();
    assert_eq!(grid::render(&tree).unwrap().to_string(), ".+.\n2.3");
}

#[test]
fn grid_exact_nested_tree() {
    let tree = parse("2+3*4").unwrap();
    let expected = "...*...\n..o.o..\n.+...4.\n2.3....";
    assert_eq!(grid::render(&tree).unwrap().to_string(), expected);
}

#[test]
fn grid_exact_balanced_tree() {
    let tree = parse("{1+2}*{3+4}").unwrap();
    let expected = "...*...\n..o.o..\n.+...+.\n1.2.3.4";
    assert_eq!(grid::render(&tree).unwrap().to_string(), expected);
}

#[test]
fn grid_rejects_the_degenerate_single_leaf() {
    // The height-1 sizing formula allocates a zero-row grid, so the root
    // label has nowhere to go. That is reported, not silently patched.
    let tree = parse("5").unwrap();
    assert!(matches!(grid::render(&tree), Err(RenderError::OutOfBounds { .. })));
}

#[test]
fn render_dispatches_on_display_mode() {
    let tree = parse("2+3").unwrap();
    assert_eq!(render(&tree, DisplayMode::Basic).unwrap(), "+\n│└── 3\n└── 2");
    assert_eq!(render(&tree, DisplayMode::Enhanced).unwrap(), ".+.\n2.3");
}
