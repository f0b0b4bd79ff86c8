use domsnap_snapshot::NodeBuilder;

use super::*;
use crate::build::build_arena;
use crate::options::SerializerOptions;
use crate::simplify::simplify;

fn run(body: NodeBuilder, threshold: f64) -> (DomArena, SimplifiedNode) {
    let root = NodeBuilder::document()
        .child(NodeBuilder::element("html").child(body))
        .build();
    let (arena, root_id) = build_arena(&root, &SerializerOptions::default());
    let mut tree = simplify(&arena, root_id).expect("tree");
    let mut cache = InteractivityCache::new();
    apply_containment_filter(&arena, &mut cache, &mut tree, threshold);
    (arena, tree)
}

fn contains_tag(arena: &DomArena, tree: &SimplifiedNode, tag: &str) -> bool {
    let mut found = false;
    tree.visit(&mut |n| found |= arena.node(n.node).tag_name == tag);
    found
}

fn link_with_icon() -> NodeBuilder {
    NodeBuilder::element("body").child(
        NodeBuilder::element("a")
            .attr("href", "/home")
            .bounds(0.0, 0.0, 100.0, 40.0)
            .child(NodeBuilder::element("svg").bounds(5.0, 5.0, 80.0, 20.0))
            .child(NodeBuilder::text("Home")),
    )
}

#[test]
fn test_fully_contained_decoration_removed() {
    let (arena, tree) = run(link_with_icon(), 0.99);
    assert!(!contains_tag(&arena, &tree, "svg"));
    // The text stays.
    assert!(contains_tag(&arena, &tree, "#text"));
}

#[test]
fn test_threshold_above_ratio_keeps_child() {
    let body = NodeBuilder::element("body").child(
        NodeBuilder::element("a")
            .attr("href", "/x")
            .bounds(0.0, 0.0, 100.0, 40.0)
            // Half hangs outside the link.
            .child(NodeBuilder::element("svg").bounds(50.0, 0.0, 100.0, 40.0))
            .child(NodeBuilder::text("partial")),
    );
    let (arena, tree) = run(body, 0.99);
    assert!(contains_tag(&arena, &tree, "svg"));
}

#[test]
fn test_interactive_descendant_survives() {
    let body = NodeBuilder::element("body").child(
        NodeBuilder::element("a")
            .attr("href", "/x")
            .bounds(0.0, 0.0, 200.0, 60.0)
            .child(
                NodeBuilder::element("button")
                    .bounds(10.0, 10.0, 80.0, 30.0)
                    .child(NodeBuilder::text("inner action")),
            ),
    );
    let (arena, tree) = run(body, 0.99);
    assert!(contains_tag(&arena, &tree, "button"));
}

#[test]
fn test_paint_ignored_interactive_descendant_removed() {
    let body = NodeBuilder::element("body").child(
        NodeBuilder::element("a")
            .attr("href", "/x")
            .bounds(0.0, 0.0, 200.0, 60.0)
            .child(
                NodeBuilder::element("button")
                    .bounds(10.0, 10.0, 80.0, 30.0)
                    .child(NodeBuilder::text("buried action")),
            )
            .child(NodeBuilder::text("visible label")),
    );
    let root = NodeBuilder::document()
        .child(NodeBuilder::element("html").child(body))
        .build();
    let (arena, root_id) = build_arena(&root, &SerializerOptions::default());
    let mut tree = simplify(&arena, root_id).expect("tree");
    // Mark the button as buried, as the paint-order pass would.
    tree.visit_mut(&mut |n| {
        if arena.node(n.node).tag_name == "button" {
            n.ignored_by_paint_order = true;
        }
    });
    let mut cache = InteractivityCache::new();
    apply_containment_filter(&arena, &mut cache, &mut tree, 0.99);
    assert!(!contains_tag(&arena, &tree, "button"));
}

#[test]
fn test_zero_area_child_trivially_contained() {
    let body = NodeBuilder::element("body").child(
        NodeBuilder::element("button")
            .bounds(0.0, 0.0, 100.0, 40.0)
            .child(NodeBuilder::element("span").bounds(10.0, 10.0, 0.0, 0.0))
            .child(NodeBuilder::text("label text")),
    );
    let (arena, tree) = run(body, 0.99);
    assert!(!contains_tag(&arena, &tree, "span"));
}

#[test]
fn test_scrollable_descendant_survives() {
    let long_text = "z".repeat(150);
    let body = NodeBuilder::element("body").child(
        NodeBuilder::element("a")
            .attr("href", "/x")
            .bounds(0.0, 0.0, 400.0, 400.0)
            .child(
                NodeBuilder::element("div")
                    .bounds(10.0, 10.0, 300.0, 300.0)
                    .style("overflow", "auto")
                    .child(NodeBuilder::text(&long_text)),
            ),
    );
    let (arena, tree) = run(body, 0.99);
    assert!(contains_tag(&arena, &tree, "div"));
}

#[test]
fn test_nested_propagating_element_overrides_context() {
    // The icon is outside the outer link but inside the inner button, which
    // establishes its own bounds for its subtree.
    let body = NodeBuilder::element("body").child(
        NodeBuilder::element("a")
            .attr("href", "/x")
            .bounds(0.0, 0.0, 50.0, 50.0)
            .child(
                NodeBuilder::element("button")
                    .bounds(200.0, 200.0, 100.0, 40.0)
                    .child(NodeBuilder::element("svg").bounds(210.0, 210.0, 20.0, 20.0))
                    .child(NodeBuilder::text("press here")),
            ),
    );
    let (arena, tree) = run(body, 0.99);
    assert!(contains_tag(&arena, &tree, "button"));
    // Contained by the button's context even though outside the link's.
    assert!(!contains_tag(&arena, &tree, "svg"));
}

#[test]
fn test_elements_without_bounds_kept() {
    let body = NodeBuilder::element("body").child(
        NodeBuilder::element("a")
            .attr("href", "/x")
            .bounds(0.0, 0.0, 100.0, 40.0)
            .child(NodeBuilder::element("span").child(NodeBuilder::text("no layout"))),
    );
    let (arena, tree) = run(body, 0.99);
    assert!(contains_tag(&arena, &tree, "span"));
}
