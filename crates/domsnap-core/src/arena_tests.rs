use domsnap_snapshot::NodeBuilder;

use super::*;
use crate::build::build_arena;
use crate::options::SerializerOptions;

fn arena_of(builder: NodeBuilder) -> DomArena {
    let (arena, _) = build_arena(&builder.build(), &SerializerOptions::default());
    arena
}

fn find(arena: &DomArena, tag: &str) -> NodeId {
    arena
        .iter()
        .find(|n| n.tag_name == tag)
        .map(|n| n.id)
        .unwrap_or_else(|| panic!("no <{tag}> in arena"))
}

#[test]
fn test_collect_text_joins_and_caps() {
    let arena = arena_of(
        NodeBuilder::element("div")
            .child(NodeBuilder::text("  hello "))
            .child(NodeBuilder::element("span").child(NodeBuilder::text("world"))),
    );
    let id = find(&arena, "div");
    assert_eq!(arena.collect_text(id, 100), "hello world");
    assert_eq!(arena.collect_text(id, 5), "hello");
}

#[test]
fn test_collect_text_includes_shadow_content() {
    let arena = arena_of(
        NodeBuilder::element("my-widget")
            .shadow(NodeBuilder::shadow_root("open").child(NodeBuilder::text("inside"))),
    );
    let id = find(&arena, "my-widget");
    assert_eq!(arena.collect_text(id, 100), "inside");
}

#[test]
fn test_generic_container_needs_text_to_scroll() {
    let short = NodeBuilder::element("div")
        .bounds(0.0, 0.0, 200.0, 200.0)
        .style("overflow-y", "auto")
        .child(NodeBuilder::text("short"));
    let arena = arena_of(short);
    assert!(!arena.is_actually_scrollable(find(&arena, "div")));

    let long_text = "x".repeat(150);
    let long = NodeBuilder::element("div")
        .bounds(0.0, 0.0, 200.0, 200.0)
        .style("overflow-y", "auto")
        .child(NodeBuilder::text(&long_text));
    let arena = arena_of(long);
    assert!(arena.is_actually_scrollable(find(&arena, "div")));
}

#[test]
fn test_non_generic_tag_scrolls_without_text() {
    let arena = arena_of(
        NodeBuilder::element("textarea")
            .bounds(0.0, 0.0, 300.0, 100.0)
            .style("overflow", "scroll"),
    );
    assert!(arena.is_actually_scrollable(find(&arena, "textarea")));
}

#[test]
fn test_zero_area_never_actually_scrollable() {
    let arena = arena_of(
        NodeBuilder::element("textarea")
            .bounds(0.0, 0.0, 0.0, 100.0)
            .style("overflow", "scroll"),
    );
    assert!(!arena.is_actually_scrollable(find(&arena, "textarea")));
}

#[test]
fn test_hint_alone_is_scrollable_but_not_actually() {
    let arena = arena_of(
        NodeBuilder::element("div")
            .bounds(0.0, 0.0, 200.0, 200.0)
            .scrollable_hint(),
    );
    let id = find(&arena, "div");
    assert!(arena.node(id).is_scrollable());
    assert!(!arena.is_actually_scrollable(id));
}

#[test]
fn test_content_hash_tracks_identity_attributes() {
    let a = arena_of(NodeBuilder::element("button").attr("id", "save").attr("data-x", "1"));
    let b = arena_of(NodeBuilder::element("button").attr("id", "save").attr("data-x", "2"));
    let c = arena_of(NodeBuilder::element("button").attr("id", "cancel"));

    let ha = a.element_content_hash(find(&a, "button"));
    let hb = b.element_content_hash(find(&b, "button"));
    let hc = c.element_content_hash(find(&c, "button"));
    // data-* is not identity-bearing; id is.
    assert_eq!(ha, hb);
    assert_ne!(ha, hc);
}

#[test]
fn test_content_hash_uses_leading_text() {
    let a = arena_of(NodeBuilder::element("p").child(NodeBuilder::text("alpha")));
    let b = arena_of(NodeBuilder::element("p").child(NodeBuilder::text("beta")));
    assert_ne!(
        a.element_content_hash(find(&a, "p")),
        b.element_content_hash(find(&b, "p"))
    );
}

#[test]
fn test_aria_and_pseudo_attribute_detection() {
    let arena = arena_of(NodeBuilder::element("div").attr("aria-hidden", "false"));
    assert!(arena.node(find(&arena, "div")).has_aria_or_pseudo_attributes());

    let arena = arena_of(NodeBuilder::element("div").attr("pseudo-checked", "true"));
    assert!(arena.node(find(&arena, "div")).has_aria_or_pseudo_attributes());

    let arena = arena_of(NodeBuilder::element("div").attr("class", "aria"));
    assert!(!arena.node(find(&arena, "div")).has_aria_or_pseudo_attributes());
}
