//! Interactive indexer.
//!
//! Assigns or reuses a stable integer index per interactive node, keyed by
//! structural path. The previous capture's map is read-only input; the
//! output map is rebuilt from scratch, so paths that disappeared drop out.

use tracing::debug;

use crate::arena::DomArena;
use crate::interactive::InteractivityCache;
use crate::selector_map::SelectorMap;
use crate::simplified::SimplifiedNode;

/// Walk the filtered tree depth-first, assigning indices to interactive
/// nodes not buried by paint order. Returns the rebuilt map.
pub fn assign_interactive_indices(
    arena: &DomArena,
    cache: &mut InteractivityCache,
    root: &mut SimplifiedNode,
    previous: Option<&SelectorMap>,
) -> SelectorMap {
    // New paths never reuse an index present in the input map, and new
    // assignments are consecutive. An empty input map starts at 1.
    let mut next_index = previous
        .and_then(|map| map.values().max())
        .map_or(1, |max| max + 1);

    let mut output = SelectorMap::new();
    let mut reused = 0usize;
    assign(arena, cache, root, previous, &mut next_index, &mut output, &mut reused);
    debug!(
        total = output.len(),
        reused,
        new = output.len() - reused,
        "assigned interactive indices"
    );
    output
}

fn assign(
    arena: &DomArena,
    cache: &mut InteractivityCache,
    simplified: &mut SimplifiedNode,
    previous: Option<&SelectorMap>,
    next_index: &mut u32,
    output: &mut SelectorMap,
    reused: &mut usize,
) {
    // Truncated iframe sentinels render without a marker, so an index on
    // them could never be resolved against the text.
    let node = arena.node(simplified.node);
    if !simplified.ignored_by_paint_order
        && !node.is_truncated_frame()
        && cache.is_interactive(arena, simplified.node)
    {
        let path = node.structural_path.clone();
        let index = match previous.and_then(|map| map.get(&path)) {
            Some(&index) => {
                simplified.is_new = false;
                *reused += 1;
                index
            }
            None => {
                simplified.is_new = true;
                let index = *next_index;
                *next_index += 1;
                index
            }
        };
        simplified.interactive_index = Some(index);
        output.insert(path, index);
    }

    for child in &mut simplified.children {
        assign(arena, cache, child, previous, next_index, output, reused);
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
