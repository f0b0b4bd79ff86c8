//! Interactivity classification.
//!
//! `is_interactive` is an ordered list of guard clauses: the first matching
//! rule wins, and the disabled/hidden accessibility veto fires before any
//! accepting rule below it. Results are memoized per node for the duration
//! of one serialization call, since the optimizer and containment passes
//! re-query the same nodes.

use std::collections::HashMap;

use crate::arena::{DomArena, EnhancedNode, NodeId};

/// Tokens in class/id/data-* values that imply a search affordance.
const SEARCH_TOKENS: [&str; 6] = ["search", "magnify", "glass", "lookup", "find", "query"];

/// Natively interactive tags.
const INTERACTIVE_TAGS: [&str; 9] = [
    "button", "input", "select", "textarea", "a", "details", "summary", "option", "optgroup",
];

/// HTML attributes that imply interaction handlers.
const INTERACTION_ATTRIBUTES: [&str; 6] = [
    "onclick", "onmousedown", "onmouseup", "onkeydown", "onkeyup", "tabindex",
];

/// ARIA `role` attribute values accepted as interactive.
const INTERACTIVE_HTML_ROLES: [&str; 14] = [
    "button", "link", "checkbox", "radio", "menuitem", "tab", "option", "switch", "treeitem",
    "combobox", "slider", "spinbutton", "searchbox", "textbox",
];

/// Accessibility-tree roles accepted as interactive. Slightly broader than
/// the HTML role set.
const INTERACTIVE_AX_ROLES: [&str; 19] = [
    "button", "link", "checkbox", "radio", "menuitem", "tab", "option", "switch", "treeitem",
    "combobox", "slider", "spinbutton", "searchbox", "textbox", "listbox", "menuitemcheckbox",
    "menuitemradio", "togglebutton", "tabpanel",
];

/// Attributes that, combined with icon size, mark unlabeled icon buttons.
const ICON_HINT_ATTRIBUTES: [&str; 5] = ["class", "role", "onclick", "data-action", "aria-label"];

/// Per-call memoized classifier.
#[derive(Debug, Default)]
pub struct InteractivityCache {
    results: HashMap<NodeId, bool>,
}

impl InteractivityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_interactive(&mut self, arena: &DomArena, id: NodeId) -> bool {
        if let Some(&cached) = self.results.get(&id) {
            return cached;
        }
        let result = classify(arena.node(id));
        self.results.insert(id, result);
        result
    }
}

/// Unmemoized classification. Rules in precedence order; first match wins.
pub fn classify(node: &EnhancedNode) -> bool {
    // Rule 1: only elements can be interactive, and the page scaffolding
    // elements never are.
    if !node.is_element() || matches!(node.tag_name.as_str(), "html" | "body") {
        return false;
    }

    // Rule 2: large frames are scroll surfaces.
    if node.is_iframe() {
        if let Some(bounds) = node.absolute_position {
            if bounds.width > 100.0 && bounds.height > 100.0 {
                return true;
            }
        }
    }

    // Rule 3: search affordances signaled through naming.
    if has_search_token(node) {
        return true;
    }

    // Rule 4: accessibility properties. disabled/hidden veto everything
    // below; the enabling properties accept outright.
    if let Some(ax) = &node.ax {
        if ax.bool_property("disabled") == Some(true) || ax.bool_property("hidden") == Some(true) {
            return false;
        }
        if ax.bool_property("focusable") == Some(true)
            || ax.bool_property("editable") == Some(true)
            || ax.bool_property("settable") == Some(true)
        {
            return true;
        }
        if ax.has_property("checked")
            || ax.has_property("expanded")
            || ax.has_property("pressed")
            || ax.has_property("selected")
        {
            return true;
        }
        if ax.bool_property("required") == Some(true)
            || ax.bool_property("autocomplete") == Some(true)
        {
            return true;
        }
        if ax.has_property("keyshortcuts") {
            return true;
        }
    }

    // Rule 5: natively interactive tags.
    if INTERACTIVE_TAGS.contains(&node.tag_name.as_str()) {
        return true;
    }

    // Rule 6: interaction-implying attributes and ARIA roles.
    if INTERACTION_ATTRIBUTES
        .iter()
        .any(|attr| node.attributes.contains_key(*attr))
    {
        return true;
    }
    if let Some(role) = node.attribute("role") {
        if INTERACTIVE_HTML_ROLES.contains(&role) {
            return true;
        }
    }

    // Rule 7: accessibility-tree role.
    if let Some(ax_role) = node.ax.as_ref().and_then(|ax| ax.role.as_deref()) {
        if INTERACTIVE_AX_ROLES.contains(&ax_role) {
            return true;
        }
    }

    // Rule 8: icon-sized elements with any interaction hint. Catches icon
    // buttons lacking semantic markup.
    if let Some(bounds) = node.absolute_position {
        let icon_sized = (10.0..=50.0).contains(&bounds.width)
            && (10.0..=50.0).contains(&bounds.height);
        if icon_sized
            && ICON_HINT_ATTRIBUTES
                .iter()
                .any(|attr| node.attributes.contains_key(*attr))
        {
            return true;
        }
    }

    // Rule 9: cursor style fallback.
    if node.cursor() == Some("pointer") {
        return true;
    }

    false
}

fn has_search_token(node: &EnhancedNode) -> bool {
    node.attributes.iter().any(|(key, value)| {
        if key != "class" && key != "id" && !key.starts_with("data-") {
            return false;
        }
        let value = value.to_ascii_lowercase();
        SEARCH_TOKENS.iter().any(|token| value.contains(token))
    })
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
