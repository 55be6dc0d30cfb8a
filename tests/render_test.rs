//! Tests for the hierarchy dump and the termtree renderer

use fieldtree::item;
use fieldtree::{parse, render, sort_items, ToTree};

// ============================================================
// Hierarchy Dump Tests
// ============================================================

#[test]
fn given_mixed_forest_when_rendering_then_indents_two_spaces_per_depth() {
    let items = parse("a, b(c, d), e");
    assert_eq!(render(&items), "- a\n- b\n  - c\n  - d\n- e\n");
}

#[test]
fn given_nested_forest_when_rendering_then_children_follow_their_parent() {
    let items = parse("x(y(z)), w");
    assert_eq!(render(&items), "- x\n  - y\n    - z\n- w\n");
}

#[test]
fn given_any_forest_when_rendering_then_emits_one_line_per_item() {
    let items = parse("a, b(c, d(e, f)), g(h)");
    let rendered = render(&items);
    assert_eq!(rendered.lines().count(), item::count(&items));
}

#[test]
fn given_empty_forest_when_rendering_then_output_is_empty() {
    assert_eq!(render(&[]), "");
}

#[test]
fn given_sorted_forest_when_rendering_repeatedly_then_output_is_stable() {
    let mut items = parse("d, b(y, x), a");
    sort_items(&mut items);
    let first = render(&items);

    sort_items(&mut items);
    assert_eq!(render(&items), first);
}

// ============================================================
// Termtree Tests
// ============================================================

#[test]
fn given_node_when_converting_to_tree_then_children_become_leaves() {
    let items = parse("b(c, d)");
    let tree = items[0].to_tree().to_string();

    assert!(tree.starts_with('b'));
    assert!(tree.contains("├── c"));
    assert!(tree.contains("└── d"));
}

#[test]
fn given_leaf_when_converting_to_tree_then_tree_is_single_line() {
    let items = parse("solo");
    let tree = items[0].to_tree().to_string();
    assert_eq!(tree.trim_end(), "solo");
}

// ============================================================
// End-to-End Scenario
// ============================================================

#[test]
fn given_shipped_example_when_sorting_and_rendering_then_matches_documented_output() {
    let input = "(id, name, email, type(id, name, customFields(c1, c2, c3)), externalId)";
    let mut items = parse(input);
    sort_items(&mut items);

    let expected = "\
- email
- externalId
- id
- name
- type
  - customFields
    - c1
    - c2
    - c3
  - id
  - name
";
    assert_eq!(render(&items), expected);

    assert_eq!(item::count(&items), 11);
    assert_eq!(item::max_depth(&items), 3);
    assert_eq!(
        item::leaf_names(&items),
        vec!["email", "externalId", "id", "name", "c1", "c2", "c3", "id", "name"]
    );
}
