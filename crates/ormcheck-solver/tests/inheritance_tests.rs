use super::*;

#[test]
fn test_simple_inheritance() {
    let mut graph = InheritanceGraph::new();
    assert!(graph.add_inheritance("Child", &["Parent"]));

    assert!(graph.is_derived_from("Child", "Parent"));
    assert!(!graph.is_derived_from("Parent", "Child"));
}

#[test]
fn test_transitive_inheritance() {
    let mut graph = InheritanceGraph::new();

    // A -> B -> C
    graph.add_inheritance("B", &["A"]);
    graph.add_inheritance("C", &["B"]);

    assert!(graph.is_derived_from("C", "A")); // Transitive
    assert!(graph.is_derived_from("C", "B"));
    assert!(!graph.is_derived_from("A", "C"));
}

#[test]
fn test_diamond_inheritance() {
    let mut graph = InheritanceGraph::new();

    // Diamond: A is top, B and C extend A, D extends both B and C
    graph.add_inheritance("B", &["A"]);
    graph.add_inheritance("C", &["A"]);
    graph.add_inheritance("D", &["B", "C"]);

    assert!(graph.is_derived_from("D", "A"));
    assert!(graph.is_derived_from("D", "B"));
    assert!(graph.is_derived_from("D", "C"));
}

#[test]
fn test_cycle_edge_is_rejected() {
    let mut graph = InheritanceGraph::new();
    graph.add_inheritance("B", &["A"]);
    graph.add_inheritance("C", &["B"]);

    assert!(graph.detects_cycle("A", "C"));
    assert!(!graph.add_inheritance("A", &["C"]));
    assert!(!graph.is_derived_from("A", "C"));
    assert!(graph.detects_cycle("A", "A"));
}

#[test]
fn test_names_are_case_insensitive_and_unqualified() {
    let mut graph = InheritanceGraph::new();
    graph.declare_class("\\App\\Entity\\Admin", &["App\\Entity\\User"], true);

    assert!(graph.is_derived_from("app\\entity\\ADMIN", "\\App\\Entity\\User"));
    assert!(graph.is_final("App\\Entity\\Admin"));
    assert!(same_class("\\Foo", "foo"));
}

#[test]
fn test_declare_keeps_existing_parents() {
    let mut graph = InheritanceGraph::new();
    graph.add_inheritance("Child", &["Parent"]);
    graph.declare(ClassInfo {
        name: "Child".to_string(),
        kind: ClassKind::Class,
        is_final: true,
        parents: Vec::new(),
    });

    assert!(graph.is_final("Child"));
    assert!(graph.is_derived_from("Child", "Parent"));
}

#[test]
fn test_builtin_collections_are_traversable() {
    let graph = InheritanceGraph::with_builtin_classes();

    assert!(graph.is_traversable(builtin::COLLECTION));
    assert!(graph.is_traversable(builtin::ARRAY_COLLECTION));
    assert!(graph.is_traversable(builtin::PERSISTENT_COLLECTION));
    assert!(graph.is_interface(builtin::COLLECTION));
    assert!(graph.is_derived_from(builtin::ARRAY_COLLECTION, builtin::COLLECTION));
    assert!(!graph.is_traversable("App\\Entity\\User"));
}

#[test]
fn test_may_share_instances() {
    let mut graph = InheritanceGraph::with_builtin_classes();
    graph.declare_class("App\\Open", &[], false);
    graph.declare_class("App\\Sealed", &[], true);
    graph.declare_class("App\\Other", &[], false);

    assert!(graph.may_share_instances("App\\Open", builtin::COUNTABLE));
    assert!(!graph.may_share_instances("App\\Sealed", builtin::COUNTABLE));
    assert!(!graph.may_share_instances("App\\Open", "App\\Other"));
}
