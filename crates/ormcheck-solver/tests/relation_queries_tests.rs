use super::*;

#[test]
fn test_query_relation_requires_true() {
    let interner = TypeInterner::new();
    let hierarchy = InheritanceGraph::with_builtin_classes();
    let a = interner.object("App\\A");
    let nullable = interner.union(vec![a, TypeId::NULL]);

    let widening = query_relation(&interner, &hierarchy, a, nullable);
    assert!(widening.is_related());
    assert!(!widening.depth_exceeded);

    let narrowing = query_relation(&interner, &hierarchy, nullable, a);
    assert_eq!(narrowing.result, SubtypeResult::Maybe);
    assert!(!narrowing.is_related());
}

#[test]
fn test_query_relation_from_parallel_workers() {
    use rayon::prelude::*;

    let interner = TypeInterner::new();
    let hierarchy = InheritanceGraph::with_builtin_classes();
    let related: Vec<bool> = (0..64)
        .into_par_iter()
        .map(|i| {
            let class = format!("App\\Entity{}", i % 4);
            let source = interner.object(&class);
            let target = interner.union(vec![interner.object(&class), TypeId::NULL]);
            query_relation(&interner, &hierarchy, source, target).is_related()
        })
        .collect();
    assert!(related.iter().all(|&r| r));
    // Four classes plus their nullable unions on top of the intrinsics.
    assert_eq!(interner.len(), TypeId::FIRST_USER as usize + 8);
}
