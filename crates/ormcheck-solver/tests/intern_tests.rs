use super::*;

#[test]
fn test_interner_intrinsics() {
    let interner = TypeInterner::new();

    // Intrinsics should be pre-registered
    assert_eq!(
        interner.lookup(TypeId::MIXED),
        Some(TypeData::Intrinsic(IntrinsicKind::Mixed))
    );
    assert_eq!(
        interner.lookup(TypeId::NULL),
        Some(TypeData::Intrinsic(IntrinsicKind::Null))
    );
    assert_eq!(
        interner.lookup(TypeId::FLOAT),
        Some(TypeData::Intrinsic(IntrinsicKind::Float))
    );
    assert_eq!(interner.len(), TypeId::FIRST_USER as usize);
}

#[test]
fn test_interner_deduplication() {
    let interner = TypeInterner::new();

    let id1 = interner.object("App\\User");
    let id2 = interner.object("App\\User");
    let id3 = interner.object("App\\Group");

    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
}

#[test]
fn test_object_strips_leading_backslash() {
    let interner = TypeInterner::new();
    assert_eq!(interner.object("\\App\\User"), interner.object("App\\User"));
    assert_eq!(
        interner.class_name(interner.object("\\App\\User")).as_deref(),
        Some("App\\User")
    );
}

#[test]
fn test_generic_arguments_are_part_of_identity() {
    let interner = TypeInterner::new();
    let user = interner.object("App\\User");
    let bare = interner.object("Collection");
    let generic = interner.generic_object("Collection", vec![TypeId::INT, user]);

    assert_ne!(bare, generic);
}

#[test]
fn test_interner_union_normalization() {
    let interner = TypeInterner::new();
    let user = interner.object("App\\User");

    // Union with single member should return that member
    assert_eq!(interner.union(vec![user]), user);

    // Union with `mixed` should be `mixed`
    assert_eq!(interner.union(vec![user, TypeId::MIXED]), TypeId::MIXED);

    // Union with `never` should exclude `never`
    assert_eq!(interner.union(vec![user, TypeId::NEVER]), user);

    // Empty union is `never`
    assert_eq!(interner.union(vec![]), TypeId::NEVER);
}

#[test]
fn test_interner_union_orders_null_last() {
    let interner = TypeInterner::new();
    let user = interner.object("App\\User");

    let null_first = interner.union(vec![TypeId::NULL, user]);
    let null_last = interner.union(vec![user, TypeId::NULL]);

    assert_eq!(null_first, null_last);
    assert_eq!(interner.union_members(null_first), vec![user, TypeId::NULL]);
}

#[test]
fn test_interner_union_dedups_and_flattens() {
    let interner = TypeInterner::new();
    let user = interner.object("App\\User");

    let nested = interner.union(vec![TypeId::STRING, user]);
    let flattened = interner.union(vec![TypeId::STRING, nested, TypeId::STRING]);
    let expected = interner.union(vec![TypeId::STRING, user]);

    assert_eq!(flattened, expected);
}

#[test]
fn test_interner_intersection_normalization() {
    let interner = TypeInterner::new();
    let collection = interner.object("Collection");
    let iterable = interner.iterable(TypeId::MIXED, interner.object("App\\User"));

    assert_eq!(interner.intersection(vec![collection]), collection);
    assert_eq!(
        interner.intersection(vec![collection, TypeId::MIXED]),
        collection
    );
    assert_eq!(
        interner.intersection(vec![collection, TypeId::NEVER]),
        TypeId::NEVER
    );
    assert_eq!(interner.intersection(vec![]), TypeId::MIXED);

    let both = interner.intersection(vec![collection, iterable]);
    let nested = interner.intersection(vec![both, collection]);
    assert_eq!(both, nested);
    match interner.lookup(both) {
        Some(TypeData::Intersection(members)) => {
            assert_eq!(members.as_slice(), &[collection, iterable]);
        }
        other => panic!("Expected intersection, got {other:?}"),
    }
}
