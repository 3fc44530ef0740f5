use super::*;

const ANOTHER: &str = "PHPStan\\Rules\\Doctrine\\ORM\\AnotherEntity";

fn required_column() -> JoinColumn {
    JoinColumn {
        name: "another_id".to_string(),
        referenced_column_name: Some("id".to_string()),
        nullable: Some(false),
    }
}

#[test]
fn test_cardinality() {
    assert_eq!(AssociationType::OneToOne.cardinality(), Cardinality::ToOne);
    assert_eq!(AssociationType::ManyToOne.cardinality(), Cardinality::ToOne);
    assert_eq!(AssociationType::OneToMany.cardinality(), Cardinality::ToMany);
    assert_eq!(AssociationType::ManyToMany.cardinality(), Cardinality::ToMany);
}

#[test]
fn test_join_columns_default_to_nullable() {
    let implicit = RawAssociationMapping::new("a", AssociationType::ManyToOne, ANOTHER);
    assert!(implicit.is_nullable());

    let explicit = RawAssociationMapping::new("a", AssociationType::ManyToOne, ANOTHER)
        .with_join_column(JoinColumn::default());
    assert!(explicit.is_nullable());

    let required = RawAssociationMapping::new("a", AssociationType::ManyToOne, ANOTHER)
        .with_join_column(required_column());
    assert!(!required.is_nullable());
    assert_eq!(required.raw_kind(), RawMappingKind::JoinColumn);
}

#[test]
fn test_inverse_side_is_nullable() {
    let inverse = RawAssociationMapping::new("a", AssociationType::OneToOne, ANOTHER)
        .with_join_column(required_column())
        .mapped_by("owner");
    assert!(inverse.is_inverse_side());
    assert!(inverse.is_nullable());
    assert_eq!(inverse.raw_kind(), RawMappingKind::Inverse);
}

#[test]
fn test_join_table_kind() {
    let mapping = RawAssociationMapping::new("tags", AssociationType::ManyToMany, ANOTHER)
        .with_join_table(JoinTable {
            name: "entity_tags".to_string(),
            ..JoinTable::default()
        });
    assert_eq!(mapping.raw_kind(), RawMappingKind::JoinTable);
}

#[test]
fn test_primary_key_roles() {
    let sole = ClassMetadata::new("App\\A").with_identifier(["id"]);
    assert_eq!(sole.primary_key_role("id"), PrimaryKeyRole::Sole);
    assert_eq!(sole.primary_key_role("other"), PrimaryKeyRole::None);

    let composite = ClassMetadata::new("App\\B").with_identifier(["first", "second"]);
    assert_eq!(composite.primary_key_role("first"), PrimaryKeyRole::Composite);

    let keyless = ClassMetadata::new("App\\C");
    assert_eq!(keyless.primary_key_role("id"), PrimaryKeyRole::None);
}

#[test]
fn test_resolved_association() {
    let metadata = ClassMetadata::new("App\\A")
        .with_identifier(["id"])
        .with_association(
            RawAssociationMapping::new("id", AssociationType::OneToOne, "\\App\\MyEntity")
                .with_join_column(required_column()),
        )
        .with_association(RawAssociationMapping::new(
            "items",
            AssociationType::OneToMany,
            ANOTHER,
        ));

    let id = metadata.association("id").expect("id is mapped");
    assert_eq!(id.target_entity, "App\\MyEntity");
    assert_eq!(id.primary_key, PrimaryKeyRole::Sole);
    assert!(id.is_primary_key());
    assert!(!id.is_nullable);
    assert!(!id.is_to_many());

    let names: Vec<String> = metadata.associations().map(|a| a.property).collect();
    assert_eq!(names, vec!["id".to_string(), "items".to_string()]);
    assert!(metadata.association("missing").is_none());
}

#[test]
fn test_entity_flags() {
    assert!(ClassMetadata::new("App\\A").is_entity());
    let superclass = ClassMetadata {
        is_mapped_superclass: true,
        ..ClassMetadata::new("App\\Base")
    };
    assert!(!superclass.is_entity());
}

#[test]
fn test_deserialize_camel_case() {
    let json = r#"{
        "name": "App\\A",
        "identifier": ["id"],
        "associationMappings": {
            "owner": {
                "fieldName": "owner",
                "type": "ManyToOne",
                "targetEntity": "App\\B",
                "joinColumns": [{ "name": "owner_id", "nullable": false }]
            },
            "children": {
                "fieldName": "children",
                "type": "OneToMany",
                "targetEntity": "App\\B",
                "isOwningSide": false,
                "mappedBy": "parent"
            }
        }
    }"#;
    let metadata: ClassMetadata = serde_json::from_str(json).expect("valid metadata");
    let owner = metadata.association("owner").expect("owner");
    assert!(!owner.is_nullable);
    assert_eq!(owner.raw_kind, RawMappingKind::JoinColumn);
    let children = metadata.association("children").expect("children");
    assert!(children.is_to_many());
    assert_eq!(children.raw_kind, RawMappingKind::Inverse);
}
