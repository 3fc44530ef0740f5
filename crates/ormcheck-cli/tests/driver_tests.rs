use super::*;
use clap::Parser;
use ormcheck_metadata::StaticResolver;
use tempfile::TempDir;

const INPUT: &str = r#"{
  "classes": [
    {
      "name": "App\\Entity\\Order",
      "file": "src/Entity/Order.php",
      "mapping": {
        "name": "App\\Entity\\Order",
        "identifier": ["id"],
        "associationMappings": {
          "customer": {
            "fieldName": "customer",
            "type": "ManyToOne",
            "targetEntity": "App\\Entity\\Customer",
            "joinColumns": [{ "name": "customer_id", "nullable": false }]
          },
          "lines": {
            "fieldName": "lines",
            "type": "OneToMany",
            "targetEntity": "App\\Entity\\OrderLine",
            "isOwningSide": false,
            "mappedBy": "order"
          }
        }
      },
      "properties": [
        { "name": "id", "type": "int", "line": 12 },
        { "name": "customer", "type": "?App\\Entity\\Customer", "line": 21 },
        { "name": "lines", "type": "Doctrine\\Common\\Collections\\Collection<int, App\\Entity\\OrderLine>", "line": 27 }
      ]
    },
    {
      "name": "App\\Entity\\OrderLine",
      "file": "src/Entity/OrderLine.php",
      "mapping": {
        "name": "App\\Entity\\OrderLine",
        "associationMappings": {
          "order": { "fieldName": "order", "type": "ManyToOne", "targetEntity": "App\\Entity\\Order" }
        }
      },
      "properties": [
        { "name": "order", "type": "App\\Entity\\Order", "line": 15 },
        { "name": "broken", "type": "App\\Entity\\Order|", "line": 18 }
      ]
    },
    { "name": "App\\Service\\Mailer", "file": "src/Service/Mailer.php", "properties": [] }
  ]
}"#;

fn messages(result: &RunResult) -> Vec<(String, u32)> {
    result
        .diagnostics
        .iter()
        .map(|d| (d.file.clone(), d.line))
        .collect()
}

#[test]
fn test_check_input_in_order() {
    let input = AnalysisInput::from_json(INPUT).expect("valid input");
    let resolver = StaticResolver::new();
    let result = check_input(&input, &Settings::default(), &resolver);

    assert_eq!(result.classes_checked, 3);
    assert_eq!(
        messages(&result),
        vec![
            ("src/Entity/Order.php".to_string(), 21),
            ("src/Entity/OrderLine.php".to_string(), 15),
        ]
    );
    assert_eq!(
        result.diagnostics[0].message_text,
        "Property App\\Entity\\Order::$customer type mapping mismatch: property can contain App\\Entity\\Customer|null but database expects App\\Entity\\Customer."
    );
    assert_eq!(
        result.diagnostics[1].message_text,
        "Property App\\Entity\\OrderLine::$order type mapping mismatch: database can contain App\\Entity\\Order|null but property expects App\\Entity\\Order."
    );
}

#[test]
fn test_flag_suppresses_nullable_property() {
    let input = AnalysisInput::from_json(INPUT).expect("valid input");
    let mut settings = Settings::default();
    settings.options.allow_nullable_property_for_required_field = true;
    let result = check_input(&input, &settings, &StaticResolver::new());
    assert_eq!(messages(&result), vec![("src/Entity/OrderLine.php".to_string(), 15)]);
}

#[test]
fn test_build_hierarchy() {
    let graph = build_hierarchy(&[
        HierarchyEntry {
            name: "App\\Bag".to_string(),
            parents: vec!["Doctrine\\Common\\Collections\\Collection".to_string()],
            interface: true,
            is_final: false,
        },
        HierarchyEntry {
            name: "App\\Sealed".to_string(),
            parents: Vec::new(),
            interface: false,
            is_final: true,
        },
    ]);
    assert!(graph.is_interface("App\\Bag"));
    assert!(graph.is_traversable("App\\Bag"));
    assert!(graph.is_final("App\\Sealed"));
}

#[test]
fn test_run_end_to_end() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::create_dir_all(dir.path().join("analysis")).expect("mkdir");
    std::fs::write(dir.path().join("analysis/entities.json"), INPUT).expect("write input");

    let args = CliArgs::try_parse_from(["ormcheck", "analysis"]).expect("args");
    let result = run(&args, dir.path()).expect("run succeeds");
    assert_eq!(result.files_read.len(), 1);
    assert_eq!(result.diagnostics.len(), 2);
}

#[test]
fn test_run_with_live_metadata() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("entities.json"), INPUT).expect("write input");

    // The bootstrap reports only Order, with a nullable customer column.
    let snapshot = r#"{ "entities": { "App\\Entity\\Order": {
        "name": "App\\Entity\\Order",
        "identifier": ["id"],
        "associationMappings": {
            "customer": { "fieldName": "customer", "type": "ManyToOne", "targetEntity": "App\\Entity\\Customer" }
        } } } }"#;
    std::fs::write(dir.path().join("snapshot.json"), snapshot).expect("write snapshot");
    std::fs::write(dir.path().join("bootstrap.sh"), "cat snapshot.json\n").expect("write script");

    let args = CliArgs::try_parse_from([
        "ormcheck",
        "--object-manager-loader",
        "bootstrap.sh",
        "--bootstrap-interpreter",
        "sh",
        "entities.json",
    ])
    .expect("args");
    let result = run(&args, dir.path()).expect("run succeeds");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_run_with_failing_bootstrap_reports_nothing() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("entities.json"), INPUT).expect("write input");
    std::fs::write(dir.path().join("bootstrap.sh"), "exit 1\n").expect("write script");

    let args = CliArgs::try_parse_from([
        "ormcheck",
        "--object-manager-loader",
        "bootstrap.sh",
        "--bootstrap-interpreter",
        "sh",
        "entities.json",
    ])
    .expect("args");
    let result = run(&args, dir.path()).expect("run succeeds");
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.classes_checked, 3);
}
