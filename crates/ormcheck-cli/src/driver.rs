//! One analysis run: load inputs, resolve metadata, check classes in
//! parallel and collect diagnostics in input order.

use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::args::CliArgs;
use crate::config::Settings;
use crate::input::{AnalysisInput, HierarchyEntry, InputClass, discover_inputs, load_inputs};
use ormcheck_checker::{DeclaredProperty, EntityClass, EntityRelationChecker};
use ormcheck_common::Diagnostic;
use ormcheck_metadata::MetadataResolver;
use ormcheck_solver::{InheritanceGraph, TypeInterner, parse_type};

#[derive(Debug, Default)]
pub struct RunResult {
    pub diagnostics: Vec<Diagnostic>,
    pub files_read: Vec<PathBuf>,
    pub classes_checked: usize,
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunResult> {
    let settings = Settings::resolve(args, cwd)?;
    let files = discover_inputs(&args.paths, cwd)?;
    let input = load_inputs(&files)?;
    let resolver = settings.resolver.build();

    let mut result = check_input(&input, &settings, resolver.as_ref());
    result.files_read = files;
    Ok(result)
}

/// Check already-loaded input against `resolver`.
pub fn check_input(
    input: &AnalysisInput,
    settings: &Settings,
    resolver: &dyn MetadataResolver,
) -> RunResult {
    let interner = TypeInterner::new();
    let hierarchy = build_hierarchy(&input.hierarchy);

    for class in &input.classes {
        if let Some(mapping) = &class.mapping {
            resolver.attach(mapping.clone());
        }
    }

    let classes: Vec<EntityClass> = input
        .classes
        .iter()
        .map(|class| entity_class(&interner, class))
        .collect();

    let checker = EntityRelationChecker::new(&interner, &hierarchy, resolver, &settings.options);
    let per_class: Vec<Vec<Diagnostic>> = classes
        .par_iter()
        .map(|class| checker.check_class(class))
        .collect();
    resolver.clear();

    RunResult {
        diagnostics: per_class.into_iter().flatten().collect(),
        files_read: Vec::new(),
        classes_checked: classes.len(),
    }
}

pub fn build_hierarchy(entries: &[HierarchyEntry]) -> InheritanceGraph {
    let mut graph = InheritanceGraph::with_builtin_classes();
    for entry in entries {
        let parents: Vec<&str> = entry.parents.iter().map(String::as_str).collect();
        let added = if entry.interface {
            graph.declare_interface(&entry.name, &parents)
        } else {
            graph.declare_class(&entry.name, &parents, entry.is_final)
        };
        if !added {
            tracing::warn!(class = %entry.name, "ignored cyclic parent declaration");
        }
    }
    graph
}

fn entity_class(interner: &TypeInterner, class: &InputClass) -> EntityClass {
    let mut entity = EntityClass::new(&class.name, class.file.as_str());
    for property in &class.properties {
        let declared = property.declared_type.as_deref().and_then(|text| {
            parse_type(interner, text)
                .inspect_err(|err| {
                    tracing::warn!(
                        class = %class.name,
                        property = %property.name,
                        error = %err,
                        "unreadable declared type, skipping property"
                    );
                })
                .ok()
        });
        entity = entity.with_property(DeclaredProperty::new(&property.name, declared, property.line));
    }
    entity
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
