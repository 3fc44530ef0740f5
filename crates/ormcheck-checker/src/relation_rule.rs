//! Association type mismatch rule.
//!
//! For every property that has both a declared type and an association
//! mapping, the expected type is compared with the declared type twice:
//!
//! 1. expected ⊆ declared, else "database can contain ... but property
//!    expects ..."
//! 2. declared ⊆ expected, else "property can contain ... but database
//!    expects ..."
//!
//! Only a definite subtype relation passes. Diagnostics come out in property
//! order, database direction first.

use crate::entity::{DeclaredProperty, EntityClass};
use crate::expected_type::{expected_type, normalize_collection};
use crate::options::RelationCheckOptions;
use ormcheck_common::{Diagnostic, diagnostic_codes};
use ormcheck_metadata::{AssociationMapping, MetadataResolver};
use ormcheck_solver::{
    InheritanceGraph, TypeId, TypeInterner, format_type, is_nullable, query_relation,
    remove_null,
};

/// Can every value the database holds be stored in the property?
pub fn database_direction_holds(
    interner: &TypeInterner,
    hierarchy: &InheritanceGraph,
    expected: TypeId,
    declared: TypeId,
) -> bool {
    query_relation(interner, hierarchy, expected, declared).is_related()
}

/// Can every value the property holds be persisted?
pub fn property_direction_holds(
    interner: &TypeInterner,
    hierarchy: &InheritanceGraph,
    declared: TypeId,
    expected: TypeId,
) -> bool {
    query_relation(interner, hierarchy, declared, expected).is_related()
}

pub struct EntityRelationChecker<'a> {
    interner: &'a TypeInterner,
    hierarchy: &'a InheritanceGraph,
    resolver: &'a dyn MetadataResolver,
    options: &'a RelationCheckOptions,
}

impl<'a> EntityRelationChecker<'a> {
    pub fn new(
        interner: &'a TypeInterner,
        hierarchy: &'a InheritanceGraph,
        resolver: &'a dyn MetadataResolver,
        options: &'a RelationCheckOptions,
    ) -> Self {
        Self {
            interner,
            hierarchy,
            resolver,
            options,
        }
    }

    pub fn options(&self) -> &RelationCheckOptions {
        self.options
    }

    /// Diagnostics for one class, in property order.
    pub fn check_class(&self, class: &EntityClass) -> Vec<Diagnostic> {
        let _span = tracing::debug_span!("check_class", class = %class.name).entered();

        let Some(metadata) = self.resolver.resolve(&class.name) else {
            tracing::debug!("no metadata, skipping");
            return Vec::new();
        };

        let mut diagnostics = Vec::new();
        for property in &class.properties {
            let Some(declared) = property.declared_type else {
                continue;
            };
            let Some(mapping) = metadata.association(&property.name) else {
                continue;
            };
            self.check_property(class, property, declared, &mapping, &mut diagnostics);
        }
        tracing::debug!(diagnostics = diagnostics.len(), "class checked");
        diagnostics
    }

    /// Expected type for `mapping`, rendered against this checker's options.
    pub fn expected_type(&self, mapping: &AssociationMapping) -> TypeId {
        expected_type(self.interner, self.options, mapping)
    }

    fn check_property(
        &self,
        class: &EntityClass,
        property: &DeclaredProperty,
        declared: TypeId,
        mapping: &AssociationMapping,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let expected = self.expected_type(mapping);
        let written = declared;
        let declared = if mapping.is_to_many() {
            normalize_collection(self.interner, self.hierarchy, self.options, declared)
        } else {
            declared
        };

        // The flag only relaxes the property side, and only when the
        // database side cannot be null.
        let declared_for_property = if self.options.allow_nullable_property_for_required_field
            && !is_nullable(self.interner, expected)
        {
            remove_null(self.interner, declared)
        } else {
            declared
        };

        let database_ok =
            database_direction_holds(self.interner, self.hierarchy, expected, declared);
        let property_ok = property_direction_holds(
            self.interner,
            self.hierarchy,
            declared_for_property,
            expected,
        );
        tracing::trace!(
            property = %property.name,
            database_ok,
            property_ok,
            "association compared"
        );
        if database_ok && property_ok {
            return;
        }

        let expected_text = format_type(self.interner, expected);
        let declared_text = format_type(self.interner, written);
        if !database_ok {
            diagnostics.extend(self.diagnostic(
                class,
                property,
                diagnostic_codes::DATABASE_CAN_CONTAIN,
                &expected_text,
                &declared_text,
            ));
        }
        if !property_ok {
            diagnostics.extend(self.diagnostic(
                class,
                property,
                diagnostic_codes::PROPERTY_CAN_CONTAIN,
                &declared_text,
                &expected_text,
            ));
        }
    }

    fn diagnostic(
        &self,
        class: &EntityClass,
        property: &DeclaredProperty,
        code: u32,
        can_contain: &str,
        expects: &str,
    ) -> Option<Diagnostic> {
        Diagnostic::from_template(
            class.file.as_str(),
            property.line,
            code,
            &[class.name.as_str(), property.name.as_str(), can_contain, expects],
        )
    }
}

#[cfg(test)]
#[path = "../tests/relation_rule_tests.rs"]
mod tests;
