//! Association mapping data model.
//!
//! `ClassMetadata` mirrors what an object manager reports for one class
//! (the JSON shape the bootstrap prints and the driver attaches).
//! `AssociationMapping` is the resolved, per-property view the checker
//! consumes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Kind of association as declared in the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssociationType {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

impl AssociationType {
    pub fn cardinality(self) -> Cardinality {
        match self {
            AssociationType::OneToOne | AssociationType::ManyToOne => Cardinality::ToOne,
            AssociationType::OneToMany | AssociationType::ManyToMany => Cardinality::ToMany,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    ToOne,
    ToMany,
}

/// How the association is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawMappingKind {
    /// Owning side with foreign-key column(s) on this table.
    JoinColumn,
    /// Owning side through an association table.
    JoinTable,
    /// Inverse side, mapped by a field of the target entity.
    Inverse,
}

/// Role of the property in the entity's identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryKeyRole {
    None,
    /// The identifier consists of this property alone.
    Sole,
    /// The property is one of several identifier components.
    Composite,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinColumn {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub referenced_column_name: Option<String>,
    /// Join columns are nullable unless declared otherwise.
    #[serde(default)]
    pub nullable: Option<bool>,
}

impl JoinColumn {
    pub fn is_nullable(&self) -> bool {
        self.nullable.unwrap_or(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTable {
    pub name: String,
    #[serde(default)]
    pub join_columns: Vec<JoinColumn>,
    #[serde(default)]
    pub inverse_join_columns: Vec<JoinColumn>,
}

/// One association as reported by the object manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssociationMapping {
    pub field_name: String,
    #[serde(rename = "type")]
    pub association_type: AssociationType,
    pub target_entity: String,
    #[serde(default = "default_owning_side")]
    pub is_owning_side: bool,
    #[serde(default)]
    pub join_columns: Vec<JoinColumn>,
    #[serde(default)]
    pub join_table: Option<JoinTable>,
    #[serde(default)]
    pub mapped_by: Option<String>,
    #[serde(default)]
    pub inversed_by: Option<String>,
}

fn default_owning_side() -> bool {
    true
}

impl RawAssociationMapping {
    pub fn new(
        field_name: impl Into<String>,
        association_type: AssociationType,
        target_entity: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            association_type,
            target_entity: target_entity.into(),
            is_owning_side: true,
            join_columns: Vec::new(),
            join_table: None,
            mapped_by: None,
            inversed_by: None,
        }
    }

    pub fn with_join_column(mut self, column: JoinColumn) -> Self {
        self.join_columns.push(column);
        self
    }

    pub fn with_join_table(mut self, table: JoinTable) -> Self {
        self.join_table = Some(table);
        self
    }

    /// Mark as the inverse side, mapped by `field` on the target entity.
    pub fn mapped_by(mut self, field: impl Into<String>) -> Self {
        self.is_owning_side = false;
        self.mapped_by = Some(field.into());
        self
    }

    pub fn is_inverse_side(&self) -> bool {
        !self.is_owning_side || self.mapped_by.is_some()
    }

    pub fn raw_kind(&self) -> RawMappingKind {
        if self.is_inverse_side() {
            RawMappingKind::Inverse
        } else if self.join_table.is_some() {
            RawMappingKind::JoinTable
        } else {
            RawMappingKind::JoinColumn
        }
    }

    /// Whether the database side can hold no related entity.
    ///
    /// Inverse to-one sides are always nullable; otherwise any join column
    /// declared `nullable: false` makes the association required.
    pub fn is_nullable(&self) -> bool {
        if self.is_inverse_side() {
            return true;
        }
        self.join_columns.iter().all(JoinColumn::is_nullable)
    }
}

/// Metadata for one mapped class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMetadata {
    pub name: String,
    #[serde(default)]
    pub identifier: Vec<String>,
    #[serde(default)]
    pub association_mappings: IndexMap<String, RawAssociationMapping>,
    #[serde(default)]
    pub is_mapped_superclass: bool,
    #[serde(default)]
    pub is_embedded_class: bool,
}

impl ClassMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_identifier<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifier = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_association(mut self, mapping: RawAssociationMapping) -> Self {
        self.association_mappings
            .insert(mapping.field_name.clone(), mapping);
        self
    }

    /// Mapped superclasses and embeddables carry mappings but are not
    /// entities of their own.
    pub fn is_entity(&self) -> bool {
        !self.is_mapped_superclass && !self.is_embedded_class
    }

    pub fn primary_key_role(&self, field: &str) -> PrimaryKeyRole {
        if !self.identifier.iter().any(|id| id == field) {
            PrimaryKeyRole::None
        } else if self.identifier.len() == 1 {
            PrimaryKeyRole::Sole
        } else {
            PrimaryKeyRole::Composite
        }
    }

    pub fn has_association(&self, field: &str) -> bool {
        self.association_mappings.contains_key(field)
    }

    /// Resolved view of the association on `field`, if any.
    pub fn association(&self, field: &str) -> Option<AssociationMapping> {
        let raw = self.association_mappings.get(field)?;
        Some(AssociationMapping::from_raw(raw, self.primary_key_role(field)))
    }

    /// Resolved associations in declaration order.
    pub fn associations(&self) -> impl Iterator<Item = AssociationMapping> + '_ {
        self.association_mappings
            .values()
            .map(|raw| AssociationMapping::from_raw(raw, self.primary_key_role(&raw.field_name)))
    }
}

/// Per-property association facts the checker works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationMapping {
    pub property: String,
    pub cardinality: Cardinality,
    pub target_entity: String,
    pub is_nullable: bool,
    pub primary_key: PrimaryKeyRole,
    pub raw_kind: RawMappingKind,
}

impl AssociationMapping {
    pub fn from_raw(raw: &RawAssociationMapping, primary_key: PrimaryKeyRole) -> Self {
        Self {
            property: raw.field_name.clone(),
            cardinality: raw.association_type.cardinality(),
            target_entity: raw.target_entity.trim_start_matches('\\').to_string(),
            is_nullable: raw.is_nullable(),
            primary_key,
            raw_kind: raw.raw_kind(),
        }
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key != PrimaryKeyRole::None
    }

    pub fn is_to_many(&self) -> bool {
        self.cardinality == Cardinality::ToMany
    }
}

#[cfg(test)]
#[path = "../tests/mapping_tests.rs"]
mod tests;
