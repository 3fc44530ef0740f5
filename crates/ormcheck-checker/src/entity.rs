//! Driver-supplied class descriptions.

use ormcheck_solver::TypeId;

/// A property as the driver sees it in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredProperty {
    pub name: String,
    /// `None` when the property has no resolvable static type.
    pub declared_type: Option<TypeId>,
    pub line: u32,
}

impl DeclaredProperty {
    pub fn new(name: impl Into<String>, declared_type: Option<TypeId>, line: u32) -> Self {
        Self {
            name: name.into(),
            declared_type,
            line,
        }
    }
}

/// A class to check, with its properties in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityClass {
    pub name: String,
    pub file: String,
    pub properties: Vec<DeclaredProperty>,
}

impl EntityClass {
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into().trim_start_matches('\\').to_string(),
            file: file.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: DeclaredProperty) -> Self {
        self.properties.push(property);
        self
    }
}
