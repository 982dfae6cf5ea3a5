use super::Name;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Describes one field of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Normalized and original (repository-side) names
    name: Name,

    /// Declared value type
    ty: PropertyType,

    /// True if the property is part of the model's primary key
    primary_key: bool,

    /// True if the property may hold null
    nullable: bool,
}

/// Value type declared for a property.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Json,
    #[default]
    Any,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PropertyPojo<'a> {
    name: &'a str,
    original_name: &'a str,
    #[serde(rename = "type")]
    ty: PropertyType,
    primary_key: bool,
    nullable: bool,
}

impl Property {
    /// Creates a property from its repository-side name.
    pub fn new(original_name: impl Into<String>, ty: PropertyType) -> Result<Property> {
        Ok(Property {
            name: Name::new(original_name)?,
            ty,
            primary_key: false,
            nullable: false,
        })
    }

    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Normalized (ORM-facing) name.
    pub fn name(&self) -> &str {
        self.name.name()
    }

    /// Repository-side name, as supplied.
    pub fn original_name(&self) -> &str {
        self.name.original_name()
    }

    pub fn ty(&self) -> PropertyType {
        self.ty
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Plain serializable form of the property.
    pub fn to_pojo(&self) -> serde_json::Value {
        let pojo = PropertyPojo {
            name: self.name(),
            original_name: self.original_name(),
            ty: self.ty,
            primary_key: self.primary_key,
            nullable: self.nullable,
        };

        // A struct of strings, bools and a unit enum always serializes.
        serde_json::to_value(pojo).unwrap_or_default()
    }
}
