use super::{name, Metadata, Name, Property, Record};
use crate::{Error, Result};
use indexmap::IndexMap;

/// A named collection of property descriptors.
///
/// Models are populated once during schema bootstrap with
/// [`add_property`](Model::add_property) and are read-only afterwards. They
/// translate records between the repository side, keyed by original field
/// names, and the ORM side, keyed by normalized property names.
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the model
    name: Name,

    /// Opaque metadata supplied at construction
    metadata: Metadata,

    /// Properties keyed by normalized name, in insertion order
    properties: IndexMap<String, Property>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Result<Model> {
        Model::with_metadata(name, Metadata::new())
    }

    pub fn with_metadata(name: impl Into<String>, metadata: Metadata) -> Result<Model> {
        Ok(Model {
            name: Name::new(name)?,
            metadata,
            properties: IndexMap::new(),
        })
    }

    /// Normalized model name.
    pub fn name(&self) -> &str {
        self.name.name()
    }

    /// Model name exactly as supplied.
    pub fn original_name(&self) -> &str {
        self.name.original_name()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Registers `property` under its normalized name.
    ///
    /// Fails without modifying the model if the name is already taken.
    pub fn add_property(&mut self, property: Property) -> Result<&mut Model> {
        if self.properties.contains_key(property.name()) {
            return Err(Error::duplicate_property(self.name(), property.name()));
        }

        self.properties.insert(property.name().to_string(), property);

        Ok(self)
    }

    /// Looks up a property by normalized or original name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(&name::normalize(name))
    }

    pub fn properties(&self) -> &IndexMap<String, Property> {
        &self.properties
    }

    /// Every primary key property, in registration order.
    pub fn primary_key(&self) -> Vec<&Property> {
        self.properties
            .values()
            .filter(|property| property.is_primary_key())
            .collect()
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.properties.values().map(Property::name).collect()
    }

    pub fn pluralized_name(&self) -> String {
        self.name.pluralized()
    }

    /// Plain serializable form: `{ "name": ..., "properties": { ... } }`.
    pub fn to_pojo(&self) -> serde_json::Value {
        let properties = self
            .properties
            .values()
            .map(|property| (property.name().to_string(), property.to_pojo()))
            .collect::<serde_json::Map<_, _>>();

        serde_json::json!({
            "name": self.name(),
            "properties": properties,
        })
    }

    /// Re-keys a repository record by normalized property names.
    ///
    /// Keys that do not resolve to a property are dropped.
    pub fn translate_to_orm<K, V>(&self, data: impl IntoIterator<Item = (K, V)>) -> Record<V>
    where
        K: AsRef<str>,
    {
        self.translate(data, Property::name)
    }

    /// Re-keys an ORM record by original (repository-side) property names.
    ///
    /// Keys that do not resolve to a property are dropped.
    pub fn translate_to_repository<K, V>(
        &self,
        data: impl IntoIterator<Item = (K, V)>,
    ) -> Record<V>
    where
        K: AsRef<str>,
    {
        self.translate(data, Property::original_name)
    }

    fn translate<K, V>(
        &self,
        data: impl IntoIterator<Item = (K, V)>,
        key: impl Fn(&Property) -> &str,
    ) -> Record<V>
    where
        K: AsRef<str>,
    {
        let mut out = Record::new();

        for (src, value) in data {
            let Some(property) = self.property(src.as_ref()) else {
                log::trace!(
                    "model `{}`: dropping unknown key `{}`",
                    self.name(),
                    src.as_ref()
                );
                continue;
            };

            out.insert(key(property).to_string(), value);
        }

        out
    }
}
