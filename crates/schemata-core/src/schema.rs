mod builder;
pub use builder::Builder;

mod definition;

mod model;
pub use model::Model;

pub mod name;
pub use name::Name;

mod property;
pub use property::{Property, PropertyType};

use indexmap::IndexMap;

/// Opaque key/value pairs attached to a model and passed through unmodified.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A plain record keyed by field name.
pub type Record<V> = IndexMap<String, V>;

/// A set of models with unique names.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Models keyed by normalized name
    models: IndexMap<String, Model>,

    /// Prepended to every collection name
    collection_name_prefix: Option<String>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Looks up a model by normalized or original name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(&name::normalize(name))
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.values()
    }

    /// Name of the collection backing `model`, e.g. `app_purchaseOrders`.
    pub fn collection_name(&self, model: &Model) -> String {
        let base = model.pluralized_name();

        match &self.collection_name_prefix {
            Some(prefix) => format!("{prefix}{base}"),
            None => base,
        }
    }
}
