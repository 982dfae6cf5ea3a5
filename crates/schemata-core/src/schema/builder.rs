use super::{Model, Schema};
use crate::{Error, Result};
use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Builder {
    /// If set, prefix all collection names with this string
    collection_name_prefix: Option<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            collection_name_prefix: None,
        }
    }

    pub fn collection_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.collection_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn build(&self, models: impl IntoIterator<Item = Model>) -> Result<Schema> {
        let mut by_name: IndexMap<String, Model> = IndexMap::new();

        for model in models {
            if let Some(prev) = by_name.get(model.name()) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is defined by both `{}` and `{}`",
                    model.name(),
                    prev.original_name(),
                    model.original_name(),
                )));
            }

            by_name.insert(model.name().to_string(), model);
        }

        log::debug!(
            "built schema; models={:?}",
            by_name.keys().collect::<Vec<_>>()
        );

        Ok(Schema {
            models: by_name,
            collection_name_prefix: self.collection_name_prefix.clone(),
        })
    }

    /// Builds a schema from `{ "models": [ <model definition>, ... ] }`.
    pub fn build_from_json(&self, definition: &serde_json::Value) -> Result<Schema> {
        let Some(models) = definition.get("models") else {
            return self.build(Vec::new());
        };

        let Some(models) = models.as_array() else {
            return Err(Error::invalid_schema("`models` must be an array"));
        };

        let models = models
            .iter()
            .enumerate()
            .map(|(i, model)| {
                Model::from_json(model).map_err(|err| err.context(crate::err!("models[{i}]")))
            })
            .collect::<Result<Vec<_>>>()?;

        self.build(models)
    }
}
