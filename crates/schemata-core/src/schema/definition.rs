use super::{Metadata, Model, Property, PropertyType};
use crate::{bail, err, Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Per-property options in a JSON model definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PropertyDef {
    #[serde(rename = "type", default)]
    ty: PropertyType,

    #[serde(default)]
    primary_key: bool,

    #[serde(default)]
    nullable: bool,
}

impl Model {
    /// Loads a model from a JSON definition:
    ///
    /// ```json
    /// {
    ///     "name": "purchase_order",
    ///     "metadata": { "collection": "po" },
    ///     "properties": {
    ///         "order_id": { "type": "integer", "primaryKey": true },
    ///         "placed_at": { "type": "date", "nullable": true }
    ///     }
    /// }
    /// ```
    ///
    /// Properties keep the order they appear in.
    pub fn from_json(definition: &Value) -> Result<Model> {
        let name = match definition.get("name") {
            None | Some(Value::Null) => return Err(Error::missing_name()),
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(Error::name_not_string()),
        };

        let metadata = match definition.get("metadata") {
            None | Some(Value::Null) => Metadata::new(),
            Some(Value::Object(metadata)) => metadata.clone(),
            Some(_) => bail!("model `{name}`: `metadata` must be an object"),
        };

        let mut model = Model::with_metadata(name, metadata)?;

        let properties = match definition.get("properties") {
            None | Some(Value::Null) => return Ok(model),
            Some(Value::Object(properties)) => properties,
            Some(_) => bail!("model `{}`: `properties` must be an object", model.name()),
        };

        for (original_name, def) in properties {
            let property = property_from_json(original_name, def)
                .map_err(|e| e.context(err!("model `{}`", model.name())))?;

            model.add_property(property)?;
        }

        Ok(model)
    }
}

fn property_from_json(original_name: &str, def: &Value) -> Result<Property> {
    if !def.is_object() {
        return Err(Error::not_a_property());
    }

    let def = PropertyDef::deserialize(def)
        .map_err(|e| Error::from(e).context(err!("property `{original_name}`")))?;

    Ok(Property::new(original_name, def.ty)?
        .primary_key(def.primary_key)
        .nullable(def.nullable))
}
