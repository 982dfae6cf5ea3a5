use super::Error;

/// Error when a model or property definition is rejected.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// No name was supplied, or it was blank
    MissingName,

    /// The name was supplied but is not a string
    NameNotString,

    /// The name does not normalize to a usable identifier
    InvalidIdentifier { name: Box<str> },

    /// The value handed to a model is not a property descriptor
    NotAProperty,

    /// A property with the same normalized name is already registered
    DuplicateProperty { model: Box<str>, property: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::MissingName => f.write_str("`name` is a required field"),
            ValidationErrorKind::NameNotString => f.write_str("`name` must be a string"),
            ValidationErrorKind::InvalidIdentifier { name } => {
                write!(f, "`{name}` does not normalize to a valid identifier")
            }
            ValidationErrorKind::NotAProperty => {
                f.write_str("`property` must be a property descriptor")
            }
            ValidationErrorKind::DuplicateProperty { model, property } => {
                write!(
                    f,
                    "property `{property}` is already defined in model `{model}`"
                )
            }
        }
    }
}

impl Error {
    fn validation(kind: ValidationErrorKind) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError { kind }))
    }

    /// Creates a validation error for a missing or blank name.
    pub fn missing_name() -> Error {
        Error::validation(ValidationErrorKind::MissingName)
    }

    /// Creates a validation error for a name that is not textual.
    pub fn name_not_string() -> Error {
        Error::validation(ValidationErrorKind::NameNotString)
    }

    /// Creates a validation error for a name that fails strict normalization.
    pub fn invalid_identifier(name: impl Into<String>) -> Error {
        Error::validation(ValidationErrorKind::InvalidIdentifier {
            name: name.into().into(),
        })
    }

    /// Creates a validation error for a value that is not a property
    /// descriptor.
    pub fn not_a_property() -> Error {
        Error::validation(ValidationErrorKind::NotAProperty)
    }

    /// Creates a validation error for a property name that is already taken.
    pub fn duplicate_property(model: impl Into<String>, property: impl Into<String>) -> Error {
        Error::validation(ValidationErrorKind::DuplicateProperty {
            model: model.into().into(),
            property: property.into().into(),
        })
    }

    /// Returns `true` if the root cause is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Validation(_))
    }

    /// Returns `true` if the root cause is a duplicate property.
    pub fn is_duplicate_property(&self) -> bool {
        matches!(
            self.root().kind(),
            super::ErrorKind::Validation(ValidationError {
                kind: ValidationErrorKind::DuplicateProperty { .. }
            })
        )
    }
}
