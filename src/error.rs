use std::fmt;

/// What was wrong with a single required variable.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    #[error("is not set")]
    Missing,

    // Environment values are always text on the platforms we care about, but the OS will
    // happily hand us bytes that aren't UTF-8 and we have no use for those.
    #[error("is not valid unicode")]
    NotUnicode,
}

/// A required variable and the reason it was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{name} {problem}")]
pub struct FieldError {
    pub name: &'static str,
    pub problem: Problem,
}

/// Returned by [`ConfigLoader::get()`][crate::config::ConfigLoader::get] when one or more
/// required variables are missing or malformed.
///
/// Validation does not stop at the first bad variable: every offending field is listed,
/// in the order the variables are declared in [`REQUIRED_VARS`][crate::config::REQUIRED_VARS].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid site configuration: {}", Report(.fields))]
pub struct ConfigError {
    fields: Vec<FieldError>,
}

impl ConfigError {
    pub(crate) fn new(fields: Vec<FieldError>) -> Self {
        debug_assert!(!fields.is_empty());
        ConfigError { fields }
    }

    /// Every field that failed validation.
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// The names of the offending variables, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }
}

struct Report<'a>(&'a [FieldError]);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", field)?;
        }

        Ok(())
    }
}
