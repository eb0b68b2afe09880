use crate::domain::FormField;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Per-field validation messages. Only invalid fields have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, Cow<'static, str>>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(|message| message.as_ref())
    }

    pub fn clear(&mut self, field: FormField) -> Option<Cow<'static, str>> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (*field, message.as_ref()))
    }
}

impl From<validator::ValidationErrors> for FormErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                let field: &str = &field;
                let field = FormField::try_from(field).ok()?;
                let error = errors.first()?;
                let message = error
                    .message
                    .clone()
                    .unwrap_or_else(|| Cow::Owned(error.code.to_string()));
                Some((field, message))
            })
            .collect();
        Self(fields)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}
