// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field registration table and per-type coercion.
//!
//! The record's shape is declared explicitly: each field is registered into a
//! [`FieldSet`] together with its tag string, which pairs the parsed
//! [`FieldRule`] with a typed slot holding the `&mut` target and the
//! (decode, encode) behaviour of its semantic type via [`FieldValue`].

use crate::domain::{
    parse_multiline_input, validate::validate_int, BindError, FieldRule, Secret, ValueError,
};

/// A semantic field type the binder can coerce into.
///
/// `coerce` turns a validated raw string into the target type; `render`
/// produces the value's textual form for the bind report. The `Secret` impl
/// is the one place the two diverge on purpose: it stores verbatim and
/// renders masked.
pub trait FieldValue: Sized {
    /// Coerces a validated raw string into this type.
    fn coerce(raw: &str) -> Result<Self, ValueError>;

    /// Renders the bound value for reports and logging.
    fn render(&self) -> String;
}

impl FieldValue for String {
    fn coerce(raw: &str) -> Result<Self, ValueError> {
        Ok(raw.to_string())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl FieldValue for i64 {
    fn coerce(raw: &str) -> Result<Self, ValueError> {
        validate_int(raw)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for i32 {
    fn coerce(raw: &str) -> Result<Self, ValueError> {
        validate_int(raw)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for bool {
    /// `"yes"`, `"true"` and `"1"` (case-insensitive) are true; everything
    /// else, the empty string included, is false. Coercion never fails.
    fn coerce(raw: &str) -> Result<Self, ValueError> {
        Ok(matches!(
            raw.to_lowercase().as_str(),
            "yes" | "true" | "1"
        ))
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for Vec<String> {
    /// Sequence fields get the multiline splitter with the pipe separator
    /// enabled; plain string fields are never pre-split.
    fn coerce(raw: &str) -> Result<Self, ValueError> {
        Ok(parse_multiline_input(raw, true))
    }

    fn render(&self) -> String {
        format!("[{}]", self.join(" "))
    }
}

impl FieldValue for Secret {
    fn coerce(raw: &str) -> Result<Self, ValueError> {
        Ok(Secret::from(raw))
    }

    fn render(&self) -> String {
        self.masked().to_string()
    }
}

/// Object-safe view over one registered target, erasing its concrete type.
pub(crate) trait Slot {
    fn assign(&mut self, raw: &str) -> Result<(), ValueError>;
    fn render(&self) -> String;
}

struct TypedSlot<'a, T: FieldValue> {
    target: &'a mut T,
}

impl<'a, T: FieldValue> Slot for TypedSlot<'a, T> {
    fn assign(&mut self, raw: &str) -> Result<(), ValueError> {
        *self.target = T::coerce(raw)?;
        Ok(())
    }

    fn render(&self) -> String {
        self.target.render()
    }
}

/// One registered field: its parsed rule plus its typed slot.
pub(crate) struct Field<'a> {
    pub(crate) rule: FieldRule,
    pub(crate) slot: Box<dyn Slot + 'a>,
}

/// The explicit field-rule table for one configuration record.
///
/// Fields are bound in registration order, which therefore should match the
/// record's declaration order. Registration parses each tag immediately, so a
/// malformed tag surfaces as [`BindError::BadMetadata`] before any value is
/// read.
///
/// # Examples
///
/// ```
/// use envbind::binder::FieldSet;
///
/// #[derive(Default)]
/// struct Config {
///     name: String,
///     build_number: i64,
/// }
///
/// # fn main() -> envbind::domain::Result<()> {
/// let mut config = Config::default();
/// let mut fields = FieldSet::new();
/// fields
///     .add("name", &mut config.name)?
///     .add("build_number", &mut config.build_number)?;
/// assert_eq!(fields.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct FieldSet<'a> {
    fields: Vec<Field<'a>>,
}

impl std::fmt::Debug for FieldSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSet")
            .field("len", &self.fields.len())
            .finish()
    }
}

impl<'a> FieldSet<'a> {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Registers one field under the given declarative tag.
    ///
    /// Returns `&mut Self` so registrations chain with `?`.
    pub fn add<T: FieldValue>(
        &mut self,
        tag: &str,
        target: &'a mut T,
    ) -> Result<&mut Self, BindError> {
        let rule = FieldRule::parse(tag)?;
        self.fields.push(Field {
            rule,
            slot: Box::new(TypedSlot { target }),
        });
        Ok(self)
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn fields_mut<'s>(&'s mut self) -> impl Iterator<Item = &'s mut Field<'a>> + 's {
        self.fields.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_coerce_verbatim() {
        assert_eq!(String::coerce("  raw  ").unwrap(), "  raw  ");
        assert_eq!(String::coerce("").unwrap(), "");
    }

    #[test]
    fn test_i64_coerce() {
        assert_eq!(i64::coerce("42").unwrap(), 42);
        assert_eq!(i64::coerce("").unwrap(), 0);
        assert!(i64::coerce("abc").is_err());
    }

    #[test]
    fn test_i32_coerce() {
        assert_eq!(i32::coerce("-11").unwrap(), -11);
        assert_eq!(i32::coerce("").unwrap(), 0);
        assert!(i32::coerce("4000000000").is_err());
    }

    #[test]
    fn test_bool_truthy_set() {
        for raw in ["yes", "Yes", "YES", "true", "True", "TRUE", "1"] {
            assert!(bool::coerce(raw).unwrap(), "expected true for {}", raw);
        }
    }

    #[test]
    fn test_bool_everything_else_false() {
        for raw in ["", "no", "false", "0", "maybe", "2"] {
            assert!(!bool::coerce(raw).unwrap(), "expected false for {}", raw);
        }
    }

    #[test]
    fn test_vec_coerce_splits_pipes() {
        assert_eq!(
            Vec::<String>::coerce("item1|item2|item3").unwrap(),
            vec!["item1", "item2", "item3"]
        );
        assert!(Vec::<String>::coerce("").unwrap().is_empty());
    }

    #[test]
    fn test_vec_render() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(items.render(), "[a b]");
        assert_eq!(Vec::<String>::new().render(), "[]");
    }

    #[test]
    fn test_secret_coerce_stores_render_masks() {
        let secret = Secret::coerce("pass1234").unwrap();
        assert_eq!(secret.expose(), "pass1234");
        assert_eq!(secret.render(), "***");
        assert_eq!(Secret::coerce("").unwrap().render(), "");
    }

    #[test]
    fn test_add_registers_in_order() {
        let mut name = String::new();
        let mut count = 0i64;
        let mut fields = FieldSet::new();
        fields
            .add("name", &mut name)
            .unwrap()
            .add("count", &mut count)
            .unwrap();
        assert_eq!(fields.len(), 2);
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_add_rejects_bad_tag() {
        let mut name = String::new();
        let mut fields = FieldSet::new();
        let err = fields.add("name,bogus", &mut name).unwrap_err();
        assert!(matches!(err, BindError::BadMetadata { .. }));
        assert!(fields.is_empty());
    }

    #[test]
    fn test_slot_assign_writes_target() {
        let mut number = 0i64;
        {
            let mut slot = TypedSlot { target: &mut number };
            slot.assign("7").unwrap();
            assert_eq!(slot.render(), "7");
        }
        assert_eq!(number, 7);
    }
}
