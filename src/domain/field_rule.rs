// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field rules and the declarative tag-string parser.
//!
//! A tag string of the form `key[,modifier]` (e.g. `"build_number"`,
//! `"mandatory,required"`, `"export_method,opt[dev,qa,prod]"`) describes how
//! one configuration field is looked up and validated. [`FieldRule::parse`]
//! turns it into a structured rule at registration time, so a malformed
//! declaration fails at startup rather than mid-bind.

use crate::domain::errors::BindError;
use crate::domain::field_key::FieldKey;

/// The structural validation applied to a field's raw value.
///
/// The option list lives inside the `Options` variant, so a rule with an
/// empty option set cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// No structural check beyond the optional required gate.
    Plain,
    /// The value must name an existing filesystem entry.
    File,
    /// The value must name an existing directory.
    Dir,
    /// The value must be a member of the declared option set.
    Options(Vec<String>),
}

/// The validation and lookup policy for one configuration field.
///
/// # Examples
///
/// ```
/// use envbind::domain::field_rule::{FieldRule, RuleKind};
///
/// let rule = FieldRule::parse("export_method,opt[dev,qa,prod]").unwrap();
/// assert_eq!(rule.key().as_str(), "export_method");
/// assert!(!rule.required());
/// assert!(matches!(rule.kind(), RuleKind::Options(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRule {
    key: FieldKey,
    required: bool,
    kind: RuleKind,
}

impl FieldRule {
    /// Parses a declarative tag string into a rule.
    ///
    /// The grammar is `<key>[,<modifier>]` with `<modifier>` one of
    /// `required`, `file`, `dir`, or `opt[v1,v2,...]`. A bare key yields a
    /// plain, non-required rule. Anything else is a
    /// [`BindError::BadMetadata`]: an authoring defect, not bad input.
    pub fn parse(tag: &str) -> Result<Self, BindError> {
        let (key, modifier) = match tag.split_once(',') {
            Some((key, modifier)) => (key, Some(modifier)),
            None => (tag, None),
        };

        if key.is_empty() {
            return Err(BindError::BadMetadata {
                tag: tag.to_string(),
                reason: "empty key".to_string(),
            });
        }

        let (required, kind) = match modifier {
            None => (false, RuleKind::Plain),
            Some("required") => (true, RuleKind::Plain),
            Some("file") => (false, RuleKind::File),
            Some("dir") => (false, RuleKind::Dir),
            Some(other) => (false, Self::parse_options(tag, other)?),
        };

        Ok(FieldRule {
            key: FieldKey::from(key),
            required,
            kind,
        })
    }

    /// Parses the `opt[v1,v2,...]` modifier form.
    fn parse_options(tag: &str, modifier: &str) -> Result<RuleKind, BindError> {
        let inner = modifier
            .strip_prefix("opt[")
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| BindError::BadMetadata {
                tag: tag.to_string(),
                reason: format!("unknown modifier '{}'", modifier),
            })?;

        if inner.is_empty() {
            return Err(BindError::BadMetadata {
                tag: tag.to_string(),
                reason: "empty option list".to_string(),
            });
        }

        Ok(RuleKind::Options(
            inner.split(',').map(str::to_string).collect(),
        ))
    }

    /// The key this field is looked up under.
    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    /// Whether an empty resolved value aborts the bind.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The structural check applied to the resolved value.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_key_is_plain_optional() {
        let rule = FieldRule::parse("name").unwrap();
        assert_eq!(rule.key().as_str(), "name");
        assert!(!rule.required());
        assert_eq!(rule.kind(), &RuleKind::Plain);
    }

    #[test]
    fn test_required_modifier() {
        let rule = FieldRule::parse("mandatory,required").unwrap();
        assert_eq!(rule.key().as_str(), "mandatory");
        assert!(rule.required());
        assert_eq!(rule.kind(), &RuleKind::Plain);
    }

    #[test]
    fn test_file_modifier() {
        let rule = FieldRule::parse("tmpfile,file").unwrap();
        assert_eq!(rule.kind(), &RuleKind::File);
        assert!(!rule.required());
    }

    #[test]
    fn test_dir_modifier() {
        let rule = FieldRule::parse("tmpdir,dir").unwrap();
        assert_eq!(rule.kind(), &RuleKind::Dir);
    }

    #[test]
    fn test_opt_modifier() {
        let rule = FieldRule::parse("export_method,opt[dev,qa,prod]").unwrap();
        match rule.kind() {
            RuleKind::Options(options) => {
                assert_eq!(options, &["dev", "qa", "prod"]);
            }
            other => panic!("expected Options, got {:?}", other),
        }
    }

    #[test]
    fn test_opt_single_option() {
        let rule = FieldRule::parse("mode,opt[only]").unwrap();
        assert_eq!(rule.kind(), &RuleKind::Options(vec!["only".to_string()]));
    }

    #[test]
    fn test_opt_preserves_declaration_order() {
        let rule = FieldRule::parse("m,opt[z,a,m]").unwrap();
        assert_eq!(
            rule.kind(),
            &RuleKind::Options(vec!["z".to_string(), "a".to_string(), "m".to_string()])
        );
    }

    #[test]
    fn test_unknown_modifier_is_bad_metadata() {
        let err = FieldRule::parse("key,unknown").unwrap_err();
        assert!(matches!(err, BindError::BadMetadata { .. }));
        assert!(err.to_string().contains("unknown modifier"));
    }

    #[test]
    fn test_empty_option_list_is_bad_metadata() {
        let err = FieldRule::parse("key,opt[]").unwrap_err();
        assert!(matches!(err, BindError::BadMetadata { .. }));
        assert!(err.to_string().contains("empty option list"));
    }

    #[test]
    fn test_unclosed_opt_is_bad_metadata() {
        let err = FieldRule::parse("key,opt[a,b").unwrap_err();
        assert!(matches!(err, BindError::BadMetadata { .. }));
    }

    #[test]
    fn test_empty_key_is_bad_metadata() {
        assert!(matches!(
            FieldRule::parse(""),
            Err(BindError::BadMetadata { .. })
        ));
        assert!(matches!(
            FieldRule::parse(",required"),
            Err(BindError::BadMetadata { .. })
        ));
    }
}
