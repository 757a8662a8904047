use serde::Deserialize;

use crate::slug::slugify;
use crate::TokenError;

/// Unit used for fluid tokens when neither the record nor its collection names one.
pub const DEFAULT_UNIT: &str = "px";

/// Viewport range shared by the fluid tokens of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewports {
    pub min: f64,
    pub max: f64,
}

/// A token collection as it appears in a token file.
///
/// ```text
/// { "title": "Spacing", "viewports": { "min": 320, "max": 1280 },
///   "items": [{ "name": "S", "min": 16, "max": 24 }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CollectionDocument {
    #[serde(default)]
    pub title: Option<String>,
    /// Unit of every fluid bound in the collection.
    #[serde(default)]
    pub unit: Option<String>,
    /// Fallback viewports for records that don't carry their own.
    #[serde(default)]
    pub viewports: Option<Viewports>,
    pub items: Vec<TokenRecord>,
}

/// A single record from a token file.
///
/// A record carrying `min`/`max` is fluid, whether or not it also has a
/// `value`; the bounds always win. Otherwise `value` is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub name: String,
    #[serde(default)]
    pub value: Option<RecordValue>,
    #[serde(default, alias = "min")]
    pub min_value: Option<f64>,
    #[serde(default, alias = "max")]
    pub max_value: Option<f64>,
    #[serde(default, alias = "vmin")]
    pub min_viewport: Option<f64>,
    #[serde(default, alias = "vmax")]
    pub max_viewport: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl TokenRecord {
    /// A plain `{ name, value }` record.
    pub fn scalar(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, RecordValue::Text(value.into()))
    }

    /// A `{ name, value: [..] }` record.
    pub fn list<S: Into<String>>(name: impl Into<String>, items: impl IntoIterator<Item = S>) -> Self {
        Self::with_value(
            name,
            RecordValue::List(items.into_iter().map(Into::into).collect()),
        )
    }

    /// A fluid record with its own viewport range.
    pub fn fluid(
        name: impl Into<String>,
        min_value: f64,
        max_value: f64,
        min_viewport: f64,
        max_viewport: f64,
    ) -> Self {
        Self {
            name: name.into(),
            value: None,
            min_value: Some(min_value),
            max_value: Some(max_value),
            min_viewport: Some(min_viewport),
            max_viewport: Some(max_viewport),
            unit: None,
        }
    }

    fn with_value(name: impl Into<String>, value: RecordValue) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            min_value: None,
            max_value: None,
            min_viewport: None,
            max_viewport: None,
            unit: None,
        }
    }
}

/// Raw record value: a string, a bare number (e.g. font weights), or a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

/// Bounds of a token that scales with the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidToken {
    pub min_value: f64,
    pub max_value: f64,
    pub min_viewport: f64,
    pub max_viewport: f64,
    pub unit: String,
}

/// Resolved token value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Scalar(String),
    /// Composite value such as a font stack, order preserved.
    List(Vec<String>),
    Fluid(FluidToken),
}

impl TokenValue {
    /// Flatten a non-fluid value into its CSS text. Fluid values return `None`.
    pub fn as_css(&self) -> Option<String> {
        match self {
            TokenValue::Scalar(s) => Some(s.clone()),
            TokenValue::List(items) => Some(items.join(", ")),
            TokenValue::Fluid(_) => None,
        }
    }
}

/// A named token with its normalized slug.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub name: String,
    pub slug: String,
    pub value: TokenValue,
}

impl Token {
    /// Validate a record read from `collection`.
    ///
    /// `unit` and `viewports` are the collection-level defaults.
    pub fn from_record(
        collection: &str,
        record: TokenRecord,
        unit: &str,
        viewports: Option<Viewports>,
    ) -> Result<Self, TokenError> {
        let slug = slugify(&record.name);
        if slug.is_empty() {
            return Err(TokenError::malformed(
                collection,
                &record.name,
                "name has no characters usable in a slug",
            ));
        }

        let value = match (record.min_value, record.max_value, record.value) {
            (Some(min_value), Some(max_value), _) => {
                let min_viewport = record.min_viewport.or(viewports.map(|v| v.min));
                let max_viewport = record.max_viewport.or(viewports.map(|v| v.max));
                let (Some(min_viewport), Some(max_viewport)) = (min_viewport, max_viewport) else {
                    return Err(TokenError::malformed(
                        collection,
                        &record.name,
                        "fluid token has no viewport range and the collection defines none",
                    ));
                };

                TokenValue::Fluid(FluidToken {
                    min_value,
                    max_value,
                    min_viewport,
                    max_viewport,
                    unit: record.unit.unwrap_or_else(|| unit.to_string()),
                })
            }
            (None, None, Some(RecordValue::Text(s))) => TokenValue::Scalar(s),
            (None, None, Some(RecordValue::Number(n))) => TokenValue::Scalar(format_number(n)),
            (None, None, Some(RecordValue::List(items))) => TokenValue::List(items),
            (None, None, None) => {
                return Err(TokenError::malformed(
                    collection,
                    &record.name,
                    "expected either 'value' or both 'min' and 'max'",
                ));
            }
            _ => {
                return Err(TokenError::malformed(
                    collection,
                    &record.name,
                    "fluid token needs both 'min' and 'max'",
                ));
            }
        };

        Ok(Token {
            name: record.name,
            slug,
            value,
        })
    }
}

/// Format a number, removing `.0` for integers.
///
/// Integers too large for exact `i64` conversion use float formatting.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(json: &str) -> TokenRecord {
        serde_json::from_str(json).unwrap()
    }

    // =========================================================================
    // Record parsing
    // =========================================================================

    #[test]
    fn test_record_scalar_string() {
        let r = record(r##"{ "name": "Primary", "value": "#fff" }"##);
        assert_eq!(r.value, Some(RecordValue::Text("#fff".into())));
    }

    #[test]
    fn test_record_scalar_number() {
        let r = record(r#"{ "name": "Bold", "value": 700 }"#);
        assert_eq!(r.value, Some(RecordValue::Number(700.0)));
    }

    #[test]
    fn test_record_list() {
        let r = record(r#"{ "name": "Base", "value": ["Inter", "sans-serif"] }"#);
        assert_eq!(
            r.value,
            Some(RecordValue::List(vec!["Inter".into(), "sans-serif".into()]))
        );
    }

    #[test]
    fn test_record_fluid_short_names() {
        let r = record(r#"{ "name": "S", "min": 16, "max": 24, "vmin": 320, "vmax": 1280 }"#);
        assert_eq!(r, TokenRecord::fluid("S", 16.0, 24.0, 320.0, 1280.0));
    }

    #[test]
    fn test_record_fluid_long_names() {
        let r = record(
            r#"{ "name": "S", "minValue": 16, "maxValue": 24, "minViewport": 320, "maxViewport": 1280 }"#,
        );
        assert_eq!(r, TokenRecord::fluid("S", 16.0, 24.0, 320.0, 1280.0));
    }

    // =========================================================================
    // Token resolution
    // =========================================================================

    #[test]
    fn test_token_slug() {
        let t = Token::from_record("colors", TokenRecord::scalar("Primary Color", "#fff"), "px", None)
            .unwrap();
        assert_eq!(t.slug, "primary-color");
        assert_eq!(t.name, "Primary Color");
    }

    #[test]
    fn test_list_joined_in_order() {
        let t = Token::from_record(
            "fontFamily",
            TokenRecord::list("Base", ["Inter", "Segoe UI", "sans-serif"]),
            "px",
            None,
        )
        .unwrap();
        assert_eq!(t.value.as_css().unwrap(), "Inter, Segoe UI, sans-serif");
    }

    #[test]
    fn test_number_value_formatted() {
        let t = Token::from_record("fontLeading", record(r#"{ "name": "Fine", "value": 1.1 }"#), "px", None)
            .unwrap();
        assert_eq!(t.value, TokenValue::Scalar("1.1".into()));

        let t = Token::from_record("fontWeight", record(r#"{ "name": "Bold", "value": 700 }"#), "px", None)
            .unwrap();
        assert_eq!(t.value, TokenValue::Scalar("700".into()));
    }

    #[test]
    fn test_fluid_uses_collection_viewports() {
        let r = record(r#"{ "name": "S", "min": 16, "max": 24 }"#);
        let t = Token::from_record(
            "spacing",
            r,
            "rem",
            Some(Viewports { min: 320.0, max: 1280.0 }),
        )
        .unwrap();
        assert_eq!(
            t.value,
            TokenValue::Fluid(FluidToken {
                min_value: 16.0,
                max_value: 24.0,
                min_viewport: 320.0,
                max_viewport: 1280.0,
                unit: "rem".into(),
            })
        );
        assert_eq!(t.value.as_css(), None);
    }

    #[test]
    fn test_fluid_record_viewports_win() {
        let r = record(r#"{ "name": "S", "min": 1, "max": 2, "vmin": 400, "unit": "rem" }"#);
        let t = Token::from_record("spacing", r, "px", Some(Viewports { min: 320.0, max: 1280.0 }))
            .unwrap();
        match t.value {
            TokenValue::Fluid(f) => {
                assert_eq!(f.min_viewport, 400.0);
                assert_eq!(f.max_viewport, 1280.0);
                assert_eq!(f.unit, "rem");
            }
            other => panic!("Expected Fluid, got {other:?}"),
        }
    }

    #[test]
    fn test_fluid_without_viewports_is_malformed() {
        let r = record(r#"{ "name": "S", "min": 16, "max": 24 }"#);
        let err = Token::from_record("spacing", r, "px", None).unwrap_err();
        assert!(matches!(err, TokenError::MalformedToken { ref token, .. } if token == "S"));
    }

    #[test]
    fn test_bounds_win_over_value() {
        let r = record(
            r#"{ "name": "sm", "value": "8px", "minValue": 8, "maxValue": 16, "minViewport": 320, "maxViewport": 1280 }"#,
        );
        let t = Token::from_record("spacing", r, "px", None).unwrap();
        assert_eq!(
            t.value,
            TokenValue::Fluid(FluidToken {
                min_value: 8.0,
                max_value: 16.0,
                min_viewport: 320.0,
                max_viewport: 1280.0,
                unit: "px".into(),
            })
        );
    }

    #[test]
    fn test_value_with_single_bound_is_malformed() {
        let r = record(r#"{ "name": "sm", "value": "8px", "max": 16 }"#);
        let err = Token::from_record("spacing", r, "px", None).unwrap_err();
        assert!(matches!(err, TokenError::MalformedToken { ref token, .. } if token == "sm"));
    }

    #[test]
    fn test_missing_value_is_malformed() {
        let r = record(r#"{ "name": "S", "min": 16 }"#);
        let err = Token::from_record("spacing", r, "px", None).unwrap_err();
        assert_eq!(err.collection(), "spacing");
    }

    #[test]
    fn test_unsluggable_name_is_malformed() {
        let err = Token::from_record("colors", TokenRecord::scalar("???", "red"), "px", None)
            .unwrap_err();
        assert!(matches!(err, TokenError::MalformedToken { .. }));
    }

    // =========================================================================
    // format_number
    // =========================================================================

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.25), "1.25");
        assert_eq!(format_number(-3.5), "-3.5");
    }

    #[test]
    fn test_format_number_large() {
        assert_eq!(format_number(1e19), "10000000000000000000");
        assert_eq!(format_number(-1e19), "-10000000000000000000");
        assert_eq!(format_number(123456789012345.0), "123456789012345");
    }
}
