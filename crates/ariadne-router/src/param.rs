//! Handler parameter descriptors and their classification into bindings.
//!
//! A [`ParamDescriptor`] is what a declaration source knows about one
//! handler argument: its name, its declared type, whether it has a
//! default value and whether it is explicitly body-sourced.
//! [`classify`] turns the descriptors of one handler into
//! [`ParamBinding`]s and rejects declared types a binding kind cannot
//! carry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pattern::PathPattern;
use crate::value::ParamType;

/// The type a handler argument is declared with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// `string`
    String,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `bool`
    Bool,
    /// `array`: a structured, JSON-shaped value.
    Structured,
    /// The request handle.
    Request,
    /// The response handle.
    Response,
    /// Any other type name. Never valid for a bound parameter.
    Other(String),
}

impl DeclaredType {
    fn param_type(&self) -> Option<ParamType> {
        match self {
            Self::String => Some(ParamType::String),
            Self::Int => Some(ParamType::Int),
            Self::Float => Some(ParamType::Float),
            Self::Bool => Some(ParamType::Bool),
            Self::Structured => Some(ParamType::Structured),
            Self::Request | Self::Response | Self::Other(_) => None,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Bool => f.write_str("bool"),
            Self::Structured => f.write_str("array"),
            Self::Request => f.write_str("request"),
            Self::Response => f.write_str("response"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

impl FromStr for DeclaredType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "string" => Self::String,
            "int" => Self::Int,
            "float" => Self::Float,
            "bool" => Self::Bool,
            "array" => Self::Structured,
            "request" => Self::Request,
            "response" => Self::Response,
            other => Self::Other(other.to_string()),
        })
    }
}

/// One declared handler argument, as supplied by the declaration source.
///
/// # Example
///
/// ```rust
/// use ariadne_router::{DeclaredType, ParamDescriptor};
///
/// let id = ParamDescriptor::new("id", DeclaredType::Int);
/// let active = ParamDescriptor::new("active", DeclaredType::Bool).optional();
/// let payload = ParamDescriptor::new("payload", DeclaredType::Structured).body();
/// let request = ParamDescriptor::request("req");
/// # let _ = (id, active, payload, request);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Argument name.
    pub name: String,
    /// Declared type.
    pub declared_type: DeclaredType,
    /// The argument has a default value.
    pub optional: bool,
    /// The argument is explicitly marked as the request body.
    pub body: bool,
}

impl ParamDescriptor {
    /// Creates a required, non-body descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: DeclaredType) -> Self {
        Self {
            name: name.into(),
            declared_type,
            optional: false,
            body: false,
        }
    }

    /// Creates a descriptor for the request handle.
    #[must_use]
    pub fn request(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::Request)
    }

    /// Creates a descriptor for the response handle.
    #[must_use]
    pub fn response(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::Response)
    }

    /// Marks the argument as having a default value.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks the argument as the request body.
    #[must_use]
    pub fn body(mut self) -> Self {
        self.body = true;
        self
    }
}

/// Where a bound parameter takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// A dynamic path segment.
    Segment,
    /// A query string key.
    Query,
    /// The request body.
    Body,
    /// The request handle.
    Request,
    /// The response handle.
    Response,
}

impl ParamKind {
    /// Declared types this kind can carry. Empty for the handle kinds.
    #[must_use]
    pub const fn supported_types(self) -> &'static [ParamType] {
        match self {
            Self::Segment => &[ParamType::String, ParamType::Int],
            Self::Query => &[
                ParamType::String,
                ParamType::Int,
                ParamType::Bool,
                ParamType::Float,
            ],
            Self::Body => &[ParamType::Structured, ParamType::String],
            Self::Request | Self::Response => &[],
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Segment => "segment",
            Self::Query => "query",
            Self::Body => "body",
            Self::Request => "request",
            Self::Response => "response",
        };
        f.write_str(name)
    }
}

/// A classified handler parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamBinding {
    /// Argument name.
    pub name: String,
    /// Binding kind.
    pub kind: ParamKind,
    /// Declared type; `None` for REQUEST/RESPONSE.
    pub ty: Option<ParamType>,
    /// Position among the pattern's placeholders, for SEGMENT bindings
    /// whose name was found in the pattern.
    pub segment_index: Option<usize>,
}

/// A declared type that its binding kind does not support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedType {
    /// Argument name.
    pub param: String,
    /// The binding kind the argument was classified as.
    pub kind: ParamKind,
    /// The rejected declared type.
    pub declared: DeclaredType,
}

/// Classifies a handler's descriptors against its route pattern.
///
/// Rules, first match wins: explicit body marker → BODY; request handle
/// → REQUEST; response handle → RESPONSE; has a default → QUERY;
/// otherwise SEGMENT. A SEGMENT name missing from the pattern is left
/// with `segment_index: None`; the compiler reports it as inconsistent.
pub fn classify(
    pattern: &PathPattern,
    params: &[ParamDescriptor],
) -> Result<Vec<ParamBinding>, UnsupportedType> {
    params
        .iter()
        .map(|param| -> Result<ParamBinding, UnsupportedType> {
            let kind = if param.body {
                ParamKind::Body
            } else if param.declared_type == DeclaredType::Request {
                ParamKind::Request
            } else if param.declared_type == DeclaredType::Response {
                ParamKind::Response
            } else if param.optional {
                ParamKind::Query
            } else {
                ParamKind::Segment
            };

            let ty = match kind {
                ParamKind::Request | ParamKind::Response => None,
                _ => {
                    let ty = param
                        .declared_type
                        .param_type()
                        .filter(|ty| kind.supported_types().contains(ty))
                        .ok_or_else(|| UnsupportedType {
                            param: param.name.clone(),
                            kind,
                            declared: param.declared_type.clone(),
                        })?;
                    Some(ty)
                }
            };

            let segment_index = match kind {
                ParamKind::Segment => pattern.dynamic_index(&param.name),
                _ => None,
            };

            Ok(ParamBinding {
                name: param.name.clone(),
                kind,
                ty,
                segment_index,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(name: &str) -> ParamDescriptor {
        ParamDescriptor::new(name, DeclaredType::String)
    }

    #[test]
    fn test_segment_binding_resolves_index() {
        let pattern = PathPattern::parse("/specie/{specie}/color/{color}");
        let bindings = classify(&pattern, &[string("color"), string("specie")]).unwrap();

        assert_eq!(bindings[0].kind, ParamKind::Segment);
        assert_eq!(bindings[0].segment_index, Some(1));
        assert_eq!(bindings[1].segment_index, Some(0));
    }

    #[test]
    fn test_optional_becomes_query() {
        let pattern = PathPattern::parse("/user");
        let bindings = classify(
            &pattern,
            &[ParamDescriptor::new("active", DeclaredType::Bool).optional()],
        )
        .unwrap();

        assert_eq!(bindings[0].kind, ParamKind::Query);
        assert_eq!(bindings[0].ty, Some(ParamType::Bool));
        assert_eq!(bindings[0].segment_index, None);
    }

    #[test]
    fn test_body_marker_wins_over_optional() {
        let pattern = PathPattern::parse("/user");
        let bindings = classify(
            &pattern,
            &[ParamDescriptor::new("user", DeclaredType::Structured)
                .body()
                .optional()],
        )
        .unwrap();

        assert_eq!(bindings[0].kind, ParamKind::Body);
        assert_eq!(bindings[0].ty, Some(ParamType::Structured));
    }

    #[test]
    fn test_handles_have_no_type() {
        let pattern = PathPattern::parse("/raw");
        let bindings = classify(
            &pattern,
            &[
                ParamDescriptor::request("req"),
                ParamDescriptor::response("res").optional(),
            ],
        )
        .unwrap();

        assert_eq!(bindings[0].kind, ParamKind::Request);
        assert_eq!(bindings[0].ty, None);
        assert_eq!(bindings[1].kind, ParamKind::Response);
        assert_eq!(bindings[1].ty, None);
    }

    #[test]
    fn test_unknown_segment_name_deferred() {
        let pattern = PathPattern::parse("/a/{x}");
        let bindings = classify(&pattern, &[string("y")]).unwrap();
        assert_eq!(bindings[0].kind, ParamKind::Segment);
        assert_eq!(bindings[0].segment_index, None);
    }

    #[test]
    fn test_segment_rejects_bool_and_structured() {
        let pattern = PathPattern::parse("/types/{arr}");
        for declared in [
            DeclaredType::Bool,
            DeclaredType::Float,
            DeclaredType::Structured,
            DeclaredType::Other("mixed".into()),
        ] {
            let err = classify(&pattern, &[ParamDescriptor::new("arr", declared.clone())])
                .unwrap_err();
            assert_eq!(err.kind, ParamKind::Segment);
            assert_eq!(err.declared, declared);
        }
    }

    #[test]
    fn test_query_rejects_structured() {
        let pattern = PathPattern::parse("/");
        let err = classify(
            &pattern,
            &[ParamDescriptor::new("filter", DeclaredType::Structured).optional()],
        )
        .unwrap_err();
        assert_eq!(err.kind, ParamKind::Query);
    }

    #[test]
    fn test_body_types() {
        let pattern = PathPattern::parse("/");
        assert!(classify(&pattern, &[string("raw").body()]).is_ok());
        let err = classify(
            &pattern,
            &[ParamDescriptor::new("n", DeclaredType::Int).body()],
        )
        .unwrap_err();
        assert_eq!(err.kind, ParamKind::Body);

        let err = classify(
            &pattern,
            &[ParamDescriptor::new("o", "object".parse().unwrap()).body()],
        )
        .unwrap_err();
        assert_eq!(err.declared, DeclaredType::Other("object".into()));
    }

    #[test]
    fn test_declared_type_from_str() {
        assert_eq!("int".parse::<DeclaredType>().unwrap(), DeclaredType::Int);
        assert_eq!(
            "array".parse::<DeclaredType>().unwrap(),
            DeclaredType::Structured
        );
        assert_eq!(
            "mixed".parse::<DeclaredType>().unwrap(),
            DeclaredType::Other("mixed".into())
        );
    }
}
