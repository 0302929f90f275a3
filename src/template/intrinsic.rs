//! Intrinsic expressions for values that are only known at deploy time.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Platform pseudo parameters referenced by ARN construction.
pub mod pseudo {
    pub const PARTITION: &str = "AWS::Partition";
    pub const REGION: &str = "AWS::Region";
    pub const ACCOUNT_ID: &str = "AWS::AccountId";
}

/// A template value: either a plain string or a deferred reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A plain string value.
    Literal(String),
    /// `{"Ref": name}` to a resource or parameter.
    Ref(String),
    /// `{"Fn::GetAtt": [logical_id, attribute]}`.
    GetAtt {
        logical_id: String,
        attribute: String,
    },
    /// `{"Fn::Join": [separator, [parts...]]}`.
    Join { separator: String, parts: Vec<Expr> },
}

impl Expr {
    pub fn literal(value: impl Into<String>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Expr::Ref(name.into())
    }

    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Expr::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }

    /// Build a join, collapsing adjacent literal parts.
    ///
    /// When every part is a literal the result is a single `Literal`.
    pub fn join(separator: impl Into<String>, parts: impl IntoIterator<Item = Expr>) -> Self {
        let separator = separator.into();
        let mut merged: Vec<Expr> = Vec::new();

        for part in parts {
            if let (Some(Expr::Literal(prev)), Expr::Literal(next)) = (merged.last_mut(), &part) {
                prev.push_str(&separator);
                prev.push_str(next);
                continue;
            }
            merged.push(part);
        }

        match merged.as_slice() {
            [] => Expr::Literal(String::new()),
            [Expr::Literal(only)] => Expr::Literal(only.clone()),
            _ => Expr::Join {
                separator,
                parts: merged,
            },
        }
    }

    /// Returns the string value when the expression is fully resolved.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Expr::Literal(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::literal(value)
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Literal(value)
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expr::Literal(value) => serializer.serialize_str(value),
            Expr::Ref(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Ref", name)?;
                map.end()
            }
            Expr::GetAtt {
                logical_id,
                attribute,
            } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::GetAtt", &[logical_id, attribute])?;
                map.end()
            }
            Expr::Join { separator, parts } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::Join", &(separator, parts))?;
                map.end()
            }
        }
    }
}
