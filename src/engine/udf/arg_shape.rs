use std::collections::BTreeMap;

use crate::engine::put::ValueDomain;

/// Primitive categories the host evaluator can hand us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Binary,
}

impl PrimitiveKind {
    /// The column-value domain this kind widens into, if it is numeric.
    pub fn domain(&self) -> Option<ValueDomain> {
        match self {
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int | PrimitiveKind::Long => {
                Some(ValueDomain::Integer)
            }
            PrimitiveKind::Float | PrimitiveKind::Double => Some(ValueDomain::Float),
            PrimitiveKind::Boolean | PrimitiveKind::String | PrimitiveKind::Binary => None,
        }
    }
}

/// Plan-time description of one positional argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgShape {
    /// `constant` is set when the map is a literal known at plan time.
    Map {
        constant: Option<BTreeMap<String, String>>,
    },
    Primitive(PrimitiveKind),
    List(Box<ArgShape>),
}

impl ArgShape {
    pub fn constant_map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        ArgShape::Map {
            constant: Some(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn string() -> Self {
        ArgShape::Primitive(PrimitiveKind::String)
    }

    pub fn list_of(kind: PrimitiveKind) -> Self {
        ArgShape::List(Box::new(ArgShape::Primitive(kind)))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ArgShape::Primitive(PrimitiveKind::String))
    }

    pub fn element(&self) -> Option<&ArgShape> {
        match self {
            ArgShape::List(element) => Some(element),
            _ => None,
        }
    }

    pub fn domain(&self) -> Option<ValueDomain> {
        match self {
            ArgShape::Primitive(kind) => kind.domain(),
            _ => None,
        }
    }
}
