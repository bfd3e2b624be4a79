//! Typed positional parameters
//!
//! A [`Param`] always carries its kind, so a typed null (`AddIntegerParameter
//! value=null`) stays distinguishable from a parameter that was never added.

use core::fmt;

/// The kinds of value a step can bind to a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    Double,
    Long,
}

impl ParamKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParamKind::String => "String",
            ParamKind::Integer => "Integer",
            ParamKind::Boolean => "Boolean",
            ParamKind::Double => "Double",
            ParamKind::Long => "Long",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positional parameter: a kind plus an optional payload
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    String(Option<String>),
    Integer(Option<i32>),
    Boolean(Option<bool>),
    Double(Option<f64>),
    Long(Option<i64>),
}

impl Param {
    /// A typed null of the given kind
    #[must_use]
    pub const fn null(kind: ParamKind) -> Self {
        match kind {
            ParamKind::String => Param::String(None),
            ParamKind::Integer => Param::Integer(None),
            ParamKind::Boolean => Param::Boolean(None),
            ParamKind::Double => Param::Double(None),
            ParamKind::Long => Param::Long(None),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        match self {
            Param::String(_) => ParamKind::String,
            Param::Integer(_) => ParamKind::Integer,
            Param::Boolean(_) => ParamKind::Boolean,
            Param::Double(_) => ParamKind::Double,
            Param::Long(_) => ParamKind::Long,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(
            self,
            Param::String(None)
                | Param::Integer(None)
                | Param::Boolean(None)
                | Param::Double(None)
                | Param::Long(None)
        )
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::String(Some(s)) => write!(f, "'{s}'"),
            Param::Integer(Some(i)) => write!(f, "{i}"),
            Param::Boolean(Some(b)) => write!(f, "{b}"),
            Param::Double(Some(d)) => write!(f, "{d}"),
            Param::Long(Some(l)) => write!(f, "{l}"),
            _ => f.write_str("NULL"),
        }
    }
}

macro_rules! impl_param_from {
    ($($ty:ty => $variant:ident),* $(,)?) => { $(
        impl From<$ty> for Param {
            fn from(value: $ty) -> Self {
                Param::$variant(Some(value.into()))
            }
        }

        impl From<Option<$ty>> for Param {
            fn from(value: Option<$ty>) -> Self {
                Param::$variant(value.map(Into::into))
            }
        }
    )* };
}

impl_param_from!(
    String => String,
    &str => String,
    i32 => Integer,
    bool => Boolean,
    f64 => Double,
    i64 => Long,
);
