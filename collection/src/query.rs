//! Where-clause resolution: the operator table and argument dispatch.
//!
//! The accepted query shapes are explicit [`WhereClause`] variants, resolved
//! once into a single predicate before filtering begins. Callers assembling
//! queries from untyped input go through [`WhereClause::parse`].

use crate::error::{Error, Result};
use crate::record::Record;
use crate::value::loose_eq;
use serde_json::Value;

/// Comparison operators accepted by where clauses.
///
/// This is the process-wide operator table: a fixed set of symbols mapped to
/// two-argument predicates, shared immutably by every collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Loose equality (`=`)
    Eq,
    /// Loose inequality (`!=`)
    Ne,
}

impl Operator {
    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            _ => None,
        }
    }

    /// The symbol this operator is known by.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
        }
    }

    /// Apply the operator to a field value and a comparison value.
    ///
    /// An absent field compares as null, mirroring the fail-soft field
    /// access of the record model.
    pub fn matches(&self, field: Option<&Value>, value: &Value) -> bool {
        let field = field.unwrap_or(&Value::Null);
        match self {
            Operator::Eq => loose_eq(field, value),
            Operator::Ne => !loose_eq(field, value),
        }
    }
}

/// One accepted shape of a where clause.
pub enum WhereClause<'a, T> {
    /// An arbitrary predicate over stored items, used directly.
    Predicate(Box<dyn FnMut(&T) -> bool + 'a>),
    /// Compare an attribute against a value with the default `=` operator.
    Attribute(String, Value),
    /// Compare an attribute against a value with an explicit operator symbol.
    AttributeOp(String, String, Value),
}

impl<'a, T: Record> WhereClause<'a, T> {
    /// Clause from an arbitrary predicate.
    pub fn predicate(f: impl FnMut(&T) -> bool + 'a) -> Self {
        WhereClause::Predicate(Box::new(f))
    }

    /// Clause comparing `attribute` against `value` with `=`.
    pub fn attribute(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        WhereClause::Attribute(attribute.into(), value.into())
    }

    /// Clause comparing `attribute` against `value` with the named operator.
    pub fn attribute_op(
        attribute: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        WhereClause::AttributeOp(attribute.into(), operator.into(), value.into())
    }

    /// Build a clause from a dynamic argument list.
    ///
    /// For callers that assemble queries from untyped input: two arguments
    /// are attribute and value, three or more are attribute, operator symbol
    /// and value. An empty list is a missing parameter; so is a single
    /// value, since a predicate cannot be expressed as plain data.
    pub fn parse(args: &[Value]) -> Result<Self> {
        match args {
            [] => Err(Error::MissingParameter(
                "at least one parameter must be passed".to_string(),
            )),
            [_] => Err(Error::MissingParameter(
                "a comparison needs an attribute and a value".to_string(),
            )),
            [attribute, value] => Ok(Self::attribute(field_name(attribute), value.clone())),
            [attribute, operator, value, ..] => Ok(Self::attribute_op(
                field_name(attribute),
                field_name(operator),
                value.clone(),
            )),
        }
    }

    /// Resolve the clause into a single predicate.
    ///
    /// Unknown operator symbols surface here as [`Error::InvalidOperator`].
    pub(crate) fn into_predicate(self) -> Result<Box<dyn FnMut(&T) -> bool + 'a>> {
        match self {
            WhereClause::Predicate(f) => Ok(f),
            WhereClause::Attribute(attribute, value) => Ok(Box::new(move |item: &T| {
                Operator::Eq.matches(item.field(&attribute).as_ref(), &value)
            })),
            WhereClause::AttributeOp(attribute, symbol, value) => {
                let operator =
                    Operator::from_symbol(&symbol).ok_or(Error::InvalidOperator(symbol))?;
                Ok(Box::new(move |item: &T| {
                    operator.matches(item.field(&attribute).as_ref(), &value)
                }))
            }
        }
    }
}

/// Field names arriving as dynamic arguments are usually strings; anything
/// else keeps its JSON rendering so lookups still fail soft.
fn field_name(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
