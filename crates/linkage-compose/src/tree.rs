//! Composition documents.
//!
//! A composition can be described as a nested mapping and evaluated bottom-up:
//!
//! ```json
//! {
//!   "and": [
//!     {"sql_condition": "dob_l = dob_r"},
//!     {"not": {"sql_condition": "substr(dob_l, -5) = '01-01'"}}
//!   ],
//!   "label_for_charts": "Exact match, not 1st Jan"
//! }
//! ```

use std::{fmt, slice};

use linkage_model::{ComparisonLevel, LevelSettings, SqlDialect};
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    ComposeError, ComposeOptions, LogicalOperator, NegateOptions, Result, and_, not_, or_,
};

/// One node of a composition document.
///
/// Deserialization picks the node kind from its `and`, `or`, `not` or
/// `sql_condition` key, so errors inside a child are reported as is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompositionNode {
    And(AndNode),
    Or(OrNode),
    Not(NotNode),
    Level(LevelSettings),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AndNode {
    pub and: Vec<CompositionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_for_charts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_null_level: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrNode {
    pub or: Vec<CompositionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_for_charts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_null_level: Option<bool>,
}

/// A NOT node. It accepts no `is_null_level` override.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotNode {
    pub not: NotOperand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_for_charts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m_probability: Option<f64>,
}

/// Operand of a NOT node: a single node, or a list that must hold exactly one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NotOperand {
    Many(Vec<CompositionNode>),
    One(Box<CompositionNode>),
}

/// Decode shape shared by every node kind.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeWire {
    #[serde(default)]
    and: Option<Vec<CompositionNode>>,
    #[serde(default)]
    or: Option<Vec<CompositionNode>>,
    #[serde(default)]
    not: Option<NotOperand>,
    #[serde(default)]
    sql_condition: Option<String>,
    #[serde(default)]
    label_for_charts: Option<String>,
    #[serde(default)]
    m_probability: Option<f64>,
    #[serde(default)]
    is_null_level: Option<bool>,
}

impl NodeWire {
    fn into_node(self) -> std::result::Result<CompositionNode, &'static str> {
        let label_for_charts = self.label_for_charts;
        let m_probability = self.m_probability;
        let is_null_level = self.is_null_level;
        match (self.and, self.or, self.not, self.sql_condition) {
            (Some(and), None, None, None) => Ok(CompositionNode::And(AndNode {
                and,
                label_for_charts,
                m_probability,
                is_null_level,
            })),
            (None, Some(or), None, None) => Ok(CompositionNode::Or(OrNode {
                or,
                label_for_charts,
                m_probability,
                is_null_level,
            })),
            (None, None, Some(not), None) => {
                if is_null_level.is_some() {
                    return Err("a `not` node does not accept `is_null_level`");
                }
                Ok(CompositionNode::Not(NotNode {
                    not,
                    label_for_charts,
                    m_probability,
                }))
            }
            (None, None, None, Some(sql_condition)) => Ok(CompositionNode::Level(LevelSettings {
                sql_condition,
                label_for_charts,
                is_null_level,
                m_probability,
            })),
            (None, None, None, None) => {
                Err("expected one of `and`, `or`, `not` or `sql_condition`")
            }
            _ => Err("a node takes only one of `and`, `or`, `not` or `sql_condition`"),
        }
    }
}

impl<'de> Deserialize<'de> for CompositionNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = NodeWire::deserialize(deserializer)?;
        wire.into_node().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for NotOperand {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OperandVisitor;

        impl<'de> Visitor<'de> for OperandVisitor {
            type Value = NotOperand;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a composition node or a list of nodes")
            }

            fn visit_seq<A>(self, seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                Vec::deserialize(SeqAccessDeserializer::new(seq)).map(NotOperand::Many)
            }

            fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                CompositionNode::deserialize(MapAccessDeserializer::new(map))
                    .map(|node| NotOperand::One(Box::new(node)))
            }
        }

        deserializer.deserialize_any(OperandVisitor)
    }
}

impl NotOperand {
    fn as_slice(&self) -> &[CompositionNode] {
        match self {
            Self::Many(nodes) => nodes,
            Self::One(node) => slice::from_ref(node.as_ref()),
        }
    }
}

impl CompositionNode {
    pub fn level(settings: LevelSettings) -> Self {
        Self::Level(settings)
    }

    pub fn and(operands: Vec<Self>, options: ComposeOptions) -> Self {
        Self::And(AndNode {
            and: operands,
            label_for_charts: options.label_for_charts,
            m_probability: options.m_probability,
            is_null_level: options.is_null_level,
        })
    }

    pub fn or(operands: Vec<Self>, options: ComposeOptions) -> Self {
        Self::Or(OrNode {
            or: operands,
            label_for_charts: options.label_for_charts,
            m_probability: options.m_probability,
            is_null_level: options.is_null_level,
        })
    }

    pub fn not(operand: Self, options: NegateOptions) -> Self {
        Self::Not(NotNode {
            not: NotOperand::One(Box::new(operand)),
            label_for_charts: options.label_for_charts,
            m_probability: options.m_probability,
        })
    }

    /// Evaluates the tree into a single comparison level.
    ///
    /// Leaf mappings are bound to `default_dialect` when one is given.
    pub fn evaluate(&self, default_dialect: Option<&SqlDialect>) -> Result<ComparisonLevel> {
        match self {
            Self::Level(settings) => {
                ComparisonLevel::new(settings.clone(), default_dialect.cloned())
                    .map_err(ComposeError::from)
            }
            Self::And(node) => and_(
                evaluate_all(&node.and, default_dialect)?,
                ComposeOptions {
                    label_for_charts: node.label_for_charts.clone(),
                    m_probability: node.m_probability,
                    is_null_level: node.is_null_level,
                },
            ),
            Self::Or(node) => or_(
                evaluate_all(&node.or, default_dialect)?,
                ComposeOptions {
                    label_for_charts: node.label_for_charts.clone(),
                    m_probability: node.m_probability,
                    is_null_level: node.is_null_level,
                },
            ),
            Self::Not(node) => {
                let [operand] = node.not.as_slice() else {
                    return Err(ComposeError::Arity {
                        operator: LogicalOperator::Not,
                        expected: 1,
                        actual: node.not.as_slice().len(),
                    });
                };
                not_(
                    operand.evaluate(default_dialect)?,
                    NegateOptions {
                        label_for_charts: node.label_for_charts.clone(),
                        m_probability: node.m_probability,
                    },
                )
            }
        }
    }

    /// Nesting depth; a bare level has depth 1.
    pub fn depth(&self) -> usize {
        let children: &[Self] = match self {
            Self::Level(_) => &[],
            Self::And(node) => &node.and,
            Self::Or(node) => &node.or,
            Self::Not(node) => node.not.as_slice(),
        };
        1 + children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

fn evaluate_all(
    nodes: &[CompositionNode],
    default_dialect: Option<&SqlDialect>,
) -> Result<Vec<ComparisonLevel>> {
    nodes
        .iter()
        .map(|node| node.evaluate(default_dialect))
        .collect()
}
