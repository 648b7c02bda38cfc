//! Composition documents read by the `compose` command.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::{fmt, result};

use anyhow::{Context, Result};
use linkage_compose::{ComparisonLevel, CompositionNode};
use linkage_model::SqlDialect;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, info_span};

/// A single composition node or a list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum CompositionDocument {
    Many(Vec<CompositionNode>),
    One(CompositionNode),
}

impl<'de> Deserialize<'de> for CompositionDocument {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = CompositionDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a composition node or a list of nodes")
            }

            fn visit_seq<A>(self, seq: A) -> result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                Vec::deserialize(SeqAccessDeserializer::new(seq)).map(CompositionDocument::Many)
            }

            fn visit_map<A>(self, map: A) -> result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                CompositionNode::deserialize(MapAccessDeserializer::new(map))
                    .map(CompositionDocument::One)
            }
        }

        deserializer.deserialize_any(DocumentVisitor)
    }
}

/// Composed levels, shaped like the document they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComposedLevels {
    Many(Vec<ComparisonLevel>),
    One(ComparisonLevel),
}

impl CompositionDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parse composition document")
    }

    /// Reads a document from `path`, or from stdin when `path` is `-`.
    pub fn read(path: &Path) -> Result<Self> {
        let text = if path.as_os_str() == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("read composition document from stdin")?;
            buffer
        } else {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        };
        Self::from_json(&text)
    }

    pub fn nodes(&self) -> &[CompositionNode] {
        match self {
            Self::Many(nodes) => nodes,
            Self::One(node) => std::slice::from_ref(node),
        }
    }

    /// Evaluates every node, binding raw levels to `dialect` when given.
    pub fn evaluate(&self, dialect: Option<&SqlDialect>) -> Result<ComposedLevels> {
        let mut levels = Vec::with_capacity(self.nodes().len());
        for (index, node) in self.nodes().iter().enumerate() {
            let span = info_span!("compose", index, depth = node.depth());
            let level = span
                .in_scope(|| node.evaluate(dialect))
                .with_context(|| format!("composition #{}", index + 1))?;
            debug!(index, label = level.label_for_charts(), "composition evaluated");
            levels.push(level);
        }
        info!(count = levels.len(), "composed comparison levels");

        Ok(match self {
            Self::Many(_) => ComposedLevels::Many(levels),
            Self::One(_) => ComposedLevels::One(levels.remove(0)),
        })
    }
}

impl ComposedLevels {
    pub fn levels(&self) -> &[ComparisonLevel] {
        match self {
            Self::Many(levels) => levels,
            Self::One(level) => std::slice::from_ref(level),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize composed levels")
    }
}
