//! Factor hierarchy consumed by the front end
//!
//! The hierarchy is a tree of factor groups. Nodes flagged `ApplicableX` or
//! `ApplicableY` are plottable on that axis. Slider ranges chosen by the
//! engine are written back into the matching node; every other key of a node
//! is carried through untouched.

use neat_core::{Decimal, Error, Result};
use neat_range::SliderRangeSpec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node of the factor hierarchy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FactorNode {
    pub id: String,
    #[serde(default)]
    pub applicable_x: bool,
    #[serde(default)]
    pub applicable_y: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FactorNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_range_from: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_range_to: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_step: Option<Decimal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FactorNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_axes(mut self, x: bool, y: bool) -> Self {
        self.applicable_x = x;
        self.applicable_y = y;
        self
    }

    pub fn with_children(mut self, children: Vec<FactorNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Store a slider range on this node
    pub fn set_slider(&mut self, spec: &SliderRangeSpec) {
        self.value_range_from = Some(spec.floor);
        self.value_range_to = Some(spec.ceiling);
        self.slider_step = Some(spec.step);
    }
}

/// Ordered forest of [`FactorNode`]s
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorHierarchy {
    roots: Vec<FactorNode>,
}

impl FactorHierarchy {
    pub fn new(roots: Vec<FactorNode>) -> Self {
        Self { roots }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidInput(format!("factor hierarchy: {e}")))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Other(e.into()))
    }

    pub fn roots(&self) -> &[FactorNode] {
        &self.roots
    }

    /// All nodes, depth-first in document order
    pub fn nodes(&self) -> Vec<&FactorNode> {
        let mut out = Vec::new();
        walk(&self.roots, &mut out);
        out
    }

    /// Ids of nodes plottable on the X axis
    pub fn x_factors(&self) -> Vec<&str> {
        self.nodes()
            .into_iter()
            .filter(|n| n.applicable_x)
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Ids of nodes plottable on the Y axis
    pub fn y_factors(&self) -> Vec<&str> {
        self.nodes()
            .into_iter()
            .filter(|n| n.applicable_y)
            .map(|n| n.id.as_str())
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&FactorNode> {
        self.nodes().into_iter().find(|n| n.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut FactorNode> {
        find_mut(&mut self.roots, id)
    }

    /// Write a slider range into the node with the given id
    pub fn apply_slider(&mut self, id: &str, spec: &SliderRangeSpec) -> Result<()> {
        let node = self
            .find_mut(id)
            .ok_or_else(|| Error::UnknownFactor(id.to_string()))?;
        node.set_slider(spec);
        Ok(())
    }
}

fn walk<'a>(nodes: &'a [FactorNode], out: &mut Vec<&'a FactorNode>) {
    for node in nodes {
        out.push(node);
        walk(&node.children, out);
    }
}

fn find_mut<'a>(nodes: &'a mut [FactorNode], id: &str) -> Option<&'a mut FactorNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}
