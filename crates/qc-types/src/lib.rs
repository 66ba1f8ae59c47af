//! API Types
//!
//! Types matching the graph-database REST API responses consumed by the
//! QC dashboard, plus the method and result-kind tags the dispatcher
//! branches on.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

/// A flat JSON object — the unit the dashboard binds to.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Label name to its ordered property-name list, populated once from the
/// `labels` response.
pub type LabelProperties = HashMap<String, Vec<String>>;

// =============================================================================
// GRAPH NODE
// =============================================================================

/// A graph node as returned by `nodes_of_label`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub properties: Row,
}

impl Node {
    /// Merge the node's id and label into its property map under the
    /// `node_id` / `node_label` keys and return the merged map.
    pub fn flatten(mut self) -> Row {
        self.properties
            .insert("node_id".to_string(), serde_json::Value::from(self.id));
        self.properties
            .insert("node_label".to_string(), serde_json::Value::from(self.label));
        self.properties
    }
}

// =============================================================================
// DISPATCHABLE METHODS
// =============================================================================

/// The QC REST methods the dashboard dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QcMethod {
    Labels,
    NodesOfLabel,
    NodeById,
    DonorQc,
    SampleDiscordance,
}

/// A method name the dispatcher does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid qc method: {0}")]
pub struct InvalidMethod(pub String);

impl QcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            QcMethod::Labels => "labels",
            QcMethod::NodesOfLabel => "nodes_of_label",
            QcMethod::NodeById => "node_by_id",
            QcMethod::DonorQc => "donor_qc",
            QcMethod::SampleDiscordance => "sample_discordance",
        }
    }

    pub fn all() -> &'static [QcMethod] {
        &[
            QcMethod::Labels,
            QcMethod::NodesOfLabel,
            QcMethod::NodeById,
            QcMethod::DonorQc,
            QcMethod::SampleDiscordance,
        ]
    }
}

impl FromStr for QcMethod {
    type Err = InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "labels" => Ok(QcMethod::Labels),
            "nodes_of_label" => Ok(QcMethod::NodesOfLabel),
            "node_by_id" => Ok(QcMethod::NodeById),
            "donor_qc" => Ok(QcMethod::DonorQc),
            "sample_discordance" => Ok(QcMethod::SampleDiscordance),
            other => Err(InvalidMethod(other.to_string())),
        }
    }
}

// =============================================================================
// DONOR QC RESULT KINDS
// =============================================================================

/// The `type` tag carried by each donor-QC result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QcResultKind {
    Gender,
    Discordance,
    CopyNumberSummary,
    AberrantRegions,
    AberrantPolysomy,
    CopyNumberPlot,
}

impl QcResultKind {
    /// Parse a record's `type` tag. Unknown tags return `None`; the
    /// dispatcher drops those records silently.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "gender" => Some(QcResultKind::Gender),
            "discordance" => Some(QcResultKind::Discordance),
            "copy_number_summary" => Some(QcResultKind::CopyNumberSummary),
            "aberrant_regions" => Some(QcResultKind::AberrantRegions),
            "aberrant_polysomy" => Some(QcResultKind::AberrantPolysomy),
            "copy_number_plot" => Some(QcResultKind::CopyNumberPlot),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QcResultKind::Gender => "gender",
            QcResultKind::Discordance => "discordance",
            QcResultKind::CopyNumberSummary => "copy_number_summary",
            QcResultKind::AberrantRegions => "aberrant_regions",
            QcResultKind::AberrantPolysomy => "aberrant_polysomy",
            QcResultKind::CopyNumberPlot => "copy_number_plot",
        }
    }
}
