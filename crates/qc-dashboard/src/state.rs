//! Dashboard State
//!
//! Every output target the QC pages bind, plus the reducer that applies a
//! dispatch result. The dispatcher never writes result targets directly:
//! it builds a [`QcUpdate`] and hands it to [`DashboardState::apply`],
//! which clears and bulk-assigns.

use serde_json::{json, Value};

use qc_types::{LabelProperties, Row};

use crate::store::{ListStore, ValueStore};

/// Which node list receives `nodes_of_label` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeTarget {
    #[default]
    Nodes,
    GroupNodes,
}

/// The reshaped outcome of one successful dispatch.
#[derive(Debug, Clone)]
pub enum QcUpdate {
    Labels {
        /// Sorted label names, minus `Group` and `Study`.
        labels: Vec<String>,
        label_properties: LabelProperties,
    },
    Nodes {
        target: NodeTarget,
        nodes: Vec<Value>,
        /// Property the caller will sort the nodes by. Carried as data;
        /// nothing in this workspace applies it.
        sort_property: Option<String>,
    },
    NodeDetail(Value),
    DonorQc {
        gender: Vec<Row>,
        discordance: Vec<Row>,
        copy_number_summary: Vec<Row>,
        aberrant_regions: Vec<Row>,
        aberrant_polysomy: Vec<Row>,
        copy_number_plot: Option<String>,
    },
    SampleDiscordance(Vec<Value>),
}

/// Copy `label_properties[label]` into `target` in one bulk assignment.
/// The label must be present; asking for an absent one is a caller bug.
pub fn fill_properties(
    label_properties: &LabelProperties,
    label: &str,
    target: &mut ListStore<String>,
) {
    target.replace_all(label_properties[label].clone());
}

#[derive(Debug, Default)]
pub struct DashboardState {
    // ── Labels ────────────────────────────────────────
    pub labels: ListStore<String>,
    pub view_labels: ListStore<String>,
    pub label_properties: LabelProperties,
    pub study_properties: ListStore<String>,
    pub donor_properties: ListStore<String>,
    pub sample_properties: ListStore<String>,

    // ── Nodes ─────────────────────────────────────────
    pub nodes: ListStore<Value>,
    pub group_nodes: ListStore<Value>,
    pub node_detail: ValueStore<Value>,

    // ── Donor QC ──────────────────────────────────────
    pub donor_gender: ListStore<Row>,
    pub donor_internal_discordance: ListStore<Row>,
    pub donor_copy_number_summary: ListStore<Row>,
    pub donor_aberrant_regions: ListStore<Row>,
    pub donor_aberrant_polysomy: ListStore<Row>,
    pub donor_copy_number_plot: ValueStore<String>,

    // ── Sample QC ─────────────────────────────────────
    pub sample_discordance: ListStore<Value>,

    // ── Call progress ─────────────────────────────────
    pub loading: ListStore<String>,
    pub errors: ListStore<String>,
}

impl DashboardState {
    /// Apply one dispatch result. Targets a result does not name are left
    /// untouched.
    pub fn apply(&mut self, update: QcUpdate) {
        match update {
            QcUpdate::Labels {
                labels,
                label_properties,
            } => {
                self.labels.replace_all(labels);
                self.label_properties = label_properties;
                // Always appended, fixed order, independent of the sort.
                self.view_labels.push("Donor".to_string());
                self.view_labels.push("Sample".to_string());
                fill_properties(&self.label_properties, "Study", &mut self.study_properties);
                fill_properties(&self.label_properties, "Donor", &mut self.donor_properties);
                fill_properties(&self.label_properties, "Sample", &mut self.sample_properties);
            }
            QcUpdate::Nodes { target, nodes, .. } => match target {
                NodeTarget::Nodes => self.nodes.replace_all(nodes),
                NodeTarget::GroupNodes => self.group_nodes.replace_all(nodes),
            },
            QcUpdate::NodeDetail(value) => self.node_detail.set(value),
            QcUpdate::DonorQc {
                gender,
                discordance,
                copy_number_summary,
                aberrant_regions,
                aberrant_polysomy,
                copy_number_plot,
            } => {
                self.donor_gender.replace_all(gender);
                self.donor_internal_discordance.replace_all(discordance);
                self.donor_copy_number_summary
                    .replace_all(copy_number_summary);
                self.donor_aberrant_regions.replace_all(aberrant_regions);
                self.donor_aberrant_polysomy.replace_all(aberrant_polysomy);
                match copy_number_plot {
                    Some(plot) => self.donor_copy_number_plot.set(plot),
                    None => self.donor_copy_number_plot.clear(),
                }
            }
            QcUpdate::SampleDiscordance(rows) => {
                self.sample_discordance.replace_all(rows);
            }
        }
    }

    /// JSON view of every result target, for dumping and demos.
    pub fn snapshot(&self) -> Value {
        json!({
            "labels": self.labels.items(),
            "view_labels": self.view_labels.items(),
            "label_properties": self.label_properties,
            "study_properties": self.study_properties.items(),
            "donor_properties": self.donor_properties.items(),
            "sample_properties": self.sample_properties.items(),
            "nodes": self.nodes.items(),
            "group_nodes": self.group_nodes.items(),
            "node_detail": self.node_detail.get(),
            "donor_gender": self.donor_gender.items(),
            "donor_internal_discordance": self.donor_internal_discordance.items(),
            "donor_copy_number_summary": self.donor_copy_number_summary.items(),
            "donor_aberrant_regions": self.donor_aberrant_regions.items(),
            "donor_aberrant_polysomy": self.donor_aberrant_polysomy.items(),
            "donor_copy_number_plot": self.donor_copy_number_plot.get(),
            "sample_discordance": self.sample_discordance.items(),
            "errors": self.errors.items(),
        })
    }
}
