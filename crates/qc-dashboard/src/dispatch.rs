//! Method Dispatch
//!
//! One REST call, one reshaping branch, one state update. The transport
//! reports its own failures; the only error this module produces itself
//! is the unrecognised-method entry.

use std::sync::Arc;

use serde_json::{json, Value};

use qc_client::QcRest;
use qc_types::{Node, QcMethod, QcResultKind, Row};

use crate::state::{DashboardState, NodeTarget, QcUpdate};

/// Service namespace the QC pages call under.
pub const QC_DOMAIN: &str = "qc";

/// Per-call routing flags the page supplies alongside the method args.
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Merge node id/label into each property map before binding.
    pub flatten: bool,
    /// Which node list receives `nodes_of_label` results.
    pub target: NodeTarget,
    /// Property the caller will sort received nodes by. Passed through to
    /// the result untouched; sorting is the caller's contract.
    pub sort_property: Option<String>,
}

pub struct Dispatcher {
    rest: Arc<dyn QcRest>,
}

impl Dispatcher {
    pub fn new(rest: Arc<dyn QcRest>) -> Self {
        Self { rest }
    }

    /// Dispatch `method` with `args`, reshaping the response into `state`.
    ///
    /// Clears the loading and error lists up front. An unrecognised method
    /// pushes `invalid qc method: ...` onto the error list and touches
    /// nothing else; a transport failure pushes its display string.
    pub async fn dispatch(
        &self,
        method: &str,
        args: Value,
        opts: DispatchOptions,
        state: &mut DashboardState,
    ) {
        state.loading.remove_all();
        state.errors.remove_all();

        let method: QcMethod = match method.parse() {
            Ok(method) => method,
            Err(err) => {
                state.errors.push(err.to_string());
                return;
            }
        };
        tracing::debug!(method = method.as_str(), "qc dispatch");

        let Some(data) = self.call(method, &args, state).await else {
            return;
        };

        match method {
            QcMethod::Labels => match reshape_labels(&data) {
                Ok(update) => {
                    state.apply(update);
                    // The pages need the Group select populated next; same
                    // re-entrant clear-then-fetch the labels load always did.
                    state.loading.remove_all();
                    state.errors.remove_all();
                    let opts = DispatchOptions {
                        flatten: false,
                        target: NodeTarget::GroupNodes,
                        sort_property: Some("name".to_string()),
                    };
                    let args = json!({ "label": "Group" });
                    if let Some(data) = self.call(QcMethod::NodesOfLabel, &args, state).await {
                        apply_nodes(data, opts, state);
                    }
                }
                Err(err) => state.errors.push(err),
            },
            QcMethod::NodesOfLabel => apply_nodes(data, opts, state),
            QcMethod::NodeById => state.apply(QcUpdate::NodeDetail(data)),
            QcMethod::DonorQc => match reshape_donor_qc(data) {
                Ok(update) => state.apply(update),
                Err(err) => state.errors.push(err),
            },
            QcMethod::SampleDiscordance => match data {
                Value::Array(rows) => state.apply(QcUpdate::SampleDiscordance(rows)),
                _ => state
                    .errors
                    .push("decode: sample_discordance response is not an array".to_string()),
            },
        }
    }

    /// Issue one transport call, tracking it on the loading list. A failed
    /// call lands on the error list and returns `None`.
    async fn call(
        &self,
        method: QcMethod,
        args: &Value,
        state: &mut DashboardState,
    ) -> Option<Value> {
        state.loading.push(method.as_str().to_string());
        let result = self.rest.call(QC_DOMAIN, method.as_str(), args).await;
        state.loading.retain(|entry| entry != method.as_str());

        match result {
            Ok(data) => Some(data),
            Err(err) => {
                tracing::warn!(method = method.as_str(), %err, "qc call failed");
                state.errors.push(err.to_string());
                None
            }
        }
    }
}

fn apply_nodes(data: Value, opts: DispatchOptions, state: &mut DashboardState) {
    match reshape_nodes(data, opts.flatten) {
        Ok(nodes) => state.apply(QcUpdate::Nodes {
            target: opts.target,
            nodes,
            sort_property: opts.sort_property,
        }),
        Err(err) => state.errors.push(err),
    }
}

/// Reshape the `labels` response: record every label's property list and
/// sort the label names, leaving `Group` and `Study` out of the visible
/// list.
fn reshape_labels(data: &Value) -> Result<QcUpdate, String> {
    let map = data
        .as_object()
        .ok_or_else(|| "decode: labels response is not an object".to_string())?;

    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();

    let mut label_properties = qc_types::LabelProperties::new();
    let mut labels = Vec::new();
    for key in keys {
        let props: Vec<String> = serde_json::from_value(map[&key].clone())
            .map_err(|e| format!("decode: label {key}: {e}"))?;
        label_properties.insert(key.clone(), props);
        if key != "Group" && key != "Study" {
            labels.push(key);
        }
    }

    Ok(QcUpdate::Labels {
        labels,
        label_properties,
    })
}

/// Reshape `nodes_of_label`: flatten each node into its property map when
/// asked, otherwise pass the raw nodes through unchanged.
fn reshape_nodes(data: Value, flatten: bool) -> Result<Vec<Value>, String> {
    let Value::Array(raw) = data else {
        return Err("decode: nodes_of_label response is not an array".to_string());
    };
    if !flatten {
        return Ok(raw);
    }

    let mut rows = Vec::with_capacity(raw.len());
    for value in raw {
        let node: Node =
            serde_json::from_value(value).map_err(|e| format!("decode: node: {e}"))?;
        rows.push(Value::Object(node.flatten()));
    }
    Ok(rows)
}

/// Partition `donor_qc` records by their `type` tag. The tag is stripped
/// before bucketing; records with an unknown tag are dropped. Aberrant
/// polysomy paths (every field but `chr`) and the copy-number plot path are
/// rewritten into the `/file` URL namespace.
fn reshape_donor_qc(data: Value) -> Result<QcUpdate, String> {
    let Value::Array(records) = data else {
        return Err("decode: donor_qc response is not an array".to_string());
    };

    let mut gender = Vec::new();
    let mut discordance = Vec::new();
    let mut copy_number_summary = Vec::new();
    let mut aberrant_regions = Vec::new();
    let mut aberrant_polysomy = Vec::new();
    let mut copy_number_plot = None;

    for record in records {
        let Value::Object(mut record) = record else {
            return Err("decode: donor_qc record is not an object".to_string());
        };
        let tag = record.remove("type");
        let Some(kind) = tag
            .as_ref()
            .and_then(Value::as_str)
            .and_then(QcResultKind::parse)
        else {
            continue;
        };

        match kind {
            QcResultKind::Gender => gender.push(record),
            QcResultKind::Discordance => discordance.push(record),
            QcResultKind::CopyNumberSummary => copy_number_summary.push(record),
            QcResultKind::AberrantRegions => aberrant_regions.push(record),
            QcResultKind::AberrantPolysomy => {
                prefix_file_paths(&mut record);
                aberrant_polysomy.push(record);
            }
            QcResultKind::CopyNumberPlot => {
                // Last plot record wins.
                let plot = record
                    .get("plot")
                    .and_then(Value::as_str)
                    .ok_or_else(|| "decode: copy_number_plot record has no plot path".to_string())?;
                copy_number_plot = Some(format!("/file{plot}"));
            }
        }
    }

    Ok(QcUpdate::DonorQc {
        gender,
        discordance,
        copy_number_summary,
        aberrant_regions,
        aberrant_polysomy,
        copy_number_plot,
    })
}

/// Rewrite every string field except `chr` from a server-relative path into
/// the `/file` URL namespace.
fn prefix_file_paths(record: &mut Row) {
    for (key, value) in record.iter_mut() {
        if key == "chr" {
            continue;
        }
        if let Value::String(path) = value {
            *value = Value::String(format!("/file{path}"));
        }
    }
}
