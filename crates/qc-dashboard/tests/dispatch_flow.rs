//! End-to-end dispatch flows against the in-process transport double.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use qc_client::InProcessRest;
use qc_dashboard::{DashboardState, DispatchOptions, Dispatcher, NodeTarget};
use qc_types::Row;

fn dispatcher_with(rest: InProcessRest) -> (Dispatcher, Arc<InProcessRest>) {
    let rest = Arc::new(rest);
    (Dispatcher::new(rest.clone()), rest)
}

fn row(value: Value) -> Row {
    value.as_object().unwrap().clone()
}

#[tokio::test]
async fn labels_populates_stores_and_fetches_group_nodes() {
    let rest = InProcessRest::new()
        .with_response(
            "labels",
            json!({
                "Donor": ["id", "gender"],
                "Sample": ["name"],
                "Study": ["accession"],
                "Group": ["name"],
                "Lane": ["lane"],
            }),
        )
        .with_response(
            "nodes_of_label",
            json!([{"id": 7, "label": "Group", "properties": {"name": "g1"}}]),
        );
    let (dispatcher, rest) = dispatcher_with(rest);
    let mut state = DashboardState::default();

    dispatcher
        .dispatch("labels", json!({}), DispatchOptions::default(), &mut state)
        .await;

    assert_eq!(state.labels.items(), ["Donor", "Lane", "Sample"]);
    assert_eq!(state.view_labels.items(), ["Donor", "Sample"]);
    assert_eq!(state.study_properties.items(), ["accession"]);
    assert_eq!(state.donor_properties.items(), ["id", "gender"]);
    assert_eq!(state.sample_properties.items(), ["name"]);
    assert_eq!(
        state.group_nodes.items(),
        [json!({"id": 7, "label": "Group", "properties": {"name": "g1"}})]
    );
    assert!(state.errors.is_empty());
    assert!(state.loading.is_empty());

    let calls = rest.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "labels");
    assert_eq!(
        calls[1],
        ("nodes_of_label".to_string(), json!({"label": "Group"}))
    );
}

#[tokio::test]
async fn nodes_of_label_flattens_when_asked() {
    let rest = InProcessRest::new().with_response(
        "nodes_of_label",
        json!([{"id": 1, "label": "X", "properties": {"p": 1}}]),
    );
    let (dispatcher, _) = dispatcher_with(rest);
    let mut state = DashboardState::default();

    let opts = DispatchOptions {
        flatten: true,
        target: NodeTarget::Nodes,
        sort_property: None,
    };
    dispatcher
        .dispatch("nodes_of_label", json!({"label": "X"}), opts, &mut state)
        .await;

    assert_eq!(
        state.nodes.items(),
        [json!({"p": 1, "node_id": 1, "node_label": "X"})]
    );
}

#[tokio::test]
async fn nodes_of_label_passes_raw_nodes_through() {
    let body = json!([{"id": 1, "label": "X", "properties": {"p": 1}}]);
    let rest = InProcessRest::new().with_response("nodes_of_label", body.clone());
    let (dispatcher, _) = dispatcher_with(rest);
    let mut state = DashboardState::default();

    dispatcher
        .dispatch(
            "nodes_of_label",
            json!({"label": "X"}),
            DispatchOptions::default(),
            &mut state,
        )
        .await;

    assert_eq!(Value::Array(state.nodes.items().to_vec()), body);
}

#[tokio::test]
async fn node_by_id_assigns_the_raw_response() {
    let body = json!({"id": 3, "label": "Donor", "properties": {"id": "d3"}});
    let rest = InProcessRest::new().with_response("node_by_id", body.clone());
    let (dispatcher, _) = dispatcher_with(rest);
    let mut state = DashboardState::default();

    dispatcher
        .dispatch(
            "node_by_id",
            json!({"id": 3}),
            DispatchOptions::default(),
            &mut state,
        )
        .await;

    assert_eq!(state.node_detail.get(), Some(&body));
}

#[tokio::test]
async fn donor_qc_partitions_and_rewrites_paths() {
    let rest = InProcessRest::new().with_response(
        "donor_qc",
        json!([
            {"type": "gender", "val": 1},
            {"type": "copy_number_plot", "plot": "/a/b"},
            {"type": "aberrant_polysomy", "chr": "1", "val": "/x"},
            {"type": "discordance", "pair": "s1:s2"},
            {"type": "copy_number_summary", "mean": 2.0},
            {"type": "aberrant_regions", "chr": "3", "graph": "/g"},
        ]),
    );
    let (dispatcher, _) = dispatcher_with(rest);
    let mut state = DashboardState::default();

    dispatcher
        .dispatch(
            "donor_qc",
            json!({"donor": "d1"}),
            DispatchOptions::default(),
            &mut state,
        )
        .await;

    assert_eq!(state.donor_gender.items(), [row(json!({"val": 1}))]);
    assert_eq!(
        state.donor_internal_discordance.items(),
        [row(json!({"pair": "s1:s2"}))]
    );
    assert_eq!(
        state.donor_copy_number_summary.items(),
        [row(json!({"mean": 2.0}))]
    );
    assert_eq!(
        state.donor_aberrant_regions.items(),
        [row(json!({"chr": "3", "graph": "/g"}))]
    );
    assert_eq!(
        state.donor_aberrant_polysomy.items(),
        [row(json!({"chr": "1", "val": "/file/x"}))]
    );
    assert_eq!(state.donor_copy_number_plot.get().unwrap(), "/file/a/b");
}

#[tokio::test]
async fn refetching_donor_qc_replaces_previous_results() {
    let rest = InProcessRest::new().with_response(
        "donor_qc",
        json!([{"type": "gender", "val": 2}]),
    );
    let (dispatcher, _) = dispatcher_with(rest);
    let mut state = DashboardState::default();
    state.donor_copy_number_plot.set("/file/stale".to_string());
    state.donor_gender.push(row(json!({"val": 1})));

    dispatcher
        .dispatch(
            "donor_qc",
            json!({"donor": "d1"}),
            DispatchOptions::default(),
            &mut state,
        )
        .await;

    assert_eq!(state.donor_gender.items(), [row(json!({"val": 2}))]);
    assert_eq!(state.donor_copy_number_plot.get(), None);
}

#[tokio::test]
async fn sample_discordance_is_copied_verbatim() {
    let body = json!([{"sample": "s1", "cns": 20}, {"sample": "s2", "cns": 18}]);
    let rest = InProcessRest::new().with_response("sample_discordance", body.clone());
    let (dispatcher, _) = dispatcher_with(rest);
    let mut state = DashboardState::default();

    dispatcher
        .dispatch(
            "sample_discordance",
            json!({"sample": "s1"}),
            DispatchOptions::default(),
            &mut state,
        )
        .await;

    assert_eq!(Value::Array(state.sample_discordance.items().to_vec()), body);
}

#[tokio::test]
async fn unknown_method_pushes_one_error_and_touches_nothing() {
    let (dispatcher, rest) = dispatcher_with(InProcessRest::new());
    let mut state = DashboardState::default();

    dispatcher
        .dispatch("bogus", json!({}), DispatchOptions::default(), &mut state)
        .await;

    assert_eq!(state.errors.items(), ["invalid qc method: bogus"]);
    assert!(state.labels.is_empty());
    assert!(state.loading.is_empty());
    assert_eq!(state.node_detail.get(), None);
    assert!(rest.calls().is_empty());
}

#[tokio::test]
async fn transport_failure_lands_on_the_error_list() {
    // No canned response registered — every call fails.
    let (dispatcher, _) = dispatcher_with(InProcessRest::new());
    let mut state = DashboardState::default();
    state.labels.push("Donor".to_string());

    dispatcher
        .dispatch("labels", json!({}), DispatchOptions::default(), &mut state)
        .await;

    assert_eq!(state.errors.len(), 1);
    assert!(state.errors.items()[0].contains("no canned response"));
    // Prior results stay untouched.
    assert_eq!(state.labels.items(), ["Donor"]);
    assert!(state.loading.is_empty());
}
