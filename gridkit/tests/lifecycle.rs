use std::sync::{Arc, Mutex};

use gridkit::interop::MetricsCalls;
use gridkit::prelude::*;
use webdom::{find_all, find_by_class, find_element};

#[derive(Debug, Clone)]
struct Row {
    id: u32,
    name: &'static str,
    active: bool,
}

fn rows() -> Vec<Row> {
    vec![
        Row { id: 1, name: "Ada", active: true },
        Row { id: 2, name: "Grace", active: false },
        Row { id: 3, name: "Margaret", active: true },
    ]
}

fn data(rows: &[Row]) -> GroupedOrderedData<Row> {
    vec![(
        "All".to_string(),
        rows.iter().map(|r| (r.id.to_string(), r.clone())).collect(),
    )]
}

fn columns() -> Vec<ColumnConfiguration<Row>> {
    vec![
        ColumnConfiguration::icon("Status", |r: &Row| {
            IconSpec::new(if r.active { "check" } else { "close" }).color(Color::rgb(0, 128, 0))
        })
        .width(10.0),
        ColumnConfiguration::text("Name", |r: &Row| r.name).width(90.0),
    ]
}

fn driver() -> (GridDriver<Row>, Arc<MonospaceMetrics>) {
    let metrics = Arc::new(MonospaceMetrics::new(8.0));
    (GridDriver::new(Grid::new(metrics.clone())), metrics)
}

fn modes(driver: &GridDriver<Row>) -> Vec<RenderMode> {
    driver.commits().iter().map(|c| c.mode).collect()
}

fn body_rows(root: &Element) -> Vec<&Element> {
    find_all(root, |el| el.tag == "tr" && el.key.is_some())
}

// ============================================================================
// Two-phase protocol
// ============================================================================

#[tokio::test]
async fn test_percent_grid_renders_placeholder_then_full() {
    let (mut driver, metrics) = driver();
    driver
        .deliver(GridParams::new(columns(), data(&rows())))
        .await
        .unwrap();

    assert_eq!(modes(&driver), vec![RenderMode::Placeholder, RenderMode::Full]);
    assert_eq!(driver.commits()[0].element, Element::div());
    assert_eq!(metrics.calls(), MetricsCalls::default());

    let root = driver.current().unwrap();
    let header_cells = find_all(root, |el| el.tag == "td" && el.has_class("mb-grid-backgroundcolor-header-background"));
    assert_eq!(header_cells.len(), 2);
    assert_eq!(header_cells[0].text_content(), "Status");

    let classes: Vec<_> = body_rows(root)
        .iter()
        .map(|tr| tr.class.clone().unwrap())
        .collect();
    assert_eq!(
        classes,
        vec![
            "mb-grid-tr mb-grid-backgroundcolor-row-even",
            "mb-grid-tr mb-grid-backgroundcolor-row-odd",
            "mb-grid-tr mb-grid-backgroundcolor-row-even",
        ]
    );

    let icon_cell = &find_element(root, "1").unwrap().child_elements()[0];
    assert!(icon_cell.style.as_deref().unwrap().ends_with(" color: #008000; text-align: center;"));
    assert_eq!(icon_cell.text_content(), "check");

    assert!(driver.html().contains(
        r#"<col style="width: 10% !important; max-width: 10% !important; min-width: 10% !important; ">"#
    ));
}

#[tokio::test]
async fn test_unchanged_parameters_skip_render() {
    let (mut driver, _) = driver();
    let columns = columns();

    driver
        .deliver(GridParams::new(columns.clone(), data(&rows())))
        .await
        .unwrap();
    assert_eq!(driver.take_commits().len(), 2);

    driver
        .deliver(GridParams::new(columns.clone(), data(&rows())))
        .await
        .unwrap();
    assert!(driver.commits().is_empty());
    assert!(!driver.grid().should_render().await);
    assert_eq!(driver.grid().render_mode().await, RenderMode::Skip);
}

#[tokio::test]
async fn test_changed_data_starts_new_cycle() {
    let (mut driver, _) = driver();
    let columns = columns();

    driver
        .deliver(GridParams::new(columns.clone(), data(&rows())))
        .await
        .unwrap();
    driver.take_commits();

    let mut changed = rows();
    changed[1].name = "Hopper";
    driver
        .deliver(GridParams::new(columns, data(&changed)))
        .await
        .unwrap();

    assert_eq!(modes(&driver), vec![RenderMode::Placeholder, RenderMode::Full]);
    assert!(driver.html().contains("Hopper"));
}

#[tokio::test]
async fn test_forced_render_while_skipping_emits_placeholder() {
    let (mut driver, _) = driver();
    let columns = columns();
    driver
        .deliver(GridParams::new(columns.clone(), data(&rows())))
        .await
        .unwrap();
    driver
        .deliver(GridParams::new(columns, data(&rows())))
        .await
        .unwrap();

    let forced = driver.grid().render().await.unwrap();
    assert_eq!(forced.mode, RenderMode::Skip);
    assert_eq!(forced.element, Element::div());
    assert!(!driver.grid().state().await.has_completed_full_render);
}

// ============================================================================
// Fit-to-data
// ============================================================================

#[tokio::test]
async fn test_fit_to_data_measures_once_then_renders_once() {
    let (mut driver, metrics) = driver();
    driver
        .deliver(GridParams::new(columns(), data(&rows())).measurement(Measurement::FitToData))
        .await
        .unwrap();

    assert_eq!(modes(&driver), vec![RenderMode::Placeholder, RenderMode::Full]);

    let calls = metrics.calls();
    assert_eq!(calls.scrollbar_width, 1);
    assert_eq!(
        calls.text_widths,
        vec!["mb-grid-header-td-measure", "mb-grid-body-td-measure"]
    );

    // "Status" = 6 cells, "Margaret" = 8 cells, 8px each, plus one pixel.
    let state = driver.grid().state().await;
    assert_eq!(state.column_widths, vec![49.0, 65.0]);
    assert_eq!(state.scrollbar_width, 0.0);
    assert!(!state.measurement_needed);

    assert!(driver.html().contains(
        r#"<col style="width: 65px !important; max-width: 65px !important; min-width: 65px !important; ">"#
    ));
}

#[tokio::test]
async fn test_fit_to_data_unchanged_delivery_does_not_remeasure() {
    let (mut driver, metrics) = driver();
    let columns = columns();
    for _ in 0..2 {
        driver
            .deliver(GridParams::new(columns.clone(), data(&rows())).measurement(Measurement::FitToData))
            .await
            .unwrap();
    }
    assert_eq!(metrics.calls().text_widths.len(), 2);
    assert_eq!(driver.commits().len(), 2);
}

// ============================================================================
// Selection
// ============================================================================

#[tokio::test]
async fn test_click_highlights_selected_row() {
    let clicked = Arc::new(Mutex::new(Vec::new()));
    let sink = clicked.clone();

    let (mut driver, _) = driver();
    driver
        .deliver(
            GridParams::new(columns(), data(&rows()))
                .highlight_selected_row(true)
                .on_row_click(move |key| sink.lock().unwrap().push(key.to_string())),
        )
        .await
        .unwrap();
    driver.take_commits();

    driver.click("2").await.unwrap();

    assert_eq!(*clicked.lock().unwrap(), vec!["2"]);
    assert_eq!(modes(&driver), vec![RenderMode::Placeholder, RenderMode::Full]);

    let root = driver.current().unwrap();
    let selected = find_by_class(root, "mb-grid-backgroundcolor-row-selected");
    let selected_rows: Vec<_> = selected.iter().filter(|el| el.tag == "tr").collect();
    assert_eq!(selected_rows.len(), 1);
    assert_eq!(selected_rows[0].id.as_deref(), Some("2"));

    let row_one = find_element(root, "1").unwrap();
    assert!(row_one.has_class("mb-grid-backgroundcolor-row-even"));
    assert_eq!(driver.grid().selected_key().await, "2");
}

#[tokio::test]
async fn test_click_without_highlight_only_notifies() {
    let clicked = Arc::new(Mutex::new(Vec::new()));
    let sink = clicked.clone();

    let (mut driver, _) = driver();
    driver
        .deliver(
            GridParams::new(columns(), data(&rows()))
                .on_row_click(move |key| sink.lock().unwrap().push(key.to_string())),
        )
        .await
        .unwrap();
    driver.take_commits();

    driver.click("3").await.unwrap();

    assert_eq!(*clicked.lock().unwrap(), vec!["3"]);
    assert!(driver.commits().is_empty());
    assert!(find_by_class(driver.current().unwrap(), "mb-grid-backgroundcolor-row-selected").is_empty());
}

#[tokio::test]
async fn test_click_before_parameters_fails() {
    let (driver, _) = driver();
    assert_eq!(
        driver.grid().click_row("1").await,
        Err(GridError::NotConfigured)
    );
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_missing_columns_is_fatal() {
    let (mut driver, _) = driver();
    let err = driver
        .deliver(GridParams::new(Vec::new(), data(&rows())))
        .await
        .unwrap_err();
    assert_eq!(err, GridError::MissingColumns);
    assert!(driver.commits().is_empty());
}

#[tokio::test]
async fn test_unknown_column_kind_is_fatal() {
    let (mut driver, _) = driver();
    let mut columns = columns();
    columns.push(ColumnConfiguration::new("Chart", ColumnType::Unknown("sparkline".to_string())));

    let err = driver
        .deliver(GridParams::new(columns, data(&rows())))
        .await
        .unwrap_err();
    assert!(matches!(err, GridError::UnknownColumnType { ref kind, .. } if kind == "sparkline"));
    assert!(driver.current().is_none());
}

#[tokio::test]
async fn test_duplicate_row_keys_fail_full_render() {
    let (mut driver, _) = driver();
    let err = driver
        .deliver(GridParams::new(columns(), data(&rows())).key_expression(|_: &Row| "same".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err, GridError::DuplicateRowKey("same".to_string()));
    assert_eq!(modes(&driver), vec![RenderMode::Placeholder]);
}

// ============================================================================
// Scrolling
// ============================================================================

#[tokio::test]
async fn test_scroll_operations_reach_interop() {
    let (mut driver, metrics) = driver();
    driver
        .deliver(GridParams::new(columns(), data(&rows())))
        .await
        .unwrap();

    driver.grid().scroll_to_row("3").await.unwrap();
    driver.grid().on_body_scroll().await.unwrap();

    let calls = metrics.calls();
    assert_eq!(calls.scrolled_to, vec!["3"]);
    assert_eq!(calls.sync_scroll, 1);
}

#[tokio::test]
async fn test_body_and_header_ids_are_rendered() {
    let (mut driver, _) = driver();
    driver
        .deliver(GridParams::new(columns(), data(&rows())))
        .await
        .unwrap();

    let ids = driver.grid().ids().clone();
    let root = driver.current().unwrap();
    assert!(find_element(root, &ids.header).unwrap().has_class("mb-grid-div-header"));
    let body = find_element(root, &ids.body).unwrap();
    assert!(body.scrollable);
    assert_eq!(body.class.as_deref(), Some("mb-grid-div-body"));
}
