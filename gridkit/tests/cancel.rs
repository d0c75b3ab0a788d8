use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use gridkit::prelude::*;
use tokio::sync::Notify;

/// Blocks inside the scrollbar query until released.
#[derive(Default)]
struct GatedInterop {
    entered: Notify,
    release: Notify,
    text_calls: AtomicUsize,
}

#[async_trait]
impl GridInterop for GatedInterop {
    async fn scrollbar_width(&self, _: &str) -> Result<f32, InteropError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(0.0)
    }

    async fn text_widths(&self, _: &str, current: &[f32], _: &[String]) -> Result<Vec<f32>, InteropError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        Ok(current.iter().map(|w| w.max(10.0)).collect())
    }

    async fn scroll_to_row(&self, _: &str) -> Result<(), InteropError> {
        Ok(())
    }

    async fn sync_scroll(&self, _: &str, _: &str) -> Result<(), InteropError> {
        Ok(())
    }
}

fn params(label: &str) -> GridParams<String> {
    let columns = vec![ColumnConfiguration::text("Name", |s: &String| s.clone())];
    let data = vec![(label.to_string(), vec![("k".to_string(), "value".to_string())])];
    GridParams::new(columns, data).measurement(Measurement::FitToData)
}

#[tokio::test]
async fn test_new_parameters_cancel_inflight_measurement() {
    let interop = Arc::new(GatedInterop::default());
    let grid = Arc::new(Grid::new(interop.clone()));

    assert!(grid.set_parameters(params("first")).await.unwrap());
    assert_eq!(grid.render().await.unwrap().mode, RenderMode::Placeholder);

    let measuring = tokio::spawn({
        let grid = grid.clone();
        async move { grid.after_render().await }
    });
    interop.entered.notified().await;

    // Lands while the measurement holds the grid.
    assert!(grid.set_parameters(params("second")).await.unwrap());

    assert_eq!(measuring.await.unwrap(), Ok(true));
    assert_eq!(interop.text_calls.load(Ordering::SeqCst), 0);

    let state = grid.state().await;
    assert!(state.measurement_needed);
    assert!(state.simple_render_pending);
    assert_eq!(state.column_widths, vec![0.0]);
}

#[tokio::test]
async fn test_measurement_completes_when_released() {
    let interop = Arc::new(GatedInterop::default());
    let grid = Arc::new(Grid::new(interop.clone()));

    grid.set_parameters(params("only")).await.unwrap();
    grid.render().await.unwrap();

    let measuring = tokio::spawn({
        let grid = grid.clone();
        async move { grid.after_render().await }
    });
    interop.entered.notified().await;
    interop.release.notify_one();

    assert_eq!(measuring.await.unwrap(), Ok(true));
    assert_eq!(interop.text_calls.load(Ordering::SeqCst), 2);

    let state = grid.state().await;
    assert!(!state.measurement_needed);
    assert_eq!(state.column_widths, vec![11.0]);
    assert_eq!(grid.render().await.unwrap().mode, RenderMode::Full);
}

#[tokio::test]
async fn test_identical_redelivery_restarts_from_placeholder() {
    let interop = Arc::new(GatedInterop::default());
    let grid = Arc::new(Grid::new(interop.clone()));
    let columns = vec![ColumnConfiguration::text("Name", |s: &String| s.clone())];
    let same = || {
        let data = vec![("g".to_string(), vec![("k".to_string(), "value".to_string())])];
        GridParams::new(columns.clone(), data).measurement(Measurement::FitToData)
    };

    grid.set_parameters(same()).await.unwrap();
    assert_eq!(grid.render().await.unwrap().mode, RenderMode::Placeholder);

    let measuring = tokio::spawn({
        let grid = grid.clone();
        async move { grid.after_render().await }
    });
    interop.entered.notified().await;

    assert!(grid.set_parameters(same()).await.unwrap());
    assert_eq!(measuring.await.unwrap(), Ok(true));

    // No full render before the widths are measured.
    let retry = grid.render().await.unwrap();
    assert_eq!(retry.mode, RenderMode::Placeholder);
    assert!(!webdom::to_html(&retry.element).contains("0px"));

    interop.release.notify_one();
    assert_eq!(grid.after_render().await, Ok(true));
    assert_eq!(grid.state().await.column_widths, vec![11.0]);
    assert_eq!(grid.render().await.unwrap().mode, RenderMode::Full);
}
