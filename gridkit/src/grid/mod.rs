//! The grid component.
//!
//! A [`Grid`] owns its render state behind a single async mutex. The host
//! drives it through a two-phase protocol:
//!
//! 1. [`Grid::set_parameters`] fingerprints the inputs and decides whether a
//!    new cycle starts.
//! 2. [`Grid::render`] emits a placeholder first, then the full table.
//! 3. [`Grid::after_render`] runs after each committed render, measures
//!    column widths when fitting to data, and reports whether another
//!    render is wanted.
//!
//! [`GridDriver`](crate::GridDriver) plays the host role for tests and
//! headless use.

mod cell;
mod column;
pub mod detect;
pub mod measure;
mod params;
pub mod render;
pub mod state;

pub use cell::*;
pub use column::*;
pub use params::*;
pub use render::GridIds;
pub use state::{Effect, RenderMode, RenderState};

use std::sync::{Arc, MutexGuard, PoisonError};

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use webdom::Element;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::interop::GridInterop;

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub mode: RenderMode,
    pub element: Element,
}

struct Inner<T> {
    params: Option<GridParams<T>>,
    state: RenderState,
}

pub struct Grid<T> {
    ids: GridIds,
    config: GridConfig,
    interop: Arc<dyn GridInterop>,
    inner: Mutex<Inner<T>>,
    /// Cancelled when newer parameters arrive during a measurement.
    cycle: std::sync::Mutex<CancellationToken>,
}

impl<T: Send + Sync + 'static> Grid<T> {
    pub fn new(interop: Arc<dyn GridInterop>) -> Self {
        Self::with_config(interop, GridConfig::default())
    }

    pub fn with_config(interop: Arc<dyn GridInterop>, config: GridConfig) -> Self {
        Self {
            ids: GridIds::generate(&config.id_prefix),
            config,
            interop,
            inner: Mutex::new(Inner {
                params: None,
                state: RenderState::new(),
            }),
            cycle: std::sync::Mutex::new(CancellationToken::new()),
        }
    }

    pub fn ids(&self) -> &GridIds {
        &self.ids
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Deliver new parameters. Returns whether the host should render.
    pub async fn set_parameters(&self, params: GridParams<T>) -> Result<bool, GridError> {
        if params.columns.is_empty() {
            return Err(GridError::MissingColumns);
        }

        self.cycle().cancel();
        let mut inner = self.inner.lock().await;
        *self.cycle() = CancellationToken::new();

        let log_id = params.log_identification.clone();
        log::debug!(
            "[{log_id}] set_parameters: {} columns, {} rows",
            params.columns.len(),
            params.row_count()
        );

        let fingerprint = detect::fingerprint(&params, &inner.state.selected_key)?;
        let changed = inner
            .state
            .parameters_delivered(fingerprint, params.columns.len());
        inner.params = Some(params);

        log::debug!(
            "[{log_id}] fingerprint {fingerprint} changed: {changed}, should_render: {}",
            inner.state.should_render
        );
        Ok(inner.state.should_render)
    }

    pub async fn should_render(&self) -> bool {
        self.inner.lock().await.state.should_render
    }

    pub async fn render_mode(&self) -> RenderMode {
        self.inner.lock().await.state.render_mode()
    }

    /// Snapshot of the render state.
    pub async fn state(&self) -> RenderState {
        self.inner.lock().await.state.clone()
    }

    pub async fn selected_key(&self) -> String {
        self.inner.lock().await.state.selected_key.clone()
    }

    /// Produce this pass's markup.
    ///
    /// A render forced while nothing changed emits the placeholder.
    pub async fn render(&self) -> Result<Rendered, GridError> {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;
        let mode = inner.state.render_mode();
        let log_id = log_id(inner.params.as_ref());

        log::debug!(
            "[{log_id}] render {mode:?}; simple_render_pending: {}, has_completed_full_render: {}",
            inner.state.simple_render_pending,
            inner.state.has_completed_full_render
        );

        let element = match mode {
            RenderMode::Full => {
                let params = inner.params.as_ref().ok_or(GridError::NotConfigured)?;
                render::build_grid(params, &inner.state, &self.ids)?
            }
            RenderMode::Placeholder | RenderMode::Skip => render::build_placeholder(),
        };
        inner.state.render_committed(mode);

        Ok(Rendered { mode, element })
    }

    /// Post-render hook. Returns whether another render is wanted.
    pub async fn after_render(&self) -> Result<bool, GridError> {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;
        let Some(params) = inner.params.as_ref() else {
            return Ok(false);
        };
        let log_id = params.log_identification.as_str();

        log::debug!(
            "[{log_id}] after_render; simple_render_pending: {}, measurement_needed: {}",
            inner.state.simple_render_pending,
            inner.state.measurement_needed
        );

        let mut needs_render = false;
        for effect in inner.state.after_render(params.measurement.is_fit_to_data()) {
            match effect {
                Effect::Render => needs_render = true,
                Effect::Measure => {
                    let token = self.cycle().clone();
                    let current = inner.state.column_widths.clone();
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => {
                            log::debug!("[{log_id}] measurement cancelled by newer parameters");
                            inner.state.measurement_cancelled();
                        }
                        measured = measure::measure_widths(params, &current, self.interop.as_ref(), &self.config) => {
                            let measured = measured?;
                            log::debug!("[{log_id}] measured widths {:?}", measured.widths);
                            inner.state.measurement_applied(measured.widths, measured.scrollbar_width);
                        }
                    }
                }
            }
        }

        Ok(needs_render)
    }

    /// Handle a click on the row with `key`.
    ///
    /// Selects the row and invokes the host callback. Returns whether a
    /// render is wanted, which happens when the selection is highlighted.
    pub async fn click_row(&self, key: &str) -> Result<bool, GridError> {
        let (callback, needs_render) = {
            let mut guard = self.inner.lock().await;
            let inner = &mut *guard;
            let params = inner.params.as_ref().ok_or(GridError::NotConfigured)?;
            log::debug!(
                "[{}] click_row {key:?} with highlight_selected_row: {}",
                params.log_identification,
                params.highlight_selected_row
            );

            inner.state.select(key);
            let needs_render = if params.highlight_selected_row {
                let fingerprint = detect::fingerprint(params, &inner.state.selected_key)?;
                inner
                    .state
                    .parameters_delivered(fingerprint, params.columns.len())
            } else {
                false
            };
            (params.on_row_click.clone(), needs_render)
        };

        if let Some(callback) = callback {
            callback(key);
        }
        Ok(needs_render)
    }

    /// Scroll the row with `key` into view.
    pub async fn scroll_to_row(&self, key: &str) -> Result<(), GridError> {
        log::debug!("scroll_to_row({key})");
        self.interop.scroll_to_row(key).await?;
        Ok(())
    }

    /// Body scrolled horizontally; keep the header aligned.
    pub async fn on_body_scroll(&self) -> Result<(), GridError> {
        self.interop
            .sync_scroll(&self.ids.header, &self.ids.body)
            .await?;
        Ok(())
    }

    fn cycle(&self) -> MutexGuard<'_, CancellationToken> {
        self.cycle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_id<T>(params: Option<&GridParams<T>>) -> &str {
    params
        .map(|p| p.log_identification.as_str())
        .unwrap_or_default()
}
