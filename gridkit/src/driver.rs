//! Host-side render loop.

use webdom::{Element, to_html};

use crate::error::GridError;
use crate::grid::{Grid, GridParams, Rendered};

/// Render passes allowed per delivery before the loop gives up.
const DEFAULT_MAX_PASSES: usize = 8;

/// Plays the host framework: delivers parameters, renders when the grid
/// asks to and runs the post-render hook after each committed render, until
/// the grid stops requesting renders.
pub struct GridDriver<T> {
    grid: Grid<T>,
    current: Option<Element>,
    commits: Vec<Rendered>,
    max_passes: usize,
}

impl<T: Send + Sync + 'static> GridDriver<T> {
    pub fn new(grid: Grid<T>) -> Self {
        Self {
            grid,
            current: None,
            commits: Vec::new(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Deliver parameters and render until the grid settles.
    pub async fn deliver(&mut self, params: GridParams<T>) -> Result<(), GridError> {
        if self.grid.set_parameters(params).await? {
            self.pump().await?;
        }
        Ok(())
    }

    /// Click a row and render if the grid asks for it.
    pub async fn click(&mut self, key: &str) -> Result<(), GridError> {
        if self.grid.click_row(key).await? {
            self.pump().await?;
        }
        Ok(())
    }

    async fn pump(&mut self) -> Result<(), GridError> {
        for _ in 0..self.max_passes {
            if !self.grid.should_render().await {
                return Ok(());
            }
            let rendered = self.grid.render().await?;
            self.current = Some(rendered.element.clone());
            self.commits.push(rendered);

            if !self.grid.after_render().await? {
                return Ok(());
            }
        }
        log::warn!("render loop stopped after {} passes", self.max_passes);
        Ok(())
    }

    /// The most recently committed tree.
    pub fn current(&self) -> Option<&Element> {
        self.current.as_ref()
    }

    /// HTML of the most recently committed tree.
    pub fn html(&self) -> String {
        self.current.as_ref().map(to_html).unwrap_or_default()
    }

    /// Every committed render, oldest first.
    pub fn commits(&self) -> &[Rendered] {
        &self.commits
    }

    /// Drain the commit log.
    pub fn take_commits(&mut self) -> Vec<Rendered> {
        std::mem::take(&mut self.commits)
    }
}
