//! Render-mode state machine.
//!
//! Transitions are plain methods on [`RenderState`]; they never perform I/O.
//! Side effects come back as [`Effect`] values for the caller to carry out
//! while it still holds the grid's guard.

/// What the next render pass should emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Nothing changed since the last full render. The host keeps its tree.
    Skip,
    /// Cheap pass that lets the browser lay out before measuring.
    Placeholder,
    Full,
}

/// Work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run the measurement coordinator.
    Measure,
    /// Ask the host for another render pass.
    Render,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub simple_render_pending: bool,
    pub has_completed_full_render: bool,
    pub measurement_needed: bool,
    pub should_render: bool,
    /// Empty when no row is selected.
    pub selected_key: String,
    /// One entry per column, in column order.
    pub column_widths: Vec<f32>,
    pub last_fingerprint: i32,
    pub scrollbar_width: f32,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            simple_render_pending: true,
            has_completed_full_render: false,
            measurement_needed: false,
            should_render: true,
            selected_key: String::new(),
            column_widths: Vec::new(),
            last_fingerprint: -1,
            scrollbar_width: 0.0,
        }
    }
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parameter delivery. Returns `true` when the fingerprint
    /// changed and a new two-phase cycle begins.
    pub fn parameters_delivered(&mut self, fingerprint: i32, column_count: usize) -> bool {
        if fingerprint == self.last_fingerprint {
            self.should_render = !self.has_completed_full_render;
            return false;
        }

        self.last_fingerprint = fingerprint;
        self.should_render = true;
        self.simple_render_pending = true;
        self.measurement_needed = true;
        self.column_widths = vec![0.0; column_count];
        true
    }

    pub fn render_mode(&self) -> RenderMode {
        if !self.should_render {
            RenderMode::Skip
        } else if self.simple_render_pending {
            RenderMode::Placeholder
        } else {
            RenderMode::Full
        }
    }

    /// Record that a render pass produced output of the given mode.
    pub fn render_committed(&mut self, mode: RenderMode) {
        self.has_completed_full_render = mode == RenderMode::Full;
    }

    /// The post-render transition.
    pub fn after_render(&mut self, fit_to_data: bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut needs_render = false;

        if self.simple_render_pending {
            self.simple_render_pending = false;
            needs_render = true;
        }

        if self.measurement_needed {
            self.measurement_needed = false;
            if fit_to_data {
                effects.push(Effect::Measure);
                needs_render = true;
            }
        }

        if needs_render {
            effects.push(Effect::Render);
        }
        effects
    }

    pub fn measurement_applied(&mut self, widths: Vec<f32>, scrollbar_width: f32) {
        self.column_widths = widths;
        self.scrollbar_width = scrollbar_width;
    }

    /// A measurement was abandoned. The cycle restarts from the placeholder
    /// so no full render commits widths that were never measured.
    pub fn measurement_cancelled(&mut self) {
        self.simple_render_pending = true;
        self.measurement_needed = true;
    }

    /// Returns `true` when the selection changed.
    pub fn select(&mut self, key: &str) -> bool {
        if self.selected_key == key {
            return false;
        }
        self.selected_key = key.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = RenderState::new();
        assert_eq!(state.last_fingerprint, -1);
        assert_eq!(state.render_mode(), RenderMode::Placeholder);
        assert!(state.selected_key.is_empty());
    }

    #[test]
    fn test_new_fingerprint_starts_cycle() {
        let mut state = RenderState::new();
        assert!(state.parameters_delivered(42, 3));
        assert!(state.simple_render_pending);
        assert!(state.measurement_needed);
        assert_eq!(state.column_widths, vec![0.0; 3]);
    }

    #[test]
    fn test_measure_requested_only_for_fit_to_data() {
        let mut state = RenderState::new();
        state.parameters_delivered(1, 1);
        assert_eq!(state.after_render(false), vec![Effect::Render]);
        assert!(!state.measurement_needed);

        let mut state = RenderState::new();
        state.parameters_delivered(1, 1);
        assert_eq!(state.after_render(true), vec![Effect::Measure, Effect::Render]);
    }

    #[test]
    fn test_cancelled_measurement_restarts_with_placeholder() {
        let mut state = RenderState::new();
        state.parameters_delivered(1, 2);
        state.render_committed(RenderMode::Placeholder);
        state.after_render(true);
        state.measurement_cancelled();

        assert!(!state.parameters_delivered(1, 2));
        assert_eq!(state.render_mode(), RenderMode::Placeholder);
        assert_eq!(state.after_render(true), vec![Effect::Measure, Effect::Render]);
    }
}
