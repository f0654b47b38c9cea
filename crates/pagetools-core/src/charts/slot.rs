//! Canvas slots owning at most one live chart instance.

use std::collections::BTreeMap;

use super::config::ChartConfig;

/// Opaque handle to a chart instance created by a backend. Not `Clone`: the
/// slot that receives it is its only owner, and destroying consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// The charting library.
pub trait ChartBackend {
    fn create(&mut self, canvas: &str, config: &ChartConfig) -> ChartHandle;
    fn destroy(&mut self, handle: ChartHandle);
}

/// One canvas element.
#[derive(Debug)]
pub struct ChartSlot {
    canvas: String,
    live: Option<ChartHandle>,
}

impl ChartSlot {
    pub fn new(canvas: impl Into<String>) -> Self {
        Self {
            canvas: canvas.into(),
            live: None,
        }
    }

    pub fn canvas(&self) -> &str {
        &self.canvas
    }

    pub fn live(&self) -> Option<&ChartHandle> {
        self.live.as_ref()
    }

    /// Replace whatever is drawn on the canvas. The previous instance is
    /// destroyed before the new one is created.
    pub fn render<B: ChartBackend + ?Sized>(&mut self, backend: &mut B, config: &ChartConfig) {
        self.clear(backend);
        let handle = backend.create(&self.canvas, config);
        tracing::debug!(canvas = %self.canvas, handle = handle.id(), "chart rendered");
        self.live = Some(handle);
    }

    pub fn clear<B: ChartBackend + ?Sized>(&mut self, backend: &mut B) {
        if let Some(prev) = self.live.take() {
            tracing::debug!(canvas = %self.canvas, handle = prev.id(), "chart destroyed");
            backend.destroy(prev);
        }
    }
}

/// Backend that keeps live chart configs in memory.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_id: u64,
    live: BTreeMap<u64, (String, ChartConfig)>,
    pub created: usize,
    pub destroyed: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configs currently live on a canvas, oldest first.
    pub fn live_on(&self, canvas: &str) -> Vec<&ChartConfig> {
        self.live
            .values()
            .filter(|(c, _)| c == canvas)
            .map(|(_, cfg)| cfg)
            .collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl ChartBackend for RecordingBackend {
    fn create(&mut self, canvas: &str, config: &ChartConfig) -> ChartHandle {
        self.next_id += 1;
        self.created += 1;
        self.live
            .insert(self.next_id, (canvas.to_string(), config.clone()));
        ChartHandle::new(self.next_id)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if self.live.remove(&handle.id()).is_some() {
            self.destroyed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::config::pie_chart;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_replaces_prior_instance() {
        let mut backend = RecordingBackend::new();
        let mut slot = ChartSlot::new("pieChart");

        slot.render(&mut backend, &pie_chart(dec!(100), dec!(10)));
        assert_eq!(slot.live().map(ChartHandle::id), Some(1));

        slot.render(&mut backend, &pie_chart(dec!(200), dec!(20)));
        assert_eq!(slot.live().map(ChartHandle::id), Some(2));

        assert_eq!(backend.created, 2);
        assert_eq!(backend.destroyed, 1);
        let live = backend.live_on("pieChart");
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].data.datasets[0].data[0], 200.0);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut backend = RecordingBackend::new();
        let mut a = ChartSlot::new("a");
        let mut b = ChartSlot::new("b");
        a.render(&mut backend, &pie_chart(dec!(1), dec!(1)));
        b.render(&mut backend, &pie_chart(dec!(2), dec!(2)));
        a.render(&mut backend, &pie_chart(dec!(3), dec!(3)));
        assert_eq!(backend.live_count(), 2);
        assert_eq!(backend.live_on("b").len(), 1);
    }

    #[test]
    fn test_clear_empties_slot() {
        let mut backend = RecordingBackend::new();
        let mut slot = ChartSlot::new("pieChart");
        slot.clear(&mut backend);
        assert_eq!(backend.destroyed, 0);
        slot.render(&mut backend, &pie_chart(dec!(1), dec!(1)));
        slot.clear(&mut backend);
        assert!(slot.live().is_none());
        assert_eq!(backend.live_count(), 0);
    }
}
