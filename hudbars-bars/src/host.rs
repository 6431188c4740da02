//! Host toolkit adapter.

use std::collections::BTreeMap;

use crate::frame::{BarFrame, ContainerFrame};

/// Receives frame state for drawing.
///
/// Calls are synchronous and always succeed from the bars' point of view.
pub trait WidgetHost {
    /// Places and sizes the main bar container.
    fn sync_container(&mut self, frame: &ContainerFrame);

    /// Applies the full visual state of one bar.
    fn sync_bar(&mut self, frame: &BarFrame);
}

/// A host that keeps the latest frame of everything it was given.
#[derive(Debug, Default)]
pub struct RecordingHost {
    container: Option<ContainerFrame>,
    bars: BTreeMap<String, BarFrame>,
    syncs: usize,
}

impl RecordingHost {
    /// Creates an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest container placement.
    pub fn container(&self) -> Option<&ContainerFrame> {
        self.container.as_ref()
    }

    /// Latest frame for a bar.
    pub fn bar(&self, name: &str) -> Option<&BarFrame> {
        self.bars.get(name)
    }

    /// Names of bars whose latest frame is shown.
    pub fn shown(&self) -> Vec<&str> {
        self.bars
            .values()
            .filter(|f| f.shown)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Total number of bar syncs received.
    pub fn sync_count(&self) -> usize {
        self.syncs
    }
}

impl WidgetHost for RecordingHost {
    fn sync_container(&mut self, frame: &ContainerFrame) {
        self.container = Some(frame.clone());
    }

    fn sync_bar(&mut self, frame: &BarFrame) {
        self.syncs += 1;
        self.bars.insert(frame.name.clone(), frame.clone());
    }
}
