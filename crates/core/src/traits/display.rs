//! Rendering collaborator trait

use heapless::Vec;

use crate::navigation::NavigationOutput;

/// Maximum outputs kept by [`MockRenderSink`]
pub const MOCK_HISTORY_LEN: usize = 64;

/// Receives one navigation output per tick
///
/// Implementations map octants to arrows, `Arrived` to a success screen and
/// `AwaitingFix` to a waiting message, and truncate target names to their
/// display width.
pub trait RenderSink {
    /// Draw the output for this tick
    fn render(&mut self, output: &NavigationOutput);
}

/// Render sink that records what it was given
///
/// Keeps the first [`MOCK_HISTORY_LEN`] outputs plus the most recent one.
#[derive(Debug, Default)]
pub struct MockRenderSink {
    history: Vec<NavigationOutput, MOCK_HISTORY_LEN>,
    last: Option<NavigationOutput>,
    count: usize,
}

impl MockRenderSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded outputs in order
    pub fn history(&self) -> &[NavigationOutput] {
        &self.history
    }

    /// Most recent output
    pub fn last(&self) -> Option<&NavigationOutput> {
        self.last.as_ref()
    }

    /// Total render calls
    pub fn count(&self) -> usize {
        self.count
    }
}

impl RenderSink for MockRenderSink {
    fn render(&mut self, output: &NavigationOutput) {
        // History is capped; extra frames only update `last`
        let _ = self.history.push(output.clone());
        self.last = Some(output.clone());
        self.count += 1;
    }
}
