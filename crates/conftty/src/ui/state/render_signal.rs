/// Pending-render flag shared by snapshot updates and local transitions.
///
/// Any number of requests between two frames collapse into one render pass.
#[derive(Debug)]
pub struct RenderSignal {
    pending: bool,
}

impl Default for RenderSignal {
    fn default() -> Self {
        Self { pending: true }
    }
}

impl RenderSignal {
    /// Marks the owner as needing a redraw.
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Returns whether a redraw is pending without consuming it.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consumes the pending redraw, returning whether there was one.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_signal_requests_first_render() {
        // Arrange
        let mut signal = RenderSignal::default();

        // Act
        let first = signal.take();
        let second = signal.take();

        // Assert
        assert!(first);
        assert!(!second);
    }

    #[test]
    fn test_repeated_requests_collapse_into_one_pass() {
        // Arrange
        let mut signal = RenderSignal::default();
        signal.take();

        // Act
        signal.request();
        signal.request();

        // Assert
        assert!(signal.is_pending());
        assert!(signal.take());
        assert!(!signal.take());
    }
}
