#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for panel chrome and the transient status notice.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Whether the palette column is shown.
    pub left_panel_expanded: bool,
    /// Whether the outline/inspector column is shown.
    pub right_panel_expanded: bool,
    /// Transient notice shown in the status bar (e.g. generated markup).
    pub notice: Option<String>,
    /// Monotonic counter so a delayed dismiss only clears its own notice.
    pub notice_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            left_panel_expanded: true,
            right_panel_expanded: true,
            notice: None,
            notice_seq: 0,
        }
    }
}

impl UiState {
    /// Show a notice and return the sequence number its dismissal must match.
    pub fn show_notice(&mut self, text: impl Into<String>) -> u64 {
        self.notice = Some(text.into());
        self.notice_seq += 1;
        self.notice_seq
    }

    /// Clear the notice, but only if `seq` still identifies it; a stale
    /// dismissal of an already-replaced notice is ignored.
    pub fn clear_notice(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }
}
