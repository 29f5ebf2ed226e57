//! Transient toast notice.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use desk::notify::Notice;

/// How long a notice stays up before it is dismissed.
pub const DISMISS_AFTER_MS: u32 = 3_000;

/// Currently displayed notice plus a sequence number, so a timer armed for
/// an older notice cannot dismiss a newer one.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NoticeState {
    /// Show `notice`, replacing any current one. Returns its sequence number.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// Dismiss the notice shown as `seq`, if it is still the current one.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}
