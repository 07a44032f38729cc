use std::time::Duration;

pub const DEFAULT_RENDER_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket(u64);

/// Latest-wins gate for deferred renders. Each `schedule` supersedes every ticket
/// issued before it, so only the newest pending render may touch the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderScheduler {
    delay: Duration,
    issued: u64,
    current: Option<u64>,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_RENDER_DELAY)
    }
}

impl RenderScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            issued: 0,
            current: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self) -> RenderTicket {
        self.issued += 1;
        self.current = Some(self.issued);
        RenderTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        self.current == Some(ticket.0)
    }

    /// Marks the ticket as run. Returns false when it was superseded or cancelled.
    pub fn complete(&mut self, ticket: RenderTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.current = None;
        true
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }
}
