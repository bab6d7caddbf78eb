//! Operation lifecycle tracking with a stuck-operation watchdog.
//!
//! Drawing and resize operations are bracketed by `start_operation` and
//! `complete_operation`. A release event that never arrives used to leave
//! the board stuck in a drawing state; the watchdog guarantees that every
//! operation terminates: a deadline is armed on start, disarmed on
//! completion, and any query past the deadline force-terminates the
//! operation and returns the tracker to idle.

use crate::element::ElementId;
use crate::resize::ResizeAnchor;
use crate::tools::ToolKind;
use std::time::{Duration, Instant};

/// Default watchdog timeout for a single operation.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// An in-flight interactive operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// A shape/section/path is being drawn with the given tool.
    Drawing { tool: ToolKind },
    /// A transform handle on an element is being dragged.
    Resizing {
        element: ElementId,
        anchor: ResizeAnchor,
    },
    /// An element's text is being edited in place.
    TextEditing { element: ElementId },
}

impl Operation {
    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Drawing { .. } => "drawing",
            Operation::Resizing { .. } => "resizing",
            Operation::TextEditing { .. } => "text-editing",
        }
    }
}

/// Answer to a status query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationStatus {
    /// No operation in flight.
    Idle,
    /// An operation is in flight and within its deadline.
    Active {
        operation: Operation,
        running_for: Duration,
    },
    /// The last operation was force-terminated by the watchdog.
    /// Cleared when the next operation starts.
    Recovered { operation: Operation },
}

/// Cancellable deadline timer, armed and disarmed atomically with the
/// operation it guards. Disarming clears the deadline, so a watchdog firing
/// and a normal completion cannot both act on the same operation.
#[derive(Debug, Clone)]
struct Watchdog {
    timeout: Duration,
    deadline: Option<Instant>,
}

impl Watchdog {
    fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
        }
    }

    fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.timeout);
    }

    fn disarm(&mut self) {
        self.deadline = None;
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }
}

/// Tracks the single in-flight operation and its watchdog.
///
/// Single-threaded, event-driven: expiry is detected lazily on every query
/// and state change, plus the explicit `check_watchdog` poll the event loop
/// calls between input events. Either path is sufficient for the guarantee
/// that no operation stays active past its deadline.
#[derive(Debug, Clone)]
pub struct OperationTracker {
    current: Option<(Operation, Instant)>,
    watchdog: Watchdog,
    /// Set when the watchdog force-terminated the last operation.
    recovered: Option<Operation>,
}

impl Default for OperationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationTracker {
    /// Create a tracker with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_OPERATION_TIMEOUT)
    }

    /// Create a tracker with a custom watchdog timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            current: None,
            watchdog: Watchdog::new(timeout),
            recovered: None,
        }
    }

    /// Set the watchdog timeout. Applies from the next `start_operation`.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.watchdog.timeout = timeout;
    }

    /// Get the watchdog timeout.
    pub fn timeout(&self) -> Duration {
        self.watchdog.timeout
    }

    /// Start an operation, arming the watchdog.
    ///
    /// If another operation is still in flight it is force-completed first
    /// and logged; this keeps the tracker a single-operation machine.
    pub fn start_operation(&mut self, operation: Operation) {
        let now = Instant::now();
        self.expire_if_due(now);
        if let Some((stale, _)) = self.current.take() {
            log::warn!(
                "start_operation: {} still active, force-completing before {}",
                stale.name(),
                operation.name()
            );
        }
        self.recovered = None;
        self.current = Some((operation, now));
        self.watchdog.arm(now);
    }

    /// Complete the in-flight operation, disarming the watchdog.
    ///
    /// Returns the completed operation, or None if there was nothing to
    /// complete — including the case where the watchdog already fired, so a
    /// late release after a forced termination never double-commits.
    pub fn complete_operation(&mut self) -> Option<Operation> {
        self.expire_if_due(Instant::now());
        let (operation, _) = self.current.take()?;
        self.watchdog.disarm();
        Some(operation)
    }

    /// Whether an operation is in flight and within its deadline.
    pub fn is_operation_active(&self) -> bool {
        self.current.is_some() && !self.watchdog.is_expired(Instant::now())
    }

    /// Current status. An expired operation reports as `Recovered` even
    /// before a mutating call has transitioned the state.
    pub fn get_operation_status(&self) -> OperationStatus {
        let now = Instant::now();
        match self.current {
            Some((operation, _)) if self.watchdog.is_expired(now) => {
                OperationStatus::Recovered { operation }
            }
            Some((operation, started)) => OperationStatus::Active {
                operation,
                running_for: now.duration_since(started),
            },
            None => match self.recovered {
                Some(operation) => OperationStatus::Recovered { operation },
                None => OperationStatus::Idle,
            },
        }
    }

    /// Event-loop poll: force-terminate the operation if its deadline has
    /// passed. Returns the operation that was recovered, if any.
    pub fn check_watchdog(&mut self, now: Instant) -> Option<Operation> {
        self.expire_if_due(now)
    }

    fn expire_if_due(&mut self, now: Instant) -> Option<Operation> {
        if !self.watchdog.is_expired(now) {
            return None;
        }
        self.watchdog.disarm();
        let (operation, started) = self.current.take()?;
        log::warn!(
            "watchdog: force-terminating stuck {} operation after {:?}",
            operation.name(),
            now.duration_since(started)
        );
        self.recovered = Some(operation);
        Some(operation)
    }
}
