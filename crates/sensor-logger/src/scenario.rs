//! Reference push/pop sequence on a four-slot buffer

use ring_buffer::{BufferError, Entry, RingBuffer};
use tracing::{info, warn};

/// One operation of the scenario and what the buffer answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStep {
    Push {
        entry: Entry,
        result: Result<(), BufferError>,
    },
    Pop {
        result: Result<Entry, BufferError>,
    },
}

impl ScenarioStep {
    fn is_err(&self) -> bool {
        match self {
            ScenarioStep::Push { result, .. } => result.is_err(),
            ScenarioStep::Pop { result } => result.is_err(),
        }
    }
}

/// Outcome of [`run_reference_scenario`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioReport {
    pub steps: Vec<ScenarioStep>,
}

impl ScenarioReport {
    /// Number of steps the buffer rejected
    pub fn rejected(&self) -> usize {
        self.steps.iter().filter(|s| s.is_err()).count()
    }

    fn push(&mut self, buffer: &RingBuffer<Entry, 4>, entry: Entry) {
        let result = buffer.push(entry);
        match result {
            Ok(()) => info!("pushed {} = {}", entry.kind(), entry.value()),
            Err(e) => warn!("push {} = {} rejected: {}", entry.kind(), entry.value(), e),
        }
        self.steps.push(ScenarioStep::Push { entry, result });
    }

    fn pop(&mut self, buffer: &RingBuffer<Entry, 4>) {
        let result = buffer.pop();
        match result {
            Ok(entry) => info!("popped {} = {}", entry.kind(), entry.value()),
            Err(e) => warn!("pop rejected: {}", e),
        }
        self.steps.push(ScenarioStep::Pop { result });
    }
}

/// Fill a four-slot buffer past its usable capacity, drain it past empty,
/// then show the rejected entry fits once space is freed.
pub fn run_reference_scenario() -> ScenarioReport {
    let buffer: RingBuffer<Entry, 4> = RingBuffer::new();
    let mut report = ScenarioReport::default();

    info!(
        "reference scenario: {} slots, usable capacity {}",
        RingBuffer::<Entry, 4>::SLOTS,
        RingBuffer::<Entry, 4>::USABLE_CAPACITY
    );

    report.push(&buffer, Entry::temperature(55));
    report.push(&buffer, Entry::temperature(32));
    report.push(&buffer, Entry::pressure(31));
    report.push(&buffer, Entry::pressure(8));

    for _ in 0..4 {
        report.pop(&buffer);
    }

    report.push(&buffer, Entry::pressure(8));
    report.pop(&buffer);

    report
}
