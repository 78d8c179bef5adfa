//! Producer/consumer logging session

use crate::config::{LoggerConfig, OnFull};
use crate::error::LoggerError;
use crate::sampler::SensorSampler;
use ring_buffer::{Entry, RingBuffer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Slot count of the session buffer
pub const LOGGER_SLOTS: usize = 16;

type SessionBuffer = RingBuffer<Entry, LOGGER_SLOTS>;

/// Totals of one session.
///
/// `stored + dropped == produced` and `consumed == stored` once every
/// thread has finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Samples taken by all producers
    pub produced: u64,
    /// Samples accepted by the buffer
    pub stored: u64,
    /// Samples discarded on a full buffer
    pub dropped: u64,
    /// Entries drained by the consumer
    pub consumed: u64,
}

#[derive(Debug, Default)]
struct ProducerStats {
    produced: u64,
    stored: u64,
    dropped: u64,
}

/// Counts a producer out when its thread ends, including on panic
struct ActiveGuard<'a>(&'a AtomicUsize);

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Release);
    }
}

/// Run `config.producers` sampling threads against one consumer until all
/// samples are either logged or dropped
pub fn run_session(config: &LoggerConfig) -> Result<SessionSummary, LoggerError> {
    config.validate()?;

    let buffer = SessionBuffer::new();
    let active = AtomicUsize::new(config.producers);

    info!(
        "Starting session: {} producers x {} samples, {} slots, on_full={:?}",
        config.producers, config.samples_per_producer, LOGGER_SLOTS, config.on_full
    );

    let summary = thread::scope(|scope| {
        let consumer = scope.spawn(|| consume(&buffer, &active));

        let producers: Vec<_> = (0..config.producers)
            .map(|index| {
                let buffer = &buffer;
                let active = &active;
                scope.spawn(move || {
                    let _guard = ActiveGuard(active);
                    produce(index, buffer, config)
                })
            })
            .collect();

        let mut summary = SessionSummary::default();
        let mut producer_panicked = false;
        for handle in producers {
            match handle.join() {
                Ok(stats) => {
                    summary.produced += stats.produced;
                    summary.stored += stats.stored;
                    summary.dropped += stats.dropped;
                }
                Err(_) => producer_panicked = true,
            }
        }

        summary.consumed = consumer
            .join()
            .map_err(|_| LoggerError::WorkerPanicked("consumer"))?;

        if producer_panicked {
            return Err(LoggerError::WorkerPanicked("producer"));
        }
        Ok(summary)
    })?;

    info!(
        "Session finished: produced={} stored={} dropped={} consumed={}",
        summary.produced, summary.stored, summary.dropped, summary.consumed
    );
    Ok(summary)
}

fn produce(index: usize, buffer: &SessionBuffer, config: &LoggerConfig) -> ProducerStats {
    let sampler = SensorSampler::for_producer(index);
    let kind = sampler.kind();
    let interval = Duration::from_millis(config.sample_interval_ms);
    let mut stats = ProducerStats::default();

    debug!("Producer {} sampling {}", index, kind);

    for entry in sampler.take(config.samples_per_producer as usize) {
        stats.produced += 1;

        loop {
            match buffer.push(entry) {
                Ok(()) => {
                    stats.stored += 1;
                    break;
                }
                Err(e) => match config.on_full {
                    OnFull::Drop => {
                        warn!("Dropping {} sample {}: {}", kind, entry.value(), e);
                        stats.dropped += 1;
                        break;
                    }
                    OnFull::Retry => thread::yield_now(),
                },
            }
        }

        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    debug!("Producer {} done: {:?}", index, stats);
    stats
}

fn consume(buffer: &SessionBuffer, active: &AtomicUsize) -> u64 {
    let mut consumed = 0;

    loop {
        // Read before popping: once no producer is active, an empty pop is final
        let finished = active.load(Ordering::Acquire) == 0;
        match buffer.pop() {
            Ok(entry) => {
                debug!("{} = {}", entry.kind(), entry.value());
                consumed += 1;
            }
            Err(_) if finished => break,
            Err(_) => thread::yield_now(),
        }
    }

    consumed
}
