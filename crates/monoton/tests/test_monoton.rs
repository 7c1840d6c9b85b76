use anyhow::{anyhow, Result};
use monoton::kit::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

/// Leaves 2 symbols for the node.
#[derive(Debug, Default)]
struct ValidSequencer {
    counter: AtomicU64,
}

impl Sequencer for ValidSequencer {
    fn next(&self) -> Stamp {
        let counter = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Stamp::new(1, counter)
    }

    fn max_time_unit(&self) -> u64 {
        62u64.pow(8) - 1
    }

    fn max_counter(&self) -> u64 {
        62u64.pow(6) - 1
    }

    fn time_unit(&self) -> u64 {
        1
    }
}

/// Leaves no room for the node.
#[derive(Debug)]
struct InvalidSequencer;

impl Sequencer for InvalidSequencer {
    fn next(&self) -> Stamp {
        Stamp::new(1, 0)
    }

    fn max_time_unit(&self) -> u64 {
        62u64.pow(8) - 1
    }

    fn max_counter(&self) -> u64 {
        62u64.pow(8) - 1
    }

    fn time_unit(&self) -> u64 {
        1
    }
}

fn config_error<S: Sequencer>(sequencer: S, node: u64, initial_time: u64) -> Option<ConfigError> {
    Monoton::new(sequencer, node, initial_time).err()
}

#[test]
fn test_new() -> Result<()> {
    let monoton = Monoton::new(ValidSequencer::default(), 3843, 1)?;
    assert_eq!(monoton.node(), 3843);
    assert_eq!(monoton.initial_time(), 1);
    assert_eq!(monoton.layout().node_width, 2);
    assert!(monoton.next().ends_with("zz"));
    Ok(())
}

#[test]
fn test_node_too_large() {
    let err = config_error(ValidSequencer::default(), 3844, 1);
    assert_eq!(
        err,
        Some(ConfigError::NodeCapacity {
            node: 3844,
            max: 3843
        })
    );
    assert_eq!(
        err.map(|err| err.to_string()).as_deref(),
        Some("node can't be greater than 3843 (given 3844)")
    );
}

#[test]
fn test_no_room_for_node() {
    let err = config_error(InvalidSequencer, 1, 0).map(|err| err.to_string());
    assert_eq!(
        err.as_deref(),
        Some("sum of time unit width (8) and counter width (8) can't be >= total width (16)")
    );
}

#[test]
fn test_node_capacity_boundary() -> Result<()> {
    let max_node = 62u64.pow(4) - 1;
    let monoton = Monoton::new(Sequence::millisecond(), max_node, 0)?;
    assert!(monoton.next().ends_with("zzzz"));

    let err = config_error(Sequence::millisecond(), max_node + 1, 0);
    assert_eq!(
        err,
        Some(ConfigError::NodeCapacity {
            node: max_node + 1,
            max: max_node
        })
    );
    Ok(())
}

#[test]
fn test_initial_time_ahead_of_clock() {
    let sequence = Sequence::new(ManualClock::new(5_000_000), Granularity::Millisecond);
    assert_eq!(
        config_error(sequence, 0, 6),
        Some(ConfigError::InitialTime {
            initial_time: 6,
            current: 5
        })
    );
}

#[test]
fn test_clock_past_time_unit_field() -> Result<()> {
    let max_time_unit = 62u64.pow(3) - 1;
    let sequence = Sequence::with_limits(ManualClock::new(1_000_000), 1, max_time_unit, 61);
    let err = config_error(sequence, 0, 0);
    assert_eq!(
        err,
        Some(ConfigError::TimeUnitCapacity {
            time_unit: 1_000_000,
            max: max_time_unit
        })
    );
    let message = err.map(|err| err.to_string()).unwrap_or_default();
    assert!(message.contains("1000000"));

    let sequence = Sequence::with_limits(ManualClock::new(1_000_000), 1, max_time_unit, 61);
    let monoton = Monoton::new(sequence, 0, 900_000)?;
    let id = monoton.next();
    assert_eq!(id.len(), TOTAL_WIDTH);
    assert_eq!(monoton.parse(&id)?.time_unit, 1_000_000);
    Ok(())
}

#[test]
fn test_next() -> Result<()> {
    let monoton = Monoton::new(ValidSequencer::default(), 3843, 0)?;
    let first = monoton.next();
    let second = monoton.next();
    assert!(first.as_str() < second.as_str());
    assert!(first < second);
    assert_eq!(first.len(), TOTAL_WIDTH);
    assert_eq!(second.len(), TOTAL_WIDTH);
    Ok(())
}

#[test]
fn test_millisecond_node_field() -> Result<()> {
    let monoton = Monoton::new(Sequence::millisecond(), 19, 0)?;
    let id = monoton.next();
    assert_eq!(&id[12..], "000J");
    assert_eq!(id.len(), 16);
    Ok(())
}

#[test]
fn test_every_granularity_is_sixteen_symbols() -> Result<()> {
    for granularity in [
        Granularity::Second,
        Granularity::Millisecond,
        Granularity::Nanosecond,
    ] {
        let sequence = Sequence::new(MonotonicClock::new(), granularity);
        let initial_time = sequence.time_unit();
        let monoton = Monoton::new(sequence, 19, initial_time)?;
        for _ in 0..100 {
            let id = monoton.next_string();
            assert_eq!(id.len(), 16);
            assert!(id.bytes().all(|symbol| symbol.is_ascii_alphanumeric()));
        }
    }
    Ok(())
}

#[test]
fn test_fields_with_manual_clock() -> Result<()> {
    let clock = Arc::new(ManualClock::new(1_000_000_000));
    let settings = Settings::new().node(19).initial_time(990);
    let monoton = settings.build_with_clock(clock.clone())?;

    let first = monoton.next();
    assert_eq!(first.as_str(), "0000000A0000000J");
    assert_eq!(monoton.next().as_str(), "0000000A0001000J");

    clock.advance(1_000_000);
    let third = monoton.next();
    assert_eq!(third.as_str(), "0000000B0000000J");

    let parts = monoton.parse(&third)?;
    assert_eq!(
        parts,
        Parts {
            time_unit: 1001,
            counter: 0,
            node: 19
        }
    );
    Ok(())
}

#[test]
fn test_ids_sort_in_generation_order() -> Result<()> {
    let monoton = Monoton::new(Sequence::millisecond(), 7, 0)?;
    let ids: Vec<String> = (0..10_000).map(|_| monoton.next_string()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    Ok(())
}

#[test]
fn test_concurrent_ids_are_unique() -> Result<()> {
    let monoton = Arc::new(Monoton::new(Sequence::nanosecond(), 42, 0)?);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let monoton = monoton.clone();
            thread::spawn(move || (0..1_000).map(|_| monoton.next()).collect::<Vec<_>>())
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        let ids = handle
            .join()
            .map_err(|_| anyhow!("generator thread panicked"))?;
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }
    assert_eq!(seen.len(), 8_000);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_generator_across_tasks() -> Result<()> {
    let monoton = Arc::new(Settings::new().node(3).build()?);
    let mut tasks = Vec::new();
    for _ in 0..8 {
        let monoton = monoton.clone();
        tasks.push(tokio::task::spawn_blocking(move || {
            (0..1_000).map(|_| monoton.next()).collect::<Vec<_>>()
        }));
    }
    let mut seen = HashSet::new();
    for task in tasks {
        for id in task.await? {
            assert_eq!(monoton.parse(&id)?.node, 3);
            assert!(seen.insert(id));
        }
    }
    assert_eq!(seen.len(), 8_000);
    Ok(())
}
