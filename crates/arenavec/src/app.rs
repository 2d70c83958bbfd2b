//! Application entry point and dispatch.

use std::collections::LinkedList;
use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use arenavec_core::{AllocError, ArenaAllocator, ArenaStats, GrowVec};
use arenavec_ip::render::write_ip;

use crate::config::AppConfig;

/// Outcome of filling an arena-backed array.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    /// Values read back from the array, in index order.
    pub values: Vec<u64>,
    /// Final length of the array.
    pub len: usize,
    /// Final capacity of the array.
    pub capacity: usize,
    /// Storage blocks taken from the arena.
    pub reallocations: usize,
    /// Arena usage after the run.
    pub arena: ArenaStats,
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.print_ip {
        return print_ip_showcase(&mut out).context("failed to write output");
    }

    let report = run_demo(config.arena_elems, config.count, config.reserve)
        .context("arena demo failed")?;

    if config.quiet {
        return Ok(());
    }
    if config.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        present_report(&mut out, &report)?;
    }
    Ok(())
}

/// Push `0..count` into an array backed by an arena of `arena_elems` u64 slots.
pub fn run_demo(arena_elems: usize, count: usize, reserve: usize) -> Result<DemoReport, AllocError> {
    let alloc = ArenaAllocator::<u64>::new(arena_elems)?;
    let mut values = GrowVec::new_in(alloc.clone());

    if reserve > 0 {
        values.reserve(reserve)?;
        debug!(capacity = values.capacity(), "Reserved storage");
    }
    for value in (0u64..).take(count) {
        if let Err(err) = values.push(value) {
            debug!(pushed = values.len(), capacity = values.capacity(), "Push failed");
            return Err(err);
        }
    }

    let stats = alloc.arena().stats();
    info!(
        len = values.len(),
        capacity = values.capacity(),
        used = stats.used,
        "Demo complete"
    );
    Ok(DemoReport {
        values: values.to_vec(),
        len: values.len(),
        capacity: values.capacity(),
        reallocations: values.reallocations(),
        arena: stats,
    })
}

fn present_report<W: Write>(out: &mut W, report: &DemoReport) -> io::Result<()> {
    writeln!(out, "values: {:?}", report.values)?;
    writeln!(
        out,
        "len: {}, capacity: {}, reallocations: {}",
        report.len, report.capacity, report.reallocations
    )?;
    writeln!(
        out,
        "arena: {}/{} bytes used ({} padding, {} allocations, {} failures)",
        report.arena.used,
        report.arena.capacity,
        report.arena.padding,
        report.arena.allocations,
        report.arena.failures
    )
}

/// Render one value of every supported category.
fn print_ip_showcase<W: Write>(out: &mut W) -> io::Result<()> {
    write_ip(out, &-1i8)?;
    write_ip(out, &0i16)?;
    write_ip(out, &2_130_706_433i32)?;
    write_ip(out, &8_875_824_491_850_138_409i64)?;
    write_ip(out, &String::from("Hello, World!"))?;
    write_ip(out, "Hello, World!")?;
    write_ip(out, &vec![100, 200, 300, 400])?;
    write_ip(out, &[400i16, 300, 200, 100].into_iter().collect::<LinkedList<_>>())?;
    write_ip(out, &(123, 456, 789, 0))
}
