//! Plain-text reporter for simulation runs
//!
//! Writes a header naming each body's columns, one line per reported step
//! (step index, elapsed time, then x and y of every body in input order)
//! and a final state dump with one body per line.

use std::io::{self, Write};

use crate::simulation::engine::{Engine, StepReport};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Body;

pub struct ConsoleReporter<W: Write> {
    out: W,
    every: u64, // report every n-th step
    precision: Option<usize>, // digits after the decimal point
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, every: u64, precision: Option<usize>) -> Self {
        Self {
            out,
            every: every.max(1),
            precision,
        }
    }

    fn float(&self, v: f64) -> String {
        match self.precision {
            Some(p) => format!("{:.*e}", p, v),
            None => format!("{:e}", v),
        }
    }

    /// `# step t <label>.x <label>.y ...`, unnamed bodies use their index
    pub fn write_header(&mut self, bodies: &[Body]) -> io::Result<()> {
        let mut line = String::from("# step t");
        for (i, b) in bodies.iter().enumerate() {
            let name = if b.label.is_empty() { i.to_string() } else { b.label.clone() };
            line.push_str(&format!(" {name}.x {name}.y"));
        }
        writeln!(self.out, "{}", line)
    }

    /// Write one step line, skipping steps that are not a multiple of `every`
    pub fn write_step(&mut self, report: &StepReport<'_>) -> io::Result<()> {
        if report.step % self.every != 0 {
            return Ok(());
        }
        let mut line = format!("{} {}", report.step, self.float(report.t));
        for b in report.bodies {
            line.push(' ');
            line.push_str(&self.float(b.x.x));
            line.push(' ');
            line.push_str(&self.float(b.x.y));
        }
        writeln!(self.out, "{}", line)
    }

    /// Body count followed by `x y vx vy m label` for each body
    pub fn write_final(&mut self, bodies: &[Body]) -> io::Result<()> {
        writeln!(self.out, "{}", bodies.len())?;
        for b in bodies {
            let line = [b.x.x, b.x.y, b.v.x, b.v.y, b.m]
                .iter()
                .map(|&v| self.float(v))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.out, "{} {}", line, b.label)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Run `scenario` to completion, streaming its trajectory to `out`
///
/// Returns the engine so callers can inspect the final state.
pub fn run_console<W: Write>(scenario: Scenario, out: W) -> io::Result<Engine> {
    let mut reporter = ConsoleReporter::new(out, scenario.output.every, scenario.output.precision);
    let mut engine = Engine::new(scenario);

    reporter.write_header(&engine.system().bodies)?;
    engine.try_run(|report| reporter.write_step(report))?;
    reporter.write_final(&engine.system().bodies)?;
    reporter.out.flush()?;

    Ok(engine)
}
