use std::io::Write;
use anyhow::Context;
use log::{info, warn};
use crate::config::{ErrorPolicy, SimConfig};
use crate::error::Result;
use crate::network::Network;
use crate::protocol::{apply_event, EventOutcome};
use crate::report::NodeReport;
use crate::script::{self, Script, ScriptLine};
use crate::NodeName;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    /// Removals of links that did not exist.
    pub unchanged: usize,
    pub skipped: usize,
    pub reports: usize,
}

/// Owns the network for one simulation run and feeds it update lines one
/// at a time.
pub struct Simulator {
    network: Network,
    config: SimConfig,
}

impl Simulator {
    pub fn new<I, S>(nodes: I, config: SimConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeName>,
    {
        Ok(Self {
            network: Network::new(nodes)?,
            config,
        })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Parses, validates and applies one update line, then captures the
    /// reports it asks for. Nothing is mutated unless the whole line,
    /// queries included, is valid.
    pub fn process_update(&mut self, line: &str) -> Result<(EventOutcome, Vec<NodeReport>)> {
        let update = script::parse_update(line)?;
        let event = update.event(self.config.removal_sentinel)?;
        let (a, b) = event.endpoints();
        self.network.check_endpoints(a, b)?;
        for query in &update.queries {
            self.network.node(query)?;
        }

        let outcome = apply_event(&mut self.network, &event)?;
        let reports = update
            .queries
            .iter()
            .map(|query| NodeReport::capture(&self.network, query))
            .collect::<Result<Vec<_>>>()?;
        Ok((outcome, reports))
    }

    /// Runs every update line of `script`, writing reports to `out` in the
    /// configured format.
    pub fn run<W: Write>(&mut self, script: &Script, out: &mut W) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for ScriptLine { number, text } in &script.updates {
            match self.process_update(text) {
                Ok((outcome, reports)) => {
                    summary.applied += 1;
                    if outcome == EventOutcome::Unchanged {
                        summary.unchanged += 1;
                    }
                    for report in &reports {
                        report.write_to(out, self.config.format)?;
                        summary.reports += 1;
                    }
                }
                Err(e) if self.config.on_error == ErrorPolicy::Skip => {
                    warn!("Skipping line {}: {}", number, e);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e).with_context(|| format!("line {}: {:?}", number, text)),
            }
        }

        out.flush()?;
        info!(
            "Run finished: {} update(s) applied ({} no-op), {} skipped, {} report(s)",
            summary.applied, summary.unchanged, summary.skipped, summary.reports
        );
        Ok(summary)
    }
}

/// Parses `input` as a whole script and runs it.
pub fn run_script<W: Write>(input: &str, config: SimConfig, out: &mut W) -> anyhow::Result<RunSummary> {
    let script = script::parse(input)?;
    let mut simulator = Simulator::new(script.nodes.iter().cloned(), config)?;
    info!("Loaded {} node(s), {} update line(s)", script.nodes.len(), script.updates.len());
    simulator.run(&script, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn rejected_line_leaves_network_untouched() {
        let mut sim = Simulator::new(["A", "B"], SimConfig::default()).unwrap();
        let err = sim.process_update("A-B 4 A,Nope").unwrap_err();
        assert_eq!(err, SimError::UnknownNode("Nope".into()));
        assert!(!sim.network().are_neighbors("A", "B"));
    }

    #[test]
    fn abort_policy_stops_at_first_bad_line() {
        let input = "A\nB\nLINKSTATE\nA-B x\nA-B 1 A\nEND\n";
        let mut out = Vec::new();
        let err = run_script(input, SimConfig::default(), &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SimError>(),
            Some(&SimError::NonIntegerWeight("x".into()))
        );
        assert!(out.is_empty());
    }

    #[test]
    fn skip_policy_continues() {
        let input = "A\nB\nLINKSTATE\nA-B x\nA-B 1 A\nEND\n";
        let config = SimConfig {
            on_error: ErrorPolicy::Skip,
            ..SimConfig::default()
        };
        let mut out = Vec::new();
        let summary = run_script(input, config, &mut out).unwrap();
        assert_eq!(
            summary,
            RunSummary { applied: 1, unchanged: 0, skipped: 1, reports: 1 }
        );
        assert!(String::from_utf8(out).unwrap().starts_with("A Neighbour Table:\nB|1\n"));
    }

    #[test]
    fn removal_of_absent_link_is_counted() {
        let input = "A\nB\nLINKSTATE\nA-B -1\nA-B 2\nB-A -1\nB-A -1\nEND\n";
        let mut out = Vec::new();
        let summary = run_script(input, SimConfig::default(), &mut out).unwrap();
        assert_eq!(summary.applied, 4);
        assert_eq!(summary.unchanged, 2);
        assert_eq!(summary.skipped, 0);
    }
}
