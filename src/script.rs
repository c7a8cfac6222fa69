//! The line-oriented command language that drives a simulation.
//!
//! ```text
//! A
//! B
//! C
//! LINKSTATE
//! A-B 1
//! UPDATE
//! B-C 2 A,C
//! END
//! ```
//!
//! Node declarations come first, up to `LINKSTATE`. Each following line is
//! `<A>-<B> <weight> [<node>,<node>...]` until `END`; bare `UPDATE` lines are
//! skipped. Everything from the first blank line on is ignored.

use std::io::{self, BufRead};
use log::warn;
use crate::error::{Result, SimError};
use crate::protocol::LinkEvent;
use crate::NodeName;

pub const LINKSTATE_MARKER: &str = "LINKSTATE";
pub const UPDATE_MARKER: &str = "UPDATE";
pub const END_MARKER: &str = "END";

/// A script split into its two sections. Update lines are kept raw so a
/// bad one can be rejected on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub nodes: Vec<NodeName>,
    pub updates: Vec<ScriptLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based position in the input.
    pub number: usize,
    pub text: String,
}

/// One parsed update line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub a: NodeName,
    pub b: NodeName,
    pub raw_weight: i64,
    /// Nodes whose tables are reported once the event is applied.
    pub queries: Vec<NodeName>,
}

impl Update {
    pub fn event(&self, removal_sentinel: i64) -> Result<LinkEvent> {
        LinkEvent::from_raw(self.a.clone(), self.b.clone(), self.raw_weight, removal_sentinel)
    }
}

/// Splits `input` into the node section and the update section. Update
/// lines themselves are not parsed here, see [`parse_update`].
pub fn parse(input: &str) -> Result<Script> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .take_while(|(_, line)| !line.is_empty());

    let mut script = Script::default();
    loop {
        match lines.next() {
            Some((_, LINKSTATE_MARKER)) => break,
            Some((_, name)) => {
                check_node_name(name)?;
                script.nodes.push(name.to_string());
            }
            None => return Err(SimError::MissingMarker(LINKSTATE_MARKER)),
        }
    }

    loop {
        match lines.next() {
            Some((_, END_MARKER)) => break,
            Some((_, UPDATE_MARKER)) => continue,
            Some((number, text)) => script.updates.push(ScriptLine {
                number,
                text: text.to_string(),
            }),
            None => return Err(SimError::MissingMarker(END_MARKER)),
        }
    }

    Ok(script)
}

/// Rejects names that an update line could never address.
fn check_node_name(name: &str) -> Result<()> {
    let reason = if name.contains('-') {
        "contains '-'"
    } else if name.contains(',') {
        "contains ','"
    } else if name.contains(char::is_whitespace) {
        "contains whitespace"
    } else if name == UPDATE_MARKER || name == END_MARKER {
        "is a reserved marker"
    } else {
        return Ok(());
    };
    Err(SimError::InvalidNodeName {
        name: name.to_string(),
        reason,
    })
}

/// Parses `<A>-<B> <weight> [<node>,<node>...]`.
pub fn parse_update(line: &str) -> Result<Update> {
    let malformed = |reason| SimError::MalformedLinkToken {
        line: line.to_string(),
        reason,
    };

    let mut tokens = line.split_whitespace();
    let link = tokens.next().ok_or_else(|| malformed("empty line"))?;
    let (a, b) = link
        .split_once('-')
        .ok_or_else(|| malformed("missing '-' between node names"))?;
    if a.is_empty() || b.is_empty() {
        return Err(malformed("empty node name"));
    }

    let weight = tokens.next().ok_or_else(|| malformed("missing weight"))?;
    let raw_weight = weight
        .parse::<i64>()
        .map_err(|_| SimError::NonIntegerWeight(weight.to_string()))?;

    let queries = tokens
        .next()
        .map(|list| {
            list.split(',')
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let extra: Vec<&str> = tokens.collect();
    if !extra.is_empty() {
        warn!("Ignoring trailing tokens {:?} in {:?}", extra, line);
    }

    Ok(Update {
        a: a.to_string(),
        b: b.to_string(),
        raw_weight,
        queries,
    })
}

/// Reads lines up to the first blank line or end of input, whichever comes
/// first. Lets the binary stop reading an interactive stdin at a blank line.
pub fn read_until_blank<R: BufRead>(reader: R) -> io::Result<String> {
    let mut collected = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        collected.push_str(&line);
        collected.push('\n');
    }
    Ok(collected)
}
