use std::io::{BufRead, Write};

use crate::include::common::config::Track;
use crate::include::common::error::SimulationError;

// Accepts "98, 183 37,122" style lists: commas and whitespace both separate tracks.
pub fn parse_tracks(input: &str) -> Result<Vec<Track>, SimulationError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_track)
        .collect()
}

pub fn parse_track(token: &str) -> Result<Track, SimulationError> {
    token
        .trim()
        .parse::<Track>()
        .map_err(|_| SimulationError::Parse(format!("invalid track '{}'", token)))
}

// Pulls whitespace separated tokens from a reader, a line at a time.
struct Tokens<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn next(&mut self) -> Result<String, SimulationError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(SimulationError::Parse("unexpected end of input".to_string()));
            }
            self.pending = line.split_whitespace().rev().map(str::to_string).collect();
        }
        // pending is stored reversed so pop yields tokens in order
        self.pending
            .pop()
            .ok_or_else(|| SimulationError::Parse("unexpected end of input".to_string()))
    }
}

/// Prompts for the request count, the requests and the head position.
pub fn read_interactive<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
) -> Result<(Vec<Track>, Track), SimulationError> {
    let mut tokens = Tokens { reader, pending: Vec::new() };

    write!(writer, "Enter the number of disk requests: ")?;
    writer.flush()?;
    let count_token = tokens.next()?;
    let count: usize = count_token
        .parse()
        .map_err(|_| SimulationError::Parse(format!("invalid request count '{}'", count_token)))?;

    write!(writer, "Enter the requests: ")?;
    writer.flush()?;
    // count comes from the operator; grow as tokens arrive instead of trusting it
    let mut requests = Vec::new();
    for _ in 0..count {
        requests.push(parse_track(&tokens.next()?)?);
    }

    write!(writer, "Enter the initial head position: ")?;
    writer.flush()?;
    let head = parse_track(&tokens.next()?)?;
    writeln!(writer)?;

    Ok((requests, head))
}
