//! Parser for `git status --porcelain` output
//!
//! Each non-blank line carries a status code and a path, e.g.
//!
//! ```text
//!  M third_party/blink/renderer/platform/webrtc/webrtc_video_frame_adapter.cc
//! ?? media/capture/video/segmentor.cc
//! A  media/capture/video/segmentor.h
//! ```
//!
//! Lines are trimmed before splitting, so the unstaged-modified form ` M`
//! yields the code `M`.

use std::path::PathBuf;

use serde::Serialize;

use crate::{Error, Result};

/// One entry of a working tree status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    /// Trimmed one- or two-letter code (`M`, `MM`, `A`, `AM`, `D`, `??`, ...)
    pub code: String,
    /// Path relative to the working tree root
    pub path: PathBuf,
}

impl StatusLine {
    pub fn new(code: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            code: code.into(),
            path: path.into(),
        }
    }
}

/// Parse porcelain status output.
///
/// Blank lines are skipped. Every other line must split into exactly two
/// whitespace-separated tokens.
pub fn parse_porcelain(output: &str) -> Result<Vec<StatusLine>> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Result<StatusLine> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(code), Some(path), None) => Ok(StatusLine::new(code, path)),
        _ => Err(Error::MalformedStatusLine {
            line: line.to_string(),
        }),
    }
}
