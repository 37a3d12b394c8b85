//! Result record files and report compilation.
//!
//! Each solved puzzle appends one record to a text file named for the
//! algorithm, heuristic, and puzzle size, so runs group naturally:
//! - file: `<algorithm>_<heuristic>_<size>.txt`
//! - header (written once): `Algorithm:`, `Heuristic:`, and `Size:` lines
//! - record: `<moves>: \t<compact start> -> [ s1 ]->[ s2 ]-> ...`
//!
//! `compile` aggregates every record file in the directory into a
//! `report_<unix seconds>.txt` summary.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::board::Board;
use crate::heuristic::Heuristic;
use crate::search::Algorithm;

/// Default directory for result records.
pub const REPORTS_DIR: &str = "reports";

/// File name for one algorithm/heuristic/size combination.
pub fn file_name(algorithm: Algorithm, heuristic: Heuristic, size: usize) -> String {
    format!("{}_{}_{}.txt", algorithm.tag(), heuristic.tag(), size)
}

/// The bracket rendering stripped down to its bare tokens, e.g. `12b` for
/// `[ 1 2 b ]`.
fn compact(board: &Board) -> String {
    board.to_string().replace(['[', ']', ' '], "")
}

/// Formats one record: move count, compact start state, then the traversed
/// states in order (start excluded). A zero-move solve records the terminal
/// state itself.
pub fn record_line(path: &[Board]) -> String {
    let Some(start) = path.first() else {
        return String::new();
    };
    let moves = path.len() - 1;
    let steps: Vec<String> = path[1..].iter().map(|state| state.to_string()).collect();
    let trail = if steps.is_empty() {
        start.to_string()
    } else {
        steps.join("->")
    };
    format!("{moves}: \t{} -> {trail}", compact(start))
}

/// Appends a solved puzzle to its combination file, writing the header when
/// the file is new. Returns the file path.
pub fn record(
    dir: &Path,
    algorithm: Algorithm,
    heuristic: Heuristic,
    path: &[Board],
) -> io::Result<PathBuf> {
    let Some(start) = path.first() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "empty solution path",
        ));
    };
    fs::create_dir_all(dir)?;

    let file_path = dir.join(file_name(algorithm, heuristic, start.len()));
    let is_new = !file_path.exists();
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&file_path)?;

    if is_new {
        writeln!(file, "Algorithm: {}", algorithm.label())?;
        writeln!(file, "Heuristic: {}", heuristic.label())?;
        writeln!(file, "Size: {}", start.len())?;
    }
    writeln!(file, "{}", record_line(path))?;
    Ok(file_path)
}

/// Aggregates every record file in `dir` into a timestamped summary with the
/// record count and mean move count per combination. Returns the summary
/// path.
pub fn compile(dir: &Path) -> io::Result<PathBuf> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|error| io::Error::new(io::ErrorKind::Other, error))?
        .as_secs();
    let summary_path = dir.join(format!("report_{stamp}.txt"));

    let mut record_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "txt")
                && !path
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy().starts_with("report_"))
        })
        .collect();
    record_files.sort();

    let mut summary = fs::File::create(&summary_path)?;
    writeln!(summary, "Report: {stamp}")?;
    writeln!(summary, "--------------------")?;
    for path in record_files {
        let contents = fs::read_to_string(&path)?;
        writeln!(summary)?;
        write!(summary, "{}", summarize(&contents))?;
    }
    Ok(summary_path)
}

/// Echoes a record file's header and appends solved-count and mean-moves
/// lines computed from its records.
fn summarize(contents: &str) -> String {
    let mut section = String::new();
    let mut move_counts: Vec<u64> = Vec::new();

    for line in contents.lines() {
        let is_record = line
            .split_once(':')
            .and_then(|(prefix, _)| prefix.trim().parse::<u64>().ok())
            .map(|moves| move_counts.push(moves))
            .is_some();
        if !is_record {
            section.push_str(line);
            section.push('\n');
        }
    }

    section.push_str(&format!("Solved: {}\n", move_counts.len()));
    if !move_counts.is_empty() {
        let mean = move_counts.iter().sum::<u64>() as f64 / move_counts.len() as f64;
        section.push_str(&format!("Mean moves: {mean:.2}\n"));
    }
    section
}
