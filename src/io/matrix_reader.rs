use std::fs::File;
use std::io::{BufRead, BufReader, Lines};

use anyhow::{bail, Context};
use itertools::Itertools;

use mst::graph::DenseAdjacency;

use crate::problem::{GraphInstance, Weight};

/**
Structure of instance files (distance-matrix format).

The file starts with keyed header lines:

NAME:    <unique instance identification>
SIZE:    <number of vertices n>
LABELS:  <n whitespace-separated vertex labels>     (optional)

Then a line containing the word MATRIX is followed by n lines of n values
each, separated by whitespace or commas, giving the symmetric distance
matrix. A value is either a non-negative decimal weight or one of the
tokens `0`, `x`, `none`, `inf` (case-insensitive), all of which mean
"no edge between these two vertices". The diagonal must be zero.

The file ends with a line containing the word EOF. Blank lines are
ignored throughout.
*/
pub fn load_instance(path: impl Into<String>) -> anyhow::Result<GraphInstance> {
    let path = path.into();
    let f = File::open(&path).with_context(|| format!("cannot open instance file {}", path))?;
    let file = BufReader::new(&f);

    let mut lines = file.lines();

    let name = parse_keyed_line(&mut lines, "NAME")?;
    let size = parse_keyed_line(&mut lines, "SIZE")?;
    let num_vertices: usize = size
        .parse()
        .with_context(|| format!("SIZE must be a positive integer, got '{}'", size))?;
    if num_vertices == 0 {
        bail!("SIZE must be positive");
    }

    let mut labels = None;
    let mut line = next_line(&mut lines).context("expected LABELS or MATRIX after the header")?;
    if let Some(rest) = line.strip_prefix("LABELS:") {
        let parsed: Vec<String> = rest.split_whitespace().map(|it| it.to_string()).collect();
        if parsed.len() != num_vertices {
            bail!("expected {} labels, got {}", num_vertices, parsed.len());
        }
        labels = Some(parsed);
        line = next_line(&mut lines).context("expected MATRIX after LABELS")?;
    }
    if line.trim() != "MATRIX" {
        bail!("expected MATRIX section, found '{}'", line.trim());
    }

    let mut rows: Vec<Vec<Weight>> = Vec::with_capacity(num_vertices);
    for i in 0..num_vertices {
        let row_line =
            next_line(&mut lines).with_context(|| format!("matrix row {} is missing", i + 1))?;
        let row = parse_row(&row_line, num_vertices)
            .with_context(|| format!("matrix row {}", i + 1))?;
        rows.push(row);
    }

    let eof = next_line(&mut lines).context("expected EOF marker after the matrix")?;
    if eof.trim() != "EOF" {
        bail!("expected EOF marker after the matrix, found '{}'", eof.trim());
    }

    // guarantees the core adapter leaves to its caller
    for (i, j) in (0..num_vertices).tuple_combinations() {
        if rows[i][j] != rows[j][i] {
            bail!(
                "matrix is not symmetric: [{}][{}] = {} but [{}][{}] = {}",
                i, j, rows[i][j], j, i, rows[j][i]
            );
        }
    }
    for (i, row) in rows.iter().enumerate() {
        if row[i] != 0.0 {
            bail!("diagonal entry [{}][{}] must be zero", i, i);
        }
    }

    let adjacency = DenseAdjacency::from_weights(&rows)?;

    Ok(GraphInstance {
        name,
        labels,
        adjacency,
    })
}

fn next_line(lines: &mut Lines<BufReader<&File>>) -> anyhow::Result<String> {
    loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    return Ok(line);
                }
            }
            None => bail!("unexpected end of file"),
        }
    }
}

fn parse_keyed_line(lines: &mut Lines<BufReader<&File>>, key: &str) -> anyhow::Result<String> {
    let line = next_line(lines).with_context(|| format!("expected '{}' line", key))?;
    let mut split = line.splitn(2, ':');
    let found = split.next().unwrap_or("").trim();
    if found != key {
        bail!("expected '{}' line, found '{}'", key, line.trim());
    }
    Ok(split.next().map(|it| it.trim().to_string()).unwrap_or_default())
}

fn parse_row(line: &str, num_vertices: usize) -> anyhow::Result<Vec<Weight>> {
    let cleaned = line.replace(',', " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.len() != num_vertices {
        bail!("expected {} values, got {}", num_vertices, tokens.len());
    }
    tokens.iter().map(|tok| parse_token(tok)).collect()
}

// `x`, `none` and `inf` mark absent edges, as does a plain `0`
fn parse_token(tok: &str) -> anyhow::Result<Weight> {
    let t = tok.to_ascii_lowercase();
    if matches!(t.as_str(), "x" | "none" | "inf") {
        return Ok(0.0);
    }
    let w: Weight = t
        .parse()
        .with_context(|| format!("invalid weight token '{}'", tok))?;
    if !w.is_finite() || w < 0.0 {
        bail!("weight token '{}' must be a finite non-negative number", tok);
    }
    Ok(w)
}
