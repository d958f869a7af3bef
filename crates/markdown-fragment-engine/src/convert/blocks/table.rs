use crate::convert::source::LineRef;

use super::{
    kinds::{Alignment, CodeFence, FenceKind, TableRow},
    types::Table,
};

/// Output of the table extractor: untouched lines interleaved with tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Line(LineRef<'a>),
    Table(Table),
}

/// Splits a line stream into lines and tables.
///
/// Consecutive pipe rows are buffered into a run. A run becomes a table only
/// if it has at least two lines and a separator row at an index > 0; the row
/// just before the separator is the header. Anything else in the run passes
/// through as plain lines. Lines inside fenced code are never buffered.
pub fn extract_tables<'a>(lines: impl IntoIterator<Item = LineRef<'a>>) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut run: Vec<LineRef<'a>> = Vec::new();
    let mut fence: Option<FenceKind> = None;

    for line in lines {
        if let Some(kind) = fence {
            if CodeFence::closes(kind, CodeFence::sig(line.text)) {
                fence = None;
            }
            out.push(Segment::Line(line));
            continue;
        }
        if let Some(sig) = CodeFence::sig(line.text) {
            flush_run(&mut run, &mut out);
            fence = Some(CodeFence::kind(sig));
            out.push(Segment::Line(line));
            continue;
        }
        if TableRow::is_row(line.text) {
            run.push(line);
            continue;
        }
        flush_run(&mut run, &mut out);
        out.push(Segment::Line(line));
    }
    flush_run(&mut run, &mut out);
    out
}

fn flush_run<'a>(run: &mut Vec<LineRef<'a>>, out: &mut Vec<Segment<'a>>) {
    if run.is_empty() {
        return;
    }
    let lines = std::mem::take(run);
    match find_separator(&lines) {
        Some(sep) => {
            out.extend(lines[..sep - 1].iter().copied().map(Segment::Line));
            out.push(Segment::Table(build_table(&lines[sep - 1..])));
        }
        None => {
            if lines.len() > 1 {
                log::debug!(
                    "pipe rows at bytes {}..{} have no separator, keeping as text",
                    lines[0].span.start,
                    lines[lines.len() - 1].span.end
                );
            }
            out.extend(lines.into_iter().map(Segment::Line));
        }
    }
}

fn find_separator(lines: &[LineRef<'_>]) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, l)| TableRow::is_separator(l.text))
        .map(|(i, _)| i)
}

/// Builds a table from `[header, separator, body...]`.
fn build_table(lines: &[LineRef<'_>]) -> Table {
    let header = TableRow::cells(lines[0].text);
    let width = header.len();

    let mut alignments = TableRow::alignments(lines[1].text);
    alignments.resize(width, Alignment::Left);

    let rows = lines[2..]
        .iter()
        .filter(|l| !TableRow::is_separator(l.text))
        .map(|l| {
            let mut cells = TableRow::cells(l.text);
            cells.resize(width, String::new());
            cells
        })
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    Table {
        header,
        alignments,
        rows,
    }
}
