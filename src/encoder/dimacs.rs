//! Finalisation: collect the variables a formula references, assign dense
//! DIMACS identifiers, and write the clause list out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::formula::{Formula, Sym};
use super::Session;

fn starts_uppercase(name: &str) -> bool {
    name.as_bytes().first().is_some_and(|b| b.is_ascii_uppercase())
}

/// Writes the formula in DIMACS form.
///
/// Identifiers are assigned by sorting the referenced names with all
/// lowercase-initial names before the uppercase-initial ones and
/// lexicographically within each group; user-supplied inputs use lowercase
/// by convention and so receive the low identifiers. Before the `p cnf`
/// header, three blank comment lines and one `cv <name> <id>` comment per
/// variable document the mapping, in plain lexicographic name order.
pub fn write_dimacs<W: Write>(session: &Session, formula: &Formula, out: &mut W) -> Result<()> {
    debug!("collecting variable names");
    let mut seen = vec![false; session.names.len()];
    for clause in &formula.clauses {
        for lit in clause {
            seen[lit.var().index()] = true;
        }
    }
    let mut names: Vec<(&str, Sym)> = session
        .names
        .iter()
        .filter(|(_, sym)| seen[sym.index()])
        .collect();

    debug!(
        variables = names.len(),
        clauses = formula.clauses.len(),
        "assigning identifiers"
    );
    names.sort_by(|(a, _), (b, _)| {
        starts_uppercase(a)
            .cmp(&starts_uppercase(b))
            .then_with(|| a.cmp(b))
    });
    let mut ids = vec![0u64; session.names.len()];
    for (k, (_, sym)) in names.iter().enumerate() {
        ids[sym.index()] = k as u64 + 1;
    }

    writeln!(out, "c")?;
    writeln!(out, "c")?;
    writeln!(out, "c")?;
    let mut by_name = names.clone();
    by_name.sort();
    for (name, sym) in &by_name {
        writeln!(out, "cv <{}> {}", name, ids[sym.index()])?;
    }

    writeln!(out, "p cnf {} {}", names.len(), formula.clauses.len())?;
    debug!("writing clauses");
    for clause in &formula.clauses {
        for lit in clause {
            if !lit.is_positive() {
                write!(out, "-")?;
            }
            write!(out, "{} ", ids[lit.var().index()])?;
        }
        writeln!(out, "0")?;
    }
    Ok(())
}

/// Writes the formula to a file, creating or truncating it. A failure to
/// open or write the file is surfaced to the caller; a partially written
/// file must be treated as invalid.
pub fn write_dimacs_file(session: &Session, formula: &Formula, path: &Path) -> Result<()> {
    info!(path = %path.display(), clauses = formula.len(), "writing cnf");
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_dimacs(session, formula, &mut out)?;
    out.flush()
        .with_context(|| format!("failed to flush output file {}", path.display()))?;
    info!(path = %path.display(), "cnf written");
    Ok(())
}
