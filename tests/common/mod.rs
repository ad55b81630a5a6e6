//! Shared test support: render a formula through the DIMACS writer, parse
//! the text back, and solve it with varisat to check the encoded semantics.

#![allow(dead_code)]

use std::collections::HashMap;

use primecnf::encoder::formula::bit_name;
use primecnf::encoder::{dimacs, Formula, Session};
use varisat::{ExtendFormula, Lit, Solver};

pub struct CnfFile {
    pub var_ids: HashMap<String, i64>,
    pub clauses: Vec<Vec<i64>>,
    pub num_vars: usize,
    pub num_clauses: usize,
}

pub fn render(session: &Session, formula: &Formula) -> String {
    let mut buf = Vec::new();
    dimacs::write_dimacs(session, formula, &mut buf).expect("rendering cnf to memory");
    String::from_utf8(buf).expect("cnf output is ascii")
}

pub fn parse_dimacs(text: &str) -> CnfFile {
    let mut var_ids = HashMap::new();
    let mut clauses = Vec::new();
    let mut num_vars = 0;
    let mut num_clauses = 0;
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("cv ") {
            let mut parts = rest.split_whitespace();
            let name = parts
                .next()
                .expect("cv line carries a name")
                .trim_start_matches('<')
                .trim_end_matches('>');
            let id: i64 = parts
                .next()
                .expect("cv line carries an id")
                .parse()
                .expect("cv id is numeric");
            var_ids.insert(name.to_string(), id);
        } else if let Some(rest) = line.strip_prefix("p cnf ") {
            let mut parts = rest.split_whitespace();
            num_vars = parts.next().unwrap().parse().unwrap();
            num_clauses = parts.next().unwrap().parse().unwrap();
        } else if line.starts_with('c') || line.is_empty() {
            // comment
        } else {
            let lits: Vec<i64> = line
                .split_whitespace()
                .map(|t| t.parse().expect("clause literals are numeric"))
                .take_while(|&l| l != 0)
                .collect();
            clauses.push(lits);
        }
    }
    CnfFile {
        var_ids,
        clauses,
        num_vars,
        num_clauses,
    }
}

/// Solves the parsed CNF; `Some` maps every DIMACS id to its model value.
pub fn solve(cnf: &CnfFile) -> Option<HashMap<i64, bool>> {
    let mut solver = Solver::new();
    for clause in &cnf.clauses {
        let lits: Vec<Lit> = clause
            .iter()
            .map(|&l| Lit::from_dimacs(l as isize))
            .collect();
        solver.add_clause(&lits);
    }
    if solver.solve().expect("sat solver ran") {
        let model = solver.model().expect("model accompanies a sat result");
        Some(
            model
                .into_iter()
                .map(|lit| (lit.var().index() as i64 + 1, lit.is_positive()))
                .collect(),
        )
    } else {
        None
    }
}

pub fn value_of(cnf: &CnfFile, model: &HashMap<i64, bool>, name: &str) -> bool {
    let id = cnf
        .var_ids
        .get(name)
        .unwrap_or_else(|| panic!("{} missing from the cv map", name));
    model.get(id).copied().unwrap_or(false)
}

/// Reads the unsigned integer held by the n-bit bus `base`, LSB first.
pub fn uint_of(cnf: &CnfFile, model: &HashMap<i64, bool>, base: &str, n: u32) -> u64 {
    (0..n)
        .filter(|&i| value_of(cnf, model, &bit_name(base, i)))
        .fold(0u64, |acc, i| acc | (1 << i))
}

/// Render, parse and solve in one step.
pub fn solve_formula(session: &Session, formula: &Formula) -> Option<(CnfFile, HashMap<i64, bool>)> {
    let cnf = parse_dimacs(&render(session, formula));
    solve(&cnf).map(|model| (cnf, model))
}
