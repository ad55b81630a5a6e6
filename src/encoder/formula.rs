use std::collections::HashMap;

/// Interned variable name. Two symbols are the same variable iff their full
/// name strings are identical; the handle is just a dense index into the
/// session's [`NameTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sym(u32);

impl Sym {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only table mapping variable names to [`Sym`] handles.
///
/// Names are interned eagerly while clauses are built, so the rest of the
/// pipeline never compares strings; the DIMACS finaliser resolves handles
/// back to names once, when assigning solver identifiers.
#[derive(Debug, Default, Clone)]
pub struct NameTable {
    names: Vec<String>,
    index: HashMap<String, Sym>,
}

impl NameTable {
    pub fn intern(&mut self, name: &str) -> Sym {
        if let Some(&sym) = self.index.get(name) {
            return sym;
        }
        let sym = Sym(self.names.len() as u32);
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), sym);
        sym
    }

    pub fn lookup(&self, name: &str) -> Option<Sym> {
        self.index.get(name).copied()
    }

    pub fn resolve(&self, sym: Sym) -> &str {
        &self.names[sym.index()]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Sym)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), Sym(i as u32)))
    }
}

/// Boolean literal: a variable handle plus a polarity (`true` = positive).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit(pub Sym, pub bool);

impl Lit {
    pub fn var(self) -> Sym {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.1
    }

    pub fn negated(self) -> Lit {
        Lit(self.0, !self.1)
    }
}

/// Disjunction of literals. The empty clause is FALSE.
pub type Clause = Vec<Lit>;

/// Ordered list of clauses, read as a conjunction. Duplicates are allowed;
/// the order carries no meaning beyond making the emitted file deterministic.
#[derive(Debug, Default, Clone)]
pub struct Formula {
    pub clauses: Vec<Clause>,
}

impl Formula {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn extend(&mut self, other: Formula) {
        self.clauses.extend(other.clauses);
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Every variable referenced by the formula, sorted and deduplicated.
    pub fn vars(&self) -> Vec<Sym> {
        let mut vars: Vec<Sym> = self
            .clauses
            .iter()
            .flatten()
            .map(|lit| lit.var())
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Evaluates the formula under a total assignment. Variables missing from
    /// the map read as false. Useful for checking solver models against the
    /// emitted clauses.
    pub fn holds_under(&self, assignment: &HashMap<Sym, bool>) -> bool {
        self.clauses.iter().all(|clause| {
            clause.iter().any(|lit| {
                assignment.get(&lit.var()).copied().unwrap_or(false) == lit.is_positive()
            })
        })
    }
}

/// Zero-padded decimal rendering used for every index embedded in a variable
/// name. The fixed width keeps lexicographic order equal to numeric order.
pub fn zeropad(i: u64) -> String {
    format!("{:010}", i)
}

/// Name of bit `i` of the value named `base`. Bit 0 is the least significant.
pub fn bit_name(base: &str, i: u32) -> String {
    format!("{}_{}", base, zeropad(u64::from(i)))
}

/// Well-known n-bit constant 1. Front-ends assert its value exactly once per
/// width used in the problem.
pub fn one_nbit(n: u32) -> String {
    format!("One_NBit_{}", zeropad(u64::from(n)))
}

/// Well-known constant-false wire, asserted once by the front-end.
pub fn zero_1bit() -> String {
    format!("Zero_1Bit_{}", zeropad(1))
}

/// Bit `i` of `value`, reading out-of-range positions as zero.
pub fn bit_of(value: u64, i: u32) -> bool {
    i < u64::BITS && (value >> i) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeropad_is_ten_digits_and_order_preserving() {
        assert_eq!(zeropad(0), "0000000000");
        assert_eq!(zeropad(42), "0000000042");
        assert!(zeropad(9) < zeropad(10));
        assert!(zeropad(99) < zeropad(100));
    }

    #[test]
    fn bit_names_are_distinct_per_index() {
        assert_eq!(bit_name("target", 0), "target_0000000000");
        assert_ne!(bit_name("target", 1), bit_name("target", 10));
    }

    #[test]
    fn well_known_names() {
        assert_eq!(one_nbit(4), "One_NBit_0000000004");
        assert_eq!(zero_1bit(), "Zero_1Bit_0000000001");
    }

    #[test]
    fn interning_is_idempotent() {
        let mut names = NameTable::default();
        let a = names.intern("a");
        let b = names.intern("b");
        assert_ne!(a, b);
        assert_eq!(names.intern("a"), a);
        assert_eq!(names.resolve(b), "b");
        assert_eq!(names.lookup("b"), Some(b));
        assert_eq!(names.lookup("c"), None);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn holds_under_reads_polarity() {
        let mut names = NameTable::default();
        let x = names.intern("x");
        let y = names.intern("y");
        let mut f = Formula::new();
        f.push(vec![Lit(x, true), Lit(y, false)]);

        let mut assignment = HashMap::new();
        assignment.insert(x, false);
        assignment.insert(y, true);
        assert!(!f.holds_under(&assignment));

        assignment.insert(y, false);
        assert!(f.holds_under(&assignment));
    }

    #[test]
    fn bit_of_reads_lsb_first() {
        assert!(bit_of(5, 0));
        assert!(!bit_of(5, 1));
        assert!(bit_of(5, 2));
        assert!(!bit_of(5, 64));
    }
}
