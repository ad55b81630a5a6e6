//! Control structure: multiplexers, OR-reduction, and the clause-list
//! combinators used to disjoin and conjoin whole subformulas.

use super::formula::{bit_name, zeropad, Clause, Formula};
use super::Session;

/// Conjunction of two clause lists: plain concatenation.
pub fn and_condition(mut first: Formula, second: Formula) -> Formula {
    first.extend(second);
    first
}

impl Session {
    /// result = cond ? in_a : in_b, one bit each.
    pub fn mux_1bit(&mut self, in_a: &str, in_b: &str, cond: &str, result: &str) -> Formula {
        let mut f = Formula::new();
        f.push(vec![self.neg(cond), self.neg(in_a), self.pos(result)]);
        f.push(vec![self.neg(cond), self.pos(in_a), self.neg(result)]);
        f.push(vec![self.pos(cond), self.neg(in_b), self.pos(result)]);
        f.push(vec![self.pos(cond), self.pos(in_b), self.neg(result)]);
        f
    }

    /// result = cond ? in_a : in_b over n-bit buses; `cond` is a single wire.
    pub fn mux_nbit(
        &mut self,
        in_a: &str,
        in_b: &str,
        cond: &str,
        result: &str,
        n: u32,
    ) -> Formula {
        let mut f = Formula::new();
        for i in 0..n {
            f.extend(self.mux_1bit(
                &bit_name(in_a, i),
                &bit_name(in_b, i),
                cond,
                &bit_name(result, i),
            ));
        }
        f
    }

    /// result <-> (in_a_0 ∨ ... ∨ in_a_{n-1}): one wide clause pulling the
    /// result down and n small clauses pulling it up.
    pub fn or_reduce(&mut self, in_a: &str, result: &str, n: u32) -> Formula {
        let mut f = Formula::new();
        let mut wide: Clause = vec![self.neg(result)];
        for i in 0..n {
            wide.push(self.pos(&bit_name(in_a, i)));
        }
        f.push(wide);
        for i in 0..n {
            f.push(vec![self.pos(result), self.neg(&bit_name(in_a, i))]);
        }
        f
    }

    /// Disjunction of two clause lists via a fresh selector literal: the
    /// selector is added to every clause of `first` and its negation to
    /// every clause of `second`, so the result is satisfiable iff one of the
    /// two subformulas is.
    ///
    /// Sound only when the result is asserted at the top level; the selector
    /// polarity trick does not survive further negation.
    pub fn or_condition(&mut self, first: Formula, second: Formula) -> Formula {
        self.counters.or_condition += 1;
        let selector = format!("OrCond_{}", zeropad(self.counters.or_condition));
        let t = self.pos(&selector);
        let not_t = self.neg(&selector);

        let mut f = Formula::new();
        for mut clause in first.clauses {
            clause.push(t);
            f.push(clause);
        }
        for mut clause in second.clauses {
            clause.push(not_t);
            f.push(clause);
        }
        f
    }
}
