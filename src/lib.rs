//! CNF generation for arithmetic and number-theoretic predicates.
//!
//! The [`encoder`] module turns predicates over fixed-width unsigned integers
//! (addition, multiplication, modular exponentiation, primality,
//! compositeness) into propositional clauses over named boolean variables and
//! writes them out in DIMACS form for an external SAT solver.

pub mod encoder;
