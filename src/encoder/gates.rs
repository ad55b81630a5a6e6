//! 1-bit gate templates. Each gate is the full CNF of its truth table over
//! the named wires; no combinational simplification is performed.

use super::formula::Formula;
use super::Session;

impl Session {
    /// result <-> in_a ∧ in_b
    pub fn and_1bit(&mut self, in_a: &str, in_b: &str, result: &str) -> Formula {
        let mut f = Formula::new();
        f.push(vec![self.pos(in_a), self.pos(in_b), self.neg(result)]);
        f.push(vec![self.pos(in_a), self.neg(in_b), self.neg(result)]);
        f.push(vec![self.neg(in_a), self.pos(in_b), self.neg(result)]);
        f.push(vec![self.neg(in_a), self.neg(in_b), self.pos(result)]);
        f
    }

    /// result <-> in_a ∨ in_b
    pub fn or_1bit(&mut self, in_a: &str, in_b: &str, result: &str) -> Formula {
        let mut f = Formula::new();
        f.push(vec![self.neg(in_a), self.neg(in_b), self.pos(result)]);
        f.push(vec![self.neg(in_a), self.pos(in_b), self.pos(result)]);
        f.push(vec![self.pos(in_a), self.neg(in_b), self.pos(result)]);
        f.push(vec![self.pos(in_a), self.pos(in_b), self.neg(result)]);
        f
    }

    /// result <-> (in_a = in_b)
    pub fn equals_1bit(&mut self, in_a: &str, in_b: &str, result: &str) -> Formula {
        let mut f = Formula::new();
        f.push(vec![self.pos(in_a), self.pos(in_b), self.pos(result)]);
        f.push(vec![self.pos(in_a), self.neg(in_b), self.neg(result)]);
        f.push(vec![self.neg(in_a), self.pos(in_b), self.neg(result)]);
        f.push(vec![self.neg(in_a), self.neg(in_b), self.pos(result)]);
        f
    }

    /// result <-> (¬in_a ∧ in_b), the single-bit strict less-than
    pub fn less_than_1bit(&mut self, in_a: &str, in_b: &str, result: &str) -> Formula {
        let mut f = Formula::new();
        f.push(vec![self.pos(in_a), self.pos(in_b), self.neg(result)]);
        f.push(vec![self.pos(in_a), self.neg(in_b), self.pos(result)]);
        f.push(vec![self.neg(in_a), self.pos(in_b), self.neg(result)]);
        f.push(vec![self.neg(in_a), self.neg(in_b), self.neg(result)]);
        f
    }

    /// result <-> in_a ⊕ in_b ⊕ carry_in, the sum bit of a full adder
    pub fn xor3_1bit(
        &mut self,
        in_a: &str,
        in_b: &str,
        carry_in: &str,
        result: &str,
    ) -> Formula {
        let mut f = Formula::new();
        f.push(vec![self.neg(in_a), self.neg(in_b), self.neg(carry_in), self.pos(result)]);
        f.push(vec![self.neg(in_a), self.neg(in_b), self.pos(carry_in), self.neg(result)]);
        f.push(vec![self.neg(in_a), self.pos(in_b), self.neg(carry_in), self.neg(result)]);
        f.push(vec![self.neg(in_a), self.pos(in_b), self.pos(carry_in), self.pos(result)]);
        f.push(vec![self.pos(in_a), self.neg(in_b), self.neg(carry_in), self.neg(result)]);
        f.push(vec![self.pos(in_a), self.neg(in_b), self.pos(carry_in), self.pos(result)]);
        f.push(vec![self.pos(in_a), self.pos(in_b), self.neg(carry_in), self.pos(result)]);
        f.push(vec![self.pos(in_a), self.pos(in_b), self.pos(carry_in), self.neg(result)]);
        f
    }

    /// carry_out <-> at least two of {in_a, in_b, carry_in}, the carry bit
    /// of a full adder
    pub fn majority_1bit(
        &mut self,
        in_a: &str,
        in_b: &str,
        carry_in: &str,
        carry_out: &str,
    ) -> Formula {
        let mut f = Formula::new();
        f.push(vec![self.neg(in_a), self.neg(in_b), self.neg(carry_in), self.pos(carry_out)]);
        f.push(vec![self.neg(in_a), self.neg(in_b), self.pos(carry_in), self.pos(carry_out)]);
        f.push(vec![self.neg(in_a), self.pos(in_b), self.neg(carry_in), self.pos(carry_out)]);
        f.push(vec![self.neg(in_a), self.pos(in_b), self.pos(carry_in), self.neg(carry_out)]);
        f.push(vec![self.pos(in_a), self.neg(in_b), self.neg(carry_in), self.pos(carry_out)]);
        f.push(vec![self.pos(in_a), self.neg(in_b), self.pos(carry_in), self.neg(carry_out)]);
        f.push(vec![self.pos(in_a), self.pos(in_b), self.neg(carry_in), self.neg(carry_out)]);
        f.push(vec![self.pos(in_a), self.pos(in_b), self.pos(carry_in), self.neg(carry_out)]);
        f
    }

    /// Full adder: in_a + in_b + carry_in == (result, carry_out)
    pub fn add_1bit(
        &mut self,
        in_a: &str,
        in_b: &str,
        carry_in: &str,
        result: &str,
        carry_out: &str,
    ) -> Formula {
        let mut f = self.majority_1bit(in_a, in_b, carry_in, carry_out);
        f.extend(self.xor3_1bit(in_a, in_b, carry_in, result));
        f
    }
}
