//! Word-level comparisons: bitwise equality, asserted unsigned less-than,
//! and (in)equality against integer constants.

use super::formula::{bit_name, bit_of, zeropad, Clause, Formula};
use super::Session;

impl Session {
    /// in_a == in_b over n bits. Two clauses per bit, no helper wires.
    pub fn equals_nbit(&mut self, in_a: &str, in_b: &str, n: u32) -> Formula {
        let mut f = Formula::new();
        for i in 0..n {
            let a = bit_name(in_a, i);
            let b = bit_name(in_b, i);
            f.push(vec![self.neg(&a), self.pos(&b)]);
            f.push(vec![self.pos(&a), self.neg(&b)]);
        }
        f
    }

    /// Asserts in_a < in_b (unsigned, LSB first). No result wire is exposed:
    /// the constraint holds iff the comparison does.
    ///
    /// Per bit i it introduces eq_i and lt_i, plus alleq_i = "bits i..n all
    /// agree" chained down from the most significant end. res_i then says the
    /// operands agree strictly above i and differ in in_b's favour at i, and
    /// the final clause requires some res_i to hold.
    pub fn less_than_nbit(&mut self, in_a: &str, in_b: &str, n: u32) -> Formula {
        assert!(n > 0, "comparison width must be positive");
        self.counters.less_than_nbit += 1;
        let base = format!("LessThanNBit_{}", zeropad(self.counters.less_than_nbit));
        let eq = format!("{}_eq", base);
        let lt = format!("{}_lt", base);
        let alleq = format!("{}_alleq", base);
        let res = format!("{}_res", base);

        let mut f = Formula::new();
        for i in 0..n {
            f.extend(self.equals_1bit(&bit_name(in_a, i), &bit_name(in_b, i), &bit_name(&eq, i)));
        }
        for i in 0..n {
            f.extend(self.less_than_1bit(&bit_name(in_a, i), &bit_name(in_b, i), &bit_name(&lt, i)));
        }
        // above the top bit everything trivially agrees
        f.push(vec![self.pos(&bit_name(&alleq, n))]);
        for i in 0..n {
            f.extend(self.and_1bit(&bit_name(&alleq, i + 1), &bit_name(&eq, i), &bit_name(&alleq, i)));
        }
        for i in 0..n {
            f.extend(self.and_1bit(&bit_name(&alleq, i + 1), &bit_name(&lt, i), &bit_name(&res, i)));
        }
        let hit: Clause = (0..n).map(|i| self.pos(&bit_name(&res, i))).collect();
        f.push(hit);
        f
    }

    /// Pins `input` to `value`: one unit clause per bit.
    pub fn input_equals(&mut self, input: &str, value: u64, n: u32) -> Formula {
        let mut f = Formula::new();
        for i in 0..n {
            f.push(vec![self.lit(&bit_name(input, i), bit_of(value, i))]);
        }
        f
    }

    /// Excludes one value: a single clause requiring some bit of `input` to
    /// differ from the corresponding bit of `value`.
    pub fn input_not_equals(&mut self, input: &str, value: u64, n: u32) -> Formula {
        let clause: Clause = (0..n)
            .map(|i| self.lit(&bit_name(input, i), !bit_of(value, i)))
            .collect();
        let mut f = Formula::new();
        f.push(clause);
        f
    }
}
