//! N-bit arithmetic: ripple-carry addition, shift-and-add multiplication,
//! division via the multiply-and-add identity, and zero-extension.

use super::formula::{bit_name, zeropad, Clause, Formula};
use super::Session;

impl Session {
    /// in_a + in_b == result at width n; `overflow` is bound to the carry
    /// out of the top bit.
    ///
    /// Subtraction x = y - 1 is expressed by callers as
    /// `add_nbit(x, One_NBit, y, ov)` with ov forced 0.
    pub fn add_nbit(
        &mut self,
        in_a: &str,
        in_b: &str,
        result: &str,
        overflow: &str,
        n: u32,
    ) -> Formula {
        assert!(n > 0, "adder width must be positive");
        self.counters.add_nbit += 1;
        let carry = format!("AddNBit_{}_carry", zeropad(self.counters.add_nbit));

        let mut f = Formula::new();
        // no carry into bit 0
        f.push(vec![self.neg(&bit_name(&carry, 0))]);
        for i in 0..n {
            f.extend(self.add_1bit(
                &bit_name(in_a, i),
                &bit_name(in_b, i),
                &bit_name(&carry, i),
                &bit_name(result, i),
                &bit_name(&carry, i + 1),
            ));
        }
        // overflow <-> final carry
        f.push(vec![self.neg(overflow), self.pos(&bit_name(&carry, n))]);
        f.push(vec![self.pos(overflow), self.neg(&bit_name(&carry, n))]);
        f
    }

    /// Partial product row: result = (in_a ∧ in_b_bit) << shift over 2n
    /// bits. Bits below the shift and at shift+n and above are forced 0;
    /// `in_b_bit` is a single wire, not a bus.
    pub fn shifted_partial(
        &mut self,
        in_a: &str,
        in_b_bit: &str,
        result: &str,
        shift: u32,
        n: u32,
    ) -> Formula {
        let mut f = Formula::new();
        for i in 0..shift {
            f.push(vec![self.neg(&bit_name(result, i))]);
        }
        for i in 0..n {
            f.extend(self.and_1bit(&bit_name(in_a, i), in_b_bit, &bit_name(result, i + shift)));
        }
        for i in shift + n..2 * n {
            f.push(vec![self.neg(&bit_name(result, i))]);
        }
        f
    }

    /// in_a * in_b == result at width n, shift-and-add.
    ///
    /// One partial product per multiplier bit is accumulated through a
    /// 2n-bit adder chain; the low n bits of the final accumulator are the
    /// result and `overflow` holds iff any of its high n bits is set.
    pub fn mul_nbit(
        &mut self,
        in_a: &str,
        in_b: &str,
        result: &str,
        overflow: &str,
        n: u32,
    ) -> Formula {
        assert!(n > 0, "multiplier width must be positive");
        self.counters.mul_nbit += 1;
        let base = format!("MulNBit_{}", zeropad(self.counters.mul_nbit));
        let partial = format!("{}_partial", base);
        let acc = format!("{}_acc", base);
        let carry = format!("{}_carry", base);

        let mut f = Formula::new();
        for i in 0..n {
            f.extend(self.shifted_partial(
                in_a,
                &bit_name(in_b, i),
                &bit_name(&partial, i),
                i,
                n,
            ));
        }
        let acc0 = bit_name(&acc, 0);
        for i in 0..2 * n {
            f.push(vec![self.neg(&bit_name(&acc0, i))]);
        }
        for i in 0..n {
            f.extend(self.add_nbit(
                &bit_name(&partial, i),
                &bit_name(&acc, i),
                &bit_name(&acc, i + 1),
                &bit_name(&carry, i),
                2 * n,
            ));
        }
        let last = bit_name(&acc, n);
        for j in 0..n {
            f.push(vec![self.neg(&bit_name(result, j)), self.pos(&bit_name(&last, j))]);
            f.push(vec![self.pos(&bit_name(result, j)), self.neg(&bit_name(&last, j))]);
        }
        // overflow <-> some high accumulator bit is set
        let mut wide: Clause = vec![self.neg(overflow)];
        for j in n..2 * n {
            wide.push(self.pos(&bit_name(&last, j)));
        }
        f.push(wide);
        for j in n..2 * n {
            f.push(vec![self.pos(overflow), self.neg(&bit_name(&last, j))]);
        }
        f
    }

    /// in_a == in_b * div + rem with rem < in_b, all at width n and with
    /// neither the product nor the sum allowed to overflow. Total for
    /// in_b != 0; unsatisfiable when in_b == 0, so callers must exclude a
    /// zero divisor themselves.
    pub fn divmod_nbit(
        &mut self,
        in_a: &str,
        in_b: &str,
        div: &str,
        rem: &str,
        n: u32,
    ) -> Formula {
        self.counters.divmod_nbit += 1;
        let base = format!("DivModNBit_{}", zeropad(self.counters.divmod_nbit));
        let prod = format!("{}_prod", base);
        let mulov = format!("{}_mulov", base);
        let addov = format!("{}_addov", base);

        let mut f = self.mul_nbit(in_b, div, &prod, &mulov, n);
        f.extend(self.add_nbit(&prod, rem, in_a, &addov, n));
        f.push(vec![self.neg(&mulov)]);
        f.push(vec![self.neg(&addov)]);
        f.extend(self.less_than_nbit(rem, in_b, n));
        f
    }

    /// result[0..n] == in_a, result[n..2n] == 0.
    pub fn zero_extend(&mut self, in_a: &str, result: &str, n: u32) -> Formula {
        let mut f = self.equals_nbit(in_a, result, n);
        for i in n..2 * n {
            f.push(vec![self.neg(&bit_name(result, i))]);
        }
        f
    }
}
