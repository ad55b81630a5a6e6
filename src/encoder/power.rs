//! Higher-level arithmetic built from the word-level operators: binary
//! exponentiation, modular exponentiation on doubled width, and n-ary sums
//! and products.

use super::formula::{bit_name, one_nbit, zero_1bit, zeropad, Formula};
use super::Session;

impl Session {
    /// result == in_a ** in_b at width n, by repeated squaring.
    ///
    /// The square chain sq_0 = in_a, sq_{i+1} = sq_i^2 keeps its per-step
    /// overflow wires; the accumulator multiplies in sq_i or 1 depending on
    /// exponent bit i. The exposed overflow is the OR of the accumulator
    /// overflows with the squaring overflows, the latter masked so a
    /// squaring overflow only counts when some higher exponent bit actually
    /// uses that power.
    pub fn pow_nbit(
        &mut self,
        in_a: &str,
        in_b: &str,
        result: &str,
        overflow: &str,
        n: u32,
    ) -> Formula {
        assert!(n > 0, "exponentiation width must be positive");
        self.counters.pow_nbit += 1;
        let base = format!("PowNBit_{}", zeropad(self.counters.pow_nbit));
        let sq = format!("{}_sq", base);
        let sqov = format!("{}_sqov", base);
        let sel = format!("{}_sel", base);
        let acc = format!("{}_acc", base);
        let accov = format!("{}_accov", base);
        let sqov_acc = format!("{}_sqovacc", base);
        let hi_ov = format!("{}_hiov", base);
        let one = one_nbit(n);

        let mut f = self.equals_nbit(&bit_name(&sq, 0), in_a, n);
        for i in 0..n {
            f.extend(self.mul_nbit(
                &bit_name(&sq, i),
                &bit_name(&sq, i),
                &bit_name(&sq, i + 1),
                &bit_name(&sqov, i),
                n,
            ));
        }
        for i in 0..n {
            f.extend(self.mux_nbit(
                &bit_name(&sq, i),
                &one,
                &bit_name(in_b, i),
                &bit_name(&sel, i),
                n,
            ));
        }
        f.extend(self.input_equals(&bit_name(&acc, 0), 1, n));
        for i in 0..n {
            f.extend(self.mul_nbit(
                &bit_name(&sel, i),
                &bit_name(&acc, i),
                &bit_name(&acc, i + 1),
                &bit_name(&accov, i),
                n,
            ));
        }
        f.extend(self.equals_nbit(result, &bit_name(&acc, n), n));

        // running OR of the squaring overflows
        f.push(vec![self.neg(&bit_name(&sqov_acc, 0))]);
        for i in 0..n {
            f.extend(self.or_1bit(
                &bit_name(&sqov_acc, i),
                &bit_name(&sqov, i),
                &bit_name(&sqov_acc, i + 1),
            ));
        }
        // a squaring overflow matters only below a set exponent bit
        for i in 0..n {
            f.extend(self.mux_1bit(
                &bit_name(&sqov_acc, i + 1),
                &zero_1bit(),
                &bit_name(in_b, i + 1),
                &bit_name(&hi_ov, i),
            ));
        }
        let accov_any = format!("{}_accov_any", base);
        let hi_ov_any = format!("{}_hiov_any", base);
        f.extend(self.or_reduce(&accov, &accov_any, n));
        f.extend(self.or_reduce(&hi_ov, &hi_ov_any, n));
        f.extend(self.or_1bit(&accov_any, &hi_ov_any, overflow));
        f
    }

    /// result == (base ** exp) % modulus at width n.
    ///
    /// Operands are zero-extended to 2n bits and every intermediate product
    /// is reduced modulo `modulus`, so nothing can overflow the doubled
    /// width as long as modulus < 2^n. The result compares only the low n
    /// bits of the final partial result.
    pub fn powmod_nbit(
        &mut self,
        base_in: &str,
        exp: &str,
        modulus: &str,
        result: &str,
        n: u32,
    ) -> Formula {
        assert!(n > 0, "modular exponentiation width must be positive");
        self.counters.powmod_nbit += 1;
        let base = format!("PowModNBit_{}", zeropad(self.counters.powmod_nbit));
        let base2x = format!("{}_base2x", base);
        let exp2x = format!("{}_exp2x", base);
        let mod2x = format!("{}_mod2x", base);
        let part = format!("{}_part", base);
        let cur = format!("{}_cur", base);
        let sel = format!("{}_sel", base);
        let mul = format!("{}_mul", base);
        let mulov = format!("{}_mulov", base);
        let quot1 = format!("{}_quot1", base);
        let sq = format!("{}_sq", base);
        let sqov = format!("{}_sqov", base);
        let quot2 = format!("{}_quot2", base);
        let wide = 2 * n;
        let one = one_nbit(wide);

        let mut f = self.zero_extend(base_in, &base2x, n);
        f.extend(self.zero_extend(exp, &exp2x, n));
        f.extend(self.zero_extend(modulus, &mod2x, n));

        f.extend(self.input_equals(&bit_name(&part, 0), 1, wide));
        f.extend(self.equals_nbit(&bit_name(&cur, 0), &base2x, wide));

        for i in 0..n {
            // sel_i = exp_i ? cur_i : 1
            f.extend(self.mux_nbit(
                &bit_name(&cur, i),
                &one,
                &bit_name(&exp2x, i),
                &bit_name(&sel, i),
                wide,
            ));
            // part_{i+1} = part_i * sel_i mod m
            f.extend(self.mul_nbit(
                &bit_name(&part, i),
                &bit_name(&sel, i),
                &bit_name(&mul, i),
                &bit_name(&mulov, i),
                wide,
            ));
            f.extend(self.divmod_nbit(
                &bit_name(&mul, i),
                &mod2x,
                &bit_name(&quot1, i),
                &bit_name(&part, i + 1),
                wide,
            ));
            // cur_{i+1} = cur_i^2 mod m
            f.extend(self.mul_nbit(
                &bit_name(&cur, i),
                &bit_name(&cur, i),
                &bit_name(&sq, i),
                &bit_name(&sqov, i),
                wide,
            ));
            f.extend(self.divmod_nbit(
                &bit_name(&sq, i),
                &mod2x,
                &bit_name(&quot2, i),
                &bit_name(&cur, i + 1),
                wide,
            ));
        }
        f.extend(self.equals_nbit(result, &bit_name(&part, n), n));
        f
    }

    /// output == input_0 + ... + input_{data_count-1} at the given width;
    /// `overflow` is the OR of the per-step carry-outs.
    pub fn sum_nbit(
        &mut self,
        input: &str,
        output: &str,
        overflow: &str,
        data_count: u32,
        bits: u32,
    ) -> Formula {
        self.counters.sum_nbit += 1;
        let base = format!("SumNBit_{}", zeropad(self.counters.sum_nbit));
        let acc = format!("{}_acc", base);
        let ov = format!("{}_ov", base);

        let mut f = self.input_equals(&bit_name(&acc, 0), 0, bits);
        for i in 0..data_count {
            f.extend(self.add_nbit(
                &bit_name(input, i),
                &bit_name(&acc, i),
                &bit_name(&acc, i + 1),
                &bit_name(&ov, i),
                bits,
            ));
        }
        f.extend(self.equals_nbit(output, &bit_name(&acc, data_count), bits));
        f.extend(self.or_reduce(&ov, overflow, data_count));
        f
    }

    /// output == input_0 * ... * input_{data_count-1} at the given width;
    /// `overflow` is the OR of the per-step multiplication overflows.
    pub fn product_nbit(
        &mut self,
        input: &str,
        output: &str,
        overflow: &str,
        data_count: u32,
        bits: u32,
    ) -> Formula {
        self.counters.product_nbit += 1;
        let base = format!("ProductNBit_{}", zeropad(self.counters.product_nbit));
        let acc = format!("{}_acc", base);
        let ov = format!("{}_ov", base);

        let mut f = self.input_equals(&bit_name(&acc, 0), 1, bits);
        for i in 0..data_count {
            f.extend(self.mul_nbit(
                &bit_name(input, i),
                &bit_name(&acc, i),
                &bit_name(&acc, i + 1),
                &bit_name(&ov, i),
                bits,
            ));
        }
        f.extend(self.equals_nbit(output, &bit_name(&acc, data_count), bits));
        f.extend(self.or_reduce(&ov, overflow, data_count));
        f
    }
}
