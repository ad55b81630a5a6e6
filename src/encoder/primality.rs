//! Number-theoretic certificates: Fermat tests, the bounded Pratt-style
//! primality certificate, and non-trivial factorisation.

use super::combine::and_condition;
use super::formula::{bit_name, one_nbit, zeropad, Formula};
use super::Session;

impl Session {
    /// Asserts generator ∉ {0, 1} and generator^exp % modulus == 1.
    pub fn fermat_unit(&mut self, generator: &str, exp: &str, modulus: &str, n: u32) -> Formula {
        self.counters.fermat_unit += 1;
        let residue = format!("FermatUnit_{}", zeropad(self.counters.fermat_unit));

        let mut f = self.input_not_equals(generator, 0, n);
        f.extend(self.input_not_equals(generator, 1, n));
        f.extend(self.powmod_nbit(generator, exp, modulus, &residue, n));
        f.extend(self.input_equals(&residue, 1, n));
        f
    }

    /// Fermat's little theorem for a prime candidate: asserts
    /// generator^(prime-1) % prime == 1. The exponent prime-1 is obtained
    /// with the adder trick pm1 + 1 = prime, overflow forced 0.
    pub fn fermat_little(&mut self, generator: &str, prime: &str, n: u32) -> Formula {
        self.counters.fermat_little += 1;
        let base = format!("FermatLittle_{}", zeropad(self.counters.fermat_little));
        let pm1 = format!("{}_pm1", base);
        let pm1ov = format!("{}_pm1ov", base);

        let mut f = self.add_nbit(&pm1, &one_nbit(n), prime, &pm1ov, n);
        f.push(vec![self.neg(&pm1ov)]);
        f.extend(self.fermat_unit(generator, &pm1, prime, n));
        f
    }

    /// Asserts generator ∉ {0, 1} and generator^exp % modulus != 1: a
    /// witness that `exp` does not already annihilate the generator's order.
    pub fn fermat_witness(&mut self, generator: &str, exp: &str, modulus: &str, n: u32) -> Formula {
        self.counters.fermat_witness += 1;
        let residue = format!("FermatWitness_{}", zeropad(self.counters.fermat_witness));

        let mut f = self.input_not_equals(generator, 0, n);
        f.extend(self.input_not_equals(generator, 1, n));
        f.extend(self.powmod_nbit(generator, exp, modulus, &residue, n));
        f.extend(self.input_not_equals(&residue, 1, n));
        f
    }

    /// Satisfiable iff `target` is prime, by encoding the existence of a
    /// Pratt-style certificate bounded to `num_prime` candidate primes.
    ///
    /// Candidate prime_0 is linked to the target; for every candidate, either
    /// the base case prime_i ∈ {2, 3} holds or prime_i - 1 factors as
    /// ∏_j prime_j^pow_i_j with at least two prime factors counted with
    /// multiplicity, a generator passes the full Fermat test, and for every
    /// used factor the partial exponent (prime_i - 1) / prime_j fails to
    /// reach residue 1. Since target - 1 < 2^n has at most n prime factors
    /// with multiplicity, num_prime = n bounds the certificate.
    pub fn is_prime(&mut self, target: &str, n: u32, num_prime: u32) -> Formula {
        assert!(n > 0, "primality width must be positive");
        assert!(num_prime > 0, "certificate needs at least one candidate prime");
        self.counters.is_prime += 1;
        let base = format!("IsPrime_{}", zeropad(self.counters.is_prime));
        let prime = format!("{}_prime", base);
        let pow = format!("{}_pow", base);
        let powtemp = format!("{}_powtemp", base);
        let powtempov = format!("{}_powtempov", base);
        let product = format!("{}_product", base);
        let productov = format!("{}_productov", base);
        let product_plus1 = format!("{}_productp1", base);
        let product_plus1ov = format!("{}_productp1ov", base);
        let sumpow = format!("{}_sumpow", base);
        let sumpowov = format!("{}_sumpowov", base);
        let prime_minus1 = format!("{}_pm1", base);
        let prime_minus1ov = format!("{}_pm1ov", base);
        let div = format!("{}_div", base);
        let rem = format!("{}_mod", base);
        let generator = format!("{}_gen", base);
        let np = num_prime;

        let mut f = Formula::new();
        for i in 0..np {
            f.extend(self.input_not_equals(&bit_name(&prime, i), 0, n));
        }
        for i in 0..np {
            f.extend(self.input_not_equals(&bit_name(&prime, i), 1, n));
        }

        // powtemp_i_j = prime_j ^ pow_i_j, overflow disallowed
        for i in 0..np {
            for j in 0..np {
                let pow_ij = bit_name(&bit_name(&pow, i), j);
                let temp_ij = bit_name(&bit_name(&powtemp, i), j);
                let tempov_ij = bit_name(&bit_name(&powtempov, i), j);
                f.extend(self.pow_nbit(&bit_name(&prime, j), &pow_ij, &temp_ij, &tempov_ij, n));
            }
        }
        for i in 0..np {
            for j in 0..np {
                let tempov_ij = bit_name(&bit_name(&powtempov, i), j);
                f.push(vec![self.neg(&tempov_ij)]);
            }
        }

        // product_i = ∏_j powtemp_i_j, overflow disallowed
        for i in 0..np {
            f.extend(self.product_nbit(
                &bit_name(&powtemp, i),
                &bit_name(&product, i),
                &bit_name(&productov, i),
                np,
                n,
            ));
        }
        for i in 0..np {
            f.push(vec![self.neg(&bit_name(&productov, i))]);
        }

        // product_plus1_i = product_i + 1, overflow disallowed
        for i in 0..np {
            f.extend(self.add_nbit(
                &bit_name(&product, i),
                &one_nbit(n),
                &bit_name(&product_plus1, i),
                &bit_name(&product_plus1ov, i),
                n,
            ));
        }
        for i in 0..np {
            f.push(vec![self.neg(&bit_name(&product_plus1ov, i))]);
        }

        // sumpow_i = Σ_j pow_i_j, overflow disallowed
        for i in 0..np {
            f.extend(self.sum_nbit(
                &bit_name(&pow, i),
                &bit_name(&sumpow, i),
                &bit_name(&sumpowov, i),
                np,
                n,
            ));
        }
        for i in 0..np {
            f.push(vec![self.neg(&bit_name(&sumpowov, i))]);
        }

        // base case or recursion: prime_i ∈ {2, 3}, or prime_i - 1 has a
        // certified factorisation with more than one factor
        for i in 0..np {
            let eq2 = self.input_equals(&bit_name(&prime, i), 2, n);
            let eq3 = self.input_equals(&bit_name(&prime, i), 3, n);
            let small = self.or_condition(eq2, eq3);
            let nontrivial = self.less_than_nbit(&one_nbit(n), &bit_name(&sumpow, i), n);
            let matches = self.equals_nbit(&bit_name(&product_plus1, i), &bit_name(&prime, i), n);
            let recursed = and_condition(nontrivial, matches);
            f.extend(self.or_condition(small, recursed));
        }

        // prime_minus1_i = prime_i - 1, via pm1 + 1 = prime_i
        for i in 0..np {
            f.extend(self.add_nbit(
                &bit_name(&prime_minus1, i),
                &one_nbit(n),
                &bit_name(&prime, i),
                &bit_name(&prime_minus1ov, i),
                n,
            ));
        }
        for i in 0..np {
            f.push(vec![self.neg(&bit_name(&prime_minus1ov, i))]);
        }

        // div_i_j, mod_i_j = (prime_i - 1) divmod prime_j
        for i in 0..np {
            for j in 0..np {
                let div_ij = bit_name(&bit_name(&div, i), j);
                let rem_ij = bit_name(&bit_name(&rem, i), j);
                f.extend(self.divmod_nbit(
                    &bit_name(&prime_minus1, i),
                    &bit_name(&prime, j),
                    &div_ij,
                    &rem_ij,
                    n,
                ));
            }
        }

        // per-factor Fermat witness, unless the factor is unused or the
        // candidate is a base-case prime
        for i in 0..np {
            for j in 0..np {
                let div_ij = bit_name(&bit_name(&div, i), j);
                let pow_ij = bit_name(&bit_name(&pow, i), j);
                let witness =
                    self.fermat_witness(&bit_name(&generator, i), &div_ij, &bit_name(&prime, i), n);
                let unused = self.input_equals(&pow_ij, 0, n);
                let either = self.or_condition(witness, unused);
                let eq2 = self.input_equals(&bit_name(&prime, i), 2, n);
                let eq3 = self.input_equals(&bit_name(&prime, i), 3, n);
                let small = self.or_condition(eq2, eq3);
                f.extend(self.or_condition(either, small));
            }
        }

        // full Fermat test, unless the candidate is a base-case prime
        for i in 0..np {
            let little = self.fermat_little(&bit_name(&generator, i), &bit_name(&prime, i), n);
            let eq2 = self.input_equals(&bit_name(&prime, i), 2, n);
            let eq3 = self.input_equals(&bit_name(&prime, i), 3, n);
            let small = self.or_condition(eq2, eq3);
            f.extend(self.or_condition(little, small));
        }

        f.extend(self.equals_nbit(target, &bit_name(&prime, 0), n));
        f
    }

    /// Satisfiable iff `target` has a non-trivial factorisation within n
    /// bits: target = factor1 * factor2 with both factors outside {0, 1}
    /// and no multiplication overflow.
    pub fn is_composite(&mut self, target: &str, n: u32) -> Formula {
        assert!(n > 0, "compositeness width must be positive");
        self.counters.is_composite += 1;
        let base = format!("IsComposite_{}", zeropad(self.counters.is_composite));
        let factor1 = format!("{}_factor1", base);
        let factor2 = format!("{}_factor2", base);
        let ov = format!("{}_ov", base);

        let mut f = self.mul_nbit(&factor1, &factor2, target, &ov, n);
        f.extend(self.input_not_equals(&factor1, 0, n));
        f.extend(self.input_not_equals(&factor2, 0, n));
        f.extend(self.input_not_equals(&factor1, 1, n));
        f.extend(self.input_not_equals(&factor2, 1, n));
        f.push(vec![self.neg(&ov)]);
        f
    }
}

#[cfg(test)]
mod tests {
    use super::super::Session;

    #[test]
    fn is_prime_links_the_target_to_the_first_candidate() {
        let mut s = Session::new();
        let f = s.is_prime("target", 2, 2);
        let names: Vec<&str> = f.vars().iter().map(|&v| s.names.resolve(v)).collect();
        assert!(names.contains(&"target_0000000000"));
        assert!(names.contains(&"IsPrime_0000000001_prime_0000000000_0000000000"));
        assert!(names.contains(&"IsPrime_0000000001_gen_0000000000_0000000000"));
    }

    #[test]
    fn is_composite_pins_down_the_overflow() {
        let mut s = Session::new();
        let f = s.is_composite("target", 3);
        let ov = s.names.lookup("IsComposite_0000000001_ov").unwrap();
        assert!(f
            .clauses
            .iter()
            .any(|c| c.len() == 1 && c[0].var() == ov && !c[0].is_positive()));
    }

    #[test]
    fn certificates_from_one_session_stay_disjoint() {
        let mut s = Session::new();
        let first = s.is_composite("t1", 2);
        let second = s.is_composite("t2", 2);
        let second_vars = second.vars();
        for v in first.vars() {
            let name = s.names.resolve(v);
            if name.starts_with("IsComposite_") {
                assert!(!second_vars.contains(&v), "{} reused", name);
            }
        }
    }
}
