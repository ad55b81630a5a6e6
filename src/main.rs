use anyhow::Result;
use std::env;
use std::path::Path;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use primecnf::encoder::formula::{one_nbit, zero_1bit};
use primecnf::encoder::{dimacs, Formula, Session};

fn print_help() {
    println!("primecnf - CNF generator for arithmetic and primality problems");
    println!();
    println!("USAGE:");
    println!("    primecnf <COMMAND> <ARGS>");
    println!();
    println!("COMMANDS:");
    println!("    add_cnf <n1> <n2>                      Encode n1 + n2; SAT with result = n1 + n2");
    println!("    is_prime <n>                           SAT iff n is prime");
    println!("    prime_factoring_cnf <n>                SAT iff n has a non-trivial factorisation");
    println!("    prime_and_composite_tautology <width>  Always-UNSAT stress problem at the given bit width");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help, -help    Print this help message");
    println!();
    println!("Each command writes a DIMACS file named after its arguments into the");
    println!("current directory.");
}

fn usage() -> ! {
    print_help();
    process::exit(1);
}

// Strict decimal parse, rejecting signs and empty strings.
fn parse_number(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn bit_length(x: u64) -> u32 {
    u64::BITS - x.leading_zeros()
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_level(true)
        .try_init();

    debug!("starting primecnf");
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        let first = &args[1];
        if first == "-h" || first == "--help" || first == "-help" {
            print_help();
            return Ok(());
        }
    }
    if args.len() < 3 {
        usage();
    }

    match args[1].as_str() {
        "add_cnf" => {
            if args.len() != 4 {
                usage();
            }
            match (parse_number(&args[2]), parse_number(&args[3])) {
                (Some(n1), Some(n2)) => add_cnf(n1, n2),
                _ => usage(),
            }
        }
        "is_prime" => match parse_number(&args[2]) {
            Some(target) if args.len() == 3 => is_prime_cnf(target),
            _ => usage(),
        },
        "prime_factoring_cnf" => match parse_number(&args[2]) {
            Some(target) if args.len() == 3 && target > 0 => prime_factoring_cnf(target),
            _ => usage(),
        },
        "prime_and_composite_tautology" => match parse_number(&args[2]) {
            Some(width) if args.len() == 3 && width > 0 => tautology_cnf(width as u32),
            _ => usage(),
        },
        _ => usage(),
    }
}

fn add_cnf(n1: u64, n2: u64) -> Result<()> {
    let sum = n1 + n2;
    let input_len = bit_length(n1.max(n2));
    let width = (input_len + 1).max(bit_length(sum));

    println!("Input 1: {} (bit width: {})", n1, input_len);
    println!("Input 2: {} (bit width: {})", n2, input_len);
    println!("Expected sum: {} (bit width: {})", sum, bit_length(sum));
    println!("Using bit width: {}", width);

    let mut session = Session::new();
    let mut conditions = Formula::new();
    conditions.extend(session.add_nbit("input1", "input2", "result", "overflow", width));
    conditions.extend(session.input_equals("input1", n1, width));
    conditions.extend(session.input_equals("input2", n2, width));
    conditions.extend(session.pin_bit("overflow", false));
    conditions.extend(session.input_equals(&one_nbit(width), 1, width));
    conditions.extend(session.pin_bit(&zero_1bit(), false));

    let filename = format!("add_{}_{}.cnf", n1, n2);
    dimacs::write_dimacs_file(&session, &conditions, Path::new(&filename))?;

    println!("CNF file generated: {}", filename);
    println!("Expected result: {}", sum);
    Ok(())
}

fn is_prime_cnf(target: u64) -> Result<()> {
    let width = bit_length(target).max(2);
    println!("Target: {} (bit width: {})", target, width);

    let mut session = Session::new();
    let mut conditions = session.is_prime("target", width, width);
    conditions.extend(session.input_equals("target", target, width));
    conditions.extend(session.input_equals(&one_nbit(width), 1, width));
    conditions.extend(session.input_equals(&one_nbit(width * 2), 1, width * 2));
    conditions.extend(session.pin_bit(&zero_1bit(), false));

    let filename = format!("is_prime_{}.cnf", target);
    dimacs::write_dimacs_file(&session, &conditions, Path::new(&filename))?;

    println!("CNF file generated: {}", filename);
    println!("Testing if {} is prime.", target);
    println!("This CNF will be satisfiable if {} is prime.", target);
    println!("If the CNF is unsatisfiable, {} is composite.", target);
    Ok(())
}

fn prime_factoring_cnf(target: u64) -> Result<()> {
    let width = bit_length(target);
    println!("Target: {} (bit width: {})", target, width);

    let mut session = Session::new();
    let mut conditions = session.mul_nbit("factor1", "factor2", "target", "overflow", width);
    conditions.extend(session.input_not_equals("factor1", target, width));
    conditions.extend(session.input_not_equals("factor2", target, width));
    conditions.extend(session.input_equals("target", target, width));
    conditions.extend(session.pin_bit("overflow", false));
    conditions.extend(session.input_equals(&one_nbit(width), 1, width));
    conditions.extend(session.input_equals(&one_nbit(width * 2), 1, width * 2));
    conditions.extend(session.pin_bit(&zero_1bit(), false));

    let filename = format!("prime_factoring_{}.cnf", target);
    dimacs::write_dimacs_file(&session, &conditions, Path::new(&filename))?;

    println!("CNF file generated: {}", filename);
    println!("Looking for factors of: {}", target);
    println!(
        "This CNF will be satisfiable if {} has non-trivial factors.",
        target
    );
    Ok(())
}

fn tautology_cnf(width: u32) -> Result<()> {
    println!("Bit width: {}", width);

    let mut session = Session::new();
    let mut conditions = session.is_prime("target", width, width);
    conditions.extend(session.is_composite("target", width));
    conditions.extend(session.input_equals(&one_nbit(width), 1, width));
    conditions.extend(session.input_equals(&one_nbit(width * 2), 1, width * 2));
    conditions.extend(session.pin_bit(&zero_1bit(), false));

    let filename = format!("prime_and_composite_tautology_{}.cnf", width);
    dimacs::write_dimacs_file(&session, &conditions, Path::new(&filename))?;

    println!("CNF file generated: {}", filename);
    println!("This CNF asserts a number is both prime and composite; it is unsatisfiable.");
    Ok(())
}
