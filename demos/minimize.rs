//! Minimize a few truth tables and print the resulting expressions

use karnaugh_logic::TruthTable;

fn main() {
    // A 7-segment-style fragment: true on {0, 1, 5, 7}, row 2 unconstrained
    let table = TruthTable::with_bits([0, 1, 5, 7], [2], 3);
    println!("ones: {:?}", table.ones());
    println!("dont-cares: {:?}", table.dont_cares());
    println!("bits: {}", table.bits());

    match table.minimize_validated() {
        Ok(function) => {
            println!("minimized: {}", function);
            for index in 0..(1u64 << table.bits()) {
                println!("  f({}) = {}", index, function.evaluate(index, table.bits()) as u8);
            }
        }
        Err(e) => eprintln!("minimization rejected: {}", e),
    }
}
