//! Round-trip a textual expression through the minimizer

use karnaugh_logic::{parse_expression, KarnaughError, TruthTable};

fn main() -> Result<(), KarnaughError> {
    let input = "/A/B + /AB + AB";

    let (indices, bits) = parse_expression(input, 0)?;
    println!("{:?} <- \"{}\"", indices, input);

    let table = TruthTable::with_bits(indices, [], bits);
    let function = table.minimize_validated()?;
    println!("minimized: {}", function);

    Ok(())
}
