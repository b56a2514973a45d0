//! Wrapper over the lalrpop-generated expression parser

use crate::error::KarnaughError;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    include!(concat!(env!("OUT_DIR"), "/text/sop.rs"));
}

/// One monomial: its literals as `(bit position, polarity)` pairs
pub(super) type Monomial = Vec<(u32, bool)>;

/// Parse an upper-cased expression into its monomials
pub(super) fn parse(input: &str) -> Result<Vec<Monomial>, KarnaughError> {
    parser_impl::ExprParser::new().parse(input).map_err(|e| {
        let message = e.to_string();
        // Try to extract position from the lalrpop error message
        let position = extract_position_from_error(&message);
        KarnaughError::MalformedExpression {
            message,
            input: input.to_string(),
            position,
        }
    })
}

/// Helper function to extract position information from lalrpop error messages
///
/// Lalrpop errors typically carry a location in the form
/// "Unrecognized token `+` found at 4:5" or "... at line 1 column 7".
fn extract_position_from_error(error_msg: &str) -> Option<usize> {
    // Look for "column N" pattern
    if let Some(col_idx) = error_msg.find("column ") {
        let after_col = &error_msg[col_idx + 7..];
        let digits: String = after_col.chars().take_while(|c| c.is_ascii_digit()).collect();
        if let Ok(col) = digits.parse::<usize>() {
            return Some(col.saturating_sub(1)); // Convert to 0-indexed
        }
    }

    // Look for "at N" pattern
    if let Some(at_idx) = error_msg.rfind(" at ") {
        let after_at = &error_msg[at_idx + 4..];
        let digits: String = after_at.chars().take_while(|c| c.is_ascii_digit()).collect();
        if let Ok(pos) = digits.parse::<usize>() {
            return Some(pos);
        }
    }

    None
}
