//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_expense_lines, format_expense_table};

/// Format an amount as currency with two decimal places (e.g. `₹250.00`)
pub fn format_currency(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₹", 250.0), "₹250.00");
        assert_eq!(format_currency("$", 12.346), "$12.35");
        assert_eq!(format_currency("$", -5.5), "-$5.50");
    }
}
