/// Display formatting for dollar amounts: "$1,500", "$1,500.50".
///
/// Whole-dollar amounts drop the cents; anything else keeps two places.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let remainder = cents % 100;

    let grouped = group_thousands(dollars);
    let body = if remainder == 0 {
        grouped
    } else {
        format!("{grouped}.{remainder:02}")
    };

    if negative {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
