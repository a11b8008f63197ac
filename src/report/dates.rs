/// Formats a signed day count using 365-day years and 30-day months,
/// e.g. `-1 year, 2 months, 5 days`.
pub fn format_date(day_count: i64) -> String {
    let negative = day_count < 0;
    let total = day_count.unsigned_abs();

    let years = total / 365;
    let months = (total - years * 365) / 30;
    let days = total - years * 365 - months * 30;

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(plural(years, "year"));
    }
    if months > 0 {
        parts.push(plural(months, "month"));
    }
    if total == 0 || days > 0 {
        parts.push(plural(days, "day"));
    }

    format!("{}{}", if negative { "-" } else { "" }, parts.join(", "))
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/dates.rs"]
mod tests;
