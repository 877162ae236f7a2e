//! Brazilian real (BRL) amount strings.
//!
//! Accepts both the canonical form (`50000.50`) and the localized form
//! (`R$ 50.000,50`: period thousands, comma decimals). A string with the `R$`
//! symbol or a comma is read as localized. Otherwise a single period is a
//! decimal point and several periods are thousands separators. Thousands
//! groups are checked: a leading group of 1 to 3 digits, then groups of
//! exactly 3, so `1,000.50` or `5.0000,00` are rejected instead of misread.

use consorcio_core::{round_money, Money, Percent};
use rust_decimal::Decimal;
use std::str::FromStr;

const SYMBOL: &str = "R$";

/// Parse a canonical or localized amount without going through f64.
pub fn parse_money(raw: &str) -> Result<Money, String> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let (localized, unsigned) = match unsigned.strip_prefix(SYMBOL) {
        Some(rest) => (true, rest),
        None => (unsigned.contains(','), unsigned),
    };
    let unsigned = unsigned.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{a0}');

    if unsigned.is_empty() {
        return Err(format!("'{raw}' is not an amount"));
    }

    let canonical = if localized {
        let (int_part, frac_part) = match unsigned.split_once(',') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };
        let digits = ungroup(int_part).ok_or_else(|| format!("'{raw}' is not an amount"))?;
        match frac_part {
            Some(frac) if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) => {
                return Err(format!("'{raw}' has a malformed decimal part"));
            }
            Some(frac) => format!("{digits}.{frac}"),
            None => digits,
        }
    } else if unsigned.matches('.').count() > 1 {
        ungroup(unsigned).ok_or_else(|| format!("'{raw}' is not an amount"))?
    } else {
        unsigned.to_string()
    };

    if !canonical.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(format!("'{raw}' is not an amount"));
    }

    let value = Decimal::from_str(&canonical).map_err(|e| format!("'{raw}': {e}"))?;
    Ok(if negative { -value } else { value })
}

/// Strip period thousands separators from an integer part, or `None` when
/// the digits are not grouped in threes.
fn ungroup(int_part: &str) -> Option<String> {
    let mut groups = int_part.split('.');
    let lead = groups.next()?;
    if lead.is_empty() || (lead.len() > 3 && int_part.contains('.')) {
        return None;
    }
    if !lead.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut digits = lead.to_string();
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

/// Parse a percentage such as `8`, `8.5`, `8,5` or `8,5%`. Thousands
/// separators are not accepted.
pub fn parse_percent(raw: &str) -> Result<Percent, String> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let (negative, unsigned) = match unsigned.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, unsigned),
    };

    let separators = unsigned.chars().filter(|c| *c == ',' || *c == '.').count();
    if unsigned.is_empty() || separators > 1 {
        return Err(format!("'{raw}' is not a percentage"));
    }
    let canonical = unsigned.replace(',', ".");
    if !canonical.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(format!("'{raw}' is not a percentage"));
    }

    let value = Decimal::from_str(&canonical).map_err(|e| format!("'{raw}': {e}"))?;
    Ok(if negative { -value } else { value })
}

/// Render an amount as `R$ 1.234,56`, rounded to cents.
pub fn format_brl(amount: Money) -> String {
    let rounded = round_money(amount);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{SYMBOL} {grouped},{frac_part}")
}
