/// "2025-08" -> "8/25", the compact axis label used by the charts.
pub fn month_label(month: &str) -> String {
    let mut parts = month.splitn(2, '-');
    let year = parts.next().unwrap_or_default();
    let month_number = parts
        .next()
        .and_then(|m| m.parse::<u32>().ok())
        .unwrap_or(0);
    let short_year = if year.len() == 4 { &year[2..] } else { year };
    format!("{}/{}", month_number, short_year)
}

/// "codeQuality" -> "Code Quality". Metric keys are camelCase in storage
/// but displayed as title-cased phrases.
pub fn format_metric_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_label_drops_zero_padding() {
        assert_eq!(month_label("2025-08"), "8/25");
        assert_eq!(month_label("2024-11"), "11/24");
    }

    #[test]
    fn metric_names_split_on_case_boundaries() {
        assert_eq!(format_metric_name("codeQuality"), "Code Quality");
        assert_eq!(format_metric_name("onTimeDelivery"), "On Time Delivery");
        assert_eq!(format_metric_name("velocity"), "Velocity");
    }
}
