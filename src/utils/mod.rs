use std::cmp::Ordering;

/// Normalize MAC address to lowercase with colons
pub fn normalize_mac(mac: &str) -> String {
    // Remove any existing separators
    let clean: String = mac
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .collect();

    // Convert to lowercase and insert colons
    if clean.len() != 12 {
        return mac.to_lowercase();
    }

    clean
        .chars()
        .collect::<Vec<_>>()
        .chunks(2)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(":")
        .to_lowercase()
}

/// Convert a host name to a report file name
/// e.g., "esx01.lab.example.com" -> "esx01.lab.example.com.html"
pub fn host_report_filename(host_name: &str) -> String {
    let stem: String = host_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let stem = if stem.is_empty() { "host".to_string() } else { stem };
    format!("{}.html", stem)
}

/// Format a link speed in Mbit for display. None means the link is down.
pub fn format_speed(speed_mb: Option<i64>) -> String {
    match speed_mb {
        None => "down".to_string(),
        Some(n) if n >= 1000 && n % 1000 == 0 => format!("{} Gbit/s", n / 1000),
        Some(n) => format!("{} Mbit/s", n),
    }
}

/// Order device names so numeric suffixes sort numerically
/// ("vmnic10" after "vmnic9", not after "vmnic1").
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let na = take_digits(&mut ai);
                let nb = take_digits(&mut bi);
                let ord = compare_digit_runs(&na, &nb);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                ai.next();
                bi.next();
            }
        }
    }
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(c) = it.peek() {
        if c.is_ascii_digit() {
            out.push(*c);
            it.next();
        } else {
            break;
        }
    }
    out
}

/// Compare digit runs without parsing: strip leading zeros, then longer
/// run wins, then lexicographic.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mac() {
        assert_eq!(normalize_mac("AA:BB:CC:DD:EE:FF"), "aa:bb:cc:dd:ee:ff");
        assert_eq!(normalize_mac("AA-BB-CC-DD-EE-FF"), "aa:bb:cc:dd:ee:ff");
        assert_eq!(normalize_mac("AABBCCDDEEFF"), "aa:bb:cc:dd:ee:ff");
        assert_eq!(normalize_mac("aa:bb:cc:dd:ee:ff"), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_host_report_filename() {
        assert_eq!(
            host_report_filename("esx01.lab.example.com"),
            "esx01.lab.example.com.html"
        );
        assert_eq!(host_report_filename("host with spaces"), "host_with_spaces.html");
        assert_eq!(host_report_filename("../../etc"), ".._.._etc.html");
        assert_eq!(host_report_filename(""), "host.html");
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(None), "down");
        assert_eq!(format_speed(Some(100)), "100 Mbit/s");
        assert_eq!(format_speed(Some(1000)), "1 Gbit/s");
        assert_eq!(format_speed(Some(10000)), "10 Gbit/s");
        assert_eq!(format_speed(Some(2500)), "2500 Mbit/s");
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("vmnic2", "vmnic10"), Ordering::Less);
        assert_eq!(natural_cmp("vmnic10", "vmnic9"), Ordering::Greater);
        assert_eq!(natural_cmp("vmk0", "vmk0"), Ordering::Equal);
        assert_eq!(natural_cmp("vmnic1", "vmk1"), Ordering::Greater);

        let mut names = vec!["vmnic10", "vmnic1", "vmnic2"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["vmnic1", "vmnic2", "vmnic10"]);
    }
}
