/// Only `1` and `true` (any case) count as set; a missing value keeps the default.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(v) => {
            let v = v.trim().to_ascii_lowercase();
            v == "1" || v == "true"
        }
    }
}
