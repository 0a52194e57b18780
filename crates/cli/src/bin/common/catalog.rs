/// Catalog names are matched ASCII case-insensitively in every binary.
pub fn name_matches(candidate: &str, wanted: &str) -> bool {
    candidate.eq_ignore_ascii_case(wanted)
}
