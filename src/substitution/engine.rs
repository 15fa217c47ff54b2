use super::SubstitutionMap;

/// Apply every rule of `map` to `message`, in map order.
///
/// Each rule replaces all non-overlapping occurrences of its pattern, scanning
/// left to right, in the output of the previous rule. Text inserted by an
/// earlier rule is therefore visible to later ones. Rules with an empty
/// pattern are skipped.
pub fn substitute(message: &str, map: &SubstitutionMap) -> String {
    let mut result = message.to_string();
    for rule in map {
        if rule.pattern.is_empty() || !result.contains(rule.pattern.as_str()) {
            continue;
        }
        result = result.replace(rule.pattern.as_str(), &rule.replacement);
    }
    result
}
