//! Dependency location rewrite.

use std::collections::HashMap;

use crate::chart::Chart;

/// Dependency name to replacement location.
pub type RewriteMap = HashMap<String, String>;

/// Returns a copy of `chart` where every dependency named in `rewrites` has its
/// location replaced. Entries are never added, dropped or reordered, and
/// `chart` itself is left untouched.
pub fn transform(chart: &Chart, rewrites: &RewriteMap) -> Chart {
    let mut out = chart.clone();
    for dep in &mut out.dependencies {
        if let Some(location) = rewrites.get(&dep.name) {
            dep.location.clone_from(location);
        }
    }
    out
}

/// Names of the dependencies in `chart` that `transform` would touch, in order.
pub fn matched_names<'a>(chart: &'a Chart, rewrites: &RewriteMap) -> Vec<&'a str> {
    chart
        .dependencies
        .iter()
        .filter(|d| rewrites.contains_key(&d.name))
        .map(|d| d.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Dependency;

    fn chart(entries: &[(&str, &str)]) -> Chart {
        Chart::with_dependencies(
            entries
                .iter()
                .map(|(name, location)| Dependency::new(*name, *location))
                .collect(),
        )
    }

    fn map(entries: &[(&str, &str)]) -> RewriteMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn locations(chart: &Chart) -> Vec<(&str, &str)> {
        chart
            .dependencies
            .iter()
            .map(|d| (d.name.as_str(), d.location.as_str()))
            .collect()
    }

    #[test]
    fn rewrites_only_matching_entries() {
        let input = chart(&[("a", "X"), ("b", "Y")]);
        let out = transform(&input, &map(&[("a", "Z")]));
        assert_eq!(locations(&out), vec![("a", "Z"), ("b", "Y")]);
    }

    #[test]
    fn empty_map_is_identity() {
        let input = chart(&[("a", "X"), ("b", "Y")]);
        assert_eq!(transform(&input, &RewriteMap::new()), input);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let input = chart(&[("a", "X"), ("b", "Y")]);
        let out = transform(&input, &map(&[("c", "Z"), ("d", "W")]));
        assert_eq!(out, input);
    }

    #[test]
    fn applying_twice_equals_applying_once() {
        let input = chart(&[("a", "X"), ("b", "Y"), ("c", "V")]);
        let rewrites = map(&[("a", "Z"), ("c", "U")]);
        let once = transform(&input, &rewrites);
        let twice = transform(&once, &rewrites);
        assert_eq!(twice, once);
    }

    #[test]
    fn order_is_preserved() {
        let input = chart(&[("c", "1"), ("a", "2"), ("b", "3"), ("a2", "4")]);
        let out = transform(&input, &map(&[("b", "x"), ("c", "y"), ("a2", "z")]));
        let names: Vec<_> = out.dependencies.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b", "a2"]);
    }

    #[test]
    fn output_does_not_alias_input() {
        let input = chart(&[("a", "X"), ("b", "Y")]);
        let mut out = transform(&input, &map(&[("a", "Z")]));
        out.dependencies[0].location.push_str("-changed");
        out.dependencies[1].name = "renamed".into();
        out.dependencies.push(Dependency::new("new", "N"));
        assert_eq!(locations(&input), vec![("a", "X"), ("b", "Y")]);
    }

    #[test]
    fn duplicate_names_are_all_rewritten() {
        let input = chart(&[("a", "X"), ("a", "Y")]);
        let out = transform(&input, &map(&[("a", "Z")]));
        assert_eq!(locations(&out), vec![("a", "Z"), ("a", "Z")]);
    }

    #[test]
    fn extra_fields_survive_rewrite() {
        let input: Chart = serde_yaml::from_str(
            "version: 1.2.3\ndependencies:\n- name: a\n  repository: X\n  condition: a.enable\n",
        )
        .unwrap();
        let out = transform(&input, &map(&[("a", "Z")]));
        assert_eq!(out.extra, input.extra);
        assert_eq!(out.dependencies[0].extra, input.dependencies[0].extra);
        assert_eq!(out.dependencies[0].location, "Z");
    }

    #[test]
    fn matched_names_lists_hits_in_order() {
        let input = chart(&[("b", "1"), ("x", "2"), ("a", "3")]);
        let rewrites = map(&[("a", "Z"), ("b", "Z"), ("q", "Z")]);
        assert_eq!(matched_names(&input, &rewrites), vec!["b", "a"]);
    }
}
