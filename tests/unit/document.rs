#[cfg(test)]
mod tests {
    use super::super::*;

    fn doc(lines: &[&str]) -> HideDocument {
        HideDocument::from_lines(lines).unwrap()
    }

    #[test]
    fn independent_rules_accumulate_in_order() {
        let document = doc(&["##.ad-banner,.ad-sidebar", "##.popup"]);
        assert_eq!(
            document.independent,
            vec![".ad-banner", ".ad-sidebar", ".popup"]
        );
        assert!(document.sites.is_empty());
    }

    #[test]
    fn site_rules_accumulate_across_lines() {
        let document = doc(&["foo.com##.a", "foo.com##.b"]);
        assert_eq!(document.sites["foo.com"], vec![".a", ".b"]);
    }

    #[test]
    fn multi_site_rules_expand_to_every_site() {
        let document = doc(&["example.com,~sub.example.com##.popup"]);
        assert_eq!(document.sites["example.com"], vec![".popup"]);
        assert_eq!(document.sites["sub.example.com"], vec![".popup"]);

        let document = doc(&["a.com,b.com##.x,.y"]);
        assert_eq!(document.sites["a.com"], vec![".x", ".y"]);
        assert_eq!(document.sites["b.com"], vec![".x", ".y"]);
    }

    #[test]
    fn site_keys_keep_insertion_order() {
        let document = doc(&["b.com##.x", "a.com##.y", "b.com##.z"]);
        let keys: Vec<&String> = document.sites.keys().collect();
        assert_eq!(keys, vec!["b.com", "a.com"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let document = doc(&["##.ad", "##.ad", "foo.com##.x,.x"]);
        assert_eq!(document.independent, vec![".ad", ".ad"]);
        assert_eq!(document.sites["foo.com"], vec![".x", ".x"]);
    }

    #[test]
    fn skippable_lines_contribute_nothing() {
        let document = doc(&[
            "! a comment",
            "[Adblock Plus 2.0]",
            "@@||example.com^",
            "||ads.example.com^",
            "/banner/*/img",
            "",
            "no delimiter here",
            "foo.com##.kept",
        ]);
        assert_eq!(document.independent, Vec::<String>::new());
        assert_eq!(document.sites.len(), 1);
        assert_eq!(document.sites["foo.com"], vec![".kept"]);
    }

    #[test]
    fn everything_after_sentinel_is_ignored() {
        let document = doc(&[
            "foo.com##.before",
            "! SCRIPT BLOCKING",
            "foo.com##.after",
            "##.also-after",
        ]);
        assert_eq!(document.sites["foo.com"], vec![".before"]);
        assert_eq!(document.sites.len(), 1);
        assert!(document.independent.is_empty());
    }

    #[test]
    fn selector_goes_to_exactly_one_bucket() {
        let document = doc(&["##.everywhere", "foo.com##.scoped"]);
        assert_eq!(document.independent, vec![".everywhere"]);
        assert!(!document.independent.contains(&".scoped".to_string()));
        assert_eq!(document.sites["foo.com"], vec![".scoped"]);
    }
}
