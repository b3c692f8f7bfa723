#[cfg(test)]
mod tests {
    use analyze_redirects::output::writer::render_rules;
    use analyze_redirects::redirect_analyzer::{RedirectAnalyzer, RedirectRecord};

    const DEMO_URLS: &str = include_str!("data/demo-urls.json");

    const EXPECTED_PATTERNS: [&str; 14] = [
        "RedirectMatch 301 ^/about/?$ https://example.com/about-us/",
        "RedirectMatch 301 ^/about/?$ https://example.com/about/",
        "RedirectMatch 301 ^/contact/?$ https://example.com/contact-us/",
        "RedirectMatch 301 ^/contact/?$ https://example.com/get-in-touch/",
        "RedirectMatch 301 ^/services/?$ https://example.com/our-services/",
        "RedirectMatch 301 ^/services/?$ https://example.com/services/",
        "RedirectMatch 301 ^/file\\.pdf$ https://example.com/file/document.pdf",
        "RedirectMatch 301 ^/file\\.pdf$ https://example.com/file/sample.pdf",
        "RedirectMatch 301 ^/products/?$ https://example.com/shop/",
        "RedirectMatch 301 ^/products/?$ https://example.com/store/",
        "RedirectMatch 301 ^/category/sub-category/?$ https://example.com/category/sub/",
        "RedirectMatch 301 ^/category/sub-category/?$ https://example.com/category/alternative/",
        "RedirectMatch 301 ^/blog/?$ https://example.com/news/",
        "RedirectMatch 301 ^/blog/?$ https://example.com/blog-posts/",
    ];

    fn demo_records() -> Vec<RedirectRecord> {
        serde_json::from_str(DEMO_URLS).expect("Failed to parse demo mapping data")
    }

    #[test]
    fn test_demo_data_loads() {
        let records = demo_records();
        assert_eq!(records.len(), 14);
    }

    #[test]
    fn test_identifies_duplicates_and_conflicts() {
        let analysis = RedirectAnalyzer::new().analyze(&demo_records());

        assert_eq!(
            analysis.duplicates,
            vec![
                "/about/",
                "/contact/",
                "/services/",
                "/file.pdf",
                "/products/",
                "/category/sub-category/",
                "/blog/",
            ]
        );

        assert_eq!(
            analysis.conflicts.get("/about/").unwrap(),
            &vec![
                "https://example.com/about-us/".to_string(),
                "https://example.com/about/".to_string(),
            ]
        );
        assert_eq!(
            analysis.conflicts.get("/contact/").unwrap(),
            &vec![
                "https://example.com/contact-us/".to_string(),
                "https://example.com/get-in-touch/".to_string(),
            ]
        );
        assert_eq!(
            analysis.conflicts.get("/services/").unwrap(),
            &vec![
                "https://example.com/our-services/".to_string(),
                "https://example.com/services/".to_string(),
            ]
        );
        assert_eq!(
            analysis.conflicts.get("/file.pdf").unwrap(),
            &vec![
                "https://example.com/file/document.pdf".to_string(),
                "https://example.com/file/sample.pdf".to_string(),
            ]
        );
        assert_eq!(
            analysis.conflicts.get("/products/").unwrap(),
            &vec![
                "https://example.com/shop/".to_string(),
                "https://example.com/store/".to_string(),
            ]
        );
        assert_eq!(
            analysis.conflicts.get("/category/sub-category/").unwrap(),
            &vec![
                "https://example.com/category/sub/".to_string(),
                "https://example.com/category/alternative/".to_string(),
            ]
        );
        assert_eq!(
            analysis.conflicts.get("/blog/").unwrap(),
            &vec![
                "https://example.com/news/".to_string(),
                "https://example.com/blog-posts/".to_string(),
            ]
        );

        // Conflict keys come out in the same first-occurrence order as
        // the duplicates list
        let conflict_keys: Vec<&str> = analysis.conflicts.keys().map(String::as_str).collect();
        assert_eq!(
            conflict_keys,
            analysis
                .duplicates
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_generates_expected_patterns() {
        let analysis = RedirectAnalyzer::new().analyze(&demo_records());

        let actual: Vec<&str> = analysis
            .processed
            .iter()
            .map(|entry| entry.pattern.as_str())
            .collect();
        assert_eq!(actual, EXPECTED_PATTERNS);
    }

    #[test]
    fn test_rules_artifact_rendering() {
        let analysis = RedirectAnalyzer::new().analyze(&demo_records());

        assert_eq!(
            render_rules(&analysis.processed),
            EXPECTED_PATTERNS.join("\n")
        );
    }

    #[test]
    fn test_single_wildcard_suggestion_for_category_family() {
        let analysis = RedirectAnalyzer::new().analyze(&demo_records());

        assert_eq!(
            analysis.wildcard_suggestions,
            vec!["RedirectMatch 301 ^/category/(.*)$ https://example.com/category/"]
        );
    }

    #[test]
    fn test_priority_url_resolves_matching_conflicts_only() {
        let priority = "https://example.com/about/";
        let plain = RedirectAnalyzer::new().analyze(&demo_records());
        let prioritized = RedirectAnalyzer::new()
            .with_priority_url(priority)
            .analyze(&demo_records());

        assert_eq!(
            prioritized.conflicts.get("/about/").unwrap(),
            &vec![priority.to_string()]
        );
        // Conflicts that do not include the priority URL keep their full
        // candidate list, and duplicates membership is unchanged
        assert_eq!(
            prioritized.conflicts.get("/contact/"),
            plain.conflicts.get("/contact/")
        );
        assert_eq!(prioritized.duplicates, plain.duplicates);
    }
}
