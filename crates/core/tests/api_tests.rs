//! Library API integration tests
use wikistat_core::*;

fn get_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../../tests/fixtures/{}", name)).unwrap()
}

fn etymology_section(wikistat: &Wikistat) -> Section {
    let html = decode_section_html(&get_fixture("section_etymology.json")).unwrap();
    let meta = SectionMeta { title: "Etymology".to_string(), index: SectionIndex::new("1") };
    let mut section = wikistat.build_section(meta, &html).unwrap().unwrap();
    wikistat.digest_section(&mut section);
    section
}

#[test]
fn test_decode_fixture_sections() {
    let sections = decode_sections(&get_fixture("sections.json")).unwrap();
    let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Etymology", "Diet"]);
}

#[test]
fn test_missing_page_error() {
    let result = decode_sections(&get_fixture("missing_page.json"));
    assert!(matches!(result, Err(FetchError::Api { code, .. }) if code == "missingtitle"));
}

#[test]
fn test_section_text_and_links() {
    let wikistat = Wikistat::new().unwrap();
    let section = etymology_section(&wikistat);

    assert!(!section.text.contains("[1]"));
    assert!(!section.text.contains('\n'));
    assert!(section.text.contains("domestic cat. A cat"));
    assert_eq!(section.hyperlinks, vec!["https://en.wikipedia.org//wiki/Old_English"]);
}

#[test]
fn test_section_frequencies() {
    let wikistat = Wikistat::new().unwrap();
    let section = etymology_section(&wikistat);

    let entries: Vec<_> = section.frequencies.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("cat", 5),
            ("word", 2),
            ("derives", 1),
            ("old", 1),
            ("english", 1),
            ("catt", 1),
            ("domestic", 1),
        ]
    );
}

#[test]
fn test_custom_link_prefix() {
    let config = WikistatConfig::builder().link_prefix("https://en.wikipedia.org").build();
    let wikistat = Wikistat::with_config(config).unwrap();
    let section = etymology_section(&wikistat);
    assert_eq!(section.hyperlinks, vec!["https://en.wikipedia.org/wiki/Old_English"]);
}

#[test]
fn test_parse_failure_policies() {
    let meta = SectionMeta { title: "Blank".to_string(), index: SectionIndex::new("3") };

    let degrade = Wikistat::new().unwrap();
    let section = degrade.build_section(meta.clone(), "  ").unwrap().unwrap();
    assert!(section.text.is_empty());
    assert!(section.hyperlinks.is_empty());

    let skip = Wikistat::with_config(WikistatConfig::builder().parse_failure(ParseFailurePolicy::Skip).build()).unwrap();
    assert!(skip.build_section(meta.clone(), "").unwrap().is_none());

    let abort =
        Wikistat::with_config(WikistatConfig::builder().parse_failure(ParseFailurePolicy::Abort).build()).unwrap();
    assert!(matches!(
        abort.build_section(meta, ""),
        Err(WikistatError::Parse(ParseError::EmptyFragment { .. }))
    ));
}

#[test]
fn test_cutoff_then_present() {
    let wikistat = Wikistat::new().unwrap();
    let sections = vec![etymology_section(&wikistat)];

    let config = PresentConfig { policy: CutoffPolicy::new(1).group_below_cutoff(true), ..Default::default() };
    let raw = Presenter::new(config).render(OutputFormat::Raw, &sections).unwrap();

    assert!(raw.contains("\tcat - 5\n\tword - 2\n\tgrouped_words - 5\n"));
    assert!(!raw.contains("derives"));
    assert_eq!(sections[0].frequencies.get("derives"), Some(1));
}

#[test]
fn test_percentages_sum_to_hundred() {
    let wikistat = Wikistat::new().unwrap();
    let section = etymology_section(&wikistat);

    let percentages = PercentageTable::from_table(&section.frequencies);
    assert!((percentages.sum() - 100.0).abs() < 1e-9);
}

#[cfg(feature = "fetch")]
mod fetching {
    use super::*;
    use mockito::Matcher;

    async fn mock_page(server: &mut mockito::ServerGuard) -> Vec<mockito::Mock> {
        let sections = server
            .mock("GET", "/w/api.php")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("prop".into(), "sections".into()),
                Matcher::UrlEncoded("page".into(), "Cat".into()),
            ]))
            .with_body(get_fixture("sections.json"))
            .expect(1)
            .create_async()
            .await;

        let etymology = server
            .mock("GET", "/w/api.php")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("prop".into(), "text".into()),
                Matcher::UrlEncoded("section".into(), "1".into()),
            ]))
            .with_body(get_fixture("section_etymology.json"))
            .expect(1)
            .create_async()
            .await;

        let diet = server
            .mock("GET", "/w/api.php")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("prop".into(), "text".into()),
                Matcher::UrlEncoded("section".into(), "2".into()),
            ]))
            .with_body(get_fixture("section_diet.json"))
            .expect(1)
            .create_async()
            .await;

        vec![sections, etymology, diet]
    }

    #[tokio::test]
    async fn test_fetch_and_digest_page() {
        let mut server = mockito::Server::new_async().await;
        let mocks = mock_page(&mut server).await;

        let config = WikistatConfig::builder().api_url(format!("{}/w/api.php", server.url())).build();
        let wikistat = Wikistat::with_config(config).unwrap();
        let sections = wikistat.fetch_and_digest("https://en.wikipedia.org/wiki/Cat").await.unwrap();

        for mock in &mocks {
            mock.assert_async().await;
        }

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Etymology");
        assert_eq!(sections[0].frequencies.get("cat"), Some(5));
        assert_eq!(sections[1].title, "Diet");
        assert_eq!(sections[1].frequencies.iter().next(), Some(("mice", 2)));
        assert_eq!(sections[1].frequencies.get("birds;"), Some(1));
        assert_eq!(sections[1].hyperlinks, vec!["https://en.wikipedia.org//wiki/Mouse"]);
    }

    #[tokio::test]
    async fn test_encoded_page_name_is_sent_decoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/w/api.php")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("prop".into(), "sections".into()),
                Matcher::UrlEncoded("page".into(), "Pokémon".into()),
            ]))
            .with_body(get_fixture("sections.json"))
            .expect(2)
            .create_async()
            .await;

        let config = WikistatConfig::builder().api_url(format!("{}/w/api.php", server.url())).build();
        let wikistat = Wikistat::with_config(config).unwrap();

        for url in ["https://en.wikipedia.org/wiki/Pok%C3%A9mon", "https://en.wikipedia.org/wiki/Pokémon"] {
            let (page, sections) = wikistat.list_sections(url).await.unwrap();
            assert_eq!(page, "Pokémon");
            assert_eq!(sections.len(), 2);
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_load_sections_applies_parse_failure_policy() {
        let mut server = mockito::Server::new_async().await;
        let _blank = server
            .mock("GET", "/w/api.php")
            .match_query(Matcher::UrlEncoded("section".into(), "1".into()))
            .with_body(r#"{"parse":{"text":{"*":""}}}"#)
            .create_async()
            .await;
        let _diet = server
            .mock("GET", "/w/api.php")
            .match_query(Matcher::UrlEncoded("section".into(), "2".into()))
            .with_body(get_fixture("section_diet.json"))
            .create_async()
            .await;

        let metas = decode_sections(&get_fixture("sections.json")).unwrap();
        let api_url = format!("{}/w/api.php", server.url());

        let skip = WikistatConfig::builder().api_url(api_url.clone()).parse_failure(ParseFailurePolicy::Skip).build();
        let sections = Wikistat::with_config(skip).unwrap().load_sections("Cat", metas.clone()).await.unwrap();
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Diet"]);

        let degrade = WikistatConfig::builder().api_url(api_url.clone()).build();
        let sections = Wikistat::with_config(degrade).unwrap().load_sections("Cat", metas.clone()).await.unwrap();
        assert_eq!(sections.len(), 2);
        assert!(sections[0].text.is_empty());

        let abort = WikistatConfig::builder().api_url(api_url).parse_failure(ParseFailurePolicy::Abort).build();
        let result = Wikistat::with_config(abort).unwrap().load_sections("Cat", metas).await;
        assert!(matches!(result, Err(WikistatError::Parse(ParseError::EmptyFragment { .. }))));
    }

    #[tokio::test]
    async fn test_missing_page_surfaces_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/w/api.php")
            .match_query(Matcher::Any)
            .with_body(get_fixture("missing_page.json"))
            .create_async()
            .await;

        let config = WikistatConfig::builder().api_url(format!("{}/w/api.php", server.url())).build();
        let wikistat = Wikistat::with_config(config).unwrap();
        let result = wikistat.fetch_and_digest("https://en.wikipedia.org/wiki/Nope").await;

        assert!(matches!(result, Err(WikistatError::Fetch(FetchError::Api { .. }))));
    }
}
