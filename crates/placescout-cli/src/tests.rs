use super::*;

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["placescout", "search", "--keyword", "salon"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Search {
            keyword,
            refine,
            city,
            country,
            sort,
            pages,
            json,
        } => {
            assert_eq!(keyword, "salon");
            assert_eq!(refine, None);
            assert_eq!(city, "");
            assert_eq!(country, "");
            assert_eq!(sort, None);
            assert_eq!(pages, 1);
            assert!(!json);
        }
        other => panic!("expected search, got {other:?}"),
    }
}

#[test]
fn parses_search_with_all_options() {
    let cli = Cli::try_parse_from([
        "placescout",
        "search",
        "-k",
        "salon",
        "-r",
        "nails",
        "--city",
        "Accra",
        "--country",
        "Ghana",
        "--sort",
        "phone-and-rating",
        "--pages",
        "3",
        "--json",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Search {
            sort: Some(RankingPolicy::PhoneAndRating),
            pages: 3,
            json: true,
            ..
        }
    ));
}

#[test]
fn search_requires_keyword() {
    assert!(Cli::try_parse_from(["placescout", "search"]).is_err());
}

#[test]
fn search_rejects_zero_pages() {
    assert!(Cli::try_parse_from(["placescout", "search", "-k", "salon", "--pages", "0"]).is_err());
}

#[test]
fn search_rejects_unknown_sort() {
    assert!(
        Cli::try_parse_from(["placescout", "search", "-k", "salon", "--sort", "popularity"])
            .is_err()
    );
}

#[test]
fn parses_countries_command() {
    let cli = Cli::try_parse_from(["placescout", "countries", "Gh"]).expect("expected valid cli args");

    assert!(matches!(cli.command, Commands::Countries { input } if input == "Gh"));
}

#[test]
fn parses_photo_url_command() {
    let cli = Cli::try_parse_from(["placescout", "photo-url", "AbC123", "--width", "800"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::PhotoUrl { photo_ref, width: Some(800) } if photo_ref == "AbC123"
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["placescout"]).is_err());
}
