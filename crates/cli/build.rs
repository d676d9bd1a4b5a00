use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("wikistat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Wikistat Contributors")
        .about("Word frequency statistics for article sections")
        .arg(clap::arg!([URL] "Article URL; the page name is the last path segment"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (raw, pie, bar, cloud, json)")
                .value_name("FORMAT")
                .default_value("raw")
                .value_parser(["raw", "pie", "bar", "cloud", "json"]),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--cutoff <N> "Words with a count at or below this value are grouped or removed").default_value("0"))
        .arg(clap::arg!(--"group-below-cutoff" "Collapse words at or below the cutoff into one grouped_words entry"))
        .arg(clap::arg!(--"remove-below-cutoff" "Drop words at or below the cutoff"))
        .arg(clap::arg!(-n --sections <N> "Number of leading sections to present").default_value("5"))
        .arg(
            clap::arg!(--stopwords <FILE> "Stop-word list with one word per line")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--"on-parse-error" <POLICY> "What to do with a section whose HTML cannot be parsed")
                .default_value("degrade")
                .value_parser(["degrade", "skip", "abort"]),
        )
        .arg(clap::arg!(--"api-url" <URL> "Page-content API endpoint"))
        .arg(clap::arg!(--"link-prefix" <PREFIX> "Prefix joined to every collected href"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--width <COLS> "Chart width in columns").default_value("80"))
        .arg(clap::arg!(--"no-color" "Disable colored charts"))
        .arg(clap::arg!(--pretty "Pretty print JSON output"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "wikistat", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "wikistat", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "wikistat", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "wikistat", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
