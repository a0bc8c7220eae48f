//! Command-line front end for ORCID search and record retrieval.

use anyhow::{bail, Context};
use clap::Parser;

use orcid_rs::{ClientConfig, Environment, OrcidClient, OrcidId, ResponseFormat, SearchParams};

#[derive(Parser)]
#[command(
    name = "orcid-search",
    about = "Search the ORCID registry or fetch a record by iD",
    version
)]
struct Args {
    /// Bearer token for ORCID API authentication
    #[arg(short, long)]
    token: String,

    /// Search query string
    #[arg(short, long, conflicts_with = "orcid")]
    query: Option<String>,

    /// ORCID iD to retrieve
    #[arg(short, long)]
    orcid: Option<String>,

    /// Use the ORCID sandbox instead of production
    #[arg(long)]
    sandbox: bool,

    /// Output XML instead of JSON
    #[arg(long)]
    xml: bool,

    /// Output the raw response (only with --orcid)
    #[arg(long, requires = "orcid")]
    raw: bool,

    /// Number of results to return (for search)
    #[arg(long, default_value_t = 10)]
    rows: u64,

    /// Starting position for pagination (for search)
    #[arg(long, default_value_t = 0)]
    start: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.query.is_none() && args.orcid.is_none() {
        bail!("either a search query (-q) or an ORCID iD (-o) is required");
    }

    let environment = if args.sandbox {
        Environment::PublicSandbox
    } else {
        Environment::Public
    };
    let format = if args.xml {
        ResponseFormat::Xml
    } else {
        ResponseFormat::Json
    };

    let client = OrcidClient::new(
        ClientConfig::default()
            .with_environment(environment)
            .with_format(format)
            .with_token(&args.token),
    );

    if let Some(query) = &args.query {
        let params = SearchParams {
            query: query.clone(),
            start: args.start,
            rows: args.rows,
        };
        let results = client
            .search()
            .search(&params)
            .await
            .context("search failed")?;
        println!("{}", render(&results, args.xml)?);
        return Ok(());
    }

    // Checked above: --orcid is present when --query is not.
    let Some(orcid) = &args.orcid else {
        bail!("either a search query (-q) or an ORCID iD (-o) is required");
    };
    let id = OrcidId::validated(orcid).context("invalid ORCID iD")?;

    if args.raw {
        let body = client
            .records()
            .record_raw(&id)
            .await
            .context("failed to retrieve record")?;
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    }

    let record = client
        .records()
        .record(&id)
        .await
        .context("failed to retrieve record")?;
    println!("{}", render(&record, args.xml)?);
    Ok(())
}

fn render<T: serde::Serialize>(value: &T, xml: bool) -> anyhow::Result<String> {
    if xml {
        let body = quick_xml::se::to_string(value).context("failed to render XML")?;
        Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{body}"))
    } else {
        serde_json::to_string_pretty(value).context("failed to render JSON")
    }
}
