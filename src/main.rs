use clap::Parser;
use intacct_gl::application::client::prepare_request;
use intacct_gl::application::operations::create_gl_transaction::CreateGlTransactionOperation;
use intacct_gl::config::ClientConfig;
use intacct_gl::domain::custom_field::CustomField;
use intacct_gl::domain::date::IntacctDate;
use intacct_gl::domain::gl_transaction::{GENERAL_JOURNAL, GlTransaction};
use intacct_gl::domain::session::{ApiSession, SessionRef};
use intacct_gl::interfaces::csv::entry_reader::EntryReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ledger entries CSV file
    input: PathBuf,

    /// Journal to post into
    #[arg(long, default_value = GENERAL_JOURNAL)]
    journal: String,

    /// Transaction date (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long)]
    date: IntacctDate,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long)]
    reference_no: Option<String>,

    /// Entity to record the transaction against
    #[arg(long)]
    source_entity: Option<String>,

    /// Date on which the transaction is automatically reversed
    #[arg(long)]
    reverse_date: Option<IntacctDate>,

    /// Custom field as name=value (repeatable)
    #[arg(long = "custom-field")]
    custom_fields: Vec<CustomField>,

    /// API session id
    #[arg(long, env = "INTACCT_SESSION_ID")]
    session_id: String,

    /// Post the request instead of printing it
    #[arg(long)]
    send: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "intacct_gl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::load()?;

    let mut transaction = GlTransaction::new(cli.journal, cli.date, cli.description);
    let file = File::open(&cli.input).into_diagnostic()?;
    for entry in EntryReader::new(file).entries() {
        match entry {
            Ok(mut entry) => {
                entry.date = entry.date.or(Some(cli.date));
                transaction.add_entry(entry);
            }
            Err(e) => {
                eprintln!("Error reading entry: {}", e);
            }
        }
    }

    if !transaction.is_balanced() {
        warn!(
            debits = %transaction.total_debits(),
            credits = %transaction.total_credits(),
            "Transaction is not balanced and will be rejected by the service"
        );
    }

    let session: SessionRef = Arc::new(ApiSession::new(cli.session_id, None));
    let mut operation = CreateGlTransactionOperation::new(session, transaction)?
        .with_custom_fields(cli.custom_fields);
    if let Some(reference_no) = cli.reference_no {
        operation = operation.with_reference_no(reference_no);
    }
    if let Some(source_entity) = cli.source_entity {
        operation = operation.with_source_entity(source_entity);
    }
    if let Some(reverse_date) = cli.reverse_date {
        operation = operation.with_reverse_date(reverse_date);
    }

    if cli.send {
        send(config, operation).await
    } else {
        let request = prepare_request(&config, &[operation])?;
        println!("{}", request.body);
        Ok(())
    }
}

#[cfg(feature = "transport-http")]
async fn send(config: ClientConfig, operation: CreateGlTransactionOperation) -> Result<()> {
    use intacct_gl::application::client::IntacctClient;
    use intacct_gl::infrastructure::http::HttpTransport;

    let transport = HttpTransport::new(&config)?;
    let client = IntacctClient::new(config, Box::new(transport));
    let response = client.execute(&[operation]).await?;

    println!("{}", serde_json::to_string_pretty(&response).into_diagnostic()?);
    if response.is_success() {
        Ok(())
    } else {
        Err(miette::miette!("The request was not successful"))
    }
}

#[cfg(not(feature = "transport-http"))]
async fn send(config: ClientConfig, operation: CreateGlTransactionOperation) -> Result<()> {
    eprintln!(
        "WARNING: Sending requested via --send, but 'transport-http' feature is not enabled. Falling back to a dry run."
    );
    let request = prepare_request(&config, &[operation])?;
    println!("{}", request.body);
    Ok(())
}
