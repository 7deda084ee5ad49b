use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_contact::ContactSubmission;

/// folio - personal portfolio with a contact form relay
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio site and contact form relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send one contact message and print the result
    Send {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        message: String,

        /// Base URL of a running folio server to submit through
        #[arg(long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = folio::Config::load(cli.config.clone())?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => folio::cli::serve(config, host, port).await,
        Commands::Send {
            name,
            email,
            subject,
            message,
            server,
        } => {
            let submission = ContactSubmission::new(name, email, subject, message);
            let result = folio::cli::send(config, submission, server).await?;

            println!("{}", serde_json::to_string_pretty(&result)?);

            if !result.success {
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
