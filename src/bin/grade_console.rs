use clap::Parser;
use grade_admin::client::{ApiClient, HttpTransport};
use grade_admin::ui::{self, StdConsole};

#[derive(Parser)]
#[command(name = "grade-console")]
#[command(about = "Terminal pages for the course scheduling admin API")]
struct Cli {
    /// Address of the admin API.
    #[arg(long, env = "GRADE_API_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Log in with this email instead of asking for it.
    #[arg(long, env = "GRADE_EMAIL")]
    email: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let transport = HttpTransport::new(&cli.base_url)?;
    let mut client = ApiClient::new(transport);

    ui::run(&mut client, &mut StdConsole, cli.email.as_deref()).await;

    Ok(())
}
