use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = tipline_webhook::Args::parse();
	tipline_webhook::run(args).await
}
