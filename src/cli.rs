use clap::Parser;

#[derive(Parser)]
#[command(name = "ytsum", about = "YouTube video summarizer web UI", version)]
pub struct Cli {
    /// Address to bind the web server to [default: 127.0.0.1:3000]
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Preferred caption language [default: en]
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Gemini model used for summarization [default: gemini-2.5-pro]
    #[arg(long)]
    pub model: Option<String>,

    /// Print configuration details on startup
    #[arg(short, long)]
    pub verbose: bool,
}
