use super::Parser;

#[derive(Parser, Debug)]
#[command(about = "Examination portal shell")]
pub struct Cli {
    /// Path to a settings TOML file.
    #[arg(long)]
    pub settings: Option<String>,
}
