use clap::Parser;

/// Options for the board-generation demo driver.
#[derive(Clone, Debug, Parser)]
pub struct DemoOptions {
    /// Board width in cells.
    #[arg(short = 'W', long, default_value_t = 8)]
    pub width: i32,

    /// Board height in cells.
    #[arg(short = 'H', long, default_value_t = 6)]
    pub height: i32,

    /// Number of distinct tile kinds; kinds are reused cyclically when
    /// there are more pairs than kinds.
    #[arg(short, long, default_value_t = 10)]
    pub kinds: u32,

    /// Optional shape mask, rows of . and # separated by / (e.g. ".##./..../.##.").
    #[arg(short, long)]
    pub shape: Option<String>,

    #[arg(short, long)]
    pub log_level: Option<String>,
}
