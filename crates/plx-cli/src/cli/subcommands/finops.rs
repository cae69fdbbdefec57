use clap::Subcommand;

/// Cost reporting commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FinopsCommands {
    /// Month-to-date spend and month-end forecast.
    Stats,
    /// AWS cost per service, highest first.
    ByService {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// AWS cost per month.
    Monthly {
        #[arg(long)]
        months: Option<u32>,
    },
    /// AWS cost forecast.
    Forecast,
}
