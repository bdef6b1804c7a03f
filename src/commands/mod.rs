pub mod report;

use crate::libs::{config::Config, messages::Message};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    report: report::ReportArgs,
}

impl Cli {
    /// Parses the command line and runs the report.
    ///
    /// The environment is checked before the flags, and both before any
    /// request is sent.
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::from_env()?;

        cli.require_dates(&mut io::stdout())?;

        report::cmd(cli.report, &config).await
    }

    /// Fails when either date flag is missing.
    ///
    /// The failure writes the message and then the usage text to `out`.
    pub fn require_dates<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.report.has_dates() {
            writeln!(out, "{}", Message::DatesRequired)?;
            Self::command().write_help(out)?;
            msg_bail_anyhow!(Message::DatesRequired);
        }
        Ok(())
    }
}
