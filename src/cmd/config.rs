use clap::{Args, Subcommand};

use crate::config::{
    ACLI_ENV, AppConfig, EXCLUDE_ENV, ISSUE_TYPE_ENV, PROJECT_ENV, START_KEY_ENV,
};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the effective configuration and the search query it produces.
    Show,
}

pub fn run(command: ConfigCommand, config: &AppConfig) -> AppResult<()> {
    match command {
        ConfigCommand::Show => {
            print!("{}", render(config));
            Ok(())
        }
    }
}

fn render(config: &AppConfig) -> String {
    let filter = &config.filter;
    let mut out = String::new();
    out.push_str(&line("acli binary", ACLI_ENV, &config.acli_program));
    out.push_str(&line("Project", PROJECT_ENV, &filter.project));
    out.push_str(&line("Issue type", ISSUE_TYPE_ENV, &filter.issue_type));
    out.push_str(&line("Start key", START_KEY_ENV, &filter.start_key));
    out.push_str(&line(
        "Excluded keys",
        EXCLUDE_ENV,
        &display_list(&filter.excluded_keys),
    ));
    out.push_str(&format!("JQL: {}\n", filter.jql()));
    out
}

fn line(label: &str, env_name: &str, value: &str) -> String {
    format!("{label} ({env_name}): {value}\n")
}

fn display_list(values: &[String]) -> String {
    if values.is_empty() {
        "<none>".to_string()
    } else {
        values.join(", ")
    }
}
