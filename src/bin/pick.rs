/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{io::{stdin, BufRead},
          thread,
          time::Duration};

use clap::{Args, CommandFactory, Parser, Subcommand};
use crossterm::style::Stylize;
use miette::IntoDiagnostic;
use r3bl_select::*;
use serde::Serialize;
use StdinIsPipedResult::*;
use StdoutIsPipedResult::*;

#[derive(Debug, Parser)]
#[command(bin_name = "pick")]
#[command(about = "Pick one item from a list, right in your terminal 👉", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
struct CliArgs {
    #[command(subcommand)]
    command: CliCommand,

    #[command(flatten)]
    global_options: GlobalOptions,
}

#[derive(Debug, Args)]
struct GlobalOptions {
    /// Log to `log.txt` in the current folder. Watch it with `tail -f log.txt` 💡
    #[arg(global = true, long, short = 'l')]
    enable_logging: bool,

    /// Print the result as JSON, eg: `{"index":1,"value":"foo"}` for `select`, and
    /// `{"existing":{"index":1,"value":"foo"}}` or `{"added":"bar"}` for `add`
    #[arg(global = true, long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Select one of the items
    Select {
        #[command(flatten)]
        list_options: ListOptions,
    },

    /// Select one of the items, or type in a new one
    Add {
        #[command(flatten)]
        list_options: ListOptions,

        /// Label of the row that lets you type in a new item
        #[arg(value_name = "label", long, short = 'a', default_value = "Add new")]
        add_label: String,

        /// Don't accept an empty new item
        #[arg(long)]
        non_empty: bool,
    },
}

#[derive(Debug, Args)]
struct ListOptions {
    /// Shown above the list
    #[arg(value_name = "label", long, short = 'p', default_value = "Select an item")]
    label: String,

    /// Optional maximum height of the list (in rows)
    #[arg(value_name = "height", long, short = 't')]
    tui_height: Option<usize>,

    /// Give up if nothing was picked after this many seconds
    #[arg(value_name = "secs", long)]
    cancel_after_secs: Option<u64>,

    /// Items to pick from. If none are given, lines piped in via stdin are used
    #[arg(value_name = "items")]
    items: Vec<String>,
}

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CliArgs` struct.
    let cli_args = CliArgs::parse();

    if cli_args.global_options.enable_logging {
        try_initialize_logging_global(TracingConfig::default())?;
        tracing::debug!("Start logging... cli_args {cli_args:?}");
    }

    let bin_name = CliArgs::command();
    let bin_name = bin_name.get_bin_name().unwrap_or("this command");

    if let StdoutIsPiped = is_stdout_piped() {
        show_error_do_not_pipe_stdout(bin_name);
        return Ok(());
    }

    let json = cli_args.global_options.json;
    match cli_args.command {
        CliCommand::Select { list_options } => {
            let items = list_options.get_items()?;
            let mut select = Select::new(&list_options.label, items);
            if let Some(height) = list_options.tui_height {
                select = select.with_max_height(height);
            }
            list_options.cancel_after_timeout(select.cancel_handle());

            let selected = select.run()?;
            print_output(&selected, &selected.value, json)?;
        }

        CliCommand::Add {
            list_options,
            add_label,
            non_empty,
        } => {
            let items = list_options.get_items()?;
            let mut select = SelectWithAdd::new(&list_options.label, items, add_label);
            if let Some(height) = list_options.tui_height {
                select = select.with_max_height(height);
            }
            if non_empty {
                select = select.with_validate(|it| match it.trim().is_empty() {
                    true => Err("Can't be empty".to_string()),
                    false => Ok(()),
                });
            }
            list_options.cancel_after_timeout(select.cancel_handle());

            let chosen = select.run()?;
            print_output(&chosen, chosen.value(), json)?;
        }
    }

    if cli_args.global_options.enable_logging {
        tracing::debug!("Stop logging...");
    }

    Ok(())
}

impl ListOptions {
    /// Items passed as args win over piped stdin.
    fn get_items(&self) -> miette::Result<Vec<String>> {
        if !self.items.is_empty() {
            return Ok(self.items.clone());
        }
        match is_stdin_piped() {
            StdinIsPiped => stdin()
                .lock()
                .lines()
                .collect::<Result<Vec<_>, _>>()
                .into_diagnostic(),
            StdinIsNotPiped => Ok(vec![]),
        }
    }

    fn cancel_after_timeout(&self, cancel_handle: CancelHandle) {
        if let Some(secs) = self.cancel_after_secs {
            thread::spawn(move || {
                thread::sleep(Duration::from_secs(secs));
                tracing::debug!("Timed out after {secs}s");
                cancel_handle.cancel();
            });
        }
    }
}

/// Print `value` as is, or all of `output` as JSON.
fn print_output(output: &impl Serialize, value: &str, json: bool) -> miette::Result<()> {
    match json {
        true => println!("{}", serde_json::to_string(output).into_diagnostic()?),
        false => println!("{value}"),
    }
    Ok(())
}

fn show_error_do_not_pipe_stdout(bin_name: &str) {
    let msg = format!(
        "Please do *not* pipe the output of {bin_name} to another command. \
         \n❎ For eg, don't do this: `{bin_name} select a b c | cat`",
    )
    .red()
    .to_string();
    eprintln!("{msg}");
}
