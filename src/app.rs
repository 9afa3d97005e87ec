// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

use std::io::{IsTerminal, Read};

use console::style;
use dialoguer::Confirm;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::{FailureKind, Operation, OperationResult};
use crate::error::{Error, Result};
use crate::services::{dispatch, tools::ToolKit};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load()?;
        debug!(
            max_input_bytes = config.max_input_bytes,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        let Some(ref operation) = self.cli.operation else {
            return Err(Error::MissingOperation);
        };

        let source = self.read_input()?;
        if source.len() > self.config.max_input_bytes {
            return Err(Error::InputTooLarge {
                bytes: source.len(),
                limit: self.config.max_input_bytes,
            });
        }

        let tools = ToolKit::probe(&self.config);
        let result = dispatch::run(operation, &source, &tools);
        self.render(operation, result)
    }

    fn read_input(&self) -> Result<String> {
        match &self.cli.input {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }

    fn render(&self, operation: &str, result: OperationResult) -> Result<()> {
        match result {
            OperationResult::Code {
                text,
                bytes,
                reduction,
            } => {
                if let Some(ref path) = self.cli.output {
                    if path.exists() && !self.cli.yes {
                        let interactive =
                            std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
                        if !interactive {
                            return Err(Error::Operation {
                                message: format!(
                                    "{} exists; pass --yes to overwrite",
                                    path.display()
                                ),
                            });
                        }
                        let confirm = Confirm::new()
                            .with_prompt(format!("Overwrite {}?", path.display()))
                            .default(false)
                            .interact()?;
                        if !confirm {
                            eprintln!("Aborted.");
                            return Ok(());
                        }
                    }
                    std::fs::write(path, &text)?;
                    eprintln!(
                        "{} Wrote {} ({} chars)",
                        style("✓").green().bold(),
                        path.display(),
                        bytes
                    );
                } else {
                    print!("{text}");
                    eprintln!(
                        "{} {} complete ({} chars)",
                        style("✓").green().bold(),
                        operation,
                        bytes
                    );
                }
                if let Some(pct) = reduction {
                    eprintln!("{} Reduced by {:.1}%", style("→").cyan(), pct);
                }
                Ok(())
            }
            OperationResult::Report { text } => {
                println!("{text}");
                Ok(())
            }
            OperationResult::Failure { kind, message } => Err(match kind {
                FailureKind::Parse => Error::Parse { message },
                FailureKind::UnknownOperation => Error::UnknownOperation {
                    name: operation.to_string(),
                },
                _ => Error::Operation { message },
            }),
        }
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Ops => {
                println!("Available operations:\n");
                for op in Operation::ALL {
                    println!("  {:<24} {}", op.as_str(), op.description());
                }
                Ok(())
            }
            Commands::Doctor => self.run_doctor(),
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Max input bytes: {}", self.config.max_input_bytes);
                println!();
                println!("[tools]");
                println!("  autopep8: {}", self.config.tools.autopep8);
                println!("  black:    {}", self.config.tools.black);
                println!("  isort:    {}", self.config.tools.isort);
                println!("  radon:    {}", self.config.tools.radon);
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "codegroom", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    fn run_doctor(&self) -> Result<()> {
        eprintln!("{} Checking external tools...\n", style("→").cyan());

        let tools = ToolKit::probe(&self.config);
        let mut missing = 0usize;
        for tool in tools.entries() {
            if tool.is_available() {
                eprintln!(
                    "  {:<10} {}",
                    tool.label,
                    style("OK").green().bold()
                );
            } else {
                missing += 1;
                eprintln!(
                    "  {:<10} {} ({})",
                    tool.label,
                    style("NOT FOUND").red().bold(),
                    tool.install_hint
                );
            }
        }

        eprintln!();
        if missing == 0 {
            eprintln!("{} All tools available", style("✓").green().bold());
        } else {
            eprintln!(
                "{} {} tool(s) missing; the matching operations will degrade",
                style("!").yellow().bold(),
                missing
            );
        }
        Ok(())
    }
}
