pub mod courses;
pub mod menu;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(about = "Course catalog and student enrollment.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less; repeat to print only results
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive registration menu (default)
    #[command(alias = "m")]
    Menu,
    /// Print the course catalog and exit
    #[command(alias = "c")]
    Courses,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
