//! # TinyBasic Plus
//!
//! A line-number BASIC in a fixed amount of memory.
//!

use clap::Parser;
use tinybasic::mach::Config;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Program buffer size in bytes
    #[arg(long, default_value_t = Config::default().ram_size)]
    ram_size: usize,

    /// Control stack capacity in FOR frames
    #[arg(long, default_value_t = Config::default().stack_frames)]
    stack_frames: usize,

    /// Do not echo typed characters
    #[arg(long)]
    no_echo: bool,

    /// Use plain stdin/stdout even on a terminal
    #[arg(long)]
    stream: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();
    let config = Config {
        ram_size: args.ram_size,
        stack_frames: args.stack_frames,
        echo: !args.no_echo,
    };
    tinybasic::term::main(config, args.stream);
}
