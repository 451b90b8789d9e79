use simplesh::core::config::ShellConfig;
use simplesh::error::ShellError;
use simplesh::flags::Flags;
use simplesh::logging;
use simplesh::shell::Shell;
use std::env;

fn main() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("simplesh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(flags.is_set("debug"));

    let config = ShellConfig::load(&flags)?;
    let mut shell = Shell::new(config)?;
    shell.run()
}
