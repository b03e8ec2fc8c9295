use clap::{Arg, ArgAction, ArgGroup, Command};

pub fn build_cli() -> Command {
    Command::new("winsnap")
        .about("Save window positions to a file and put them back later")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file to use instead of the default location"),
        )
        .arg(
            Arg::new("save")
                .short('s')
                .long("save")
                .value_name("PATH")
                .help("Store the current window layout in PATH"),
        )
        .arg(
            Arg::new("load")
                .short('l')
                .long("load")
                .value_name("PATH")
                .help("Restore window positions from PATH"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("Show the live windows (or desktops) without saving")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("mode")
                .args(["save", "load", "list"])
                .required(true),
        )
        .arg(
            Arg::new("multi")
                .long("multi")
                .help("Multi-monitor setup: move windows without a saved position to the second monitor")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["save", "list", "single"]),
        )
        .arg(
            Arg::new("single")
                .long("single")
                .help("Single-monitor setup: leave windows without a saved position alone (default)")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["save", "list"]),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be changed without touching any window")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["save", "list"]),
        )
        .arg(
            Arg::new("desktops")
                .long("desktops")
                .help("List desktops instead of windows")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["save", "load"]),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue)
                .conflicts_with("save"),
        )
}
