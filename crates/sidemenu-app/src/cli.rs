use clap::{Parser, ValueEnum};
use sidemenu_config::{MenuDirection, MenuPosition};

/// Headless side menu driver: runs a scripted gesture session and logs
/// every host call.
#[derive(Parser, Debug)]
#[command(name = "sidemenu", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override the configured menu position.
    #[arg(long, value_enum)]
    pub position: Option<PositionArg>,

    /// Override the configured menu direction.
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,

    /// Pretend the host uses a right-to-left layout.
    #[arg(long)]
    pub rtl: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PositionArg {
    Above,
    Under,
    SideBySide,
}

impl From<PositionArg> for MenuPosition {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Above => MenuPosition::Above,
            PositionArg::Under => MenuPosition::Under,
            PositionArg::SideBySide => MenuPosition::SideBySide,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DirectionArg {
    Left,
    Right,
}

impl From<DirectionArg> for MenuDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Left => MenuDirection::Left,
            DirectionArg::Right => MenuDirection::Right,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "sidemenu",
            "--position",
            "side-by-side",
            "--direction",
            "right",
            "--rtl",
        ]);
        assert!(matches!(args.position, Some(PositionArg::SideBySide)));
        assert_eq!(MenuDirection::from(args.direction.unwrap()), MenuDirection::Right);
        assert!(args.rtl);
        assert!(args.config.is_none());
    }
}
