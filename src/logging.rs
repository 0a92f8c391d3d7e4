use tracing::Level;

pub fn level_for(verbose: bool, debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// Installs the stderr subscriber. Stdout carries only scan output.
pub fn init(verbose: bool, debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_wins_over_verbose() {
        assert_eq!(level_for(false, false), Level::WARN);
        assert_eq!(level_for(true, false), Level::INFO);
        assert_eq!(level_for(true, true), Level::DEBUG);
    }
}
