use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

#[inline]
pub fn enabled(level: Level) -> bool {
    level as u8 <= LEVEL.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::Level::Error) {
            eprintln!(
                "[ERROR]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::Level::Warn) {
            eprintln!(
                "[WARN]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::Level::Info) {
            eprintln!(
                "[INFO]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::Level::Debug) {
            eprintln!(
                "[DEBUG]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

// レベルに関係なく出力して終了
#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        eprintln!(
            "[ERROR]({}:{}) {}",
            file!(),
            line!(),
            format_args!($($arg)*)
        );
        std::process::exit(1);
    }};
}

#[test]
fn test_level_filter() {
    set_level(Level::Warn);
    assert!(enabled(Level::Error));
    assert!(enabled(Level::Warn));
    assert!(!enabled(Level::Info));
    assert!(!enabled(Level::Debug));
    set_level(Level::Info);
}
