// Re-export the console logger
pub use self::logger::Console;

mod logger;
