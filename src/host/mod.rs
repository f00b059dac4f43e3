pub use self::probe::{HostProbe, SystemProbe};

mod probe;
