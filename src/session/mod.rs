pub mod init;
pub mod mode;
pub mod phrase;
pub mod reducer;
pub mod state;

pub use init::{Options, init};
pub use reducer::reduce;
pub use state::SessionState;

/// Printed after quitting in the middle of a slow-mode penalty.
pub const RAGE_QUIT_BANNER: &str = r"
 ____      _      ____ _____    ___  _   _ ___ _____
|  _ \    / \    / ___| ____|  / _ \| | | |_ _|_   _|
| |_) |  / _ \  | |  _|  _|   | | | | | | || |  | |
|  _ <  / ___ \ | |_| | |___  | |_| | |_| || |  | |
|_| \_\/_/   \_\ \____|_____|  \__\_\\___/|___| |_|
";
