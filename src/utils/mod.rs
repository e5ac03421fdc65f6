//! Terminal helpers shared by the CLI

pub mod logging;
pub mod progress;
pub mod styling;

pub use logging::{default_log_dir, init_logging};
pub use progress::{create_spinner, finish_with_success, spin_for};
pub use styling::{
    print_banner, print_completion, print_info, print_step_header, print_success,
    truncate_string,
};
