mod run;

pub use run::RunArgs;
pub use run::handle_run;
pub use run::{format_file_header, format_match, format_run_header, format_unmatched};
