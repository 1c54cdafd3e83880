pub mod annotation;
mod error;
mod expand_paths;
mod find_current_git_repo;
mod get_absolute_path;
mod process_file;
mod split_list;

pub use annotation::{
    AnnotationType, format_annotation, log_debug, log_error, log_notice, print_annotation,
};
pub use error::ResolveError;
pub use expand_paths::expand_paths;
pub use find_current_git_repo::{find_current_git_repo, find_repo_root};
pub use get_absolute_path::get_absolute_path;
pub use process_file::process_file;
pub use split_list::split_list;
