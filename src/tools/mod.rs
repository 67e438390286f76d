mod capture_scanner;
mod path_validator;

pub use capture_scanner::scan_capture_files;
pub use path_validator::validate_directory_exists;
