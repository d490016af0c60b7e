use pushy::{cli, utils::print_error};

fn main() {
    if let Err(error) = cli::run() {
        print_error("Workflow aborted", &error.to_string());
        std::process::exit(1);
    }
}
