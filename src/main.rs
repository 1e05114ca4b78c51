use log::error;

fn main() {
    if let Err(e) = material_theme::cli::run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
